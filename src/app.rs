//! App Core for calgroups.
//!
//! Central struct tying the persistent store, the engine settings, and the
//! page adapter together for the RPC layer.

use std::sync::Arc;

use crate::database::Database;
use crate::page::PageAdapter;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::settings::EngineSettings;

/// Central application struct, generic over the page adapter in use.
///
/// CacheManager and GroupStore are created on-demand via `db.connection()`
/// because they borrow the connection with a lifetime parameter.
pub struct App<P: PageAdapter> {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub page: P,
}

impl<P: PageAdapter> App<P> {
    /// Creates a new App over the given database path and page adapter,
    /// loading settings from the default platform location.
    pub fn new(db_path: &str, page: P) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_config_path(db_path, page, None)
    }

    /// Like [`App::new`] but with an explicit settings file path, for tests.
    pub fn with_config_path(
        db_path: &str,
        page: P,
        config_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(config_path);
        let _ = settings_engine.load();

        Ok(Self {
            db,
            settings_engine,
            page,
        })
    }

    /// Current engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.settings_engine.get_settings()
    }
}

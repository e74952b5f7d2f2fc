//! Cache & sync coordinator for calgroups.
//!
//! The façade behind the message protocol: decides per request whether a
//! cached enumeration can be reused (refreshed with currently-visible state)
//! or a fresh exhaustive scan is needed, persists the result, and drives
//! checkbox state toward a caller-specified target — locating entries either
//! immediately or via the same scroll-and-search strategy the scanner uses.
//!
//! Nothing here retries or locks: the calling layer serializes requests per
//! page, and every failure mode short of a storage error degrades to a
//! partial result rather than an error.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::database::Database;
use crate::managers::cache_manager::{CacheManager, CacheManagerTrait};
use crate::page::PageAdapter;
use crate::services::exhaustive_scanner::{
    discover_containers, find_main_pane, ExhaustiveScanner,
};
use crate::services::visible_collector::VisibleCollector;
use crate::types::calendar::{CalendarCollection, CalendarEntry, VisibilityTarget};
use crate::types::errors::StoreError;
use crate::types::scroll::{forward_positions, scroll_step};
use crate::types::settings::EngineSettings;

/// Response of the read path. Field names follow the wire protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarsResponse {
    pub calendars: Vec<CalendarEntry>,
    #[serde(rename = "fromCache")]
    pub from_cache: bool,
    /// Age of the cache record in milliseconds; 0 after a fresh scan.
    #[serde(rename = "cacheAge")]
    pub cache_age: u64,
}

/// Response of the write path.
///
/// `success` means the procedure ran to completion; a target that was never
/// located is reported only through `toggled` falling short of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub success: bool,
    pub toggled: usize,
}

/// Returns the current time as epoch milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Coordinator over one page adapter and one database.
pub struct SyncCoordinator<'a, P: PageAdapter> {
    page: &'a P,
    db: &'a Database,
    settings: &'a EngineSettings,
}

impl<'a, P: PageAdapter> SyncCoordinator<'a, P> {
    pub fn new(page: &'a P, db: &'a Database, settings: &'a EngineSettings) -> Self {
        Self { page, db, settings }
    }

    /// Read path.
    ///
    /// Triggers a full scan iff `force_refresh` is set, no cache record
    /// exists, or the record is older than the retention window. Otherwise
    /// merges the currently visible state over the cached record — visible
    /// state wins for on-screen entries, cached-only entries are preserved —
    /// and persists the merge back under the record's original timestamp.
    pub async fn get_calendars(
        &self,
        force_refresh: bool,
    ) -> Result<CalendarsResponse, StoreError> {
        let mut cache = CacheManager::new(self.db.connection());
        let now = now_millis();

        // A record survives only if refresh wasn't forced and it is younger
        // than the retention window.
        let usable_record = if force_refresh {
            None
        } else {
            cache
                .load()?
                .filter(|r| now.saturating_sub(r.timestamp) <= self.settings.cache_retention_ms())
        };

        let Some(record) = usable_record else {
            let scanner = ExhaustiveScanner::new(self.page, self.settings);
            let calendars = scanner.scan().await;
            cache.save(&calendars, now)?;
            return Ok(CalendarsResponse {
                calendars,
                from_cache: false,
                cache_age: 0,
            });
        };

        // Cache hit: refresh checked states for whatever is on screen now.
        let cache_age = now.saturating_sub(record.timestamp);
        let mut merged = CalendarCollection::from_entries(record.calendars);
        merged.merge(VisibleCollector::new(self.page).collect());
        let calendars = merged.into_entries();

        cache.save(&calendars, record.timestamp)?;

        Ok(CalendarsResponse {
            calendars,
            from_cache: true,
            cache_age,
        })
    }

    /// Write path.
    ///
    /// Pass 1 handles every target that is immediately queryable by label:
    /// a genuine activation is dispatched only when the current state differs
    /// from the desired one. Remaining targets are hunted by walking each
    /// non-main-pane container forward in scanner-sized steps, re-running the
    /// toggle pass per step and stopping the moment nothing is outstanding.
    /// Container offsets are restored regardless of outcome.
    pub async fn set_visibility(&self, targets: &[VisibilityTarget]) -> ToggleOutcome {
        let desired: HashMap<&str, bool> = targets
            .iter()
            .map(|t| (t.name.as_str(), t.visible))
            .collect();
        let mut satisfied: Vec<&str> = Vec::new();

        self.toggle_pass(&desired, &mut satisfied);
        if satisfied.len() >= desired.len() {
            return ToggleOutcome {
                success: true,
                toggled: satisfied.len(),
            };
        }

        let main_pane = find_main_pane(self.page);
        let containers = discover_containers(self.page, self.settings, main_pane);

        for container in containers {
            if satisfied.len() >= desired.len() {
                break;
            }
            let Some(metrics) = self.page.scroll_metrics(container) else {
                continue;
            };
            let original_scroll = metrics.scroll_top;
            let step = scroll_step(&metrics, self.settings.min_scroll_step_px);

            for pos in forward_positions(metrics.scroll_height, step) {
                self.page.set_scroll_top(container, pos);
                sleep(self.settings.timing.sync_step_settle()).await;
                self.toggle_pass(&desired, &mut satisfied);
                if satisfied.len() >= desired.len() {
                    break;
                }
            }

            self.page.set_scroll_top(container, original_scroll);
        }

        ToggleOutcome {
            success: true,
            toggled: satisfied.len(),
        }
    }

    /// Toggles every outstanding target whose control is currently mounted.
    /// A control already in the desired state is marked satisfied without
    /// interacting.
    fn toggle_pass<'t>(&self, desired: &HashMap<&'t str, bool>, satisfied: &mut Vec<&'t str>) {
        for (&name, &visible) in desired {
            if satisfied.contains(&name) {
                continue;
            }
            let Some(checked) = self.page.checkbox_state(name) else {
                continue;
            };
            if checked != visible {
                if self.page.click_checkbox(name) {
                    satisfied.push(name);
                }
            } else {
                satisfied.push(name);
            }
        }
    }
}

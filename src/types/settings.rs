use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settle delays inserted after host-page interactions.
///
/// Every suspension point in the engine is one of these named delays — a wait
/// for the host UI's own asynchronous re-render, not a synchronization
/// primitive. Tests inject [`ScanTiming::zero`]; production tunes timing
/// independently of the scan logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanTiming {
    /// Wait after expanding collapsed sections.
    pub section_settle_ms: u64,
    /// Wait after each incremental scroll step during a scan.
    pub step_settle_ms: u64,
    /// Wait after the forced steps to the exact bottom and top.
    pub edge_settle_ms: u64,
    /// Wait after each scroll step during a visibility sync.
    pub sync_step_settle_ms: u64,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            section_settle_ms: 500,
            step_settle_ms: 150,
            edge_settle_ms: 200,
            sync_step_settle_ms: 100,
        }
    }
}

impl ScanTiming {
    /// All-zero delays, for tests and fake pages that re-render instantly.
    pub fn zero() -> Self {
        Self {
            section_settle_ms: 0,
            step_settle_ms: 0,
            edge_settle_ms: 0,
            sync_step_settle_ms: 0,
        }
    }

    pub fn section_settle(&self) -> Duration {
        Duration::from_millis(self.section_settle_ms)
    }

    pub fn step_settle(&self) -> Duration {
        Duration::from_millis(self.step_settle_ms)
    }

    pub fn edge_settle(&self) -> Duration {
        Duration::from_millis(self.edge_settle_ms)
    }

    pub fn sync_step_settle(&self) -> Duration {
        Duration::from_millis(self.sync_step_settle_ms)
    }
}

/// Top-level engine settings container, persisted as JSON in the platform
/// config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub timing: ScanTiming,
    /// Cache records older than this trigger a fresh full scan.
    pub cache_retention_hours: u64,
    /// Minimum overflow for a container to count as scrollable.
    pub scroll_epsilon_px: f64,
    /// Floor for the scroll step size.
    pub min_scroll_step_px: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            timing: ScanTiming::default(),
            cache_retention_hours: 24,
            scroll_epsilon_px: 10.0,
            min_scroll_step_px: 50.0,
        }
    }
}

impl EngineSettings {
    /// Cache retention window in epoch milliseconds.
    pub fn cache_retention_ms(&self) -> u64 {
        self.cache_retention_hours * 60 * 60 * 1000
    }
}

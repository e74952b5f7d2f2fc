//! UI dependency probe for calgroups.
//!
//! The engine depends on host markup it does not control: the two section
//! containers, accessibility-labeled checkboxes, and scrollable containers.
//! This probe independently verifies each dependency so the calling surface
//! can warn the user when the host's markup has drifted from the selectors
//! the engine relies on — drift otherwise degrades results silently.

use serde::{Deserialize, Serialize};

use crate::page::PageAdapter;
use crate::types::page::SectionLabel;
use crate::types::settings::EngineSettings;

/// Result of a `checkUI` probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiHealthReport {
    pub healthy: bool,
    pub issues: Vec<String>,
}

/// Checks every host-markup dependency, collecting one issue string per
/// missing piece. Unlike the scanner, the scrollable check covers the whole
/// document including the main pane — it probes for virtualization support,
/// not for scan targets.
pub fn check_ui<P: PageAdapter>(page: &P, settings: &EngineSettings) -> UiHealthReport {
    let mut issues = Vec::new();

    if page.section_toggle(SectionLabel::MyCalendars).is_none() {
        issues.push("Could not find \"My calendars\" section".to_string());
    }

    if page.section_toggle(SectionLabel::OtherCalendars).is_none() {
        issues.push("Could not find \"Other calendars\" section".to_string());
    }

    let labeled = page
        .labeled_checkboxes()
        .into_iter()
        .any(|c| c.label.map(|l| !l.is_empty()).unwrap_or(false));
    if !labeled {
        issues.push("No calendar checkboxes found".to_string());
    }

    let has_scrollable = page.scroll_candidates(None).into_iter().any(|id| {
        page.scroll_metrics(id)
            .map(|m| m.is_scrollable(settings.scroll_epsilon_px))
            .unwrap_or(false)
    });
    if !has_scrollable {
        issues.push("No scrollable calendar containers found".to_string());
    }

    UiHealthReport {
        healthy: issues.is_empty(),
        issues,
    }
}

// Host-page adapter boundary.
//
// The host page is an external system with side-effecting, order-dependent
// operations; all interaction goes through this narrow command interface so
// the scanning and sync algorithms can be exercised against a simulated page.

use crate::types::page::{ControlSnapshot, NodeId, PaneRule, SectionLabel, ToggleState};
use crate::types::scroll::ScrollMetrics;

pub mod sim;

pub use sim::{PageFixture, SimulatedPage};

/// Narrow adapter over the host page's live DOM.
///
/// Methods take `&self`; implementations over mutable page state use interior
/// mutability. All reads reflect the page as currently rendered — a
/// virtualized row that is not mounted is invisible to every method here.
pub trait PageAdapter {
    /// Tries one pane-detection strategy, returning the matched element.
    fn query_pane(&self, rule: &PaneRule) -> Option<NodeId>;

    /// State of a section's expand/collapse toggle, `None` if the section
    /// (or its toggle) is missing from the page.
    fn section_toggle(&self, section: SectionLabel) -> Option<ToggleState>;

    /// Activates a section's toggle through the host's own event path.
    /// Returns false when there was nothing to activate.
    fn activate_section_toggle(&self, section: SectionLabel) -> bool;

    /// Every checkbox-like control currently mounted, unfiltered.
    fn labeled_checkboxes(&self) -> Vec<ControlSnapshot>;

    /// Checked state of the mounted control with the given accessible label.
    fn checkbox_state(&self, label: &str) -> Option<bool>;

    /// Dispatches a genuine interactive activation on the labeled control so
    /// the host's own handlers fire and its internal state stays consistent.
    /// Never assigns the checked property directly. Returns false when no
    /// such control is mounted.
    fn click_checkbox(&self, label: &str) -> bool;

    /// Elements with `overflow: auto | scroll`, excluding the subtree rooted
    /// at `exclude` when given.
    fn scroll_candidates(&self, exclude: Option<NodeId>) -> Vec<NodeId>;

    fn scroll_metrics(&self, container: NodeId) -> Option<ScrollMetrics>;

    /// Sets the container's scroll offset. The page clamps to the valid
    /// range, as a real DOM does. Returns false for an unknown container.
    fn set_scroll_top(&self, container: NodeId, offset: f64) -> bool;
}

use serde::{Deserialize, Serialize};

/// Opaque handle to a host-page element, assigned by the page adapter.
pub type NodeId = u64;

/// Raw view of one checkbox-like control currently mounted in the page,
/// before any filtering. The collector decides what counts as a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSnapshot {
    /// The control's accessible label. `None` or empty means the control
    /// carries no usable identity and is skipped.
    pub label: Option<String>,
    pub checked: bool,
    /// Native DOM id, when the host assigns one.
    pub dom_id: Option<String>,
    /// Whether the control sits inside a recognizable list-item container.
    pub in_list_item: bool,
    /// Whether an ancestor's own label mentions "calendars".
    pub in_calendar_list: bool,
}

/// The two collapsible sidebar sections the host exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionLabel {
    MyCalendars,
    OtherCalendars,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 2] = [SectionLabel::MyCalendars, SectionLabel::OtherCalendars];

    /// The accessible label the host attaches to the section container.
    pub fn as_label(&self) -> &'static str {
        match self {
            SectionLabel::MyCalendars => "My calendars",
            SectionLabel::OtherCalendars => "Other calendars",
        }
    }
}

/// Reported state of a section's expand/collapse toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Expanded,
    Collapsed,
}

/// One strategy for locating a pane in the host page.
///
/// The host offers no stable API, so panes are found by trying a prioritized
/// sequence of strategies; adding a rule here is the expected way to follow
/// host markup changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneRule {
    /// An element with the given ARIA role.
    Role(&'static str),
    /// An element carrying the given `data-view-name`.
    ViewName(&'static str),
    /// An element whose accessible label contains the given text.
    LabelContains(&'static str),
}

/// Prioritized strategies for the main content pane (the day/week grid).
/// The main pane is excluded from all scrolling so the user's calendar view
/// is never scrolled as a side effect.
pub const MAIN_PANE_RULES: [PaneRule; 3] = [
    PaneRule::Role("main"),
    PaneRule::ViewName("day"),
    PaneRule::LabelContains("Calendar"),
];

//! Visible-set collector for calgroups.
//!
//! A pure, synchronous scan of the currently mounted controls: extracts the
//! set of calendar entries presently rendered in the page. Leaf component of
//! the engine — no side effects beyond reading, idempotent, safe to call
//! arbitrarily often. Entries hidden by virtualization are invisible here;
//! reaching those is the exhaustive scanner's job.

use crate::page::PageAdapter;
use crate::types::calendar::{CalendarCollection, CalendarEntry};

/// Label fragments identifying the host's select-all / deselect-all controls,
/// which look like calendar checkboxes but are not calendars.
const CONTROL_PHRASES: [&str; 2] = ["Select all", "Deselect"];

/// Collects the calendar entries currently mounted in the page.
pub struct VisibleCollector<'a, P: PageAdapter> {
    page: &'a P,
}

impl<'a, P: PageAdapter> VisibleCollector<'a, P> {
    pub fn new(page: &'a P) -> Self {
        Self { page }
    }

    /// Builds the collection of currently visible calendars, keyed by label.
    ///
    /// A control is included iff it carries a non-empty accessible label that
    /// is not a select-all/deselect phrase, and it is nested in a list-item
    /// container or in a container whose own label mentions "calendars" —
    /// the nesting guard keeps unrelated checkboxes elsewhere on the page out.
    /// Duplicate labels collapse to the most recently observed state.
    pub fn collect(&self) -> CalendarCollection {
        let mut calendars = CalendarCollection::new();

        for control in self.page.labeled_checkboxes() {
            let Some(label) = control.label.as_deref() else {
                continue;
            };
            if label.is_empty() {
                continue;
            }
            if CONTROL_PHRASES.iter().any(|phrase| label.contains(phrase)) {
                continue;
            }
            if !control.in_list_item && !control.in_calendar_list {
                continue;
            }
            calendars.insert(CalendarEntry::new(
                label,
                control.checked,
                control.dom_id.as_deref(),
            ));
        }

        calendars
    }
}

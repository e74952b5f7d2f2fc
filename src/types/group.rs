use serde::{Deserialize, Serialize};

/// A user-defined named group of calendars.
///
/// Groups are created and rendered by the options UI; this engine only
/// persists them and resolves their members when a group is toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGroup {
    pub calendars: Vec<String>,
}

impl CalendarGroup {
    pub fn new(calendars: Vec<String>) -> Self {
        Self { calendars }
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One togglable calendar line item observed in the host sidebar.
///
/// Entries are immutable snapshots: a later observation of the same calendar
/// replaces the whole entry, it is never mutated in place. `name` is the
/// accessible label of the checkbox and serves as the unique key (the host UI
/// guarantees label uniqueness within the calendar list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub name: String,
    pub checked: bool,
    /// Stable handle for the control; the host DOM id when present,
    /// otherwise the label itself.
    pub id: String,
}

impl CalendarEntry {
    pub fn new(name: &str, checked: bool, dom_id: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            checked,
            id: dom_id
                .filter(|id| !id.is_empty())
                .unwrap_or(name)
                .to_string(),
        }
    }
}

/// A `(name, desired visibility)` pair for the sync write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityTarget {
    pub name: String,
    pub visible: bool,
}

/// Insertion-ordered collection of calendar entries keyed by name.
///
/// Built incrementally during scans by repeated merge-by-key: a later
/// observation overwrites the earlier one for the same name (last-write-wins
/// on `checked`), but a name once observed is never dropped, so an entry
/// scrolled out of view is not lost.
#[derive(Debug, Clone, Default)]
pub struct CalendarCollection {
    order: Vec<String>,
    entries: HashMap<String, CalendarEntry>,
}

impl CalendarCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a collection from a stored entry list, preserving its order.
    pub fn from_entries(entries: Vec<CalendarEntry>) -> Self {
        let mut collection = Self::new();
        for entry in entries {
            collection.insert(entry);
        }
        collection
    }

    /// Inserts or replaces the entry under its name.
    pub fn insert(&mut self, entry: CalendarEntry) {
        if !self.entries.contains_key(&entry.name) {
            self.order.push(entry.name.clone());
        }
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Merges every entry of `other` over this collection by key.
    pub fn merge(&mut self, other: CalendarCollection) {
        for entry in other.into_entries() {
            self.insert(entry);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CalendarEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in the order they were first observed.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Consumes the collection, yielding entries in first-observation order.
    pub fn into_entries(self) -> Vec<CalendarEntry> {
        let mut entries = self.entries;
        self.order
            .into_iter()
            .filter_map(|name| entries.remove(&name))
            .collect()
    }

    /// Entries in first-observation order, cloned.
    pub fn entries(&self) -> Vec<CalendarEntry> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).cloned())
            .collect()
    }
}

// calgroups persistent state managers
// Managers handle durable state: the calendar cache record and the
// key-value store behind user-defined groups.

pub mod cache_manager;
pub mod group_store;

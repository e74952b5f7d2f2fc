// calgroups services
// Services provide the engine's core functionality: collecting the visible
// calendar set, the exhaustive scroll-and-collect scan, cache/sync
// coordination, the UI health probe, and settings persistence.

pub mod exhaustive_scanner;
pub mod settings_engine;
pub mod sync_coordinator;
pub mod ui_health;
pub mod visible_collector;

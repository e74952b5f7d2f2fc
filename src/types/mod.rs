// calgroups shared type definitions
// Each submodule defines types used across the engine.

pub mod calendar;
pub mod errors;
pub mod group;
pub mod page;
pub mod scroll;
pub mod settings;

//! calgroups — calendar grouping engine for a third-party calendar web app.
//!
//! Discovers every calendar entry the host sidebar exposes (including rows
//! hidden behind virtualized scroll containers), caches the enumeration, and
//! drives the host's native checkboxes toward a target visibility state.
//! All host interaction goes through the [`page::PageAdapter`] boundary.
//!
//! This library crate exposes all modules for use by the binaries and
//! integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod page;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;

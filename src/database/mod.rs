//! calgroups database layer.
//!
//! Provides SQLite connection management and schema migrations. The store
//! holds the calendar cache record plus the plain key-value entries consumed
//! by the options UI.
//!
//! # Usage
//!
//! ```no_run
//! use calgroups::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("calgroups.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;

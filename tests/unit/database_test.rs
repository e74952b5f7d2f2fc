//! Unit tests for the database layer: connection, migrations, schema.

use calgroups::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use calgroups::database::Database;
use tempfile::TempDir;

fn table_names(db: &Database) -> Vec<String> {
    let conn = db.connection();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .filter_map(|r| r.ok())
        .collect()
}

#[test]
fn test_open_in_memory_creates_schema() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let tables = table_names(&db);

    assert!(tables.contains(&"calendar_cache".to_string()));
    assert!(tables.contains(&"cache_meta".to_string()));
    assert!(tables.contains(&"kv_store".to_string()));
    assert!(tables.contains(&"schema_version".to_string()));
}

#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_position_index_exists() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let count: i64 = db
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='idx_calendar_cache_position'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

/// Migrations must be safe to run on every startup: reopening an existing
/// database file applies nothing and loses nothing.
#[test]
fn test_reopen_is_idempotent() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("calgroups.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::open(path).expect("Failed to open database");
        db.connection()
            .execute(
                "INSERT INTO cache_meta (key, value) VALUES ('marker', 42)",
                [],
            )
            .unwrap();
    }

    let db = Database::open(path).expect("Failed to reopen database");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
    let marker: i64 = db
        .connection()
        .query_row(
            "SELECT value FROM cache_meta WHERE key = 'marker'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(marker, 42);
}

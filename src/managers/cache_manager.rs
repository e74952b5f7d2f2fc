//! Cache Manager for calgroups.
//!
//! Implements `CacheManagerTrait` — persistence of the calendar cache record
//! (`{calendars, timestamp}`), backed by SQLite via `rusqlite`.
//!
//! The record is always replaced whole: a save clears the previous entries
//! and writes the new set in one transaction. Entry order is preserved
//! through the `position` column.

use rusqlite::{params, Connection};

use crate::types::calendar::CalendarEntry;
use crate::types::errors::StoreError;

const TIMESTAMP_KEY: &str = "cache_timestamp";

/// A persisted calendar enumeration with its creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheRecord {
    pub calendars: Vec<CalendarEntry>,
    /// Epoch milliseconds at the time of the full scan that produced the
    /// record. Cache-hit refreshes keep this value unchanged.
    pub timestamp: u64,
}

/// Trait defining cache record operations.
pub trait CacheManagerTrait {
    /// Loads the cache record, `None` when no record has ever been saved.
    fn load(&self) -> Result<Option<CacheRecord>, StoreError>;
    /// Replaces the whole record.
    fn save(&mut self, calendars: &[CalendarEntry], timestamp: u64) -> Result<(), StoreError>;
    /// Drops the record entirely.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Cache manager backed by a SQLite connection.
pub struct CacheManager<'a> {
    conn: &'a Connection,
}

impl<'a> CacheManager<'a> {
    /// Creates a new `CacheManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn timestamp(&self) -> Result<Option<u64>, StoreError> {
        let result = self.conn.query_row(
            "SELECT value FROM cache_meta WHERE key = ?1",
            params![TIMESTAMP_KEY],
            |row| row.get::<_, i64>(0),
        );
        match result {
            Ok(ts) => Ok(Some(ts as u64)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::from(e)),
        }
    }
}

impl<'a> CacheManagerTrait for CacheManager<'a> {
    fn load(&self) -> Result<Option<CacheRecord>, StoreError> {
        let Some(timestamp) = self.timestamp()? else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT name, checked, dom_id FROM calendar_cache ORDER BY position",
        )?;
        let calendars = stmt
            .query_map([], |row| {
                Ok(CalendarEntry {
                    name: row.get(0)?,
                    checked: row.get::<_, i32>(1)? != 0,
                    id: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(CacheRecord {
            calendars,
            timestamp,
        }))
    }

    fn save(&mut self, calendars: &[CalendarEntry], timestamp: u64) -> Result<(), StoreError> {
        self.conn.execute_batch("BEGIN")?;
        let result = (|| -> Result<(), StoreError> {
            self.conn.execute("DELETE FROM calendar_cache", [])?;
            for (position, entry) in calendars.iter().enumerate() {
                self.conn.execute(
                    "INSERT INTO calendar_cache (name, checked, dom_id, position)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![entry.name, entry.checked as i32, entry.id, position as i64],
                )?;
            }
            self.conn.execute(
                "INSERT OR REPLACE INTO cache_meta (key, value) VALUES (?1, ?2)",
                params![TIMESTAMP_KEY, timestamp as i64],
            )?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                self.conn.execute_batch("COMMIT")?;
                Ok(())
            }
            Err(e) => {
                let _ = self.conn.execute_batch("ROLLBACK");
                Err(e)
            }
        }
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM calendar_cache", [])?;
        self.conn.execute(
            "DELETE FROM cache_meta WHERE key = ?1",
            params![TIMESTAMP_KEY],
        )?;
        Ok(())
    }
}

//! Group Store for calgroups.
//!
//! Implements `GroupStoreTrait` — the plain key-value persistence consumed by
//! the options UI, under the keys `groups`, `groupVisibility` and
//! `activeGroupName`. The engine itself only touches these when a whole group
//! is toggled; everything else about groups is UI glue and lives outside this
//! crate.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::errors::GroupError;
use crate::types::group::CalendarGroup;

const GROUPS_KEY: &str = "groups";
const VISIBILITY_KEY: &str = "groupVisibility";
const ACTIVE_GROUP_KEY: &str = "activeGroupName";

const MAX_GROUP_NAME_LEN: usize = 255;

/// Trait defining group persistence operations.
pub trait GroupStoreTrait {
    fn list_groups(&self) -> Result<HashMap<String, CalendarGroup>, GroupError>;
    fn add_group(&mut self, name: &str, calendars: Vec<String>) -> Result<(), GroupError>;
    fn remove_group(&mut self, name: &str) -> Result<(), GroupError>;
    fn group_visibility(&self) -> Result<HashMap<String, bool>, GroupError>;
    fn set_group_visibility(&mut self, name: &str, visible: bool) -> Result<(), GroupError>;
    fn active_group(&self) -> Result<Option<String>, GroupError>;
    fn set_active_group(&mut self, name: Option<&str>) -> Result<(), GroupError>;
}

/// Group store backed by the `kv_store` table.
pub struct GroupStore<'a> {
    conn: &'a Connection,
}

impl<'a> GroupStore<'a> {
    /// Creates a new `GroupStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn read_value<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, GroupError> {
        let result = self.conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| GroupError::Storage(format!("malformed value for {}: {}", key, e))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(T::default()),
            Err(e) => Err(GroupError::Storage(e.to_string())),
        }
    }

    fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), GroupError> {
        let json = serde_json::to_string(value)
            .map_err(|e| GroupError::Storage(format!("cannot serialize {}: {}", key, e)))?;
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, json, Self::now()],
            )
            .map_err(|e| GroupError::Storage(e.to_string()))?;
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), GroupError> {
        if name.trim().is_empty() {
            return Err(GroupError::EmptyName);
        }
        if name.len() > MAX_GROUP_NAME_LEN {
            return Err(GroupError::NameTooLong(name.len()));
        }
        Ok(())
    }
}

impl<'a> GroupStoreTrait for GroupStore<'a> {
    fn list_groups(&self) -> Result<HashMap<String, CalendarGroup>, GroupError> {
        self.read_value(GROUPS_KEY)
    }

    /// Adds or replaces a group and marks it visible, matching the options
    /// UI's create semantics.
    fn add_group(&mut self, name: &str, calendars: Vec<String>) -> Result<(), GroupError> {
        Self::validate_name(name)?;

        let mut groups = self.list_groups()?;
        groups.insert(name.to_string(), CalendarGroup::new(calendars));
        self.write_value(GROUPS_KEY, &groups)?;

        let mut visibility = self.group_visibility()?;
        visibility.insert(name.to_string(), true);
        self.write_value(VISIBILITY_KEY, &visibility)
    }

    /// Removes a group along with its visibility entry.
    fn remove_group(&mut self, name: &str) -> Result<(), GroupError> {
        let mut groups = self.list_groups()?;
        if groups.remove(name).is_none() {
            return Err(GroupError::NotFound(name.to_string()));
        }
        self.write_value(GROUPS_KEY, &groups)?;

        let mut visibility = self.group_visibility()?;
        visibility.remove(name);
        self.write_value(VISIBILITY_KEY, &visibility)?;

        if self.active_group()?.as_deref() == Some(name) {
            self.set_active_group(None)?;
        }
        Ok(())
    }

    fn group_visibility(&self) -> Result<HashMap<String, bool>, GroupError> {
        self.read_value(VISIBILITY_KEY)
    }

    fn set_group_visibility(&mut self, name: &str, visible: bool) -> Result<(), GroupError> {
        let mut visibility = self.group_visibility()?;
        visibility.insert(name.to_string(), visible);
        self.write_value(VISIBILITY_KEY, &visibility)
    }

    fn active_group(&self) -> Result<Option<String>, GroupError> {
        self.read_value(ACTIVE_GROUP_KEY)
    }

    fn set_active_group(&mut self, name: Option<&str>) -> Result<(), GroupError> {
        self.write_value(ACTIVE_GROUP_KEY, &name)
    }
}

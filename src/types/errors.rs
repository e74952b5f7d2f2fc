use std::fmt;

// === StoreError ===

/// Errors from the persistent calendar cache and key-value store.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying SQLite operation failed.
    DatabaseError(String),
    /// A stored value could not be serialized or deserialized.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Store database error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

// === GroupError ===

/// Errors from calendar-group storage operations.
#[derive(Debug)]
pub enum GroupError {
    /// Group name was empty or whitespace.
    EmptyName,
    /// Group name exceeded the 255-character limit.
    NameTooLong(usize),
    /// No group with the given name exists.
    NotFound(String),
    /// The backing store failed.
    Storage(String),
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::EmptyName => write!(f, "Group name is required"),
            GroupError::NameTooLong(len) => {
                write!(f, "Group name must be 255 characters or less (got {})", len)
            }
            GroupError::NotFound(name) => write!(f, "Group not found: {}", name),
            GroupError::Storage(msg) => write!(f, "Group storage error: {}", msg),
        }
    }
}

impl std::error::Error for GroupError {}

impl From<StoreError> for GroupError {
    fn from(e: StoreError) -> Self {
        GroupError::Storage(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings persistence.
#[derive(Debug)]
pub enum SettingsError {
    /// Reading or writing the config file failed.
    IoError(String),
    /// The config file or a value could not be (de)serialized.
    SerializationError(String),
    /// `set_value` was called with a key path that does not exist.
    InvalidKey(String),
    /// `set_value` was called with a value the target field rejects.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings IO error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(msg) => write!(f, "Invalid settings key: {}", msg),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

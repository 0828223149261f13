//! Local key-value storage backed by a single SQLite table.
//!
//! The app persists all of its state as string values under fixed keys, in the
//! same way a browser app would use local storage.

use rusqlite::{Connection, OptionalExtension};

use crate::Error;

/// A string key-value store.
///
/// Writes replace the whole value stored under a key.
pub trait KeyValueStore {
    /// Get the value stored under `key`, or `None` if nothing has been stored yet.
    ///
    /// # Errors
    /// Returns an error if the underlying storage could not be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    /// Returns an error if the underlying storage could not be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// Create the tables the application needs if they do not exist yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// A [KeyValueStore] that keeps each entry as a row in the `key_value` table.
#[derive(Debug)]
pub struct SQLiteKeyValueStore {
    connection: Connection,
}

impl SQLiteKeyValueStore {
    /// Wrap `connection` and create the `key_value` table if needed.
    ///
    /// # Errors
    /// Returns an error if the table could not be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self { connection })
    }
}

impl KeyValueStore for SQLiteKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }
}

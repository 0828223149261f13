use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, SQLiteKeyValueStore, TransactionStore};

/// A [TransactionStore] backed by a fresh in-memory SQLite database.
pub(crate) fn must_create_store() -> Arc<Mutex<TransactionStore>> {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    let storage = SQLiteKeyValueStore::new(connection).expect("could not initialize storage");

    Arc::new(Mutex::new(TransactionStore::load(storage)))
}

/// An [AppState] in UTC backed by a fresh in-memory SQLite database.
pub(crate) fn must_create_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    let storage = SQLiteKeyValueStore::new(connection).expect("could not initialize storage");

    AppState::new(storage, "Etc/UTC")
}

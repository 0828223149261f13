//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, KeyValueStore, TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The transactions, loaded from storage at start up.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] with the transactions saved in `storage`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(storage: impl KeyValueStore + Send + 'static, local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            transaction_store: Arc::new(Mutex::new(TransactionStore::load(storage))),
        }
    }
}

/// Lock `store`, logging and mapping a poisoned lock to [Error::StoreLockError].
pub(crate) fn lock_store(
    store: &Mutex<TransactionStore>,
) -> Result<MutexGuard<'_, TransactionStore>, Error> {
    store.lock().map_err(|error| {
        tracing::error!("could not acquire transaction store lock: {error}");
        Error::StoreLockError
    })
}

//! The in-memory transaction collection and its persistence.

use time::OffsetDateTime;

use crate::{
    Error,
    db::KeyValueStore,
    transaction::{Transaction, TransactionDraft, TransactionId},
};

/// The storage key the whole transaction collection is saved under.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Owns the transaction collection and keeps it in sync with storage.
///
/// The collection is loaded once and every change rewrites it in full. New
/// transactions are prepended, so storage order is newest first.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    storage: Box<dyn KeyValueStore + Send>,
    last_issued_id: i128,
}

impl std::fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions)
            .field("last_issued_id", &self.last_issued_id)
            .finish_non_exhaustive()
    }
}

impl TransactionStore {
    /// Load the transactions saved in `storage`.
    ///
    /// A missing entry gives an empty collection. Read and deserialization
    /// errors are logged and also give an empty collection.
    pub fn load(storage: impl KeyValueStore + Send + 'static) -> Self {
        let transactions = match read_transactions(&storage) {
            Ok(transactions) => transactions,
            Err(error) => {
                tracing::error!("Could not load transactions, starting with none: {error}");
                Vec::new()
            }
        };

        let last_issued_id = transactions
            .iter()
            .filter_map(|transaction| transaction.id.as_str().parse::<i128>().ok())
            .max()
            .unwrap_or(0);

        tracing::info!("Loaded {} transactions", transactions.len());

        Self {
            transactions,
            storage: Box::new(storage),
            last_issued_id,
        }
    }

    /// Write the whole collection to storage.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn save_all(&self) {
        let json = match serde_json::to_string(&self.transactions) {
            Ok(json) => json,
            Err(error) => {
                tracing::error!("Could not serialize transactions: {error}");
                return;
            }
        };

        if let Err(error) = self.storage.set_item(TRANSACTIONS_KEY, &json) {
            tracing::error!("Could not save transactions: {error}");
        }
    }

    /// All transactions in storage order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The first `count` transactions in storage order.
    pub fn recent(&self, count: usize) -> &[Transaction] {
        &self.transactions[..count.min(self.transactions.len())]
    }

    /// Get the transaction with `id`.
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| &transaction.id == id)
    }

    /// Assign a new ID to `draft`, prepend it to the collection and save.
    pub fn create(&mut self, draft: TransactionDraft) -> Transaction {
        let id = self.next_id();
        let transaction = draft.into_transaction(id);

        self.transactions.insert(0, transaction.clone());
        self.save_all();

        tracing::info!("Created transaction {}", transaction.id);

        transaction
    }

    /// Replace the amount, date and description of the transaction with `id`
    /// and save.
    ///
    /// Returns `false` without changing anything if there is no such transaction.
    pub fn update(&mut self, id: &TransactionId, draft: TransactionDraft) -> bool {
        let Some(transaction) = self
            .transactions
            .iter_mut()
            .find(|transaction| &transaction.id == id)
        else {
            tracing::warn!("Tried to update transaction {id} which does not exist");
            return false;
        };

        *transaction = draft.into_transaction(id.clone());
        self.save_all();

        tracing::info!("Updated transaction {id}");

        true
    }

    /// Remove the transaction with `id` and save.
    ///
    /// Returns `false` without changing anything if there is no such transaction.
    pub fn delete(&mut self, id: &TransactionId) -> bool {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| &transaction.id == id)
        else {
            tracing::warn!("Tried to delete transaction {id} which does not exist");
            return false;
        };

        self.transactions.remove(index);
        self.save_all();

        tracing::info!("Deleted transaction {id}");

        true
    }

    /// The current Unix time in milliseconds, bumped past every ID issued so far.
    ///
    /// Once the numeric IDs run out, the time is suffixed with a counter instead.
    fn next_id(&mut self) -> TransactionId {
        let now_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        let Some(next) = self.last_issued_id.checked_add(1) else {
            return self.unused_suffixed_id(now_millis);
        };

        let id = now_millis.max(next);
        self.last_issued_id = id;

        TransactionId::new(id.to_string())
    }

    fn unused_suffixed_id(&self, now_millis: i128) -> TransactionId {
        tracing::warn!("Numeric transaction IDs are exhausted, using a suffixed ID");

        let mut suffix: u64 = 1;

        loop {
            let id = TransactionId::new(format!("{now_millis}-{suffix}"));

            if self.get(&id).is_none() {
                return id;
            }

            suffix += 1;
        }
    }
}

fn read_transactions(storage: &impl KeyValueStore) -> Result<Vec<Transaction>, Error> {
    match storage.get_item(TRANSACTIONS_KEY)? {
        Some(json) => serde_json::from_str(&json).map_err(Error::from),
        None => Ok(Vec::new()),
    }
}

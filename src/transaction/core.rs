//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// ============================================================================
// MODELS
// ============================================================================

/// The opaque, stable identifier of a [Transaction].
///
/// New IDs are issued by [crate::TransactionStore] and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an existing identifier, e.g. one read back from storage.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only ever created by [crate::TransactionStore::create] from a
/// validated [TransactionDraft].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values are income, negative values are expenses.
    pub amount: f64,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
}

impl Transaction {
    /// Whether the transaction is money earned. Zero is neither income nor expense.
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Whether the transaction is money spent. Zero is neither income nor expense.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// A validated transaction that has not been assigned an ID yet.
///
/// Use [crate::validate] to create a draft from form input.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// The signed amount, positive for income and negative for expenses.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// The trimmed, non-empty description.
    pub description: String,
}

impl TransactionDraft {
    /// Attach `id` to the draft to create a [Transaction].
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

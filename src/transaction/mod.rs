//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionStore` that persists the collection
//! - Validation of the transaction form
//! - View handlers and endpoints for creating, editing and deleting transactions

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod list;
mod store;
mod validation;

pub use core::{Transaction, TransactionDraft, TransactionId};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use list::{recent_transactions_view, transaction_list_view};
pub use store::TransactionStore;
pub use validation::{FieldErrors, TransactionFormValues, validate};

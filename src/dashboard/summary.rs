//! Income, expense and net totals across all transactions.

use crate::transaction::Transaction;

/// Totals over every transaction.
///
/// Values are not rounded, use [crate::html::format_currency] for display.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(super) struct Summary {
    /// The sum of all positive amounts.
    pub total_income: f64,
    /// The sum of the absolute value of all negative amounts.
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub net: f64,
}

/// Calculate the income, expense and net totals of `transactions`.
///
/// Zero amounts count towards neither total.
pub(super) fn summarize(transactions: &[Transaction]) -> Summary {
    let total_income = transactions
        .iter()
        .filter(|transaction| transaction.is_income())
        .map(|transaction| transaction.amount)
        .sum::<f64>();

    let total_expense = transactions
        .iter()
        .filter(|transaction| transaction.is_expense())
        .map(|transaction| transaction.amount.abs())
        .sum::<f64>();

    Summary {
        total_income,
        total_expense,
        net: total_income - total_expense,
    }
}

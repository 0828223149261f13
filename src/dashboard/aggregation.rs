//! Monthly expense aggregation for the dashboard chart.
//!
//! Buckets expenses by calendar month and keeps the most recent twelve months
//! that have any spending.

use std::{cmp::Ordering, collections::BTreeMap};

use time::Month;

use crate::{
    html::{month_abbreviation, round_to_cents},
    transaction::Transaction,
};

/// The maximum number of months shown in the monthly expenses chart.
pub(super) const MAX_MONTHS: usize = 12;

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    /// A label like "Jan 2024".
    pub fn label(&self) -> String {
        format!("{} {}", month_abbreviation(self.month), self.year)
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month as u8).cmp(&(other.year, other.month as u8))
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The total spent in one month.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct MonthlyExpense {
    pub month: YearMonth,
    /// The sum of the absolute expense amounts, rounded to cents.
    pub amount: f64,
}

/// Sum the expenses in `transactions` per calendar month.
///
/// Only negative amounts count. The result is in chronological order and
/// holds at most the latest [MAX_MONTHS] months with expenses.
pub(super) fn aggregate_monthly_expenses(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut totals: BTreeMap<YearMonth, f64> = BTreeMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let month = YearMonth {
            year: transaction.date.year(),
            month: transaction.date.month(),
        };

        *totals.entry(month).or_insert(0.0) += transaction.amount.abs();
    }

    let skip = totals.len().saturating_sub(MAX_MONTHS);

    totals
        .into_iter()
        .skip(skip)
        .map(|(month, total)| MonthlyExpense {
            month,
            amount: round_to_cents(total),
        })
        .collect()
}

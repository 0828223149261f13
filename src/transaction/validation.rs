//! Turns raw transaction form input into a [TransactionDraft] or per-field errors.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::transaction::{Transaction, TransactionDraft};

const AMOUNT_ERROR: &str = "Please enter a valid amount";
const DATE_MISSING_ERROR: &str = "Please select a date";
const DATE_FORMAT_ERROR: &str = "Please enter a valid date";
const DESCRIPTION_ERROR: &str = "Please enter a description";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The validation message for each transaction form field, if that field is invalid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldErrors {
    /// Error for the amount field.
    pub amount: Option<&'static str>,
    /// Error for the date field.
    pub date: Option<&'static str>,
    /// Error for the description field.
    pub description: Option<&'static str>,
}

impl FieldErrors {
    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.date.is_none() && self.description.is_none()
    }
}

/// Validate the raw transaction form fields.
///
/// Every field is checked, so the returned [FieldErrors] lists all invalid
/// fields at once.
///
/// # Errors
/// Returns the field errors if any of the fields are invalid.
pub fn validate(
    raw_amount: &str,
    raw_date: &str,
    raw_description: &str,
) -> Result<TransactionDraft, FieldErrors> {
    let amount = parse_amount(raw_amount);
    let date = parse_date(raw_date);
    let description = raw_description.trim();

    let errors = FieldErrors {
        amount: amount.is_none().then_some(AMOUNT_ERROR),
        date: date.as_ref().err().copied(),
        description: description.is_empty().then_some(DESCRIPTION_ERROR),
    };

    match (amount, date) {
        (Some(amount), Ok(date)) if errors.is_empty() => Ok(TransactionDraft {
            amount,
            date,
            description: description.to_owned(),
        }),
        _ => Err(errors),
    }
}

fn parse_amount(raw_amount: &str) -> Option<f64> {
    raw_amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

fn parse_date(raw_date: &str) -> Result<Date, &'static str> {
    let raw_date = raw_date.trim();

    if raw_date.is_empty() {
        return Err(DATE_MISSING_ERROR);
    }

    Date::parse(raw_date, DATE_FORMAT).map_err(|_| DATE_FORMAT_ERROR)
}

/// The raw values shown in the transaction form inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionFormValues {
    /// The amount as typed.
    pub amount: String,
    /// The date as `YYYY-MM-DD`.
    pub date: String,
    /// The description as typed.
    pub description: String,
}

impl TransactionFormValues {
    /// Empty values with `date` preselected, for a new transaction.
    pub fn new_with_date(date: Date) -> Self {
        Self {
            amount: String::new(),
            date: format_date(date),
            description: String::new(),
        }
    }
}

impl From<&Transaction> for TransactionFormValues {
    fn from(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount.to_string(),
            date: format_date(transaction.date),
            description: transaction.description.clone(),
        }
    }
}

fn format_date(date: Date) -> String {
    // The format only contains numeric components, which cannot fail to format.
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

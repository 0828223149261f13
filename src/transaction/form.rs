//! The transaction form shared by the create and edit pages.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_ERROR_STYLE, FORM_HINT_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_ERROR_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
    transaction::{FieldErrors, TransactionFormValues, TransactionId},
};

/// The raw form data submitted when creating or editing a transaction.
///
/// Fields are kept as strings so invalid input can be validated and echoed back.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl From<TransactionForm> for TransactionFormValues {
    fn from(form: TransactionForm) -> Self {
        Self {
            amount: form.amount,
            date: form.date,
            description: form.description,
        }
    }
}

/// Whether the form creates a new transaction or edits an existing one.
#[derive(Debug, Clone, Copy)]
pub enum FormMode<'a> {
    Create,
    Edit(&'a TransactionId),
}

impl FormMode<'_> {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Transaction",
            FormMode::Edit(_) => "Edit Transaction",
        }
    }

    fn submit_text(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Transaction",
            FormMode::Edit(_) => "Update Transaction",
        }
    }
}

/// Render the transaction form with `values` in the inputs and `errors` under them.
///
/// The form replaces itself with the server response, so a submission with
/// invalid fields comes back as this same form with the messages filled in.
pub fn transaction_form(
    mode: FormMode<'_>,
    values: &TransactionFormValues,
    errors: &FieldErrors,
) -> Markup {
    let spinner = loading_spinner();
    let (hx_post, hx_put) = match mode {
        FormMode::Create => (Some(endpoints::TRANSACTIONS_API.to_owned()), None),
        FormMode::Edit(id) => (
            None,
            Some(format_endpoint(endpoints::TRANSACTION, id.as_str())),
        ),
    };
    let input_style = |error: Option<&str>| {
        if error.is_some() {
            FORM_TEXT_INPUT_ERROR_STYLE
        } else {
            FORM_TEXT_INPUT_STYLE
        }
    };

    html! {
        form
            hx-post=[hx_post]
            hx-put=[hx_put]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { (mode.title()) }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="Enter amount (use negative for expenses)"
                    value=(values.amount)
                    autofocus
                    class=(input_style(errors.amount));

                @if let Some(error) = errors.amount {
                    p class=(FORM_ERROR_STYLE) data-error-for="amount" { (error) }
                }

                p class=(FORM_HINT_STYLE) { "Use positive numbers for income, negative for expenses" }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(values.date)
                    class=(input_style(errors.date));

                @if let Some(error) = errors.date {
                    p class=(FORM_ERROR_STYLE) data-error-for="date" { (error) }
                }
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                textarea
                    name="description"
                    id="description"
                    rows="3"
                    placeholder="Enter transaction description"
                    class=(input_style(errors.description))
                {
                    (values.description)
                }

                @if let Some(error) = errors.description {
                    p class=(FORM_ERROR_STYLE) data-error-for="description" { (error) }
                }
            }

            div class="flex gap-3 pt-4"
            {
                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " " (mode.submit_text())
                }

                a href=(endpoints::DASHBOARD_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Cancel" }
            }
        }
    }
}

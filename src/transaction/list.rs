//! Renders the full transaction history and the recent transactions card.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, format_currency, format_display_date,
        format_signed_currency,
    },
    transaction::Transaction,
};

/// `transactions` ordered by date, newest first.
///
/// Transactions on the same date keep their relative order.
pub fn sort_by_date_descending(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Amount text for the history list: "+$12.00" for income and zero, "$12.00" for expenses.
pub fn list_amount_text(amount: f64) -> String {
    if amount >= 0.0 {
        format_signed_currency(amount)
    } else {
        format_currency(amount.abs())
    }
}

fn amount_color(amount: f64) -> &'static str {
    if amount >= 0.0 {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    }
}

/// The complete transaction history, sorted by date with edit and delete controls.
pub fn transaction_list_view(transactions: &[Transaction]) -> Markup {
    if transactions.is_empty() {
        return html! {
            div class="text-center py-12 text-gray-500 dark:text-gray-400"
            {
                p class="text-lg font-medium" { "No transactions yet" }
                p class="text-sm" { "Start by adding your first transaction" }
            }
        };
    }

    html! {
        ul id="transaction-list" class="space-y-3"
        {
            @for transaction in sort_by_date_descending(transactions) {
                (transaction_row(transaction))
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id.as_str());
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id.as_str());

    html! {
        li
            data-transaction-id=(transaction.id)
            class="flex items-center justify-between p-4 bg-white dark:bg-gray-800
                rounded-lg border border-gray-200 dark:border-gray-700"
        {
            div class="flex-1 min-w-0"
            {
                p class="font-medium truncate" { (transaction.description) }
                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    (format_display_date(transaction.date))
                }
            }

            div class="flex items-center gap-3"
            {
                span class={ "text-lg font-semibold " (amount_color(transaction.amount)) }
                {
                    (list_amount_text(transaction.amount))
                }

                a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm={ "Delete \"" (transaction.description) "\"?" }
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

/// The dashboard card listing the most recently added transactions.
pub fn recent_transactions_view(recent: &[Transaction]) -> Markup {
    html! {
        @if recent.is_empty() {
            div class="text-center py-8 text-gray-500 dark:text-gray-400"
            {
                p { "No transactions yet" }
                p class="text-sm" { "Add your first transaction to get started" }
            }
        } @else {
            ul id="recent-transactions" class="space-y-3"
            {
                @for transaction in recent {
                    li class="flex justify-between items-center p-3 bg-gray-50
                        dark:bg-gray-700 rounded-lg"
                    {
                        div
                        {
                            p class="font-medium" { (transaction.description) }
                            p class="text-sm text-gray-500 dark:text-gray-400"
                            {
                                (format_display_date(transaction.date))
                            }
                        }

                        span class={ "font-semibold " (amount_color(transaction.amount)) }
                        {
                            (format_signed_currency(transaction.amount))
                        }
                    }
                }
            }
        }
    }
}

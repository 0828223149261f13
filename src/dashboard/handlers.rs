//! Dashboard HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    dashboard::{
        aggregation::aggregate_monthly_expenses,
        cards::summary_cards_view,
        charts::{DashboardChart, ECHARTS_SCRIPT_URL, charts_script, charts_view},
        summary::summarize,
    },
    endpoints,
    html::{CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::{TransactionStore, recent_transactions_view, transaction_list_view},
};

/// How many transactions the "Recent Transactions" card shows.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The transactions to summarize.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Display the summary totals, the monthly expenses chart and the transactions.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let store = lock_store(&state.transaction_store)?;
    let transactions = store.transactions();

    let summary = summarize(transactions);
    let monthly_expenses = aggregate_monthly_expenses(transactions);
    let chart = DashboardChart::monthly_expenses(&monthly_expenses);

    let content = html! {
        (summary_cards_view(&summary))

        div class="grid grid-cols-1 lg:grid-cols-2 gap-8 w-full"
        {
            (dashboard_card(
                "Monthly Expenses",
                "Track your spending patterns over time",
                charts_view(chart.as_ref()),
            ))
            (dashboard_card(
                "Recent Transactions",
                "Your latest financial activity",
                recent_transactions_view(store.recent(RECENT_TRANSACTION_COUNT)),
            ))
        }

        @if !transactions.is_empty() {
            div id="all-transactions" class="w-full mt-8"
            {
                (dashboard_card(
                    "All Transactions",
                    "Complete transaction history",
                    transaction_list_view(transactions),
                ))
            }
        }
    };

    let scripts = match &chart {
        Some(chart) => vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
            charts_script(chart),
        ],
        None => Vec::new(),
    };

    Ok(dashboard_view(&content, &scripts).into_response())
}

fn dashboard_card(title: &str, description: &str, body: Markup) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h2 class="text-xl font-semibold" { (title) }
            p class="text-sm text-gray-500 dark:text-gray-400 mb-4" { (description) }

            (body)
        }
    }
}

fn dashboard_view(content: &Markup, scripts: &[HeadElement]) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let page = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            header class="flex flex-col md:flex-row justify-between items-start md:items-center mb-8 w-full"
            {
                div
                {
                    h1
                        class="text-4xl font-bold mb-2 bg-gradient-to-r from-blue-600
                            to-green-600 bg-clip-text text-transparent"
                    {
                        "Personal Finance"
                    }
                    p class="text-gray-600 dark:text-gray-400"
                    {
                        "Track your expenses and manage your budget"
                    }
                }

                a
                    href=(endpoints::NEW_TRANSACTION_VIEW)
                    id="add-transaction"
                    class="mt-4 md:mt-0 px-5 py-2.5 rounded text-white bg-blue-600
                        hover:bg-blue-700 font-medium"
                {
                    "Add Transaction"
                }
            }

            (content)
        }
    };

    base("Dashboard", scripts, &page)
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        test_utils::{
            assert_status_ok, assert_valid_html, must_create_store, parse_html_document,
        },
        transaction::TransactionDraft,
    };

    use super::{DashboardState, get_dashboard_page};

    fn text_of(document: &Html, selector: &str) -> String {
        document
            .select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("{selector} missing"))
            .text()
            .collect()
    }

    fn has(document: &Html, selector: &str) -> bool {
        document
            .select(&Selector::parse(selector).unwrap())
            .next()
            .is_some()
    }

    #[tokio::test]
    async fn empty_dashboard_shows_empty_states() {
        let state = DashboardState {
            transaction_store: must_create_store(),
        };

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(text_of(&document, "#total-income p"), "$0.00");
        assert_eq!(text_of(&document, "#net-amount p"), "$0.00");
        assert!(has(&document, "#monthly-expenses-empty"));
        assert!(!has(&document, "#all-transactions"));
        assert!(text_of(&document, "body").contains("No transactions yet"));
    }

    #[tokio::test]
    async fn shows_totals_chart_and_transactions() {
        let transaction_store = must_create_store();
        {
            let mut store = transaction_store.lock().unwrap();
            for (amount, date, description) in [
                (-50.0, date!(2024 - 01 - 15), "Groceries"),
                (-30.0, date!(2024 - 01 - 20), "Fuel"),
                (100.0, date!(2024 - 01 - 10), "Salary"),
            ] {
                store.create(TransactionDraft {
                    amount,
                    date,
                    description: description.to_owned(),
                });
            }
        }
        let state = DashboardState { transaction_store };

        let response = get_dashboard_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(text_of(&document, "#total-income p"), "$100.00");
        assert_eq!(text_of(&document, "#total-expenses p"), "$80.00");
        assert_eq!(text_of(&document, "#net-amount p"), "$20.00");
        assert!(has(&document, "#monthly-expenses-chart"));
        assert!(has(&document, "#all-transactions"));
        assert!(text_of(&document, "head").contains("Jan 2024"));
        let rows = document
            .select(&Selector::parse("#transaction-list li").unwrap())
            .count();
        assert_eq!(rows, 3);
    }
}

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, endpoints,
    app_state::lock_store,
    transaction::{
        TransactionFormValues, TransactionId, TransactionStore,
        form::{FormMode, TransactionForm, transaction_form},
        validate,
    },
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The transactions to update.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler for replacing the amount, date and description of a
/// transaction, redirects to the dashboard on success.
///
/// A transaction that no longer exists is left alone and the client is
/// still sent back to the dashboard.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let draft = match validate(&form.amount, &form.date, &form.description) {
        Ok(draft) => draft,
        Err(errors) => {
            tracing::debug!("Rejected edit of transaction {transaction_id}: {errors:?}");
            let values = TransactionFormValues::from(form);
            return transaction_form(FormMode::Edit(&transaction_id), &values, &errors)
                .into_response();
        }
    };

    let mut store = match lock_store(&state.transaction_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    store.update(&transaction_id, draft);

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        test_utils::{
            assert_field_error, assert_hx_endpoint, assert_hx_redirect, must_create_store,
            must_get_form, parse_html_fragment,
        },
        transaction::{Transaction, TransactionDraft, TransactionId, form::TransactionForm},
    };

    use super::{EditTransactionState, edit_transaction_endpoint};

    fn state_with_coffee() -> (EditTransactionState, Transaction) {
        let transaction_store = must_create_store();
        let transaction = transaction_store.lock().unwrap().create(TransactionDraft {
            amount: -12.5,
            date: date!(2024 - 01 - 15),
            description: "Coffee".to_owned(),
        });

        (EditTransactionState { transaction_store }, transaction)
    }

    fn form(amount: &str, date: &str, description: &str) -> TransactionForm {
        TransactionForm {
            amount: amount.to_owned(),
            date: date.to_owned(),
            description: description.to_owned(),
        }
    }

    #[tokio::test]
    async fn can_edit_transaction() {
        let (state, transaction) = state_with_coffee();

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(transaction.id.clone()),
            Form(form("-4.75", "2024-02-01", "Tea")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, "/");
        let store = state.transaction_store.lock().unwrap();
        assert_eq!(
            store.transactions(),
            [Transaction {
                id: transaction.id,
                amount: -4.75,
                date: date!(2024 - 02 - 01),
                description: "Tea".to_owned(),
            }]
        );
    }

    #[tokio::test]
    async fn invalid_input_keeps_transaction_unchanged() {
        let (state, transaction) = state_with_coffee();

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(transaction.id.clone()),
            Form(form("-4.75", "2024-02-01", "   ")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(
            &form,
            &format!("/api/transactions/{}", transaction.id),
            "hx-put",
        );
        assert_field_error(&form, "description", "Please enter a description");
        assert_eq!(
            state.transaction_store.lock().unwrap().transactions(),
            [transaction]
        );
    }

    #[tokio::test]
    async fn missing_transaction_is_left_alone() {
        let (state, transaction) = state_with_coffee();

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(TransactionId::new("missing")),
            Form(form("1", "2024-02-01", "Tea")),
        )
        .await;

        assert_hx_redirect(&response, "/");
        assert_eq!(
            state.transaction_store.lock().unwrap().transactions(),
            [transaction]
        );
    }
}

//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, endpoints,
    app_state::lock_store,
    transaction::{
        TransactionFormValues, TransactionStore,
        form::{FormMode, TransactionForm, transaction_form},
        validate,
    },
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The transactions to add the new transaction to.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler for creating a new transaction, redirects to the dashboard on success.
///
/// Invalid input responds with the form again, showing what was entered and
/// the error for each invalid field.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let draft = match validate(&form.amount, &form.date, &form.description) {
        Ok(draft) => draft,
        Err(errors) => {
            tracing::debug!("Rejected new transaction: {errors:?}");
            let values = TransactionFormValues::from(form);
            return transaction_form(FormMode::Create, &values, &errors).into_response();
        }
    };

    let mut store = match lock_store(&state.transaction_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    store.create(draft);

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

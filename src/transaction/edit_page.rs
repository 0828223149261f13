use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    app_state::lock_store,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::{
        FieldErrors, Transaction, TransactionFormValues, TransactionId, TransactionStore,
        form::{FormMode, transaction_form},
    },
};

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_TRANSACTION_VIEW).into_html();
    let form = transaction_form(
        FormMode::Edit(&transaction.id),
        &TransactionFormValues::from(transaction),
        &FieldErrors::default(),
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            (form)
        }
    };

    base("Edit Transaction", &[], &content)
}

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The transactions to look up the one being edited.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Renders the page for editing a transaction, prefilled with its stored values.
///
/// Renders the 404 page if there is no transaction with `transaction_id`.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let store = lock_store(&state.transaction_store)?;

    let transaction = store.get(&transaction_id).ok_or_else(|| {
        tracing::warn!("Tried to edit transaction {transaction_id} which does not exist");
        Error::NotFound
    })?;

    Ok(edit_transaction_view(transaction).into_response())
}

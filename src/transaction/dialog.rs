//! Route handlers for the dialogs that hold the add and edit transaction forms.
//!
//! The transactions page has an empty `#dialog-container`. The add button and
//! each row's edit button fetch one of these dialogs into it. Closing a
//! dialog empties the container again.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::transaction::{
    TransactionId, TransactionStore,
    form::{FormAction, TransactionFormDefaults, transaction_form},
};

/// The ID of the element that dialogs are swapped into.
pub const DIALOG_CONTAINER_ID: &str = "dialog-container";

fn transaction_dialog(title: &str, form: Markup) -> Markup {
    html! {
        dialog
            open
            id="transaction-dialog"
            aria-labelledby="transaction-dialog-title"
            class="fixed inset-0 m-auto w-full max-w-md p-6 rounded-lg shadow-lg \
                bg-white dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            div class="flex items-center justify-between mb-4"
            {
                h2 id="transaction-dialog-title" class="text-xl font-bold" { (title) }

                button
                    type="button"
                    aria-label="Close"
                    class="text-2xl leading-none cursor-pointer"
                    onclick={ "document.getElementById('" (DIALOG_CONTAINER_ID) "').innerHTML = ''" }
                {
                    "×"
                }
            }

            (form)
        }
    }
}

/// Renders the dialog for adding a transaction with an empty form.
pub async fn get_new_transaction_dialog() -> Response {
    let today = OffsetDateTime::now_utc().date();

    transaction_dialog(
        "Add New Transaction",
        transaction_form(FormAction::Create, &TransactionFormDefaults::empty(today)),
    )
    .into_response()
}

/// Renders the dialog for editing a transaction, pre-filled with its current values.
pub async fn get_edit_transaction_dialog(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let transaction = match store.get(transaction_id) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::warn!("Could not open edit dialog for transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    transaction_dialog(
        "Edit Transaction",
        transaction_form(
            FormAction::Edit(transaction.id),
            &TransactionFormDefaults::from(&transaction),
        ),
    )
    .into_response()
}

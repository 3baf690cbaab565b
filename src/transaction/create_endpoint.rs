//! Defines the endpoint for creating a new transaction.
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    endpoints,
    transaction::{TransactionStore, form::TransactionForm},
};

/// A route handler for creating a new transaction, redirects to transactions view on success.
pub async fn create_transaction_endpoint(
    State(store): State<TransactionStore>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = match form.into_new_transaction() {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::warn!("Rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    match store.add(new_transaction) {
        Ok(transaction) => tracing::info!("Created transaction {}", transaction.id),
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            return error.into_alert_response();
        }
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    transaction::{TransactionId, TransactionStore},
};

/// A route handler for deleting a transaction.
///
/// On success the response only holds an out-of-band alert, so htmx swaps the
/// transaction's table row for nothing and shows the alert.
pub async fn delete_transaction_endpoint(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match store.delete(transaction_id) {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        Ok(transaction) => {
            tracing::info!("Deleted transaction {}", transaction.id);

            Alert::Success {
                message: "Transaction deleted".to_owned(),
                details: format!(
                    "Removed the {} {} transaction from {}.",
                    transaction.category, transaction.type_, transaction.date
                ),
            }
            .into_oob_html()
            .into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

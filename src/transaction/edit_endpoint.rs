//! Defines the endpoint for updating an existing transaction.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    endpoints,
    transaction::{TransactionId, TransactionStore, form::TransactionForm},
};

/// A route handler for replacing the fields of the transaction `transaction_id`.
///
/// The ID comes from the path, never from the form, so a transaction keeps its ID.
pub async fn edit_transaction_endpoint(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction = match form.into_new_transaction() {
        Ok(new_transaction) => new_transaction.with_id(transaction_id),
        Err(error) => {
            tracing::warn!("Rejected update to transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = store.update(transaction) {
        tracing::error!("Could not update transaction {transaction_id}: {error}");
        return error.into_alert_response();
    }

    tracing::info!("Updated transaction {transaction_id}");

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
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
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
        test_utils::assert_hx_redirect,
        transaction::{
            Category, TransactionStore, edit_endpoint::edit_transaction_endpoint,
            form::TransactionForm,
        },
    };

    fn placeholder_three_with_amount(amount: &str) -> TransactionForm {
        TransactionForm {
            date: "2023-03-25".to_owned(),
            amount: amount.to_owned(),
            type_: "expense".to_owned(),
            category: "Puma".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_update_transaction() {
        let store = TransactionStore::with_placeholder_data();
        let before = store.list().unwrap();

        let response = edit_transaction_endpoint(
            State(store.clone()),
            Path(3),
            Form(placeholder_three_with_amount("999")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::TRANSACTIONS_VIEW);
        let after = store.list().unwrap();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[1]);
        assert_eq!(after[2].id, 3);
        assert_eq!(after[2].amount, 999.0);
        assert_eq!(after[2].category, Category::Puma);
    }

    #[tokio::test]
    async fn update_missing_transaction_is_not_found() {
        let store = TransactionStore::with_placeholder_data();
        let before = store.list().unwrap();

        let response = edit_transaction_endpoint(
            State(store.clone()),
            Path(42),
            Form(placeholder_three_with_amount("999")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.list().unwrap(), before);
    }

    #[tokio::test]
    async fn malformed_amount_leaves_transaction_unchanged() {
        let store = TransactionStore::with_placeholder_data();
        let before = store.list().unwrap();

        let response = edit_transaction_endpoint(
            State(store.clone()),
            Path(3),
            Form(placeholder_three_with_amount("12..5")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.list().unwrap(), before);
    }

    #[tokio::test]
    async fn update_through_router() {
        let store = TransactionStore::with_placeholder_data();
        let server = TestServer::new(build_router(AppState::new(store.clone())))
            .expect("Could not create test server.");

        server
            .put(&format_endpoint(endpoints::TRANSACTION, 1))
            .form(&TransactionForm {
                date: "2023-03-16".to_owned(),
                amount: "260".to_owned(),
                type_: "expense".to_owned(),
                category: "Other".to_owned(),
            })
            .await
            .assert_status_see_other();

        let updated = store.get(1).unwrap();
        assert_eq!(updated.amount, 260.0);
        assert_eq!(updated.category, Category::Other);
        assert_eq!(updated.date.to_string(), "2023-03-16");
    }

    #[tokio::test]
    async fn resubmitting_edit_dialog_keeps_amount() {
        let store = TransactionStore::new();
        let server = TestServer::new(build_router(AppState::new(store.clone())))
            .expect("Could not create test server.");
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&TransactionForm {
                date: "2023-05-02".to_owned(),
                amount: "12.34".to_owned(),
                type_: "income".to_owned(),
                category: "Adidas".to_owned(),
            })
            .await
            .assert_status_see_other();
        let created = store.list().unwrap().remove(0);

        let dialog = server
            .get(&format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, created.id))
            .await
            .text();
        let dialog = Html::parse_fragment(&dialog);
        let value = |selector: &str| {
            dialog
                .select(&Selector::parse(selector).unwrap())
                .next()
                .and_then(|element| element.value().attr("value"))
                .unwrap_or_else(|| panic!("no value for {selector}"))
                .to_owned()
        };
        server
            .put(&format_endpoint(endpoints::TRANSACTION, created.id))
            .form(&TransactionForm {
                date: value("input[name=date]"),
                amount: value("input[name=amount]"),
                type_: value("select[name=type_] option[selected]"),
                category: value("select[name=category] option[selected]"),
            })
            .await
            .assert_status_see_other();

        assert_eq!(store.list().unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn poisoned_store_gives_server_error() {
        let store = TransactionStore::with_placeholder_data();
        store.poison();

        let response = edit_transaction_endpoint(
            State(store),
            Path(3),
            Form(placeholder_three_with_amount("999")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

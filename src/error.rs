//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, error_page::ErrorPage};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A required form field was submitted empty.
    #[error("the field \"{0}\" is required")]
    MissingField(&'static str),

    /// The amount could not be parsed as a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The transaction type was not "income" or "expense".
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// The category was not one of the known brands.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// The date was not a calendar date in the format YYYY-MM-DD.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// Could not acquire the lock on the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::StoreLockError => ErrorPage::internal_server_error(
                "Transactions Unavailable",
                "The transaction store could not be accessed. Restart the server and try again.",
            )
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing value".to_owned(),
                    details: format!("Enter a value for the {field} before submitting."),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!("\"{amount}\" is not a number. Enter an amount like 120.50."),
                },
            ),
            Error::InvalidDate(date) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid date".to_owned(),
                    details: format!("\"{date}\" is not a valid date. Use the format YYYY-MM-DD."),
                },
            ),
            Error::InvalidTransactionType(type_) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid type".to_owned(),
                    details: format!(
                        "\"{type_}\" is not a transaction type. Choose income or expense."
                    ),
                },
            ),
            Error::InvalidCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: format!(
                        "\"{category}\" is not a category. Choose Nike, Adidas, Puma or Other."
                    ),
                },
            ),
            Error::UpdateMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update transaction".to_owned(),
                    details: "The transaction could not be found.".to_owned(),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Transaction not found".to_owned(),
                    details: "Try refreshing the page to see the latest transactions.".to_owned(),
                },
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            Error::StoreLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

//! Full-page responses for missing routes and server errors.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A full HTML page explaining why a request could not be served.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPage<'a> {
    status_code: StatusCode,
    title: &'a str,
    description: &'a str,
    fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    /// The page for a route or transaction that does not exist.
    pub fn not_found() -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            title: "Not Found",
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. Head back to your transactions to keep tracking.",
        }
    }

    /// The page for an unexpected server error with a custom explanation.
    pub fn internal_server_error(description: &'a str, fix: &'a str) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Internal Server Error",
            description,
            fix,
        }
    }

    pub fn into_html(self) -> Html<String> {
        let header = self.status_code.as_str();

        Html(error_view(self.title, header, self.description, self.fix).into_string())
    }
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::internal_server_error(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let status_code = self.status_code;

        (status_code, self.into_html()).into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use crate::test_utils::{assert_valid_html, parse_html_document};

    use super::{get_404_not_found, get_internal_server_error_page};

    #[tokio::test]
    async fn not_found_page_has_404_status_and_header() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(heading_text(&document), "404");
    }

    #[tokio::test]
    async fn internal_error_page_has_500_status_and_header() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(heading_text(&document), "500");
    }

    fn heading_text(document: &Html) -> String {
        document
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("no h1 found")
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }
}

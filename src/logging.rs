//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Bodies longer than this many bytes are truncated in the `info` logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    log_body("Received request", &parts, &body_bytes);

    let response = next.run(Request::from_parts(parts, Body::from(body_bytes))).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_body("Sending response", &parts, &body_bytes);

    Response::from_parts(parts, Body::from(body_bytes))
}

async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, usize::MAX).await
}

fn log_body(direction: &str, head: &impl std::fmt::Debug, body: &[u8]) {
    let body = String::from_utf8_lossy(body);

    match truncate(&body, LOG_BODY_LENGTH_LIMIT) {
        Some(truncated) => {
            tracing::info!("{direction}: {head:#?}\nbody: {truncated}...");
            tracing::debug!("Full body: {body:?}");
        }
        None => tracing::info!("{direction}: {head:#?}\nbody: {body:?}"),
    }
}

/// Cut `text` down to at most `limit` bytes without splitting a character.
///
/// Returns `None` if `text` already fits.
fn truncate(text: &str, limit: usize) -> Option<&str> {
    if text.len() <= limit {
        return None;
    }

    let end = (0..=limit)
        .rev()
        .find(|&index| text.is_char_boundary(index))
        .unwrap_or(0);

    Some(&text[..end])
}

#[cfg(test)]
mod tests {
    use axum::{Router, middleware, routing::post};
    use axum_test::TestServer;

    use super::{logging_middleware, truncate};

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate("amount=100", 64), None);
    }

    #[test]
    fn long_text_is_cut_at_limit() {
        let text = "a".repeat(100);

        assert_eq!(truncate(&text, 64), Some(&text[..64]));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Each 'é' is two bytes, so byte 5 falls inside a character.
        let text = "ééééé";

        assert_eq!(truncate(text, 5), Some("éé"));
    }

    #[tokio::test]
    async fn middleware_passes_body_through() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server.");

        let response = server.post("/echo").text("date=2023-04-01").await;

        response.assert_status_ok();
        response.assert_text("date=2023-04-01");
    }
}

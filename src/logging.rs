//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of bytes of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = match read_body_text(body).await {
        Ok(body_text) => body_text,
        Err(error) => {
            tracing::error!("could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    log_request(&parts, &body_text);

    let response = next.run(Request::from_parts(parts, body_text.into())).await;

    let (parts, body) = response.into_parts();
    let body_text = match read_body_text(body).await {
        Ok(body_text) => body_text,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn read_body_text(body: Body) -> Result<String, axum::Error> {
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await?;

    Ok(String::from_utf8_lossy(&body_bytes).to_string())
}

/// The longest prefix of `text` that fits in `limit` bytes without splitting a character.
fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }

    let end = text
        .char_indices()
        .map(|(index, _)| index)
        .take_while(|&index| index <= limit)
        .last()
        .unwrap_or(0);

    &text[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    let (method, uri) = (&parts.method, &parts.uri);

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {method} {uri}\nbody: {}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {method} {uri}\nbody: {body:?}");
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    let status = parts.status;

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {status}\nbody: {}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {status}\nbody: {body:?}");
    }
}

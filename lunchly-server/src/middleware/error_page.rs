//! Error page middleware
//!
//! Handlers fail with [`AppError`], whose response carries the error in its
//! extensions. This layer turns every 4xx/5xx response into the `error.html`
//! view, except JSON responses. Responses produced by axum itself (extractor
//! rejections, 405) carry no `AppError`; their body text becomes the message.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::core::ServerState;
use crate::utils::AppError;
use crate::view::View;

/// Largest plain error body read back into a message
const MAX_ERROR_BODY: usize = 16 * 1024;

pub async fn render_error_page(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;
    let status = response.status();
    if (!status.is_client_error() && !status.is_server_error()) || is_json(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let error = match parts.extensions.remove::<AppError>() {
        Some(err) => err,
        None => {
            let bytes = to_bytes(body, MAX_ERROR_BODY).await.unwrap_or_default();
            let text = String::from_utf8_lossy(&bytes).trim().to_string();
            let message = if text.is_empty() {
                status.canonical_reason().unwrap_or("Error").to_string()
            } else {
                text
            };
            if status.is_server_error() {
                tracing::error!(status = %status.as_u16(), message = %message, "Server error response");
                AppError::internal(message)
            } else {
                AppError::invalid_request(message)
            }
        }
    };

    let context = json!({
        "err": {
            "message": error.public_message(),
            "code": error.code,
        },
        "status": status.as_u16(),
    });

    match state.renderer.render(View::Error.template(), &context) {
        Ok(page) => {
            // keep headers such as `Allow`, swap the body
            parts.headers.remove(header::CONTENT_LENGTH);
            parts.headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            );
            Response::from_parts(parts, Body::from(page))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to render error page");
            (status, error.public_message().to_string()).into_response()
        }
    }
}

/// JSON endpoints (`/health`) keep their own error bodies
fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

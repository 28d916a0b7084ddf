//! Shared helpers for the router tests
//!
//! The app runs against a private in-memory database. Pages are rendered by
//! [`JsonEchoRenderer`], so each response body is the template name plus the
//! exact context the handler produced.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use http::{Request, header};
use http_body_util::BodyExt;
use lunchly_server::{DbService, RenderError, Renderer, ServerState, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct JsonEchoRenderer;

impl Renderer for JsonEchoRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String, RenderError> {
        Ok(json!({ "template": template, "context": context }).to_string())
    }
}

pub async fn test_state() -> ServerState {
    let pool = DbService::in_memory().await.unwrap().pool;
    ServerState::new(pool, Arc::new(JsonEchoRenderer))
}

pub async fn test_app() -> Router {
    build_app(&test_state().await)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string()
}

/// Create a customer through the form and return its id
pub async fn create_customer(app: &Router, first: &str, last: &str) -> i64 {
    let body = format!("firstName={first}&lastName={last}&phone=&notes=");
    let response = send(app, post_form("/add/", &body)).await;
    assert_eq!(response.status(), http::StatusCode::SEE_OTHER);
    location(&response)
        .trim_matches('/')
        .parse()
        .unwrap()
}

pub async fn add_reservation(app: &Router, id: i64, start_at: &str, guests: &str) -> Response {
    let body = format!("startAt={start_at}&numGuests={guests}&notes=");
    send(app, post_form(&format!("/{id}/add-reservation/"), &body)).await
}

//! HTTP routes
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 顾客列表 |
//! | /top-10 | GET | 预订最多的 10 位顾客 |
//! | /search/?term= | GET | 按姓名搜索 |
//! | /add/ | GET, POST | 新建顾客 |
//! | /{id}/ | GET | 顾客详情和预订 |
//! | /{id}/edit/ | GET, POST | 编辑顾客 |
//! | /{id}/add-reservation/ | POST | 新建预订 |
//! | /health | GET | 健康检查 |

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;
use crate::utils::AppError;

pub mod customers;
pub mod health;

/// uuid v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(customers::router())
        .merge(health::router())
        .fallback(not_found)
}

/// Build the fully configured application: routes, middleware and state
///
/// Used by the HTTP server and by tests driving it with `oneshot`.
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // Error pages - innermost, sees handler responses first
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::render_error_page,
        ))
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state.clone())
}

async fn not_found() -> AppError {
    AppError::not_found("Page")
}

//! 健康检查路由
//!
//! ```json
//! {
//!   "status": "ok",
//!   "service": "lunchly",
//!   "version": "0.1.0",
//!   "database": "ok"
//! }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | error)
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// 数据库检查结果 (ok | error)
    pub database: &'static str,
}

/// GET /health
///
/// 数据库不可用时返回 503，调用方无需解析响应体即可判断。
async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();
    if !database_ok {
        tracing::warn!("Health check: database unreachable");
    }

    let (code, status, database) = if database_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "error", "error")
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: "lunchly",
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

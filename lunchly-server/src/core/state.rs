//! Server State
//!
//! Everything a request handler needs, built once at startup and cloned per
//! request. There is no other process-wide state.

use std::sync::Arc;

use axum::response::Html;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::utils::{AppError, AppResult, ErrorCode};
use crate::view::{HtmlRenderer, Renderer, View};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Page renderer
    pub renderer: Arc<dyn Renderer>,
}

impl ServerState {
    pub fn new(pool: SqlitePool, renderer: Arc<dyn Renderer>) -> Self {
        Self { pool, renderer }
    }

    /// Open the configured database and pair it with the built-in renderer
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        tracing::info!(
            environment = %config.environment,
            database = %config.database_path,
            "Server state initialized"
        );
        Ok(Self::new(db.pool, Arc::new(HtmlRenderer::new())))
    }

    /// Render a page; renderer failures become a 500
    pub fn render(&self, view: View, context: Value) -> AppResult<Html<String>> {
        self.renderer
            .render(view.template(), &context)
            .map(Html)
            .map_err(|e| AppError::with_message(ErrorCode::RenderError, e.to_string()))
    }
}

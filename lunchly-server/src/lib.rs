//! Lunchly server
//!
//! A small restaurant front-of-house app: customers, their reservations and
//! server-rendered pages to browse and edit them, backed by SQLite.
//!
//! # 模块结构
//!
//! - [`core`] - 配置、状态、HTTP 服务器
//! - [`api`] - 路由和处理器
//! - [`db`] - 连接池、迁移和 repository
//! - [`view`] - 页面渲染
//! - [`middleware`] - 请求日志和错误页面
//! - [`utils`] - 日志、时间解析、输入校验

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;
pub mod view;

pub use api::build_app;
pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use utils::logger::init_logger_with_file;
pub use utils::{AppError, AppResult, ErrorCode};
pub use view::{HtmlRenderer, RenderError, Renderer, View};

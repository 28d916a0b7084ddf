//! HTTP middleware
//!
//! - [`logging_middleware`] - 请求日志
//! - [`render_error_page`] - 把错误响应渲染成错误页面

pub mod error_page;
pub mod logging;

pub use error_page::render_error_page;
pub use logging::logging_middleware;

use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动和运行错误
///
/// 请求级错误使用 [`AppError`]，这里只覆盖进程生命周期内的失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] AppError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的监听地址: {0}")]
    InvalidAddress(String),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;

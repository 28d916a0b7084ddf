//! Shared types for Lunchly
//!
//! Record models, the unified error type and small utilities used by the
//! server crate and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use models::{Customer, RecordKey, Reservation, full_name};
pub use serde::{Deserialize, Serialize};

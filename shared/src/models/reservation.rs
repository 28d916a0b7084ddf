//! Reservation Model

use serde::{Deserialize, Serialize};

use super::RecordKey;

/// Reservation entity, always owned by one customer
///
/// `start_at` is Unix millis (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[cfg_attr(feature = "db", sqlx(try_from = "i64"))]
    pub id: RecordKey,
    pub customer_id: i64,
    pub start_at: i64,
    pub num_guests: i64,
    pub notes: Option<String>,
}

impl Reservation {
    /// Build a reservation that has not been stored yet
    pub fn new(customer_id: i64, start_at: i64, num_guests: i64, notes: Option<String>) -> Self {
        Self {
            id: RecordKey::New,
            customer_id,
            start_at,
            num_guests,
            notes,
        }
    }
}

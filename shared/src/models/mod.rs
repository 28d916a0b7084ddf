//! Record models
//!
//! Each record maps to one table row. Persistence goes through the server's
//! repository layer; these types only carry data.

pub mod customer;
pub mod reservation;

pub use customer::{Customer, full_name};
pub use reservation::Reservation;

use serde::{Deserialize, Serialize};

/// Identity of a record: not yet stored, or stored under a generated id
///
/// `save` matches on this to pick between insert and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum RecordKey {
    #[default]
    New,
    Persisted(i64),
}

impl RecordKey {
    /// The generated id, if the record has been stored
    pub fn id(&self) -> Option<i64> {
        match self {
            RecordKey::New => None,
            RecordKey::Persisted(id) => Some(*id),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, RecordKey::New)
    }
}

impl From<i64> for RecordKey {
    fn from(id: i64) -> Self {
        RecordKey::Persisted(id)
    }
}

impl From<Option<i64>> for RecordKey {
    fn from(id: Option<i64>) -> Self {
        id.map_or(RecordKey::New, RecordKey::Persisted)
    }
}

impl From<RecordKey> for Option<i64> {
    fn from(key: RecordKey) -> Self {
        key.id()
    }
}

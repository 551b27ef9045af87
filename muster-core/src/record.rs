//! Performance records.
//!
//! A record captures how a participant did at one event. Unlike
//! events, records can be deleted through the store.

use serde::{Deserialize, Serialize};

/// One user's performance record for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Opaque, store-assigned identifier
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub performance: String,
    pub remarks: String,
}

//! Audit log model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only audit record of a gateway action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: i64,
    /// Action name, e.g. "send_sms" or "update_sim_card"
    pub action: String,
    pub details: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Id of the SIM card involved in the action
    #[serde(alias = "sender_sim")]
    pub sender_sim: i64,
}

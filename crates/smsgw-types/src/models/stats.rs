//! Statistics and monitoring models.
//!
//! These are aggregates computed server-side and returned by the statistics
//! endpoint. The client only displays them; derived fields (percentages,
//! totals) are never recomputed locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full system statistics snapshot returned by the statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    /// Gateway host memory usage
    pub memory: MemoryStats,
    /// Per-component memory breakdown
    pub components: Vec<ComponentStats>,
    /// Backing database size
    pub database: DatabaseStats,
    /// Message volume counters
    pub messages: MessageStats,
    /// SIM card pool counters
    #[serde(alias = "sim_cards")]
    pub sim_cards: SimCardStats,
}

/// Host memory usage in bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryStats {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    /// Used fraction as a percentage in 0..=100, derived from used/total
    pub percent: f32,
}

impl MemoryStats {
    /// Check the reported percentage against used/total, within a tolerance
    /// that absorbs backend rounding.
    pub fn percent_is_consistent(&self) -> bool {
        if self.total == 0 {
            return self.percent == 0.0;
        }
        let expected = (self.used as f64 / self.total as f64) * 100.0;
        (f64::from(self.percent) - expected).abs() < 0.5
    }
}

/// Memory usage of a single gateway component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStats {
    /// Component name
    pub name: String,
    /// Resident memory in bytes
    #[serde(alias = "memory_usage")]
    pub memory_usage: u64,
    /// Share of total memory as a percentage
    pub percentage: f32,
    /// When the sample was taken
    #[serde(alias = "last_updated")]
    pub last_updated: DateTime<Utc>,
}

/// Size of the gateway's backing database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStats {
    pub name: String,
    /// Size in bytes
    #[serde(alias = "size_bytes")]
    pub size_bytes: u64,
    /// Size in megabytes, as reported by the backend
    #[serde(alias = "size_mb")]
    pub size_mb: f32,
    #[serde(alias = "last_updated")]
    pub last_updated: DateTime<Utc>,
}

/// Message volume counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    /// All messages ever handled
    #[serde(alias = "total_messages")]
    pub total_messages: u64,
    /// Messages received by the gateway
    #[serde(alias = "incoming_messages")]
    pub incoming_messages: u64,
    /// Messages sent through the gateway
    #[serde(alias = "outgoing_messages")]
    pub outgoing_messages: u64,
    /// Messages handled since midnight
    #[serde(alias = "messages_today")]
    pub messages_today: u64,
    /// Per-day counts, ordered by date
    #[serde(alias = "messages_per_day")]
    pub messages_per_day: Vec<DailyMessageCount>,
}

impl MessageStats {
    /// Backend invariant: total = incoming + outgoing.
    pub fn is_consistent(&self) -> bool {
        self.total_messages == self.incoming_messages + self.outgoing_messages
    }
}

/// Message count for a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyMessageCount {
    pub date: DateTime<Utc>,
    pub count: u64,
}

/// SIM card pool counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SimCardStats {
    #[serde(alias = "total_sims")]
    pub total_sims: u64,
    #[serde(alias = "active_sims")]
    pub active_sims: u64,
    #[serde(alias = "inactive_sims")]
    pub inactive_sims: u64,
    /// The single most-used SIM
    #[serde(alias = "most_used_sim")]
    pub most_used_sim: MostUsedSim,
    /// Most-used SIMs ordered by descending message count
    #[serde(alias = "most_used_sims")]
    pub most_used_sims: Vec<MostUsedSim>,
}

impl SimCardStats {
    /// Backend invariant: total = active + inactive.
    pub fn is_consistent(&self) -> bool {
        self.total_sims == self.active_sims + self.inactive_sims
    }
}

/// Usage ranking entry for a single SIM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MostUsedSim {
    pub number: String,
    #[serde(alias = "message_count")]
    pub message_count: u64,
}

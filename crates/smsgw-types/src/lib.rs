//! # SMS Gateway Types
//!
//! Core data model for the SMS Gateway ecosystem.
//!
//! This crate provides the entity types exchanged with the gateway backend:
//!
//! - **`models`** - Domain models (User, SimCard, Message, LogEntry, SystemStats)
//! - **`format`** - Display helpers for statistics (byte-size formatting)
//!
//! ## Architecture Role
//!
//! `smsgw-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        smsgw-types (this crate)
//!              │
//!              ▼
//!         smsgw-client
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for the JSON wire format
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison
//!
//! Entities are owned by the backend system of record; values held here are
//! transient, request-scoped copies with no local persistence.

pub mod format;
pub mod models;

pub use format::format_bytes;

// Re-export core model types
pub use models::{
    ComponentStats, DailyMessageCount, DatabaseStats, LogEntry, MemoryStats, Message,
    MessageStats, MostUsedSim, SimCard, SimCardStats, SmsStatus, SystemStats, User,
};

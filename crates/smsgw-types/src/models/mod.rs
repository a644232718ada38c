//! Domain models for the SMS Gateway.
//!
//! Plain value records describing entities exchanged with the backend. The
//! backend is the system of record; nothing here carries behavior beyond
//! field access and small derived predicates. Identity is by the primary key
//! field, not by reference.

mod log;
mod message;
mod sim;
mod stats;
mod user;

// Re-export all models
pub use log::LogEntry;
pub use message::{Message, SmsStatus};
pub use sim::SimCard;
pub use stats::{
    ComponentStats, DailyMessageCount, DatabaseStats, MemoryStats, MessageStats, MostUsedSim,
    SimCardStats, SystemStats,
};
pub use user::User;

//! User account model.

use serde::{Deserialize, Serialize};

/// A gateway user account, created server-side on registration/login.
///
/// The client treats this as read-only; the `api_key` field carries the
/// opaque credential authorizing all gateway operations except login and
/// key rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,
    /// Login name
    pub username: String,
    /// Role string, e.g. "admin" or "user" (no closed set enforced)
    pub role: String,
    /// Opaque bearer credential for gateway operations
    #[serde(alias = "api_key")]
    pub api_key: String,
}

impl User {
    /// Whether this user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

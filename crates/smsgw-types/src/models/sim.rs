//! SIM card model.

use serde::{Deserialize, Serialize};

/// A provisioned phone-number-bearing line used by the gateway to send and
/// receive messages.
///
/// Lifecycle: created via the add operation, mutated via update (number or
/// status), removed via delete. Status is an informal string; "active" and
/// "inactive" are the values the gateway uses, but no closed set is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SimCard {
    /// Unique identifier for the SIM card
    pub id: i64,
    /// Phone number in international format, e.g. "+1234567890"
    pub number: String,
    /// Informal status string ("active" / "inactive")
    pub status: String,
}

impl SimCard {
    /// Whether this SIM is currently usable for sending.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_card_round_trip() {
        let sim = SimCard {
            id: 3,
            number: "+1234567890".to_string(),
            status: "active".to_string(),
        };

        let json = serde_json::to_string(&sim).unwrap();
        let back: SimCard = serde_json::from_str(&json).unwrap();
        assert_eq!(sim, back);
        assert!(back.is_active());
    }

    #[test]
    fn test_inactive_sim() {
        let sim: SimCard =
            serde_json::from_str(r#"{"id":2,"number":"+0987654321","status":"inactive"}"#)
                .unwrap();
        assert!(!sim.is_active());
    }
}

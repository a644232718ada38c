//! Message and delivery-status models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single SMS message known to the gateway.
///
/// Created on send (outgoing) or receipt (incoming) and immutable thereafter,
/// except for status transitions (pending → success | failed) performed
/// server-side. `sender_sim` references an existing [`SimCard`] id;
/// referential integrity is enforced by the backend, not locally.
///
/// [`SimCard`]: super::SimCard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier for the message
    pub id: i64,
    /// Originating phone number
    pub sender: String,
    /// Destination phone number
    pub recipient: String,
    /// Message body
    pub message: String,
    /// "incoming" or "outgoing" (inbox/outbox partition)
    pub direction: String,
    /// Delivery status, e.g. "pending" / "success" / "failed"
    pub status: String,
    /// When the message was sent or received
    pub timestamp: DateTime<Utc>,
    /// Id of the SIM card that carried the message
    #[serde(alias = "sender_sim")]
    pub sender_sim: i64,
}

impl Message {
    /// Whether the message arrived at the gateway from outside.
    pub fn is_incoming(&self) -> bool {
        self.direction == "incoming"
    }

    /// Whether the message was sent out through the gateway.
    pub fn is_outgoing(&self) -> bool {
        self.direction == "outgoing"
    }
}

/// Delivery-status view of an outgoing message, as exposed by the
/// `/api/sms-status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SmsStatus {
    /// Unique identifier for the underlying message
    pub id: i64,
    /// Number the message was sent from
    #[serde(alias = "sender_number")]
    pub sender_number: String,
    /// Number the message was sent to
    #[serde(alias = "receiver_number")]
    pub receiver_number: String,
    /// Message body
    pub message: String,
    /// Delivery status
    pub status: String,
    /// When the status was last recorded
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_unicode_round_trip() {
        let msg = Message {
            id: 42,
            sender: "+491701234567".to_string(),
            recipient: "+1234567890".to_string(),
            message: "Grüße aus Berlin ✉️ — cześć!".to_string(),
            direction: "outgoing".to_string(),
            status: "pending".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 45).unwrap(),
            sender_sim: 3,
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"senderSim\":3"));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
        assert!(back.is_outgoing());
        assert!(!back.is_incoming());
    }

    #[test]
    fn test_message_accepts_snake_case_sim() {
        let back: Message = serde_json::from_str(
            r#"{
                "id": 1,
                "sender": "+111",
                "recipient": "+222",
                "message": "hi",
                "direction": "incoming",
                "status": "success",
                "timestamp": "2024-06-01T12:30:45Z",
                "sender_sim": 2
            }"#,
        )
        .unwrap();
        assert_eq!(back.sender_sim, 2);
        assert!(back.is_incoming());
    }

    #[test]
    fn test_sms_status_round_trip() {
        let status = SmsStatus {
            id: 9,
            sender_number: "+111".to_string(),
            receiver_number: "+222".to_string(),
            message: "delivered?".to_string(),
            status: "success".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, 2, 8, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&status).unwrap();
        let back: SmsStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }
}

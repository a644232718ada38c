use serde::{Deserialize, Serialize};

/// Login credentials for `POST /api/auth`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload for sending a message through the gateway.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    /// Destination phone number in international format
    pub recipient: String,
    /// Message body
    pub message: String,
    /// Specific SIM card to send from; the gateway picks one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_sim: Option<i64>,
}

/// Payload for provisioning a new SIM card.
#[derive(Debug, Clone, Serialize)]
pub struct NewSimCard {
    /// Phone number in international format
    pub number: String,
    /// Initial status; the gateway defaults to "active" when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial update for an existing SIM card. Absent fields are omitted from
/// the payload and left unchanged by the gateway.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimCardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Payload for the incoming-message test hook.
#[derive(Debug, Clone, Serialize)]
pub struct IncomingSms {
    /// Originating phone number
    pub sender: String,
    /// Message body
    pub message: String,
}

/// Response of the key-rotation endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    /// The freshly generated API key; replaces the previous one server-side
    #[serde(alias = "api_key")]
    pub api_key: String,
}

/// Connection settings for [`SmsGatewayClient`].
///
/// `api_key` authorizes gateway operations (SIM, message, log, statistics
/// endpoints); `bearer_token` is a separate credential scope used only for
/// key rotation. The two are never interchangeable.
///
/// [`SmsGatewayClient`]: crate::SmsGatewayClient
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway, e.g. "http://192.168.1.10:5001"
    pub base_url: String,
    /// API key sent as `X-API-Key` on gateway operations
    pub api_key: String,
    /// Session token sent as `Authorization: Bearer` on key rotation
    pub bearer_token: Option<String>,
    /// Per-request deadline in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            api_key: String::new(),
            bearer_token: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Replace the API key, e.g. after login or rotation.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the bearer token used for key rotation.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_omits_absent_fields() {
        let update = SimCardUpdate { status: Some("inactive".to_string()), ..Default::default() };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"status":"inactive"}"#);
    }

    #[test]
    fn test_send_request_uses_camel_case_sim_field() {
        let req = SendSmsRequest {
            recipient: "+1234567890".to_string(),
            message: "hello".to_string(),
            sender_sim: Some(2),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"senderSim\":2"));

        let without_sim = SendSmsRequest {
            recipient: "+1234567890".to_string(),
            message: "hello".to_string(),
            sender_sim: None,
        };
        assert!(!serde_json::to_string(&without_sim).unwrap().contains("senderSim"));
    }

    #[test]
    fn test_api_key_response_accepts_both_spellings() {
        let a: ApiKeyResponse = serde_json::from_str(r#"{"apiKey":"k1"}"#).unwrap();
        let b: ApiKeyResponse = serde_json::from_str(r#"{"api_key":"k1"}"#).unwrap();
        assert_eq!(a, b);
    }
}

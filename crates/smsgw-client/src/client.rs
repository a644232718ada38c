use crate::error::ClientError;
use crate::types::*;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smsgw_types::{LogEntry, Message, SimCard, SmsStatus, SystemStats, User};
use std::time::Duration;

/// Header carrying the gateway API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// Typed client for the SMS Gateway REST API.
///
/// Every method is a single stateless request/response exchange; the client
/// performs no retry, pagination, or caching. Operations may be issued
/// concurrently, they share nothing but the credential.
pub struct SmsGatewayClient {
    client: Client,
    config: ClientConfig,
}

impl SmsGatewayClient {
    /// Build a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Authenticate with username/password. `POST /api/auth`.
    ///
    /// The returned [`User`] carries the API key for subsequent gateway
    /// operations; the caller decides whether to adopt it via
    /// [`ClientConfig::with_api_key`].
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ClientError> {
        let resp = self
            .client
            .post(self.url("/api/auth"))
            .json(credentials)
            .send()
            .await?;
        let user: User = Self::decode(resp).await?;
        tracing::info!(username = %user.username, "authenticated with gateway");
        Ok(user)
    }

    /// List all provisioned SIM cards. `GET /api/sim-cards`.
    pub async fn list_sim_cards(&self) -> Result<Vec<SimCard>, ClientError> {
        self.get("/api/sim-cards").await
    }

    /// Provision a new SIM card. `POST /api/sim-cards`.
    pub async fn add_sim_card(&self, sim: &NewSimCard) -> Result<SimCard, ClientError> {
        self.post("/api/sim-cards", sim).await
    }

    /// Update number and/or status of a SIM card. `PUT /api/sim-cards/{simId}`.
    pub async fn update_sim_card(
        &self,
        sim_id: i64,
        update: &SimCardUpdate,
    ) -> Result<SimCard, ClientError> {
        let path = format!("/api/sim-cards/{}", sim_id);
        tracing::debug!(%sim_id, "PUT {}", path);
        let resp = self
            .client
            .put(self.url(&path))
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(update)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Remove a SIM card. `DELETE /api/sim-cards/{simId}`.
    pub async fn delete_sim_card(&self, sim_id: i64) -> Result<(), ClientError> {
        let path = format!("/api/sim-cards/{}", sim_id);
        tracing::debug!(%sim_id, "DELETE {}", path);
        let resp = self
            .client
            .delete(self.url(&path))
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Send an SMS through the gateway. `POST /api/sms`.
    pub async fn send_sms(&self, request: &SendSmsRequest) -> Result<Message, ClientError> {
        self.post("/api/sms", request).await
    }

    /// Fetch all incoming messages. `GET /api/sms/inbox`.
    pub async fn inbox(&self) -> Result<Vec<Message>, ClientError> {
        self.get("/api/sms/inbox").await
    }

    /// Fetch all outgoing messages. `GET /api/sms/outbox`.
    pub async fn outbox(&self) -> Result<Vec<Message>, ClientError> {
        self.get("/api/sms/outbox").await
    }

    /// Fetch delivery statuses of outgoing messages. `GET /api/sms-status`.
    pub async fn sms_statuses(&self) -> Result<Vec<SmsStatus>, ClientError> {
        self.get("/api/sms-status").await
    }

    /// Fetch the system statistics snapshot. `GET /api/statistics`.
    pub async fn statistics(&self) -> Result<SystemStats, ClientError> {
        self.get("/api/statistics").await
    }

    /// Fetch the audit log. `GET /api/logs`.
    pub async fn logs(&self) -> Result<Vec<LogEntry>, ClientError> {
        self.get("/api/logs").await
    }

    /// Inject an inbound message via the gateway's test hook.
    /// `POST /api/simulate/receive_sms`, unauthenticated.
    pub async fn simulate_incoming(&self, sms: &IncomingSms) -> Result<Message, ClientError> {
        tracing::debug!("POST /api/simulate/receive_sms");
        let resp = self
            .client
            .post(self.url("/api/simulate/receive_sms"))
            .json(sms)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Rotate the API key. `POST /api/generate-api-key`.
    ///
    /// Uses the bearer-token credential scope, not the API key; fails with
    /// [`ClientError::MissingBearerToken`] when no token is configured. The
    /// previous key is invalidated server-side once this succeeds.
    pub async fn generate_api_key(&self) -> Result<ApiKeyResponse, ClientError> {
        let token = self
            .config
            .bearer_token
            .as_deref()
            .ok_or(ClientError::MissingBearerToken)?;
        tracing::debug!("POST /api/generate-api-key");
        let resp = self
            .client
            .post(self.url("/api/generate-api-key"))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!("GET {}", path);
        let resp = self
            .client
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        tracing::debug!("POST {}", path);
        let resp = self
            .client
            .post(self.url(path))
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Map a response to a typed payload, preserving status and body on
    /// every failure path.
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), &body));
        }
        resp.json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

//! Typed async client for the SMS Gateway REST API.
//!
//! One method per remote operation, each a single stateless request/response
//! exchange returning `Result<T, ClientError>`. Failures preserve the HTTP
//! status and the server's error payload so callers can distinguish
//! authorization, validation, and not-found rejections from transport or
//! decoding problems.
//!
//! ```no_run
//! use smsgw_client::{ClientConfig, Credentials, SmsGatewayClient};
//!
//! # async fn run() -> Result<(), smsgw_client::ClientError> {
//! let config = ClientConfig {
//!     base_url: "http://192.168.1.10:5001".to_string(),
//!     ..Default::default()
//! };
//! let client = SmsGatewayClient::new(config)?;
//!
//! let user = client
//!     .login(&Credentials {
//!         username: "admin".to_string(),
//!         password: "admin123".to_string(),
//!     })
//!     .await?;
//! println!("api key: {}", user.api_key);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::SmsGatewayClient;
pub use error::ClientError;
pub use types::*;

// The data model is part of the public API surface.
pub use smsgw_types as models;

//! Send a single SMS through the gateway.
//!
//! ```sh
//! SMSGW_URL=http://192.168.1.10:5001 SMSGW_API_KEY=... \
//!     cargo run --example send_sms -- +1234567890 "Hello from the SDK"
//! ```

use smsgw_client::{ClientConfig, ClientError, SendSmsRequest, SmsGatewayClient};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smsgw_client=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let recipient = args.next().unwrap_or_else(|| "+1234567890".to_string());
    let message = args
        .next()
        .unwrap_or_else(|| "Hello! This is a test message sent using the SDK.".to_string());

    let mut config = ClientConfig::default();
    if let Ok(url) = std::env::var("SMSGW_URL") {
        config.base_url = url;
    }
    if let Ok(key) = std::env::var("SMSGW_API_KEY") {
        config = config.with_api_key(key);
    }

    let client = SmsGatewayClient::new(config)?;
    let sent = client
        .send_sms(&SendSmsRequest { recipient, message, sender_sim: None })
        .await?;

    println!(
        "SMS {} queued via SIM {} at {} (status: {})",
        sent.id, sent.sender_sim, sent.timestamp, sent.status
    );
    Ok(())
}

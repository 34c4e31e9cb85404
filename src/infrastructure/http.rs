use crate::domain::ports::{GatewayError, PaymentGateway};
use async_trait::async_trait;
use serde_json::Value;

/// A gateway that posts payloads to a real payment provider over HTTP.
///
/// Endpoints are appended to the configured base URL, so a base of
/// `https://gateway.example.com` dispatches credit card payments to
/// `https://gateway.example.com/payments/credit`.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway targeting the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn post(&self, endpoint: &str, payload: Value) -> Result<(), GatewayError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

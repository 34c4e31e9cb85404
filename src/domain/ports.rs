use crate::domain::payment::{Currency, PaymentMethod};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Endpoint all refunds are posted to, regardless of the original payment
/// method.
pub const REFUND_ENDPOINT: &str = "/payments/refund";

/// A failed gateway call. Surfaced to orchestrator callers unchanged.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("gateway transport failure: {0}")]
    Transport(String),
    #[error("gateway rejected the request with status {status}")]
    Rejected { status: u16 },
}

/// The external payment API. The only fallible boundary in the system.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn post(&self, endpoint: &str, payload: Value) -> Result<(), GatewayError>;
}

/// Confirmation side channel (the original system sent an email here).
///
/// Infallible by construction: a notification can never abort the payment
/// it confirms.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user_id: &str, amount: Decimal, currency: Currency);
}

/// What the analytics sink receives after a successful dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEvent {
    pub user_id: String,
    /// The settled (post-discount, post-conversion) amount.
    pub amount: Decimal,
    pub currency: Currency,
    pub method: PaymentMethod,
}

/// Analytics side channel. Same infallibility contract as [`Notifier`].
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn record(&self, event: PaymentEvent);
}

pub type GatewayBox = Box<dyn PaymentGateway>;
pub type NotifierBox = Box<dyn Notifier>;
pub type AnalyticsBox = Box<dyn AnalyticsSink>;

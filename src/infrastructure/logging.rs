use crate::domain::payment::Currency;
use crate::domain::ports::{AnalyticsSink, GatewayError, Notifier, PaymentEvent, PaymentGateway};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;

/// A gateway that accepts every dispatch and logs it.
///
/// Stands in for a real payment provider in local runs where no gateway is
/// reachable.
#[derive(Default, Clone, Copy)]
pub struct LoggingGateway;

#[async_trait]
impl PaymentGateway for LoggingGateway {
    async fn post(&self, endpoint: &str, payload: Value) -> Result<(), GatewayError> {
        tracing::info!(endpoint, %payload, "dispatching payment request");
        Ok(())
    }
}

/// A notifier that logs the confirmation instead of sending an email.
#[derive(Default, Clone, Copy)]
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify(&self, user_id: &str, amount: Decimal, currency: Currency) {
        tracing::info!(user_id, %amount, %currency, "sending payment confirmation email");
    }
}

/// An analytics sink that logs each event instead of shipping it anywhere.
#[derive(Default, Clone, Copy)]
pub struct LoggingAnalytics;

#[async_trait]
impl AnalyticsSink for LoggingAnalytics {
    async fn record(&self, event: PaymentEvent) {
        tracing::info!(
            user_id = %event.user_id,
            amount = %event.amount,
            currency = %event.currency,
            method = %event.method,
            "recording payment event"
        );
    }
}

use crate::domain::payment::Currency;
use crate::domain::ports::{AnalyticsSink, GatewayError, Notifier, PaymentEvent, PaymentGateway};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A gateway that records every dispatch instead of sending it anywhere.
///
/// Uses `Arc<RwLock<Vec<_>>>` so clones share the same log; handing a clone
/// to the orchestrator and keeping one for assertions is the intended use.
#[derive(Default, Clone)]
pub struct RecordingGateway {
    posts: Arc<RwLock<Vec<(String, Value)>>>,
}

impl RecordingGateway {
    /// Creates a new gateway with an empty dispatch log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every `(endpoint, payload)` pair posted so far, in order.
    pub async fn posts(&self) -> Vec<(String, Value)> {
        self.posts.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn post(&self, endpoint: &str, payload: Value) -> Result<(), GatewayError> {
        let mut posts = self.posts.write().await;
        posts.push((endpoint.to_string(), payload));
        Ok(())
    }
}

/// A gateway that fails every dispatch with a transport error.
#[derive(Default, Clone, Copy)]
pub struct FailingGateway;

#[async_trait]
impl PaymentGateway for FailingGateway {
    async fn post(&self, _endpoint: &str, _payload: Value) -> Result<(), GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }
}

/// A notifier that records every confirmation it is asked to send.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<RwLock<Vec<(String, Decimal, Currency)>>>,
}

impl RecordingNotifier {
    /// Creates a new notifier with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every `(user_id, amount, currency)` confirmation so far.
    pub async fn notifications(&self) -> Vec<(String, Decimal, Currency)> {
        self.notifications.read().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, user_id: &str, amount: Decimal, currency: Currency) {
        let mut notifications = self.notifications.write().await;
        notifications.push((user_id.to_string(), amount, currency));
    }
}

/// An analytics sink that keeps every event in memory.
#[derive(Default, Clone)]
pub struct RecordingAnalytics {
    events: Arc<RwLock<Vec<PaymentEvent>>>,
}

impl RecordingAnalytics {
    /// Creates a new sink with an empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event recorded so far, in order.
    pub async fn events(&self) -> Vec<PaymentEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingAnalytics {
    async fn record(&self, event: PaymentEvent) {
        let mut events = self.events.write().await;
        events.push(event);
    }
}

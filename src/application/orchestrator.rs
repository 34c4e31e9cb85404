use crate::domain::fraud::{self, RiskAssessment};
use crate::domain::payment;
use crate::domain::ports::{AnalyticsBox, GatewayBox, NotifierBox, PaymentEvent, REFUND_ENDPOINT};
use crate::domain::pricing::PricingConfig;
use crate::domain::transaction::{PaymentRequest, Refund, RefundRequest, Transaction};
use crate::error::Result;
use rust_decimal::Decimal;

/// The main entry point for payment orchestration.
///
/// `PaymentOrchestrator` owns its three ports and runs each operation to
/// completion, awaiting every port call in order: validation, fraud
/// classification, pricing, assembly, dispatch, then the side-effect
/// notifications. It holds no mutable state; only the pricing configuration
/// lives on the instance, so independent calls are trivially safe.
pub struct PaymentOrchestrator {
    gateway: GatewayBox,
    notifier: NotifierBox,
    analytics: AnalyticsBox,
    pricing: PricingConfig,
}

impl PaymentOrchestrator {
    /// Creates an orchestrator with the stock pricing configuration.
    pub fn new(gateway: GatewayBox, notifier: NotifierBox, analytics: AnalyticsBox) -> Self {
        Self::with_pricing(gateway, notifier, analytics, PricingConfig::default())
    }

    /// Creates an orchestrator with deployment-specific pricing.
    pub fn with_pricing(
        gateway: GatewayBox,
        notifier: NotifierBox,
        analytics: AnalyticsBox,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            gateway,
            notifier,
            analytics,
            pricing,
        }
    }

    /// Charges a payment and returns the assembled transaction record.
    ///
    /// Validation failures happen before any port is touched, so a rejected
    /// request leaves no partial dispatch behind. A gateway failure aborts
    /// the operation and propagates unchanged; the confirmation and
    /// analytics effects only run after a successful dispatch.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<Transaction> {
        payment::validate_metadata(request.method, &request.metadata)?;

        if let Some(assessment) = self.fraud_assessment(request.fraud_check_level, request.amount) {
            tracing::info!(
                user_id = %request.user_id,
                amount = %request.amount,
                depth = %assessment.depth,
                risk = %assessment.risk,
                "fraud check complete"
            );
        }

        let discounted = self
            .pricing
            .apply_discount(request.amount, request.discount_code.as_deref());
        let final_amount = self.pricing.convert(discounted, request.currency);

        let transaction = Transaction::assemble(request, final_amount);

        let endpoint = transaction.payment_method.endpoint();
        let payload = serde_json::to_value(&transaction)?;
        if let Err(err) = self.gateway.post(endpoint, payload).await {
            tracing::error!(endpoint, error = %err, "failed to send payment");
            return Err(err.into());
        }
        tracing::info!(
            endpoint,
            user_id = %transaction.user_id,
            amount = %transaction.final_amount,
            "payment sent to gateway"
        );

        self.notifier
            .notify(
                &transaction.user_id,
                transaction.final_amount,
                transaction.currency,
            )
            .await;
        self.analytics
            .record(PaymentEvent {
                user_id: transaction.user_id.clone(),
                amount: transaction.final_amount,
                currency: transaction.currency,
                method: transaction.payment_method,
            })
            .await;

        Ok(transaction)
    }

    /// Refunds a prior transaction, withholding the configured fee.
    ///
    /// The refund amount is caller-supplied and not reconciled against the
    /// original transaction. A gateway failure propagates unchanged.
    pub async fn refund_payment(&self, request: RefundRequest) -> Result<Refund> {
        let net_amount = self.pricing.refund_net(request.amount);
        let refund = Refund::assemble(request, net_amount);

        let payload = serde_json::to_value(&refund)?;
        self.gateway.post(REFUND_ENDPOINT, payload).await?;
        tracing::info!(
            transaction_id = %refund.transaction_id,
            user_id = %refund.user_id,
            net_amount = %refund.net_amount,
            "refund processed"
        );

        Ok(refund)
    }

    /// A level of zero skips classification entirely; anything above zero
    /// runs the stub model. The assessment is a log signal only.
    fn fraud_assessment(&self, level: u8, amount: Decimal) -> Option<RiskAssessment> {
        (level > 0).then(|| fraud::classify(amount))
    }
}

use crate::domain::payment::{Currency, PaymentMethod};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything a caller supplies to charge a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub user_id: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub method: PaymentMethod,
    /// Method-specific payload, validated against `method` before anything
    /// else happens.
    pub metadata: Value,
    pub discount_code: Option<String>,
    /// 0 disables the fraud check.
    pub fraud_check_level: u8,
}

/// Everything a caller supplies to refund a prior transaction.
///
/// The amount is caller-supplied and deliberately unchecked against the
/// original transaction; no ledger exists to check it against.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundRequest {
    pub transaction_id: String,
    pub user_id: String,
    pub reason: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub metadata: Value,
}

/// A single row of work for the batch interface.
#[derive(Debug, Clone, PartialEq)]
pub enum OrchestrationRequest {
    Payment(PaymentRequest),
    Refund(RefundRequest),
}

/// The record handed to the gateway and returned to the caller.
///
/// Immutable once assembled: `final_amount` is derived from
/// `original_amount`, the discount code, and the currency, and is never
/// touched afterwards. Serializes with the external API's camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub user_id: String,
    pub original_amount: Decimal,
    pub final_amount: Decimal,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    pub metadata: Value,
    pub discount_code: Option<String>,
    /// The fraud-check level that was requested, 0 if skipped.
    pub fraud_checked: u8,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Packages the request and the computed final amount into a record,
    /// stamped with the current instant. No validation happens here.
    pub fn assemble(request: PaymentRequest, final_amount: Decimal) -> Self {
        Self {
            user_id: request.user_id,
            original_amount: request.amount,
            final_amount,
            currency: request.currency,
            payment_method: request.method,
            metadata: request.metadata,
            discount_code: request.discount_code,
            fraud_checked: request.fraud_check_level,
            timestamp: Utc::now(),
        }
    }
}

/// The record posted to the refund endpoint and returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub transaction_id: String,
    pub user_id: String,
    pub reason: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub metadata: Value,
    pub date: DateTime<Utc>,
    /// `amount` less the refund fee.
    pub net_amount: Decimal,
}

impl Refund {
    pub fn assemble(request: RefundRequest, net_amount: Decimal) -> Self {
        Self {
            transaction_id: request.transaction_id,
            user_id: request.user_id,
            reason: request.reason,
            amount: request.amount,
            currency: request.currency,
            metadata: request.metadata,
            date: Utc::now(),
            net_amount,
        }
    }
}

use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// The closed set of payment methods the orchestrator can dispatch.
///
/// Keeping this a tagged enum (rather than a free-form string) removes the
/// unreachable "unknown method" branch from dispatch; strings are narrowed
/// once, at the [`FromStr`] boundary.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    // Spelled like this so both renames produce the wire name "paypal".
    Paypal,
}

impl PaymentMethod {
    /// The gateway endpoint this method's transactions are posted to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::CreditCard => "/payments/credit",
            Self::Paypal => "/payments/paypal",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::Paypal),
            other => Err(PaymentError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Supported settlement currencies.
///
/// Only `USD` is exempt from conversion; every other member is charged at
/// the configured conversion rate.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, strum::Display)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

/// Confirms the metadata payload carries the fields the method requires.
///
/// Pure function of `(method, metadata)`:
/// - `CreditCard` needs non-empty `cardNumber` and `expiry`.
/// - `Paypal` needs a non-empty `paypalAccount`.
///
/// The field names are the wire keys of the external payment API.
pub fn validate_metadata(method: PaymentMethod, metadata: &Value) -> Result<(), PaymentError> {
    match method {
        PaymentMethod::CreditCard => {
            if has_text(metadata, "cardNumber") && has_text(metadata, "expiry") {
                Ok(())
            } else {
                Err(PaymentError::InvalidMetadata(
                    "Invalid card metadata".to_string(),
                ))
            }
        }
        PaymentMethod::Paypal => {
            if has_text(metadata, "paypalAccount") {
                Ok(())
            } else {
                Err(PaymentError::InvalidMetadata(
                    "Invalid PayPal metadata".to_string(),
                ))
            }
        }
    }
}

fn has_text(metadata: &Value, key: &str) -> bool {
    metadata
        .get(key)
        .and_then(Value::as_str)
        .is_some_and(|field| !field.is_empty())
}

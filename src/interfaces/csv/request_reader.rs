use crate::domain::payment::{Currency, PaymentMethod};
use crate::domain::transaction::{OrchestrationRequest, PaymentRequest, RefundRequest};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use std::io::Read;

/// Which operation a CSV row describes.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Payment,
    Refund,
}

/// A raw CSV row before narrowing into a typed request.
///
/// Payment rows fill the method/metadata columns; refund rows fill
/// `transaction_id` and `reason` and leave the rest empty.
#[derive(Debug, Deserialize)]
pub struct RequestRecord {
    pub r#type: RecordKind,
    pub user: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub method: Option<String>,
    pub card_number: Option<String>,
    pub expiry: Option<String>,
    pub paypal_account: Option<String>,
    pub discount_code: Option<String>,
    pub fraud_level: Option<u8>,
    pub transaction_id: Option<String>,
    pub reason: Option<String>,
}

impl RequestRecord {
    /// Narrows the raw row into a typed request.
    ///
    /// This is where free-form method strings are rejected; rows naming a
    /// method the pipeline does not support, or none at all, never reach
    /// the orchestrator.
    pub fn into_request(self) -> Result<OrchestrationRequest> {
        match self.r#type {
            RecordKind::Payment => {
                let method: PaymentMethod = self
                    .method
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .ok_or(PaymentError::MissingMethod)?
                    .parse()?;
                let metadata = match method {
                    PaymentMethod::CreditCard => json!({
                        "cardNumber": self.card_number.unwrap_or_default(),
                        "expiry": self.expiry.unwrap_or_default(),
                    }),
                    PaymentMethod::Paypal => json!({
                        "paypalAccount": self.paypal_account.unwrap_or_default(),
                    }),
                };
                Ok(OrchestrationRequest::Payment(PaymentRequest {
                    user_id: self.user,
                    amount: self.amount,
                    currency: self.currency,
                    method,
                    metadata,
                    discount_code: self.discount_code.filter(|code| !code.is_empty()),
                    fraud_check_level: self.fraud_level.unwrap_or(0),
                }))
            }
            RecordKind::Refund => Ok(OrchestrationRequest::Refund(RefundRequest {
                transaction_id: self.transaction_id.unwrap_or_default(),
                user_id: self.user,
                reason: self.reason.unwrap_or_default(),
                amount: self.amount,
                currency: self.currency,
                metadata: json!({}),
            })),
        }
    }
}

/// Reads orchestration requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<OrchestrationRequest>`. It handles whitespace trimming and
/// flexible record lengths automatically.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and narrows requests.
    ///
    /// This allows for processing large files in a streaming fashion without
    /// loading the entire dataset into memory.
    pub fn requests(self) -> impl Iterator<Item = Result<OrchestrationRequest>> {
        self.reader
            .into_deserialize::<RequestRecord>()
            .map(|result| result.map_err(PaymentError::from)?.into_request())
    }
}

use crate::domain::payment::{Currency, PaymentMethod};
use crate::domain::transaction::{Refund, Transaction};
use crate::error::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ReportRow<'a> {
    kind: &'static str,
    user: &'a str,
    method: Option<PaymentMethod>,
    currency: Currency,
    gross: Decimal,
    net: Decimal,
    timestamp: DateTime<Utc>,
}

/// Writes a per-operation summary report as CSV.
///
/// Payments and refunds share one row shape; refund rows leave the method
/// column empty. Headers are emitted ahead of the first row.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a new `ReportWriter` targeting any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Appends a row for a completed payment.
    pub fn write_transaction(&mut self, transaction: &Transaction) -> Result<()> {
        self.writer.serialize(ReportRow {
            kind: "payment",
            user: &transaction.user_id,
            method: Some(transaction.payment_method),
            currency: transaction.currency,
            gross: transaction.original_amount,
            net: transaction.final_amount,
            timestamp: transaction.timestamp,
        })?;
        Ok(())
    }

    /// Appends a row for a completed refund.
    pub fn write_refund(&mut self, refund: &Refund) -> Result<()> {
        self.writer.serialize(ReportRow {
            kind: "refund",
            user: &refund.user_id,
            method: None,
            currency: refund.currency,
            gross: refund.amount,
            net: refund.net_amount,
            timestamp: refund.date,
        })?;
        Ok(())
    }

    /// Flushes buffered rows to the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

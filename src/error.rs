use crate::domain::ports::GatewayError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Failures surfaced by the orchestration operations and the CSV interface.
///
/// Metadata and method failures are raised before any external call, so a
/// caller can correct the input and retry without any side effect having
/// occurred. Gateway failures pass through unchanged.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Required method-specific fields are missing from the metadata payload.
    #[error("{0}")]
    InvalidMetadata(String),
    /// The payment method string does not name a supported method.
    #[error("Unsupported payment method: {0}")]
    UnsupportedMethod(String),
    /// A payment row names no method at all.
    #[error("Missing payment method")]
    MissingMethod,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_metadata_displays_bare_message() {
        let err = PaymentError::InvalidMetadata("Invalid card metadata".to_string());
        assert_eq!(err.to_string(), "Invalid card metadata");
    }

    #[test]
    fn test_gateway_error_passes_through_unwrapped() {
        let err = PaymentError::from(GatewayError::Transport("connection refused".to_string()));
        assert_eq!(err.to_string(), "gateway transport failure: connection refused");
    }
}

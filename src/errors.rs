use thiserror::Error;

pub type BillingResult<T> = Result<T, BillingError>;

/// Error type that captures form-boundary failures.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("invalid date in `{field}`: {value}")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid amount in `{field}`: {value}")]
    InvalidAmount { field: &'static str, value: String },
    #[error("invalid account reference: {0}")]
    InvalidAccount(String),
    #[error("`{field}` out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("invalid window: {0}")]
    InvalidWindow(String),
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

use thiserror::Error;
use uuid::Uuid;

/// Error type that captures ledger and input validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (amount must be a positive number)")]
    InvalidAmount(f64),
    #[error("Invalid amount: {amount} exceeds the maximum of {max}")]
    AmountTooLarge { amount: f64, max: f64 },
    #[error("Invalid category: category must not be empty")]
    EmptyCategory,
    #[error("Invalid category: `{0}` is not an allowed category")]
    CategoryNotAllowed(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Row {index} is out of range (ledger holds {len} transactions)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Failures raised while loading or storing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown configuration key `{0}`")]
    UnknownKey(String),
    #[error("Invalid value `{value}` for `{key}`: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ResolverError {
    #[error("Transaction ID mismatch: expected {expected:#06x}, received {received:#06x}")]
    TransactionMismatch { expected: u16, received: u16 },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid upstream server address: {0}")]
    InvalidServerAddress(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

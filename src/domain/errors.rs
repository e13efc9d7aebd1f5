use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Out of range: {0}")]
    OutOfRange(String),
    #[error("Unknown sale code: {0}")]
    UnknownSaleCode(String),
    #[error("Sale lookup unavailable: {0}")]
    SaleUnavailable(String),
}

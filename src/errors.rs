use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors raised while turning an untyped quote request into a price.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Invalid price '{value}' for item '{name}': {reason}")]
    InvalidPrice {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Malformed quote request: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pricing(#[from] DomainError),
}

impl QuoteError {
    /// The pricing error behind this one, if any.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            QuoteError::Pricing(e) => Some(e),
            _ => None,
        }
    }
}

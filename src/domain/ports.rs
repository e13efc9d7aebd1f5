use bigdecimal::BigDecimal;

use super::errors::DomainError;

/// Resolves a sale code to a discount rate expressed as a fraction
/// (`0.10` is 10 %). What an unknown code resolves to is up to the
/// implementation.
pub trait SaleFetcher: Send + Sync {
    fn fetch_sale(&self, code: &str) -> Result<BigDecimal, DomainError>;
}

impl<F> SaleFetcher for F
where
    F: Fn(&str) -> Result<BigDecimal, DomainError> + Send + Sync,
{
    fn fetch_sale(&self, code: &str) -> Result<BigDecimal, DomainError> {
        self(code)
    }
}

use std::collections::HashMap;

use bigdecimal::{BigDecimal, Zero};

use crate::domain::errors::DomainError;
use crate::domain::ports::SaleFetcher;

/// What a [`SaleTable`] does with a code it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCodePolicy {
    /// Fail with [`DomainError::UnknownSaleCode`].
    #[default]
    Reject,
    /// Treat the code as no sale at all.
    Zero,
}

/// In-memory sale code lookup.
///
/// Codes are matched exactly after trimming surrounding whitespace. A blank
/// code means no code was given and always resolves to zero.
#[derive(Debug, Clone, Default)]
pub struct SaleTable {
    rates: HashMap<String, BigDecimal>,
    unknown: UnknownCodePolicy,
}

impl SaleTable {
    pub fn new(unknown: UnknownCodePolicy) -> Self {
        Self {
            rates: HashMap::new(),
            unknown,
        }
    }

    pub fn with_sale(mut self, code: impl Into<String>, rate: BigDecimal) -> Self {
        self.insert(code, rate);
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, rate: BigDecimal) -> Option<BigDecimal> {
        let code = code.into();
        self.rates.insert(code.trim().to_string(), rate)
    }

    pub fn policy(&self) -> UnknownCodePolicy {
        self.unknown
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, BigDecimal)> for SaleTable {
    fn from_iter<I: IntoIterator<Item = (K, BigDecimal)>>(iter: I) -> Self {
        let mut table = SaleTable::default();
        for (code, rate) in iter {
            table.insert(code, rate);
        }
        table
    }
}

impl SaleFetcher for SaleTable {
    fn fetch_sale(&self, code: &str) -> Result<BigDecimal, DomainError> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(BigDecimal::zero());
        }

        if let Some(rate) = self.rates.get(code) {
            return Ok(rate.clone());
        }

        match self.unknown {
            UnknownCodePolicy::Reject => Err(DomainError::UnknownSaleCode(code.to_string())),
            UnknownCodePolicy::Zero => {
                log::warn!("Unknown sale code '{}', applying no sale", code);
                Ok(BigDecimal::zero())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn known_code_resolves_to_its_rate() {
        let table = SaleTable::default().with_sale("SPRING", dec("0.05"));
        assert_eq!(table.fetch_sale("SPRING").unwrap(), dec("0.05"));
        assert_eq!(table.fetch_sale("  SPRING ").unwrap(), dec("0.05"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        let table = SaleTable::default().with_sale("SPRING", dec("0.05"));
        assert!(matches!(
            table.fetch_sale("spring"),
            Err(DomainError::UnknownSaleCode(code)) if code == "spring"
        ));
    }

    #[test]
    fn blank_code_is_no_sale() {
        let table = SaleTable::new(UnknownCodePolicy::Reject);
        assert!(table.fetch_sale("").unwrap().is_zero());
        assert!(table.fetch_sale("   ").unwrap().is_zero());
    }

    #[test]
    fn unknown_code_with_zero_policy() {
        let table = SaleTable::new(UnknownCodePolicy::Zero).with_sale("VIP", dec("0.2"));
        assert!(table.fetch_sale("NOPE").unwrap().is_zero());
        assert_eq!(table.policy(), UnknownCodePolicy::Zero);
    }

    #[test]
    fn default_policy_rejects() {
        let table = SaleTable::default();
        assert!(table.is_empty());
        assert_eq!(table.policy(), UnknownCodePolicy::Reject);
    }

    #[test]
    fn collects_from_pairs() {
        let table: SaleTable = vec![("A", dec("0.1")), (" B ", dec("0.2"))]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.fetch_sale("B").unwrap(), dec("0.2"));
    }

    #[test]
    fn insert_replaces_existing_rate() {
        let mut table = SaleTable::default();
        assert!(table.insert("X", dec("0.1")).is_none());
        assert_eq!(table.insert("X", dec("0.3")), Some(dec("0.1")));
        assert_eq!(table.fetch_sale("X").unwrap(), dec("0.3"));
    }
}

use bigdecimal::{BigDecimal, Zero};

use crate::config::PricingConfig;
use crate::domain::errors::DomainError;
use crate::domain::order::OrderItem;
use crate::domain::ports::SaleFetcher;

use super::money::{round_money, validated_subtotal, with_shipping};

/// Prices an order using a sale rate looked up by code. Above the discount
/// threshold the configured bonus is added to that rate before it is applied.
pub struct SaleOrderService<F> {
    fetcher: F,
    config: PricingConfig,
}

impl<F: SaleFetcher> SaleOrderService<F> {
    pub fn new(fetcher: F, config: PricingConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn with_default_config(fetcher: F) -> Self {
        Self::new(fetcher, PricingConfig::default())
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetcher errors are returned as-is.
    pub fn calculate_final_price(
        &self,
        items: &[OrderItem],
        code: &str,
    ) -> Result<BigDecimal, DomainError> {
        let mut total = validated_subtotal(items)?;
        log::debug!("Subtotal of {} item(s): {}", items.len(), total);

        let mut sale = self.fetcher.fetch_sale(code)?;
        log::debug!("Sale code '{}' resolved to rate {}", code, sale);

        if total > self.config.discount_threshold {
            sale += &self.config.discount_bonus;
            log::debug!("Volume bonus added, sale rate now {}", sale);
        }

        // A negative rate raises the total; that is accepted.
        if !sale.is_zero() {
            let discount = &total * &sale;
            total -= discount;
            log::debug!("Sale rate {} applied, total now {}", sale, total);
        }

        let total = with_shipping(
            total,
            &self.config.free_shipping_threshold,
            &self.config.shipping_cost,
        );

        let total = round_money(&total);
        log::debug!("Final price: {}", total);
        Ok(total)
    }
}

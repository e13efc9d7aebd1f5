use bigdecimal::BigDecimal;

use crate::config::PricingConfig;
use crate::domain::errors::DomainError;
use crate::domain::order::OrderItem;

use super::money::{round_money, validated_subtotal, with_shipping};

/// Prices an order with a flat volume discount: totals above the discount
/// threshold are multiplied by the configured rate multiplier.
#[derive(Debug, Clone, Default)]
pub struct OrderService {
    config: PricingConfig,
}

impl OrderService {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn calculate_final_price(&self, items: &[OrderItem]) -> Result<BigDecimal, DomainError> {
        let mut total = validated_subtotal(items)?;
        log::debug!("Subtotal of {} item(s): {}", items.len(), total);

        if total > self.config.discount_threshold {
            total *= &self.config.discount_rate_multiplier;
            log::debug!("Volume discount applied, total now {}", total);
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

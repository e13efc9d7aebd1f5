use std::env;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use thiserror::Error;

pub const DISCOUNT_THRESHOLD: i32 = 2000;
pub const FREE_SHIPPING_THRESHOLD: i32 = 500;
pub const SHIPPING_COST: i32 = 99;
/// `OrderService` multiplies the total by this many hundredths, i.e. a 10 %
/// reduction.
pub const DISCOUNT_RATE_MULTIPLIER_HUNDREDTHS: i64 = 90;
/// `SaleOrderService` adds this many hundredths to the sale rate once the
/// discount threshold is passed.
pub const DISCOUNT_BONUS_HUNDREDTHS: i64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Thresholds and rates used by both order services.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Totals strictly above this get the volume discount.
    pub discount_threshold: BigDecimal,
    /// Totals strictly below this pay shipping.
    pub free_shipping_threshold: BigDecimal,
    pub shipping_cost: BigDecimal,
    pub discount_rate_multiplier: BigDecimal,
    pub discount_bonus: BigDecimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discount_threshold: BigDecimal::from(DISCOUNT_THRESHOLD),
            free_shipping_threshold: BigDecimal::from(FREE_SHIPPING_THRESHOLD),
            shipping_cost: BigDecimal::from(SHIPPING_COST),
            discount_rate_multiplier: hundredths(DISCOUNT_RATE_MULTIPLIER_HUNDREDTHS),
            discount_bonus: hundredths(DISCOUNT_BONUS_HUNDREDTHS),
        }
    }
}

impl PricingConfig {
    /// Defaults, overridden by `PRICING_*` variables from the environment or a
    /// `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let fields: [(&'static str, &mut BigDecimal); 5] = [
            ("PRICING_DISCOUNT_THRESHOLD", &mut config.discount_threshold),
            (
                "PRICING_FREE_SHIPPING_THRESHOLD",
                &mut config.free_shipping_threshold,
            ),
            ("PRICING_SHIPPING_COST", &mut config.shipping_cost),
            (
                "PRICING_DISCOUNT_RATE_MULTIPLIER",
                &mut config.discount_rate_multiplier,
            ),
            ("PRICING_DISCOUNT_BONUS", &mut config.discount_bonus),
        ];

        for (key, slot) in fields {
            let Some(raw) = lookup(key) else {
                continue;
            };
            *slot = BigDecimal::from_str(raw.trim()).map_err(|e| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            log::debug!("Pricing config override {}={}", key, slot);
        }

        Ok(config)
    }
}

fn hundredths(value: i64) -> BigDecimal {
    BigDecimal::new(value.into(), 2)
}

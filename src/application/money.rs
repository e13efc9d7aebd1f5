//! Pricing steps shared by both order services.

use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::domain::errors::DomainError;
use crate::domain::order::OrderItem;

/// Fractional digits of every returned total.
pub const MONEY_SCALE: i64 = 2;

/// Validates `items` in order and returns `Σ price × quantity`.
///
/// Stops at the first offending item. Per item the price is checked before
/// the quantity.
pub fn validated_subtotal(items: &[OrderItem]) -> Result<BigDecimal, DomainError> {
    if items.is_empty() {
        return Err(DomainError::InvalidArgument(
            "An order must contain at least one item".to_string(),
        ));
    }

    let mut total = BigDecimal::zero();
    for (index, item) in items.iter().enumerate() {
        if item.price < BigDecimal::zero() {
            return Err(DomainError::OutOfRange(format!(
                "Item {} ('{}') has a negative price: {}",
                index, item.name, item.price
            )));
        }
        if item.quantity <= 0 {
            return Err(DomainError::OutOfRange(format!(
                "Item {} ('{}') must have a quantity greater than zero, got {}",
                index, item.name, item.quantity
            )));
        }
        log::trace!(
            "Item {} '{}': {} x {}",
            index,
            item.name,
            item.price,
            item.quantity
        );
        total += item.line_total();
    }

    Ok(total)
}

/// Adds `shipping_cost` when `total` is strictly below `free_shipping_threshold`.
pub fn with_shipping(
    total: BigDecimal,
    free_shipping_threshold: &BigDecimal,
    shipping_cost: &BigDecimal,
) -> BigDecimal {
    if &total < free_shipping_threshold {
        log::debug!(
            "Total {} below free shipping threshold {}, adding {}",
            total,
            free_shipping_threshold,
            shipping_cost
        );
        total + shipping_cost
    } else {
        total
    }
}

/// Rounds to two decimals, half to even.
pub fn round_money(total: &BigDecimal) -> BigDecimal {
    total.with_scale_round(MONEY_SCALE, RoundingMode::HalfEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn empty_items_are_an_invalid_argument() {
        assert!(matches!(
            validated_subtotal(&[]),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn first_offending_item_is_reported() {
        let items = vec![
            OrderItem::new("ok", dec("10"), 1),
            OrderItem::new("zero qty", dec("5"), 0),
            OrderItem::new("negative", dec("-1"), 1),
        ];
        match validated_subtotal(&items) {
            Err(DomainError::OutOfRange(msg)) => assert!(msg.contains("zero qty")),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn price_is_checked_before_quantity() {
        let items = vec![OrderItem::new("both bad", dec("-1"), -3)];
        match validated_subtotal(&items) {
            Err(DomainError::OutOfRange(msg)) => assert!(msg.contains("negative price")),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn subtotal_sums_exactly() {
        let items = vec![
            OrderItem::new("a", dec("0.1"), 3),
            OrderItem::new("b", dec("0.2"), 1),
        ];
        assert_eq!(validated_subtotal(&items).unwrap(), dec("0.5"));
    }

    #[test]
    fn zero_price_is_allowed() {
        let items = vec![OrderItem::new("gift", dec("0"), 1)];
        assert_eq!(validated_subtotal(&items).unwrap(), dec("0"));
    }

    #[test]
    fn shipping_threshold_is_exclusive() {
        let threshold = dec("500");
        let cost = dec("99");
        assert_eq!(with_shipping(dec("500"), &threshold, &cost), dec("500"));
        assert_eq!(with_shipping(dec("499.99"), &threshold, &cost), dec("598.99"));
    }

    #[test]
    fn rounding_is_half_even() {
        assert_eq!(round_money(&dec("2.345")), dec("2.34"));
        assert_eq!(round_money(&dec("2.355")), dec("2.36"));
        assert_eq!(round_money(&dec("2.3451")), dec("2.35"));
    }

    #[test]
    fn rounding_always_yields_two_fraction_digits() {
        let (_, scale) = round_money(&dec("600")).as_bigint_and_exponent();
        assert_eq!(scale, 2);
        assert_eq!(round_money(&dec("600")).to_string(), "600.00");
    }
}

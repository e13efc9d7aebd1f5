use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// One line of an order. Validation happens when the order is priced, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, price: BigDecimal, quantity: i32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// `price * quantity`, exact.
    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

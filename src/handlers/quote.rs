use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::application::order_service::OrderService;
use crate::application::sale_order_service::SaleOrderService;
use crate::domain::errors::DomainError;
use crate::domain::order::OrderItem;
use crate::domain::ports::SaleFetcher;
use crate::errors::QuoteError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItemRequest {
    #[serde(default)]
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// `None` when the caller sent no item list at all.
    #[serde(default)]
    pub items: Option<Vec<QuoteItemRequest>>,
    #[serde(default)]
    pub sale_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Final price with exactly two decimals, e.g. "2250.00"
    pub total: String,
}

impl From<BigDecimal> for QuoteResponse {
    fn from(total: BigDecimal) -> Self {
        Self {
            total: total.to_string(),
        }
    }
}

// ── Conversion ───────────────────────────────────────────────────────────────

fn order_items(items: Option<Vec<QuoteItemRequest>>) -> Result<Vec<OrderItem>, QuoteError> {
    let items = items.ok_or_else(|| {
        DomainError::InvalidArgument("An order must contain at least one item".to_string())
    })?;

    items
        .into_iter()
        .map(|i| -> Result<OrderItem, QuoteError> {
            let price = BigDecimal::from_str(i.price.trim()).map_err(|e| {
                QuoteError::InvalidPrice {
                    name: i.name.clone(),
                    value: i.price.clone(),
                    reason: e.to_string(),
                }
            })?;
            Ok(OrderItem::new(i.name, price, i.quantity))
        })
        .collect()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// Prices a request with the flat volume discount. Any `sale_code` is ignored.
pub fn quote(service: &OrderService, request: QuoteRequest) -> Result<QuoteResponse, QuoteError> {
    let items = order_items(request.items)?;
    let total = service.calculate_final_price(&items)?;
    Ok(total.into())
}

/// Prices a request through the sale code lookup. A missing `sale_code` is
/// passed on as an empty code.
pub fn quote_with_sale<F: SaleFetcher>(
    service: &SaleOrderService<F>,
    request: QuoteRequest,
) -> Result<QuoteResponse, QuoteError> {
    let items = order_items(request.items)?;
    let code = request.sale_code.unwrap_or_default();
    let total = service.calculate_final_price(&items, &code)?;
    Ok(total.into())
}

/// Parses a JSON [`QuoteRequest`] and prices it with [`quote`].
pub fn quote_json(service: &OrderService, body: &str) -> Result<QuoteResponse, QuoteError> {
    let request: QuoteRequest = serde_json::from_str(body)?;
    quote(service, request)
}

/// Parses a JSON [`QuoteRequest`] and prices it with [`quote_with_sale`].
pub fn quote_with_sale_json<F: SaleFetcher>(
    service: &SaleOrderService<F>,
    body: &str,
) -> Result<QuoteResponse, QuoteError> {
    let request: QuoteRequest = serde_json::from_str(body)?;
    quote_with_sale(service, request)
}

//! Order pricing: volume discount, sale codes and shipping surcharge over
//! exact decimal line items.

pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

pub use application::order_service::OrderService;
pub use application::sale_order_service::SaleOrderService;
pub use config::PricingConfig;
pub use domain::errors::DomainError;
pub use domain::order::OrderItem;
pub use domain::ports::SaleFetcher;
pub use infrastructure::sale_table::{SaleTable, UnknownCodePolicy};

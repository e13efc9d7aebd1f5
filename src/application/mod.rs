pub mod money;
pub mod order_service;
pub mod sale_order_service;

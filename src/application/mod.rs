pub mod order_service;

pub use order_service::{orders_total, OrderService};

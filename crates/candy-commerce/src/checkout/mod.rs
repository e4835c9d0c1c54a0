//! Checkout module.
//!
//! One-item order requests as submitted from the product list.

mod order;

pub use order::{
    parse_quantity, Customer, OrderItem, OrderRequest, OrderResponse, OrderResult, OrderSummary,
    DEFAULT_CUSTOMER_NAME,
};

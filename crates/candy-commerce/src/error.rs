//! Commerce error types.

use thiserror::Error;

/// Errors raised while building or validating commerce values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Order has no line items.
    #[error("Order has no items")]
    EmptyOrder,

    /// Line item quantity is not positive.
    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: i64, quantity: u32 },

    /// Order has no customer name.
    #[error("Order is missing a customer name")]
    MissingCustomer,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

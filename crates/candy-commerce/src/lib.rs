//! Catalog, filtering and order types for the candy shop admin.
//!
//! - **Catalog**: products, prices, stock levels
//! - **Search**: category tabs, free-text query, the filter engine
//! - **Checkout**: one-item order requests and their results
//!
//! # Example
//!
//! ```rust,ignore
//! use candy_commerce::prelude::*;
//!
//! let state = FilterState::new(CategoryFilter::LowStock, "choco");
//! let visible = state.apply(&products);
//!
//! let order = OrderRequest::single(visible[0].id, parse_quantity("0"), "Store Admin");
//! assert_eq!(order.items[0].quantity, 1);
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{Price, Product, StockLevel, LOW_STOCK_THRESHOLD};

    // Checkout
    pub use crate::checkout::{
        parse_quantity, Customer, OrderItem, OrderRequest, OrderResult, DEFAULT_CUSTOMER_NAME,
    };

    // Search
    pub use crate::search::{filter_products, CategoryFilter, FilterState};
}

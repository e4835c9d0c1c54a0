//! Search module.
//!
//! Category tabs, the free-text query and the filter engine that combines them.

mod filter;
mod query;

pub use filter::{filter_products, CategoryFilter};
pub use query::FilterState;

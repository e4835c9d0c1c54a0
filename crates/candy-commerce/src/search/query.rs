//! Filter state: the active tab plus the search box text.

use crate::catalog::Product;
use crate::search::{filter_products, CategoryFilter};
use serde::{Deserialize, Serialize};

/// What the user currently has selected.
///
/// Survives reloads; only user input changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Active category tab.
    pub category: CategoryFilter,
    /// Raw search box text, untrimmed.
    pub query: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Run the filter engine over `products`.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        filter_products(products, &self.category, &self.query)
    }
}

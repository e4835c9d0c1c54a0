//! Category filter and the product filter engine.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The active category tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category filtering.
    #[default]
    All,
    /// Products at or below the low-stock threshold.
    LowStock,
    /// Products whose category equals this name, ignoring case.
    Category(String),
}

impl CategoryFilter {
    /// Tab key, as used on the command line and in `data-filter` attributes.
    pub fn key(&self) -> String {
        match self {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::LowStock => "lowstock".to_string(),
            CategoryFilter::Category(name) => name.to_lowercase(),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::LowStock => "Low stock".to_string(),
            CategoryFilter::Category(name) => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }

    /// Whether `product` passes this tab.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::LowStock => product.is_low_stock(),
            CategoryFilter::Category(name) => product.in_category(name),
        }
    }

    /// Tabs shown by default: all, low stock, then the shop's categories.
    pub fn default_tabs() -> Vec<CategoryFilter> {
        vec![
            CategoryFilter::All,
            CategoryFilter::LowStock,
            CategoryFilter::Category("doce".to_string()),
            CategoryFilter::Category("torta".to_string()),
        ]
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Ok(match key.as_str() {
            "" | "all" => CategoryFilter::All,
            "lowstock" | "low-stock" | "low_stock" => CategoryFilter::LowStock,
            _ => CategoryFilter::Category(key),
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Filter `products` by category tab and free-text query.
///
/// The query is trimmed and lower-cased; an empty query matches everything.
/// Both predicates must hold. Input order is preserved.
pub fn filter_products(products: &[Product], category: &CategoryFilter, query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();

    products
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| needle.is_empty() || p.matches_text(&needle))
        .cloned()
        .collect()
}

//! Product and price types.

use crate::catalog::StockLevel;
use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A product price as the backend sends it.
///
/// The backend may send a number or a numeric string. Display coerces
/// strings to numbers and keeps the raw text when coercion fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount(0.0)
    }
}

impl Price {
    /// Numeric value, if the price is or parses as a finite number.
    ///
    /// Blank text counts as zero.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Price::Amount(v) if v.is_finite() => Some(*v),
            Price::Amount(_) => None,
            Price::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0.0);
                }
                s.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
    }

    /// Price with exactly two decimals, or the raw value when not numeric.
    pub fn display(&self) -> String {
        match (self.as_f64(), self) {
            (Some(v), _) => format!("{:.2}", v),
            (None, Price::Text(raw)) => raw.clone(),
            (None, Price::Amount(v)) => v.to_string(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<f64> for Price {
    fn from(v: f64) -> Self {
        Price::Amount(v)
    }
}

/// A product in the catalog.
///
/// Missing or `null` text fields decode as empty strings and a missing
/// stock as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Backend product identifier.
    pub id: ProductId,
    /// Product name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Category name (e.g. "Doce", "Torta").
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Flavor description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub flavor: String,
    /// Unit price.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Price,
    /// Units in stock.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
}

impl Product {
    /// Create a product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        flavor: impl Into<String>,
        price: impl Into<Price>,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            flavor: flavor.into(),
            price: price.into(),
            stock,
        }
    }

    /// Stock classification at the fixed low-stock threshold.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.stock)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_level().is_low()
    }

    /// Case-insensitive category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Whether name or flavor contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.flavor.to_lowercase().contains(needle)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Stock level classification.

use serde::{Deserialize, Serialize};

/// Products with stock at or below this quantity count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Stock classification used for display and the low-stock tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// At or below the threshold.
    Low,
    /// Above the threshold.
    Ok,
}

impl StockLevel {
    /// Classify a stock quantity against [`LOW_STOCK_THRESHOLD`].
    pub fn classify(stock: i64) -> Self {
        Self::classify_with(stock, LOW_STOCK_THRESHOLD)
    }

    /// Classify a stock quantity against an explicit threshold.
    pub fn classify_with(stock: i64, threshold: i64) -> Self {
        if stock <= threshold {
            StockLevel::Low
        } else {
            StockLevel::Ok
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, StockLevel::Low)
    }

    /// CSS class used by the HTML renderer.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::Low => "stock-low",
            StockLevel::Ok => "stock-ok",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Low => "low",
            StockLevel::Ok => "ok",
        }
    }
}

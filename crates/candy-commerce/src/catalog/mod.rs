//! Product catalog module.
//!
//! Contains the product record as served by the backend and stock levels.

mod inventory;
mod product;

pub use inventory::{StockLevel, LOW_STOCK_THRESHOLD};
pub use product::{Price, Product};

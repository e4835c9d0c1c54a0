//! Events the controller reacts to and commands it asks the runtime to run.

use candy_commerce::catalog::Product;
use candy_commerce::checkout::{OrderRequest, OrderResult};
use candy_commerce::search::CategoryFilter;
use candy_commerce::ProductId;

use super::state::LoadTicket;
use crate::error::ApiError;

/// User input and network completions.
#[derive(Debug)]
pub enum ViewEvent {
    /// First display of the view.
    Activate,
    SelectTab(CategoryFilter),
    /// New search box text, sent on every keystroke.
    SearchInput(String),
    Refresh,
    /// Order button pressed; `raw_quantity` is the text of that card's input.
    SubmitOrder {
        product_id: ProductId,
        raw_quantity: String,
    },
    ProductsLoaded {
        ticket: LoadTicket,
        result: Result<Vec<Product>, ApiError>,
    },
    LowStockLoaded {
        ticket: LoadTicket,
        result: Result<u64, ApiError>,
    },
    OrderFinished {
        product_id: ProductId,
        quantity: u32,
        result: Result<OrderResult, ApiError>,
    },
}

/// Network work requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchProducts { ticket: LoadTicket },
    FetchLowStock { ticket: LoadTicket, threshold: i64 },
    CreateOrder(OrderRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::FetchProducts { .. } => "fetch_products",
            Command::FetchLowStock { .. } => "fetch_low_stock",
            Command::CreateOrder(_) => "create_order",
        }
    }
}

//! Terminal rendering surface.

use candy_admin::sections::{
    ProductCard, ProductListView, RenderOptions, StatsView, LOADING_MESSAGE,
};
use candy_admin::{Notice, RenderSurface};
use candy_commerce::search::FilterState;
use serde_json::{json, Value};

use crate::output::{stock_badge, Output};

const COLUMN_WIDTHS: [usize; 5] = [5, 24, 28, 12, 6];

#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Error(String),
    Products(ProductListView),
}

/// Collects controller output and prints it as a table.
///
/// Nothing is printed until [`print`](Self::print) or
/// [`print_notice`](Self::print_notice) is called.
pub struct TerminalSurface {
    output: Output,
    options: RenderOptions,
    stats: StatsView,
    filter: FilterState,
    list: ListState,
    notices: Vec<Notice>,
}

impl TerminalSurface {
    pub fn new(output: Output, options: RenderOptions) -> Self {
        Self {
            output,
            options,
            stats: StatsView::default(),
            filter: FilterState::default(),
            list: ListState::Loading,
            notices: Vec::new(),
        }
    }

    /// Notices received since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Print a notice as a success or error line.
    pub fn print_notice(&self, notice: &Notice) {
        match notice {
            Notice::OrderPlaced { .. } => self.output.success(&notice.message()),
            Notice::OrderFailed { message, .. } => {
                self.output.error(&format!("Order failed: {}", message))
            }
        }
    }

    /// Current cards, if products are showing.
    pub fn cards(&self) -> &[ProductCard] {
        match &self.list {
            ListState::Products(view) => view.cards(),
            _ => &[],
        }
    }

    /// Everything on screen as JSON.
    pub fn to_json(&self) -> Value {
        let products: Vec<Value> = self
            .cards()
            .iter()
            .map(|card| {
                json!({
                    "id": card.id,
                    "name": card.name,
                    "subtitle": card.subtitle,
                    "price": card.price,
                    "stock": card.stock,
                    "stock_level": card.stock_level.as_str(),
                })
            })
            .collect();

        let error = match &self.list {
            ListState::Error(message) => Some(message.as_str()),
            _ => None,
        };

        json!({
            "tab": self.filter.category.key(),
            "query": self.filter.query,
            "total": self.stats.total,
            "low_stock": self.stats.low_stock,
            "last_updated": self.stats.last_updated,
            "error": error,
            "products": products,
        })
    }

    /// Print the stats line, the active filter and the product table.
    pub fn print(&self) {
        if self.output.is_json() {
            self.output.json(&self.to_json());
            return;
        }

        self.output.header("Candy Shop Admin");
        self.output.kv("Products", &self.stats.total_display());
        self.output.kv("Low stock", &self.stats.low_stock_display());
        self.output.kv("Last updated", &self.stats.last_updated_display());
        let query = self.filter.query.trim();
        if query.is_empty() {
            self.output.kv("Tab", &self.filter.category.display_name());
        } else {
            self.output.kv(
                "Tab",
                &format!("{} (search: \"{}\")", self.filter.category.display_name(), query),
            );
        }
        println!();

        match &self.list {
            ListState::Loading => self.output.info(LOADING_MESSAGE),
            ListState::Error(message) => {
                self.output.error(message);
                self.output.info("Run `refresh` to try again");
            }
            ListState::Products(ProductListView::Empty) => {
                self.output.info("No products found. Try adjusting the search filters.");
            }
            ListState::Products(ProductListView::Cards(cards)) => {
                self.output
                    .table_row(&["ID", "Name", "Category • Flavor", "Price", "Stock"], &COLUMN_WIDTHS);
                for card in cards {
                    let id = card.id.to_string();
                    let price = format!("{} {}", self.options.currency_symbol, card.price);
                    let stock = stock_badge(card.stock_level, card.stock);
                    self.output.table_row(
                        &[
                            id.as_str(),
                            card.name.as_str(),
                            card.subtitle.as_str(),
                            price.as_str(),
                            stock.as_str(),
                        ],
                        &COLUMN_WIDTHS,
                    );
                }
            }
        }
    }
}

impl RenderSurface for TerminalSurface {
    fn show_loading(&mut self) {
        self.list = ListState::Loading;
        self.output.debug(LOADING_MESSAGE);
    }

    fn show_error(&mut self, message: &str) {
        self.list = ListState::Error(message.to_string());
    }

    fn show_products(&mut self, view: &ProductListView) {
        self.list = ListState::Products(view.clone());
    }

    fn set_total_count(&mut self, total: usize) {
        self.stats.total = Some(total);
    }

    fn set_low_stock(&mut self, count: Option<u64>) {
        self.stats.low_stock = count;
    }

    fn set_last_updated(&mut self, stamp: &str) {
        self.stats.last_updated = Some(stamp.to_string());
    }

    fn set_filter(&mut self, filter: &FilterState) {
        self.filter = filter.clone();
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

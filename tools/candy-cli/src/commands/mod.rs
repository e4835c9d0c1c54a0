//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod low_stock;
pub mod order;
pub mod products;
pub mod render;

use candy_admin::ViewEvent;
use candy_commerce::search::CategoryFilter;
use clap::{Args, Subcommand};

/// Tab and search options shared by listing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Tab to show: all, lowstock, or a category name.
    #[arg(short, long, default_value = "all")]
    pub tab: String,

    /// Search text matched against name and flavor.
    #[arg(short, long, default_value = "")]
    pub query: String,
}

impl FilterArgs {
    /// Events that put the controller on this tab and query.
    pub fn events(&self) -> Vec<ViewEvent> {
        let category: CategoryFilter = self.tab.parse().unwrap_or_default();
        vec![
            ViewEvent::SelectTab(category),
            ViewEvent::SearchInput(self.query.clone()),
        ]
    }
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the low-stock command.
#[derive(Args)]
pub struct LowStockArgs {
    /// Threshold to ask the backend for (default: api.low_stock_threshold).
    #[arg(long)]
    pub threshold: Option<i64>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Product ID.
    pub product_id: i64,

    /// Quantity as typed; anything below 1 or non-numeric orders 1.
    #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
    pub quantity: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file (default: render.output).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Tab to start on.
    #[arg(short, long, default_value = "all")]
    pub tab: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

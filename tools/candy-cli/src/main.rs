//! Candy CLI - Command line admin for the candy shop storefront.
//!
//! Commands:
//! - `candy products` - List products, optionally filtered
//! - `candy low-stock` - Show the low-stock count
//! - `candy order` - Place a single-item order
//! - `candy render` - Write the admin page as HTML
//! - `candy browse` - Interactive admin session
//! - `candy config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs, LowStockArgs, OrderArgs, ProductsArgs, RenderArgs};

/// Candy CLI - Manage the candy shop storefront
#[derive(Parser)]
#[command(name = "candy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in the catalog
    Products(ProductsArgs),

    /// Show how many products are low on stock
    LowStock(LowStockArgs),

    /// Place an order for one product
    Order(OrderArgs),

    /// Render the admin page to an HTML file
    Render(RenderArgs),

    /// Browse the storefront interactively
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Log to stderr so command output stays clean.
fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.base_url.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::LowStock(args) => commands::low_stock::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

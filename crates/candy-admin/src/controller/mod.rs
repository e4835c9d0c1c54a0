//! View controller: owns the admin view state and turns events into
//! surface updates and network commands.
//!
//! [`ViewController::handle`] is synchronous. Network work comes back out as
//! [`Command`]s, and the [`runtime`] module executes them and feeds the
//! completions back in as [`ViewEvent`]s.

pub mod events;
pub mod runtime;
pub mod state;

pub use events::{Command, ViewEvent};
pub use state::{LoadState, LoadTicket, ViewState};

use candy_commerce::catalog::{Product, LOW_STOCK_THRESHOLD};
use candy_commerce::checkout::{parse_quantity, OrderRequest, OrderResult, DEFAULT_CUSTOMER_NAME};
use candy_commerce::ProductId;
use tracing::{debug, info, warn};

use crate::clock::{format_last_updated, Clock};
use crate::error::ApiError;
use crate::sections::{build_product_list, LOAD_FAILED_MESSAGE};
use crate::surface::{Notice, RenderSurface};

/// Settings the controller needs from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Threshold sent with the low-stock count request.
    pub low_stock_threshold: i64,
    /// Customer name attached to every order.
    pub customer_name: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
        }
    }
}

/// The admin view controller.
pub struct ViewController<S, C> {
    surface: S,
    clock: C,
    config: ControllerConfig,
    state: ViewState,
}

impl<S: RenderSurface, C: Clock> ViewController<S, C> {
    pub fn new(surface: S, clock: C) -> Self {
        Self::with_config(surface, clock, ControllerConfig::default())
    }

    pub fn with_config(surface: S, clock: C, config: ControllerConfig) -> Self {
        Self {
            surface,
            clock,
            config,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Apply one event and return the commands it requires.
    pub fn handle(&mut self, event: ViewEvent) -> Vec<Command> {
        match event {
            ViewEvent::Activate | ViewEvent::Refresh => self.start_load(),
            ViewEvent::SelectTab(category) => {
                debug!(tab = %category, "tab selected");
                self.state.filter.category = category;
                self.filter_changed();
                Vec::new()
            }
            ViewEvent::SearchInput(query) => {
                self.state.filter.query = query;
                self.filter_changed();
                Vec::new()
            }
            ViewEvent::SubmitOrder {
                product_id,
                raw_quantity,
            } => self.submit_order(product_id, &raw_quantity),
            ViewEvent::ProductsLoaded { ticket, result } => self.products_loaded(ticket, result),
            ViewEvent::LowStockLoaded { ticket, result } => {
                self.low_stock_loaded(ticket, result);
                Vec::new()
            }
            ViewEvent::OrderFinished {
                product_id,
                quantity,
                result,
            } => self.order_finished(product_id, quantity, result),
        }
    }

    fn start_load(&mut self) -> Vec<Command> {
        let ticket = self.state.begin_load();
        debug!(%ticket, "loading products");
        self.surface.set_filter(&self.state.filter);
        self.surface.show_loading();
        vec![Command::FetchProducts { ticket }]
    }

    fn filter_changed(&mut self) {
        self.surface.set_filter(&self.state.filter);
        if self.state.load.can_render() {
            self.render_products();
        }
    }

    fn render_products(&mut self) {
        let view = build_product_list(&self.state.visible());
        self.surface.show_products(&view);
    }

    fn products_loaded(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, ApiError>,
    ) -> Vec<Command> {
        if !self.state.is_current(ticket) {
            debug!(%ticket, latest = %self.state.ticket, "dropping stale product list");
            return Vec::new();
        }

        match result {
            Ok(products) => {
                info!(%ticket, count = products.len(), "products loaded");
                self.state.products = products;
                self.surface.set_total_count(self.state.products.len());
                self.surface
                    .set_last_updated(&format_last_updated(self.clock.now()));
                vec![Command::FetchLowStock {
                    ticket,
                    threshold: self.config.low_stock_threshold,
                }]
            }
            Err(error) => {
                warn!(%ticket, %error, "failed to load products");
                self.state.load = LoadState::LoadFailed;
                self.surface.show_error(LOAD_FAILED_MESSAGE);
                Vec::new()
            }
        }
    }

    fn low_stock_loaded(&mut self, ticket: LoadTicket, result: Result<u64, ApiError>) {
        if !self.state.is_current(ticket) {
            debug!(%ticket, latest = %self.state.ticket, "dropping stale low-stock count");
            return;
        }

        match result {
            Ok(count) => self.surface.set_low_stock(Some(count)),
            Err(error) => {
                warn!(%ticket, %error, "low-stock count unavailable");
                self.surface.set_low_stock(None);
            }
        }

        self.state.load = LoadState::Loaded;
        self.render_products();
    }

    fn submit_order(&mut self, product_id: ProductId, raw_quantity: &str) -> Vec<Command> {
        let quantity = parse_quantity(raw_quantity);
        debug!(%product_id, quantity, "submitting order");
        vec![Command::CreateOrder(OrderRequest::single(
            product_id,
            quantity,
            self.config.customer_name.clone(),
        ))]
    }

    fn order_finished(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        result: Result<OrderResult, ApiError>,
    ) -> Vec<Command> {
        match result {
            Ok(order) => {
                info!(%product_id, quantity, total = ?order.total, "order placed");
                self.surface.notify(&Notice::OrderPlaced {
                    product_id,
                    quantity,
                    total: order.total,
                });
                self.start_load()
            }
            Err(error) => {
                warn!(%product_id, %error, "order failed");
                self.surface.notify(&Notice::OrderFailed {
                    product_id,
                    message: error.user_message(),
                });
                Vec::new()
            }
        }
    }
}

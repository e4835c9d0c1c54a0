//! Rendering surfaces the view controller draws on.

use candy_commerce::catalog::Price;
use candy_commerce::search::{CategoryFilter, FilterState};
use candy_commerce::ProductId;

use crate::escape::html_escape;
use crate::page::Shell;
use crate::sections::{
    render_load_error, render_loading, render_product_list, render_stats, render_tabs,
    ProductListView, RenderOptions, StatsView,
};

/// Transient message about an order submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    OrderPlaced {
        product_id: ProductId,
        quantity: u32,
        total: Option<Price>,
    },
    OrderFailed {
        product_id: ProductId,
        message: String,
    },
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::OrderFailed { .. })
    }

    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Notice::OrderPlaced { total, .. } => {
                let total = total
                    .as_ref()
                    .map(Price::display)
                    .unwrap_or_else(|| crate::sections::PLACEHOLDER.to_string());
                format!("Order created successfully! Total: {}", total)
            }
            Notice::OrderFailed { message, .. } => format!("Failed to create order: {}", message),
        }
    }
}

/// Where the controller puts what it renders.
///
/// One method per display element of the admin page.
pub trait RenderSurface {
    /// Replace the product list with the loading placeholder.
    fn show_loading(&mut self);

    /// Replace the product list with a page-level error and retry affordance.
    fn show_error(&mut self, message: &str);

    /// Replace the product list with `view`.
    fn show_products(&mut self, view: &ProductListView);

    fn set_total_count(&mut self, total: usize);

    /// `None` shows the placeholder.
    fn set_low_stock(&mut self, count: Option<u64>);

    fn set_last_updated(&mut self, stamp: &str);

    /// Reflect the active tab and search text.
    fn set_filter(&mut self, filter: &FilterState);

    /// Show a transient notice.
    fn notify(&mut self, notice: &Notice);
}

#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Error(String),
    Products(ProductListView),
}

/// Surface that renders the admin page as HTML.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    options: RenderOptions,
    tabs: Vec<CategoryFilter>,
    stats: StatsView,
    filter: FilterState,
    list: ListState,
    notice: Option<Notice>,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl HtmlSurface {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            tabs: CategoryFilter::default_tabs(),
            stats: StatsView::default(),
            filter: FilterState::default(),
            list: ListState::Loading,
            notice: None,
        }
    }

    pub fn stats(&self) -> &StatsView {
        &self.stats
    }

    /// Most recent notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Markup of the product list section.
    pub fn products_html(&self) -> String {
        match &self.list {
            ListState::Loading => render_loading(),
            ListState::Error(message) => render_load_error(message),
            ListState::Products(view) => render_product_list(view, &self.options),
        }
    }

    /// Render the complete document.
    pub fn render_page(&self) -> String {
        let mut sections = Vec::new();
        if let Some(notice) = &self.notice {
            let class = if notice.is_failure() { "failure" } else { "success" };
            sections.push(format!(
                r#"<div class="notice {}">{}</div>"#,
                class,
                html_escape(&notice.message())
            ));
        }
        sections.push(render_stats(&self.stats));
        sections.push(render_tabs(&self.tabs, &self.filter));
        sections.push(self.products_html());
        Shell::admin().render(&sections)
    }
}

impl RenderSurface for HtmlSurface {
    fn show_loading(&mut self) {
        self.list = ListState::Loading;
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
        self.notice = Some(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::build_product_list;
    use candy_commerce::catalog::Product;

    #[test]
    fn test_notice_messages() {
        let ok = Notice::OrderPlaced {
            product_id: ProductId(1),
            quantity: 2,
            total: Some(Price::Amount(11.0)),
        };
        assert_eq!(ok.message(), "Order created successfully! Total: 11.00");
        assert!(!ok.is_failure());

        let text_total = Notice::OrderPlaced {
            product_id: ProductId(1),
            quantity: 1,
            total: Some(Price::Text("7".into())),
        };
        assert_eq!(text_total.message(), "Order created successfully! Total: 7.00");

        let failed = Notice::OrderFailed {
            product_id: ProductId(1),
            message: "Out of stock".into(),
        };
        assert_eq!(failed.message(), "Failed to create order: Out of stock");
        assert!(failed.is_failure());
    }

    #[test]
    fn test_html_surface_page_reflects_state() {
        let mut surface = HtmlSurface::default();
        surface.set_total_count(1);
        surface.set_low_stock(None);
        surface.set_last_updated("01/02/2025 10:00");
        surface.set_filter(&FilterState::new(CategoryFilter::LowStock, ""));
        surface.show_products(&build_product_list(&[Product::new(
            1,
            "Brigadeiro",
            "Doce",
            "Chocolate",
            5.5,
            3,
        )]));

        let html = surface.render_page();
        assert!(html.contains("Brigadeiro"));
        assert!(html.contains("01/02/2025 10:00"));
        assert!(html.contains(r#"data-filter="lowstock">"#));
        assert_eq!(surface.stats().low_stock_display(), "—");
    }

    #[test]
    fn test_html_surface_error_and_notice() {
        let mut surface = HtmlSurface::default();
        surface.show_error("backend down");
        surface.notify(&Notice::OrderFailed {
            product_id: ProductId(3),
            message: "<bad>".into(),
        });
        let html = surface.render_page();
        assert!(html.contains("backend down"));
        assert!(html.contains(r#"class="notice failure""#));
        assert!(html.contains("&lt;bad&gt;"));
        assert!(surface.notice().is_some());
    }

    #[test]
    fn test_html_surface_starts_loading() {
        let surface = HtmlSurface::default();
        assert!(surface.products_html().contains("loading"));
    }
}

//! Stats header and tab bar.

use candy_commerce::search::{CategoryFilter, FilterState};

use crate::escape::html_escape;

/// Shown in place of a value that is unknown or failed to load.
pub const PLACEHOLDER: &str = "—";

/// Values shown in the stats header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsView {
    /// Number of products loaded.
    pub total: Option<usize>,
    /// Low-stock count from the backend. `None` shows the placeholder.
    pub low_stock: Option<u64>,
    /// "dd/mm/yyyy HH:MM" of the last successful load.
    pub last_updated: Option<String>,
}

impl StatsView {
    pub fn total_display(&self) -> String {
        self.total
            .map(|t| t.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn low_stock_display(&self) -> String {
        self.low_stock
            .map(|c| c.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn last_updated_display(&self) -> String {
        self.last_updated
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Render the stats header section.
pub fn render_stats(stats: &StatsView) -> String {
    format!(
        r#"<section class="stats" data-section="stats">
    <div class="stat"><span class="stat-label">Products</span><span id="total-count" class="stat-value">{}</span></div>
    <div class="stat"><span class="stat-label">Low stock</span><span id="lowstock-count" class="stat-value">{}</span></div>
    <div class="stat"><span class="stat-label">Last updated</span><span id="last-updated" class="stat-value">{}</span></div>
</section>"#,
        stats.total_display(),
        stats.low_stock_display(),
        html_escape(&stats.last_updated_display()),
    )
}

/// Render the tab bar and search box.
///
/// The tab matching `filter.category` is marked active; a named category
/// not among `tabs` gets its own tab so the selection stays visible.
pub fn render_tabs(tabs: &[CategoryFilter], filter: &FilterState) -> String {
    let mut tabs = tabs.to_vec();
    if !tabs.contains(&filter.category) {
        tabs.push(filter.category.clone());
    }

    let tabs_html: String = tabs
        .iter()
        .map(|tab| {
            let active = if *tab == filter.category { " active" } else { "" };
            format!(
                r#"<button class="tab-btn{}" data-filter="{}">{}</button>"#,
                active,
                html_escape(&tab.key()),
                html_escape(&tab.display_name())
            )
        })
        .collect();

    format!(
        r#"<nav class="tabs" data-section="tabs">
    {}
    <input id="q-input" type="search" placeholder="Search by name or flavor" value="{}">
    <button id="refresh-btn" class="tab-btn">Refresh</button>
</nav>"#,
        tabs_html,
        html_escape(&filter.query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_placeholders() {
        let html = render_stats(&StatsView::default());
        assert_eq!(html.matches(PLACEHOLDER).count(), 3);
    }

    #[test]
    fn test_stats_values() {
        let stats = StatsView {
            total: Some(12),
            low_stock: None,
            last_updated: Some("05/03/2025 14:07".into()),
        };
        let html = render_stats(&stats);
        assert!(html.contains(r#"id="total-count" class="stat-value">12<"#));
        assert!(html.contains(&format!(r#"id="lowstock-count" class="stat-value">{}<"#, PLACEHOLDER)));
        assert!(html.contains("05/03/2025 14:07"));
    }

    #[test]
    fn test_tabs_mark_active() {
        let state = FilterState::new(CategoryFilter::LowStock, "choc");
        let html = render_tabs(&CategoryFilter::default_tabs(), &state);
        assert!(html.contains(r#"<button class="tab-btn active" data-filter="lowstock">"#));
        assert!(html.contains(r#"<button class="tab-btn" data-filter="all">"#));
        assert!(html.contains(r#"value="choc""#));
    }

    #[test]
    fn test_tabs_include_unlisted_category() {
        let state = FilterState::new(CategoryFilter::Category("bolo".into()), "");
        let html = render_tabs(&CategoryFilter::default_tabs(), &state);
        assert!(html.contains(r#"<button class="tab-btn active" data-filter="bolo">Bolo</button>"#));
    }

    #[test]
    fn test_tabs_escape_query() {
        let state = FilterState::new(CategoryFilter::All, r#""><script>"#);
        let html = render_tabs(&CategoryFilter::default_tabs(), &state);
        assert!(!html.contains("<script>"));
    }
}

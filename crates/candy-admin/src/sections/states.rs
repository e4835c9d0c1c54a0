//! Loading, error and empty states for the product list.

use crate::escape::html_escape;

/// Message shown while products load.
pub const LOADING_MESSAGE: &str = "Loading our delicious sweets...";

/// Message shown when the product list cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load the store's products";

/// How to retry from a rendered snapshot, which cannot refetch by itself.
pub const RETRY_HINT: &str = "Run `candy render` again to retry";

/// Render the loading placeholder.
pub fn render_loading() -> String {
    format!(
        r#"<section class="products-list loading" data-section="products">
    <div class="loading">{}</div>
</section>"#,
        LOADING_MESSAGE
    )
}

/// Render the "no results" state for an empty filtered list.
pub fn render_no_results() -> String {
    r#"<section class="products-list empty" data-section="products">
    <div class="loading">No products found<br><small>Try adjusting the search filters</small></div>
</section>"#
        .to_string()
}

/// Render the page-level error state with a retry hint.
pub fn render_load_error(message: &str) -> String {
    format!(
        r#"<section class="products-list error" data-section="products">
    <div class="error">{}<br><small>Please try again in a moment</small></div>
    <p class="retry-hint"><code>{}</code></p>
</section>"#,
        html_escape(message),
        html_escape(RETRY_HINT)
    )
}

//! Product list section: view model and card markup.

use candy_commerce::catalog::{Product, StockLevel};
use candy_commerce::ProductId;

use crate::escape::html_escape;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Presentation options for the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub currency_symbol: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// The order trigger attached to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAction {
    pub product_id: ProductId,
}

/// One rendered product.
///
/// Text fields are raw; markup renderers escape them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    /// "category • flavor".
    pub subtitle: String,
    /// Two decimals, or the raw value when not numeric.
    pub price: String,
    pub stock: i64,
    pub stock_level: StockLevel,
    pub default_quantity: u32,
    pub min_quantity: u32,
    pub order: OrderAction,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            subtitle: format!("{} • {}", product.category, product.flavor),
            price: product.price.display(),
            stock: product.stock,
            stock_level: product.stock_level(),
            default_quantity: 1,
            min_quantity: 1,
            order: OrderAction {
                product_id: product.id,
            },
        }
    }
}

/// Display representation of a filtered product list.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListView {
    /// Nothing matched the current filters.
    Empty,
    Cards(Vec<ProductCard>),
}

impl ProductListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ProductListView::Empty)
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ProductListView::Empty => &[],
            ProductListView::Cards(cards) => cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }
}

/// Map filtered products to cards, in order.
pub fn build_product_list(products: &[Product]) -> ProductListView {
    if products.is_empty() {
        return ProductListView::Empty;
    }
    ProductListView::Cards(products.iter().map(ProductCard::from_product).collect())
}

/// Render the product list section.
pub fn render_product_list(view: &ProductListView, options: &RenderOptions) -> String {
    match view {
        ProductListView::Empty => crate::sections::render_no_results(),
        ProductListView::Cards(cards) => {
            let cards_html: String = cards
                .iter()
                .map(|card| render_product_card(card, options))
                .collect();
            format!(
                r#"<section class="products-list" data-section="products">
{}</section>"#,
                cards_html
            )
        }
    }
}

fn render_product_card(card: &ProductCard, options: &RenderOptions) -> String {
    format!(
        r#"<div class="product-item" data-product-id="{id}">
    <div class="product-info">
        <h3>{name}</h3>
        <p>{subtitle}</p>
    </div>
    <div class="product-meta">
        <div class="price">{currency} {price}</div>
        <div class="stock {stock_class}">Stock: {stock}</div>
        <div class="order-controls">
            <input type="number" min="{min}" value="{qty}" class="order-qty" data-id="{id}" />
            <button class="tab-btn order-btn" data-id="{id}">Place order</button>
        </div>
    </div>
</div>
"#,
        id = card.id,
        name = html_escape(&card.name),
        subtitle = html_escape(&card.subtitle),
        currency = html_escape(&options.currency_symbol),
        price = html_escape(&card.price),
        stock_class = card.stock_level.css_class(),
        stock = card.stock,
        min = card.min_quantity,
        qty = card.default_quantity,
    )
}

//! Storefront backend API.

use std::time::Duration;

use async_trait::async_trait;
use candy_commerce::catalog::Product;
use candy_commerce::checkout::{OrderRequest, OrderResponse, OrderResult};
use candy_data::{FetchClient, FetchError};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;

pub const PRODUCTS_PATH: &str = "/api/products";
pub const LOW_STOCK_PATH: &str = "/api/products/lowstock";
pub const ORDERS_PATH: &str = "/api/orders";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Message used when an order fails without a server-provided reason.
pub const ORDER_FAILED_MESSAGE: &str = "Failed to create order";

/// The three backend calls the admin view makes.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /api/products`.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /api/products/lowstock?threshold=N`.
    async fn low_stock_count(&self, threshold: i64) -> Result<u64, ApiError>;

    /// `POST /api/orders`.
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResult, ApiError>;
}

#[derive(Debug, Deserialize, Default)]
struct ProductsEnvelope {
    #[serde(default)]
    products: Option<Vec<Product>>,
}

#[derive(Debug, Deserialize, Default)]
struct LowStockEnvelope {
    #[serde(default)]
    count: Option<u64>,
}

/// [`StorefrontApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: FetchClient,
}

impl HttpStorefrontApi {
    /// Client for the backend at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = FetchClient::new()
            .with_base_url(base_url)
            .with_default_header("Accept", "application/json")
            .with_timeout(timeout);
        Self { client }
    }

    /// Wrap an already configured fetch client.
    pub fn from_client(client: FetchClient) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.client.base_url()
    }

    async fn fetch_products(&self) -> Result<ProductsEnvelope, FetchError> {
        self.client
            .get(PRODUCTS_PATH)
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    async fn fetch_low_stock(&self, threshold: i64) -> Result<LowStockEnvelope, FetchError> {
        self.client
            .get(LOW_STOCK_PATH)
            .query("threshold", threshold)
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    async fn post_order(&self, request: &OrderRequest) -> Result<OrderResponse, FetchError> {
        self.client
            .post(ORDERS_PATH)
            .json(request)?
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        debug!("fetching product list");
        match self.fetch_products().await {
            Ok(envelope) => {
                let products = envelope.products.unwrap_or_default();
                info!(count = products.len(), "loaded products");
                Ok(products)
            }
            Err(error) => {
                warn!(%error, "product list request failed");
                Err(error.into())
            }
        }
    }

    async fn low_stock_count(&self, threshold: i64) -> Result<u64, ApiError> {
        debug!(threshold, "fetching low-stock count");
        match self.fetch_low_stock(threshold).await {
            Ok(envelope) => Ok(envelope.count.unwrap_or(0)),
            Err(error) => {
                warn!(%error, threshold, "low-stock count request failed");
                Err(error.into())
            }
        }
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResult, ApiError> {
        request.validate()?;
        debug!(items = request.items.len(), "submitting order");

        match self.post_order(request).await {
            Ok(resp) => {
                let result = OrderResult::from(resp);
                info!(total = ?result.total, "order created");
                Ok(result)
            }
            Err(FetchError::HttpError { status, message }) => {
                let message = if message.trim().is_empty() {
                    ORDER_FAILED_MESSAGE.to_string()
                } else {
                    message
                };
                warn!(status, %message, "order rejected");
                Err(FetchError::HttpError { status, message }.into())
            }
            Err(error) => {
                warn!(%error, "order request failed");
                Err(error.into())
            }
        }
    }
}

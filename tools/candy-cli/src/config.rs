//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use candy_admin::api::DEFAULT_TIMEOUT;
use candy_admin::sections::{RenderOptions, DEFAULT_CURRENCY_SYMBOL};
use candy_admin::ControllerConfig;
use candy_commerce::catalog::LOW_STOCK_THRESHOLD;
use candy_commerce::checkout::DEFAULT_CUSTOMER_NAME;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["candy.toml", ".candy.toml", "candy.json"];

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Order defaults.
    #[serde(default)]
    pub order: OrderConfig,

    /// HTML rendering.
    #[serde(default)]
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Check the values, returning every problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            errors.push("api.base_url is required".to_string());
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!(
                "api.base_url '{}' must start with http:// or https://",
                base_url
            ));
        }

        if self.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than 0".to_string());
        }

        if self.order.customer_name.trim().is_empty() {
            errors.push("order.customer_name must not be blank".to_string());
        }

        errors
    }

    /// Fail with the first problem [`validate`](Self::validate) reports.
    pub fn ensure_valid(&self) -> Result<()> {
        match self.validate().into_iter().next() {
            Some(error) => bail!("Invalid configuration: {}", error),
            None => Ok(()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            low_stock_threshold: self.api.low_stock_threshold,
            customer_name: self.order.customer_name.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            currency_symbol: self.render.currency_symbol.clone(),
        }
    }

    /// Look up a value by dotted key.
    pub fn value(&self, key: &str) -> Result<serde_json::Value> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "base_url"] => Ok(self.api.base_url.as_str().into()),
            ["api", "timeout_secs"] => Ok(self.api.timeout_secs.into()),
            ["api", "low_stock_threshold"] => Ok(self.api.low_stock_threshold.into()),
            ["order", "customer_name"] => Ok(self.order.customer_name.as_str().into()),
            ["render", "currency_symbol"] => Ok(self.render.currency_symbol.as_str().into()),
            ["render", "output"] => Ok(self.render.output.as_str().into()),
            _ => bail!("Unknown config key: {}", key),
        }
    }

    /// Look up a value by dotted key, formatted as JSON.
    pub fn get(&self, key: &str) -> Result<String> {
        self.value(key).map(|v| v.to_string())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Threshold sent with the low-stock count request.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_low_stock_threshold() -> i64 {
    LOW_STOCK_THRESHOLD
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

/// Order settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Customer name attached to orders.
    #[serde(default = "default_customer_name")]
    pub customer_name: String,
}

fn default_customer_name() -> String {
    DEFAULT_CUSTOMER_NAME.to_string()
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            customer_name: default_customer_name(),
        }
    }
}

/// HTML rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Default output file for `candy render`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_output() -> String {
    "storefront.html".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            output: default_output(),
        }
    }
}

/// Generate a default candy.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Candy shop admin configuration

[api]
base_url = "{base_url}"
timeout_secs = {timeout}
low_stock_threshold = {threshold}

[order]
customer_name = "{customer}"

[render]
currency_symbol = "{currency}"
output = "storefront.html"
"#,
        base_url = DEFAULT_BASE_URL,
        timeout = DEFAULT_TIMEOUT.as_secs(),
        threshold = LOW_STOCK_THRESHOLD,
        customer = DEFAULT_CUSTOMER_NAME,
        currency = DEFAULT_CURRENCY_SYMBOL,
    )
}

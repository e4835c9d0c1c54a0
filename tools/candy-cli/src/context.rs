//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use candy_admin::clock::SystemClock;
use candy_admin::{HttpStorefrontApi, RenderSurface, ViewController};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file, applying a base URL override.
    pub fn load(config_path: Option<&str>, base_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(url) = base_url {
            config.api.base_url = url.to_string();
        }

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// HTTP client for the configured backend.
    pub fn api(&self) -> Result<HttpStorefrontApi> {
        self.config.ensure_valid()?;
        Ok(HttpStorefrontApi::with_timeout(
            self.config.api.base_url.trim(),
            self.config.timeout(),
        ))
    }

    /// Controller drawing on `surface` with the configured settings.
    pub fn controller<S: RenderSurface>(&self, surface: S) -> ViewController<S, SystemClock> {
        ViewController::with_config(surface, SystemClock, self.config.controller_config())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in `start` or any parent directory.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let path = find_config_file(start)?;
    match CliConfig::load(&path) {
        Ok(config) => Some((config, path)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "ignoring unreadable config");
            None
        }
    }
}

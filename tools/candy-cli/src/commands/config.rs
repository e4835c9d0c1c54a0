//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use serde_json::{json, Value};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());
    ctx.output.kv(
        "low_stock_threshold",
        &ctx.config.api.low_stock_threshold.to_string(),
    );

    ctx.output.info("[order]");
    ctx.output.kv("customer_name", &ctx.config.order.customer_name);

    ctx.output.info("[render]");
    ctx.output.kv("currency_symbol", &ctx.config.render.currency_symbol);
    ctx.output.kv("output", &ctx.config.render.output);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = ctx.config.value(key)?;

    if ctx.output.is_json() {
        ctx.output.json(&key_value(key, value));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn key_value(key: &str, value: Value) -> Value {
    json!({ "key": key, "value": value })
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("candy.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();
    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    bail!("Configuration has {} error(s)", errors.len());
}

//! Low-stock count command.

use anyhow::Result;
use candy_admin::sections::PLACEHOLDER;
use candy_admin::StorefrontApi;
use serde_json::json;

use super::LowStockArgs;
use crate::context::Context;

/// Run the low-stock command.
///
/// A failed request prints the placeholder and still succeeds.
pub async fn run(args: LowStockArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let threshold = args.threshold.unwrap_or(ctx.config.api.low_stock_threshold);

    let count = match api.low_stock_count(threshold).await {
        Ok(count) => Some(count),
        Err(e) => {
            ctx.output.warn(&format!("Low-stock count unavailable: {}", e));
            None
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "threshold": threshold, "count": count }));
        return Ok(());
    }

    let display = count
        .map(|c| c.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    ctx.output
        .kv(&format!("Products with stock <= {}", threshold), &display);

    Ok(())
}

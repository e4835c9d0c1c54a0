//! HTML render command.

use std::fs;

use anyhow::{bail, Context as _, Result};
use candy_admin::controller::runtime::dispatch;
use candy_admin::{HtmlSurface, LoadState, ViewEvent};
use serde_json::json;

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
///
/// The page is written even when loading fails, showing the error state.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let mut controller = ctx.controller(HtmlSurface::new(ctx.config.render_options()));

    for event in args.filter.events() {
        dispatch(&mut controller, &api, event).await;
    }

    let spinner = ctx.output.spinner("Loading products...");
    dispatch(&mut controller, &api, ViewEvent::Activate).await;
    spinner.finish_and_clear();

    let path = ctx.resolve_path(args.output.as_deref().unwrap_or(&ctx.config.render.output));
    let html = controller.surface().render_page();
    fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": path.display().to_string(),
            "bytes": html.len(),
            "products": controller.state().visible().len(),
        }));
    } else {
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    if controller.state().load == LoadState::LoadFailed {
        bail!("Products could not be loaded; the page shows the error state");
    }

    Ok(())
}

//! Product listing command.

use anyhow::{bail, Result};
use candy_admin::controller::runtime::dispatch;
use candy_admin::{LoadState, ViewEvent};

use super::ProductsArgs;
use crate::context::Context;
use crate::terminal::TerminalSurface;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let surface = TerminalSurface::new(ctx.output.clone(), ctx.config.render_options());
    let mut controller = ctx.controller(surface);

    for event in args.filter.events() {
        dispatch(&mut controller, &api, event).await;
    }

    let spinner = ctx.output.spinner("Loading products...");
    dispatch(&mut controller, &api, ViewEvent::Activate).await;
    spinner.finish_and_clear();

    controller.surface().print();

    if controller.state().load == LoadState::LoadFailed {
        bail!("Could not reach the backend at {}", ctx.config.api.base_url);
    }

    Ok(())
}

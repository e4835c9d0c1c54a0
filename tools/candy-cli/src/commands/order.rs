//! Order submission command.

use anyhow::{bail, Result};
use candy_admin::controller::runtime::dispatch;
use candy_admin::{Notice, ViewEvent};
use candy_commerce::checkout::{parse_quantity, OrderResult};
use candy_commerce::ProductId;
use dialoguer::Confirm;
use serde_json::json;

use super::OrderArgs;
use crate::context::Context;
use crate::terminal::TerminalSurface;

/// Run the order command.
///
/// A placed order triggers the same reload the admin page does; with
/// `--verbose` the refreshed list is printed.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let surface = TerminalSurface::new(ctx.output.clone(), ctx.config.render_options());
    let mut controller = ctx.controller(surface);

    let product_id = ProductId(args.product_id);
    ctx.output
        .debug(&format!("Ordering product {} (quantity input {:?})", product_id, args.quantity));

    if !args.yes && !ctx.output.is_json() && console::user_attended() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Order {} unit(s) of product {}?",
                parse_quantity(&args.quantity),
                product_id
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    dispatch(
        &mut controller,
        &api,
        ViewEvent::SubmitOrder {
            product_id,
            raw_quantity: args.quantity,
        },
    )
    .await;

    let notice = controller.surface_mut().take_notices().pop();
    match notice {
        Some(Notice::OrderPlaced {
            product_id,
            quantity,
            total,
        }) => {
            if ctx.output.is_json() {
                ctx.output.json(&json!({
                    "product_id": product_id,
                    "quantity": quantity,
                    "total": total,
                }));
                return Ok(());
            }

            ctx.output.success(&format!(
                "Order created successfully! Total: {} {}",
                ctx.config.render.currency_symbol,
                OrderResult { total }.total_display()
            ));
            if ctx.output.is_verbose() {
                controller.surface().print();
            }
            Ok(())
        }
        Some(Notice::OrderFailed { message, .. }) => bail!("Order failed: {}", message),
        None => bail!("Order for product {} produced no result", product_id),
    }
}

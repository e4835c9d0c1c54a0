//! Executes controller commands against a [`StorefrontApi`].

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::{Command, ViewController, ViewEvent};
use crate::api::StorefrontApi;
use crate::clock::Clock;
use crate::surface::RenderSurface;

/// Run one command and wrap its outcome as the matching completion event.
pub async fn execute(api: &dyn StorefrontApi, command: Command) -> ViewEvent {
    trace!(command = command.name(), "executing");
    match command {
        Command::FetchProducts { ticket } => ViewEvent::ProductsLoaded {
            ticket,
            result: api.list_products().await,
        },
        Command::FetchLowStock { ticket, threshold } => ViewEvent::LowStockLoaded {
            ticket,
            result: api.low_stock_count(threshold).await,
        },
        Command::CreateOrder(request) => {
            let product_id = request
                .items
                .first()
                .map(|item| item.product_id)
                .unwrap_or_default();
            let quantity = request.items.first().map(|item| item.quantity).unwrap_or(1);
            ViewEvent::OrderFinished {
                product_id,
                quantity,
                result: api.create_order(&request).await,
            }
        }
    }
}

/// Feed `event` to the controller and keep executing the resulting commands,
/// one at a time, until none remain.
pub async fn dispatch<S, C>(
    controller: &mut ViewController<S, C>,
    api: &dyn StorefrontApi,
    event: ViewEvent,
) where
    S: RenderSurface,
    C: Clock,
{
    let mut pending: VecDeque<Command> = controller.handle(event).into();
    while let Some(command) = pending.pop_front() {
        let completion = execute(api, command).await;
        pending.extend(controller.handle(completion));
    }
}

/// Run `command` on its own task and post the completion to `events`.
///
/// The send is skipped if the receiver has gone away.
pub fn spawn_command(
    api: Arc<dyn StorefrontApi>,
    command: Command,
    events: UnboundedSender<ViewEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let name = command.name();
        let event = execute(api.as_ref(), command).await;
        if events.send(event).is_err() {
            debug!(command = name, "event receiver closed, dropping completion");
        }
    })
}

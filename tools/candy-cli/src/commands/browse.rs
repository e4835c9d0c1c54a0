//! Interactive browse session.
//!
//! User input is read on its own thread. Network commands run on spawned
//! tasks and report back over a channel, so the view stays responsive while
//! requests are in flight.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{bail, Result};
use candy_admin::clock::SystemClock;
use candy_admin::controller::runtime::spawn_command;
use candy_admin::{StorefrontApi, ViewController, ViewEvent};
use candy_commerce::search::CategoryFilter;
use candy_commerce::ProductId;
use tokio::sync::mpsc::{self, UnboundedSender};

use super::BrowseArgs;
use crate::context::Context;
use crate::terminal::TerminalSurface;

/// A parsed input line.
#[derive(Debug)]
enum BrowseInput {
    Event(ViewEvent),
    Help,
    Quit,
}

const HELP: [&str; 6] = [
    "tab <all|lowstock|category>   switch tab",
    "search <text>                 filter by name or flavor (empty clears)",
    "refresh                       reload from the backend",
    "order <id> [quantity]         place an order",
    "help                          show this list",
    "quit                          leave",
];

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let api: Arc<dyn StorefrontApi> = Arc::new(ctx.api()?);
    let surface = TerminalSurface::new(ctx.output.clone(), ctx.config.render_options());
    let mut controller = ctx.controller(surface);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ViewEvent>();
    let mut lines = spawn_input_reader();

    ctx.output.info("Type `help` for commands.");
    let start: CategoryFilter = args.tab.parse().unwrap_or_default();
    feed(&mut controller, &api, &event_tx, ViewEvent::SelectTab(start));
    feed(&mut controller, &api, &event_tx, ViewEvent::Activate);

    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => {
                feed(&mut controller, &api, &event_tx, event);
            }
            line = lines.recv() => {
                let Some(line) = line else { break };
                match parse_input(&line) {
                    Ok(Some(BrowseInput::Quit)) => break,
                    Ok(Some(BrowseInput::Help)) => {
                        for entry in HELP {
                            ctx.output.list_item(entry);
                        }
                    }
                    Ok(Some(BrowseInput::Event(event))) => {
                        feed(&mut controller, &api, &event_tx, event);
                    }
                    Ok(None) => {}
                    Err(message) => ctx.output.warn(&message),
                }
            }
        }
    }

    Ok(())
}

/// Hand an event to the controller, spawn its commands and redraw.
fn feed(
    controller: &mut ViewController<TerminalSurface, SystemClock>,
    api: &Arc<dyn StorefrontApi>,
    events: &UnboundedSender<ViewEvent>,
    event: ViewEvent,
) {
    // Loads redraw once they finish; orders only report a notice.
    let redraw = !matches!(
        event,
        ViewEvent::Activate
            | ViewEvent::Refresh
            | ViewEvent::SubmitOrder { .. }
            | ViewEvent::OrderFinished { .. }
            | ViewEvent::ProductsLoaded { result: Ok(_), .. }
    );
    for command in controller.handle(event) {
        tracing::debug!(command = command.name(), "spawning");
        spawn_command(api.clone(), command, events.clone());
    }

    let surface = controller.surface_mut();
    let notices = surface.take_notices();
    for notice in &notices {
        surface.print_notice(notice);
    }
    if redraw {
        surface.print();
    }
}

/// Read stdin lines on a plain thread; the channel closes at end of input.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Parse one input line. Blank lines parse to `None`.
fn parse_input(line: &str) -> Result<Option<BrowseInput>, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let input = match word.to_lowercase().as_str() {
        "" => return Ok(None),
        "quit" | "exit" | "q" => BrowseInput::Quit,
        "help" | "?" => BrowseInput::Help,
        "refresh" | "r" => BrowseInput::Event(ViewEvent::Refresh),
        "tab" => BrowseInput::Event(ViewEvent::SelectTab(rest.parse().unwrap_or_default())),
        "search" | "s" => BrowseInput::Event(ViewEvent::SearchInput(rest.to_string())),
        "order" => {
            let mut parts = rest.split_whitespace();
            let product_id: ProductId = parts
                .next()
                .ok_or_else(|| "usage: order <id> [quantity]".to_string())?
                .parse()
                .map_err(|_| "product id must be a number".to_string())?;
            let raw_quantity = parts.next().unwrap_or("1").to_string();
            BrowseInput::Event(ViewEvent::SubmitOrder {
                product_id,
                raw_quantity,
            })
        }
        other => return Err(format!("unknown command `{}`; type `help`", other)),
    };

    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(line: &str) -> ViewEvent {
        match parse_input(line) {
            Ok(Some(BrowseInput::Event(event))) => event,
            other => panic!("expected an event for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_parse_tab_and_search() {
        assert!(matches!(event("tab lowstock"), ViewEvent::SelectTab(CategoryFilter::LowStock)));
        assert!(matches!(event("tab"), ViewEvent::SelectTab(CategoryFilter::All)));
        assert!(matches!(event("search  Coco "), ViewEvent::SearchInput(q) if q == "Coco"));
        assert!(matches!(event("search"), ViewEvent::SearchInput(q) if q.is_empty()));
        assert!(matches!(event("REFRESH"), ViewEvent::Refresh));
    }

    #[test]
    fn test_parse_order() {
        match event("order 3 0") {
            ViewEvent::SubmitOrder {
                product_id,
                raw_quantity,
            } => {
                assert_eq!(product_id, ProductId(3));
                assert_eq!(raw_quantity, "0");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            event("order 7"),
            ViewEvent::SubmitOrder { raw_quantity, .. } if raw_quantity == "1"
        ));
    }

    #[test]
    fn test_parse_errors_and_control() {
        assert!(parse_input("order").is_err());
        assert!(parse_input("order abc").is_err());
        assert!(parse_input("dance").is_err());
        assert!(matches!(parse_input("   "), Ok(None)));
        assert!(matches!(parse_input("quit"), Ok(Some(BrowseInput::Quit))));
        assert!(matches!(parse_input("help"), Ok(Some(BrowseInput::Help))));
    }
}

//! Section renderers for the admin page.

mod products;
mod states;
mod stats;

pub use products::*;
pub use states::*;
pub use stats::*;

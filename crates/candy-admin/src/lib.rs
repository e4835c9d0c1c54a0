//! Storefront admin view for the candy shop.
//!
//! - **API**: [`StorefrontApi`] and its HTTP implementation
//! - **Sections**: pure view-model builders and HTML renderers
//! - **Surface**: where rendered output goes ([`RenderSurface`], [`HtmlSurface`])
//! - **Controller**: view state, load tickets and the command runtime
//!
//! # Example
//!
//! ```rust,ignore
//! use candy_admin::prelude::*;
//!
//! let api = HttpStorefrontApi::new("http://127.0.0.1:5000");
//! let mut controller = ViewController::new(HtmlSurface::default(), SystemClock);
//!
//! dispatch(&mut controller, &api, ViewEvent::Activate).await;
//! dispatch(&mut controller, &api, ViewEvent::SelectTab(CategoryFilter::LowStock)).await;
//!
//! std::fs::write("storefront.html", controller.surface().render_page())?;
//! ```

pub mod api;
pub mod clock;
pub mod controller;
pub mod error;
pub mod escape;
pub mod page;
pub mod sections;
pub mod surface;

pub use api::{HttpStorefrontApi, StorefrontApi};
pub use controller::{Command, ControllerConfig, LoadState, LoadTicket, ViewController, ViewEvent};
pub use error::{ApiError, ErrorKind};
pub use surface::{HtmlSurface, Notice, RenderSurface};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{HttpStorefrontApi, StorefrontApi, DEFAULT_TIMEOUT};
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::controller::runtime::{dispatch, execute, spawn_command};
    pub use crate::controller::{
        Command, ControllerConfig, LoadState, LoadTicket, ViewController, ViewEvent,
    };
    pub use crate::error::{ApiError, ErrorKind};
    pub use crate::sections::{
        build_product_list, render_product_list, ProductCard, ProductListView, RenderOptions,
    };
    pub use crate::surface::{HtmlSurface, Notice, RenderSurface};

    pub use candy_commerce::prelude::*;
}

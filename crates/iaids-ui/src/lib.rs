#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Design-system form widgets for the browser.
//! The selection model and its view projections are plain Rust; the DOM widget,
//! the Yew component and the demo gallery are compiled for wasm32 only.

pub mod config;
pub mod error;
pub mod interaction;
pub mod selection;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod widget;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
pub use config::WidgetConfig;
pub use error::{Result, WidgetError};
pub use selection::{Change, Selection};
#[cfg(target_arch = "wasm32")]
pub use widget::MultiSelectWidget;

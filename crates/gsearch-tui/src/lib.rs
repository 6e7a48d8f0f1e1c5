//! Terminal front-end for the `gsearch` global search widget.
//!
//! Renders a query prompt with a results overlay underneath, drives the
//! headless [`gsearch_core::SearchWidget`] from terminal events and returns a
//! [`SearchOutcome`] once the user picks a row or leaves.

mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use config::{DEFAULT_COMPACT_WIDTH, UiConfig, UiLabels};
pub use outcome::SearchOutcome;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, default_theme};

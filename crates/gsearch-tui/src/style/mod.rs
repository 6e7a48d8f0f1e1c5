//! Visual styling for the terminal front-end.
//!
//! Themes are colour schemes loaded from TOML definitions bundled into the
//! binary. [`StyleConfig`] carries the active theme through the app.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};

/// Styling knobs applied to the whole UI.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}

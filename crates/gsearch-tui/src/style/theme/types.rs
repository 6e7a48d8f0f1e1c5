use gsearch_core::RowKind;
use ratatui::style::{Modifier, Style};

/// Styles for the prompt and the results overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Overlay title and category rows.
	pub header: Style,
	/// The selected overlay row.
	pub row_highlight: Style,
	/// Query text typed into the prompt.
	pub prompt: Style,
	/// Placeholder, footer, spinner and notices.
	pub empty: Style,
	/// Group rows and clickable controls.
	pub highlight: Style,
}

impl Theme {
	/// Style used for muted text such as the placeholder.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Style for a rendered result row of the given kind.
	#[must_use]
	pub fn row_style(&self, kind: RowKind) -> Style {
		match kind {
			RowKind::Category => self.header,
			RowKind::Product => self.prompt,
			RowKind::Group => self.highlight,
			RowKind::Notice => self.empty.add_modifier(Modifier::ITALIC),
		}
	}

	/// Style for clickable controls like the clear and close buttons.
	#[must_use]
	pub fn button_style(&self) -> Style {
		self.highlight.add_modifier(Modifier::BOLD)
	}
}

/// A named theme together with its alternate names.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	/// The name of the theme.
	pub name: String,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
	/// The theme configuration.
	pub theme: Theme,
}

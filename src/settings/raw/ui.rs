use gsearch_tui::{DEFAULT_COMPACT_WIDTH, UiConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` table prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) compact_width: Option<u16>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(width) = cli.compact_width {
			self.compact_width = Some(width);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut ui = UiConfig::default();
		if let Some(placeholder) = self.placeholder {
			ui.labels.placeholder = placeholder;
		}
		ui.compact_width = self.compact_width.unwrap_or(DEFAULT_COMPACT_WIDTH);

		UiResolution {
			ui,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self
				.theme
				.map(|theme| theme.trim().to_string())
				.filter(|theme| !theme.is_empty()),
		}
	}
}

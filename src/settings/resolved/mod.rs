use std::time::Duration;

use gsearch_core::{Links, WidgetOptions};
use gsearch_tui::UiConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub endpoint: String,
	pub portal: String,
	pub debounce: Duration,
	pub min_chars: usize,
	pub timeout: Duration,
	pub theme: Option<String>,
	pub initial_query: String,
	pub ui: UiConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Widget tunables for this configuration.
	pub fn widget_options(&self) -> WidgetOptions {
		WidgetOptions {
			debounce: self.debounce,
			min_query_chars: self.min_chars,
			links: Links::new(self.portal.clone()),
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		endpoint: "https://api.example/search/".into(),
		portal: "https://portal.example/order/".into(),
		debounce: Duration::from_millis(500),
		min_chars: 3,
		timeout: Duration::from_secs(10),
		theme: None,
		initial_query: String::new(),
		ui: UiConfig::default(),
	}
}

use std::time::Duration;

use gsearch_core::client::DEFAULT_SEARCH_ENDPOINT;
use gsearch_core::debounce::DEFAULT_DEBOUNCE;
use gsearch_core::links::DEFAULT_PORTAL_BASE;
use gsearch_core::widget::DEFAULT_MIN_QUERY_CHARS;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Seconds a search request may take when nothing else is configured.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// `[search]` table prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) endpoint: Option<String>,
	pub(super) portal: Option<String>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) min_chars: Option<usize>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct SearchResolution {
	pub(super) endpoint: String,
	pub(super) portal: String,
	pub(super) debounce: Duration,
	pub(super) min_chars: usize,
	pub(super) timeout: Duration,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.endpoint = Some(endpoint);
		}
		if let Some(portal) = cli.portal.clone() {
			self.portal = Some(portal);
		}
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
		if let Some(min_chars) = cli.min_chars {
			self.min_chars = Some(min_chars);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> SearchResolution {
		SearchResolution {
			endpoint: self
				.endpoint
				.map(|endpoint| endpoint.trim().to_string())
				.unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string()),
			portal: self
				.portal
				.map(|portal| portal.trim().to_string())
				.unwrap_or_else(|| DEFAULT_PORTAL_BASE.to_string()),
			debounce: self
				.debounce_ms
				.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
			min_chars: self.min_chars.unwrap_or(DEFAULT_MIN_QUERY_CHARS),
			timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
		}
	}
}

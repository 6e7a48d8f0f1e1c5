use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod search;
mod ui;

use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.search.endpoint.is_some(),
				"GSEARCH__SEARCH__ENDPOINT",
				"--endpoint",
				"search.endpoint",
			),
			portal: detect_source(
				cli.portal.is_some(),
				self.search.portal.is_some(),
				"GSEARCH__SEARCH__PORTAL",
				"--portal",
				"search.portal",
			),
			min_chars: detect_source(
				cli.min_chars.is_some(),
				self.search.min_chars.is_some(),
				"GSEARCH__SEARCH__MIN_CHARS",
				"--min-chars",
				"search.min_chars",
			),
			timeout_secs: detect_source(
				cli.timeout_secs.is_some(),
				self.search.timeout_secs.is_some(),
				"GSEARCH__SEARCH__TIMEOUT_SECS",
				"--timeout-secs",
				"search.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"GSEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			compact_width: detect_source(
				cli.compact_width.is_some(),
				self.ui.compact_width.is_some(),
				"GSEARCH__UI__COMPACT_WIDTH",
				"--compact-width",
				"ui.compact_width",
			),
		};

		let search = self.search.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			endpoint: search.endpoint,
			portal: search.portal,
			debounce: search.debounce,
			min_chars: search.min_chars,
			timeout: search.timeout,
			theme: ui.theme,
			initial_query: ui.initial_query,
			ui: ui.ui,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

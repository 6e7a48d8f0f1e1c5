use std::fmt;

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the values that validation may reject.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) endpoint: Option<SettingSource>,
	pub(crate) portal: Option<SettingSource>,
	pub(crate) min_chars: Option<SettingSource>,
	pub(crate) timeout_secs: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) compact_width: Option<SettingSource>,
}

impl ConfigSources {
	/// Source recorded for `key`, falling back to the config key itself.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		let recorded = match key {
			"search.endpoint" => &self.endpoint,
			"search.portal" => &self.portal,
			"search.min_chars" => &self.min_chars,
			"search.timeout_secs" => &self.timeout_secs,
			"ui.theme" => &self.theme,
			"ui.compact_width" => &self.compact_width,
			_ => &None,
		};
		recorded.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}

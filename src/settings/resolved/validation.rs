use gsearch_tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	validate_url("search.endpoint", &config.endpoint, sources)?;
	validate_url("search.portal", &config.portal, sources)?;

	if config.min_chars == 0 {
		return Err(ConfigError::invalid(
			"search.min_chars",
			"0",
			sources.source_for("search.min_chars"),
			"must be at least 1",
		));
	}

	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"search.timeout_secs",
			"0",
			sources.source_for("search.timeout_secs"),
			"must be greater than zero",
		));
	}

	if config.ui.compact_width == 0 {
		return Err(ConfigError::invalid(
			"ui.compact_width",
			"0",
			sources.source_for("ui.compact_width"),
			"must be greater than zero",
		));
	}

	if let Some(theme) = &config.theme
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for("ui.theme"),
			format!("unknown theme; available: {}", style::names().join(", ")),
		));
	}

	Ok(())
}

fn validate_url(
	key: &'static str,
	value: &str,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if value.starts_with("http://") || value.starts_with("https://") {
		return Ok(());
	}
	Err(ConfigError::invalid(
		key,
		value,
		sources.source_for(key),
		"must be an http:// or https:// URL",
	))
}

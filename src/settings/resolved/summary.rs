use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Endpoint: {}", config.endpoint),
		format!("  Portal: {}", config.portal),
		format!("  Debounce: {} ms", config.debounce.as_millis()),
		format!("  Minimum query length: {}", config.min_chars),
		format!("  Request timeout: {} s", config.timeout.as_secs()),
		format!("  Compact below: {} columns", config.ui.compact_width),
		format!(
			"  UI theme: {}",
			config.theme.as_deref().unwrap_or("(use the library default)")
		),
		format!("  Placeholder: {}", config.ui.labels.placeholder),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines
}

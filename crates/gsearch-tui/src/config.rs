/// Terminal width below which the overlay switches to the fullscreen layout.
pub const DEFAULT_COMPACT_WIDTH: u16 = 60;

/// Text rendered around the prompt and the results overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Placeholder shown while the prompt is empty.
	pub placeholder: String,
	/// Title of the results overlay.
	pub overlay_title: String,
	/// Control that empties the prompt.
	pub clear_button: String,
	/// Control that dismisses the overlay in compact mode.
	pub close_button: String,
	/// Shown in the prompt after a request failed.
	pub failure_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "Search products, categories and groups".to_string(),
			overlay_title: "Results".to_string(),
			clear_button: "[x]".to_string(),
			close_button: "[ Close ]".to_string(),
			failure_hint: "search failed, ctrl+r to retry".to_string(),
		}
	}
}

impl UiLabels {
	/// Footer line summarising the result count.
	#[must_use]
	pub fn count_label(&self, count: usize) -> String {
		format!("Showing {count} results")
	}
}

/// Layout options for the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub labels: UiLabels,
	/// Widths strictly below this render the compact layout.
	pub compact_width: u16,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			labels: UiLabels::default(),
			compact_width: DEFAULT_COMPACT_WIDTH,
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn is_compact(&self, width: u16) -> bool {
		width < self.compact_width
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_label_uses_the_raw_count() {
		let labels = UiLabels::default();
		assert_eq!(labels.count_label(0), "Showing 0 results");
		assert_eq!(labels.count_label(12), "Showing 12 results");
	}

	#[test]
	fn compact_threshold_is_exclusive() {
		let config = UiConfig::default();
		assert!(config.is_compact(59));
		assert!(!config.is_compact(60));
	}
}

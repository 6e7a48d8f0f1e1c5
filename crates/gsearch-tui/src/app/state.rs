//! Core state container for the terminal front-end.
//!
//! [`App`] bundles the headless [`SearchWidget`] with everything the terminal
//! needs around it: the text input, the worker channels, the overlay selection
//! and the geometry of the last frame for mouse hit-testing.

use std::time::Instant;

use gsearch_core::worker;
use gsearch_core::{RequestSequence, ResultRow, SearchClient, SearchWidget, WidgetOptions};
use throbber_widgets_tui::ThrobberState;

use super::SearchRuntime;
use super::overlay::OverlayState;
use crate::components::PromptAreas;
use crate::config::UiConfig;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Text input holding the query.
	pub search_input: QueryInput<'a>,
	pub(crate) widget: SearchWidget,
	pub(crate) search: SearchRuntime,
	pub(crate) ui: UiConfig,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) overlay: OverlayState,
	pub(crate) prompt: PromptAreas,
	/// Whether the last frame used the compact layout.
	pub(crate) compact: bool,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose requests are answered by `client` on a
	/// background thread.
	pub fn new<C: SearchClient>(client: C, options: WidgetOptions) -> Self {
		let (search_tx, search_rx, latest_query_id) = worker::spawn(client);
		let widget = SearchWidget::new(options, RequestSequence::new(latest_query_id));
		let style = StyleConfig::default();
		let mut search_input = QueryInput::default();
		search_input.set_style(style.theme.prompt);

		Self {
			search_input,
			widget,
			search: SearchRuntime::new(search_tx, search_rx),
			ui: UiConfig::default(),
			style,
			throbber_state: ThrobberState::default(),
			overlay: OverlayState::default(),
			prompt: PromptAreas::default(),
			compact: false,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.search_input.set_style(theme.prompt);
	}

	pub fn set_ui(&mut self, ui: UiConfig) {
		self.ui = ui;
	}

	/// Pre-fill the prompt. The query is searched once the debounce delay
	/// after `now` has passed, exactly as if it had been typed.
	pub fn set_initial_query(&mut self, query: &str, now: Instant) {
		self.search_input.set_text(query);
		if !self.search_input.text().is_empty() {
			self.widget.on_input(self.search_input.text(), now);
		}
	}

	/// Read-only view of the widget state.
	#[must_use]
	pub fn widget(&self) -> &SearchWidget {
		&self.widget
	}

	/// Advance timers and apply any settled requests.
	pub(crate) fn tick(&mut self, now: Instant) {
		self.pump_debounce(now);
		self.pump_search_results();
		if self.widget.is_loading() {
			self.throbber_state.calc_next();
		}
	}

	/// The highlighted overlay row, if the overlay is showing.
	pub(crate) fn selected_row(&self) -> Option<&ResultRow> {
		if !self.widget.overlay_visible() {
			return None;
		}
		let index = self.overlay.selected()?;
		self.widget.rows().get(index)
	}

	pub(crate) fn update_layout_mode(&mut self, width: u16) {
		self.compact = self.ui.is_compact(width);
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::thread;
	use std::time::Duration;

	use gsearch_core::{ClientError, SearchPayload};
	use serde_json::json;

	use super::*;

	pub(crate) fn sample_payload() -> SearchPayload {
		SearchPayload::classify(json!({
			"main_products": [
				{"id": "p1", "name": "Widget", "main_product_category": "c1"}
			],
			"main_product_categories": [
				{"id": "c1", "name": "Tools", "icon": "i.png"}
			],
			"main_product_category_groups": [
				{"id": "g1", "name": "Waste"}
			]
		}))
	}

	/// App backed by a client that answers `tool*` queries with three
	/// entities and fails on `down`.
	pub(crate) fn sample_app() -> App<'static> {
		let client = |query: &str| -> Result<SearchPayload, ClientError> {
			if query == "down" {
				return Err(ClientError::Decode {
					url: "http://search.test/?q=down".into(),
					source: serde_json::from_str::<serde_json::Value>("<html>")
						.expect_err("not JSON"),
				});
			}
			if query.starts_with("tool") {
				Ok(sample_payload())
			} else {
				Ok(SearchPayload::classify(json!({
					"main_products": [],
					"main_product_categories": [],
					"main_product_category_groups": []
				})))
			}
		};
		App::new(client, WidgetOptions::default())
	}

	/// Pump the app until the in-flight request settles.
	pub(crate) fn wait_for_results(app: &mut App<'_>, now: Instant) {
		let deadline = Instant::now() + Duration::from_secs(2);
		app.tick(now);
		while app.widget.is_loading() && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(5));
			app.tick(now);
		}
	}

	pub(crate) fn search_for(app: &mut App<'_>, query: &str) -> Instant {
		let start = Instant::now();
		app.set_initial_query(query, start);
		let fired = start + app.widget.options().debounce;
		wait_for_results(app, fired);
		fired
	}

	#[test]
	fn initial_query_is_searched_after_the_debounce() {
		let mut app = sample_app();
		let start = Instant::now();
		app.set_initial_query("tools", start);

		app.tick(start);
		assert!(!app.widget.is_loading());

		let fired = start + app.widget.options().debounce;
		wait_for_results(&mut app, fired);
		assert!(app.widget.overlay_visible());
		assert_eq!(app.widget.result_count(), 3);
		assert_eq!(app.selected_row().map(|row| row.label.as_str()), Some("Tools"));
	}

	#[test]
	fn empty_results_show_the_placeholder_row() {
		let mut app = sample_app();
		search_for(&mut app, "zzz");
		assert!(app.widget.overlay_visible());
		assert_eq!(app.widget.result_count(), 0);
		assert_eq!(app.selected_row(), None);
	}

	#[test]
	fn failures_keep_previous_rows_and_can_be_retried() {
		let mut app = sample_app();
		search_for(&mut app, "tools");
		search_for(&mut app, "down");

		assert!(
			app.widget
				.last_failure()
				.is_some_and(|failure| failure.contains("?q=down is not valid JSON"))
		);
		assert_eq!(app.widget.result_count(), 3);

		app.retry_search();
		assert!(app.widget.is_loading());
		wait_for_results(&mut app, Instant::now());
		assert!(
			app.widget
				.last_failure()
				.is_some_and(|failure| failure.contains("?q=down is not valid JSON"))
		);
	}

	#[test]
	fn compact_mode_follows_the_configured_width() {
		let mut app = sample_app();
		app.update_layout_mode(59);
		assert!(app.compact);
		app.update_layout_mode(80);
		assert!(!app.compact);
	}
}

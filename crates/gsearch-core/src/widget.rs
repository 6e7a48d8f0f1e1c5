//! Headless state machine of the global search widget.
//!
//! [`SearchWidget`] owns the query text, its debounce timer, the request
//! sequence and the rendered rows. Front-ends feed it input, focus and click
//! events, forward the [`SearchRequest`]s it emits to a transport, and hand
//! the settled results back through [`SearchWidget::apply`]. Only the result
//! for the most recently issued request is ever applied.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::client::ClientError;
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::links::Links;
use crate::payload::SearchPayload;
use crate::rows::{RowList, render_rows};
use crate::sequence::RequestSequence;

/// Shortest non-empty query that is sent to the endpoint.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;

/// Tunables for a widget instance.
#[derive(Debug, Clone)]
pub struct WidgetOptions {
	pub debounce: Duration,
	pub min_query_chars: usize,
	pub links: Links,
}

impl Default for WidgetOptions {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			min_query_chars: DEFAULT_MIN_QUERY_CHARS,
			links: Links::default(),
		}
	}
}

/// A request the transport should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub id: u64,
	pub query: String,
}

/// How [`SearchWidget::apply`] treated a settled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
	/// The id was not current; nothing changed.
	Stale,
	/// Rows were rebuilt and the overlay shown.
	Shown,
	/// The payload was well-formed but empty; the placeholder row is shown.
	NoResults,
	/// Error or malformed payload; the overlay was hidden.
	Hidden,
	/// The transport failed; the previous rows were left untouched.
	Failed,
}

/// Position in the widget's state machine, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
	/// Empty input, overlay hidden, nothing cached.
	Idle,
	/// A keystroke armed the debounce timer.
	Debouncing,
	/// A request is in flight.
	Loading,
	/// Rows are rendered and the overlay is visible.
	Shown,
	/// The last response produced nothing to show.
	Empty,
	/// The overlay was dismissed but the last rows are kept for refocus.
	HiddenCached,
}

/// One global search widget instance.
#[derive(Debug)]
pub struct SearchWidget {
	options: WidgetOptions,
	query: String,
	debounce: Debouncer<String>,
	sequence: RequestSequence,
	loading: bool,
	result_count: usize,
	rows: RowList,
	overlay_visible: bool,
	clear_visible: bool,
	last_failure: Option<String>,
	last_query: Option<String>,
}

impl Default for SearchWidget {
	fn default() -> Self {
		Self::new(WidgetOptions::default(), RequestSequence::default())
	}
}

impl SearchWidget {
	/// Create a widget issuing ids from `sequence`.
	#[must_use]
	pub fn new(options: WidgetOptions, sequence: RequestSequence) -> Self {
		let debounce = Debouncer::new(options.debounce);
		Self {
			options,
			query: String::new(),
			debounce,
			sequence,
			loading: false,
			result_count: 0,
			rows: RowList::default(),
			overlay_visible: false,
			clear_visible: false,
			last_failure: None,
			last_query: None,
		}
	}

	/// Record new input text and restart the debounce timer.
	pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
		let text = text.into();
		self.clear_visible = !text.is_empty();
		self.query.clone_from(&text);
		self.debounce.arm(text, now);
	}

	/// Advance the debounce timer. Returns a request when one should be sent.
	pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
		let text = self.debounce.poll(now)?;
		if !text.is_empty() && text.chars().count() < self.options.min_query_chars {
			debug!(query = %text, "query too short, not searching");
			return None;
		}
		self.search(text)
	}

	/// Start a search for `query`. An empty query resets the widget's results
	/// instead of issuing a request.
	pub fn search(&mut self, query: impl Into<String>) -> Option<SearchRequest> {
		let query = query.into();
		self.last_failure = None;
		if query.is_empty() {
			self.sequence.invalidate();
			self.loading = false;
			self.overlay_visible = false;
			self.result_count = 0;
			self.rows.clear();
			self.last_query = None;
			return None;
		}

		let id = self.sequence.next();
		self.loading = true;
		self.last_query = Some(query.clone());
		debug!(id, %query, "search scheduled");
		Some(SearchRequest { id, query })
	}

	/// Re-issue the last query after a transport failure.
	pub fn retry(&mut self) -> Option<SearchRequest> {
		if self.last_failure.is_none() || self.loading {
			return None;
		}
		let query = self.last_query.clone()?;
		self.search(query)
	}

	/// Apply the settled outcome of request `id`.
	pub fn apply(&mut self, id: u64, outcome: Result<SearchPayload, ClientError>) -> Applied {
		if !self.sequence.is_current(id) {
			debug!(id, "discarding response for an outdated query");
			return Applied::Stale;
		}
		self.sequence.settle();
		self.loading = false;

		match outcome {
			Err(err) => {
				warn!(id, error = %err, "search failed; keeping previous results");
				self.last_failure = Some(err.to_string());
				Applied::Failed
			}
			Ok(SearchPayload::ApiError(errors)) => {
				info!(id, %errors, "search endpoint reported an error");
				self.hide_and_forget();
				Applied::Hidden
			}
			Ok(SearchPayload::Malformed(reason)) => {
				warn!(id, %reason, "malformed search payload");
				self.hide_and_forget();
				Applied::Hidden
			}
			Ok(SearchPayload::Results(response)) if response.is_empty() => {
				self.rows = RowList::no_results();
				self.result_count = 0;
				self.overlay_visible = true;
				Applied::NoResults
			}
			Ok(SearchPayload::Results(response)) => {
				self.rows = render_rows(&response, &self.options.links);
				self.result_count = response.total();
				self.overlay_visible = true;
				debug!(id, count = self.result_count, rows = self.rows.len(), "results rendered");
				Applied::Shown
			}
		}
	}

	/// The input gained focus: re-show cached results without fetching.
	pub fn on_focus(&mut self) {
		if self.result_count > 0 {
			self.overlay_visible = true;
		}
	}

	/// A click landed outside the input and overlay.
	pub fn on_outside_click(&mut self) {
		self.overlay_visible = false;
	}

	/// The input lost focus; behaves like an outside click.
	pub fn on_blur(&mut self) {
		self.on_outside_click();
	}

	/// Empty the input and drop everything derived from it.
	pub fn on_clear(&mut self) {
		self.query.clear();
		self.debounce.cancel();
		self.sequence.invalidate();
		self.loading = false;
		self.overlay_visible = false;
		self.clear_visible = false;
		self.result_count = 0;
		self.rows.clear();
		self.last_failure = None;
		self.last_query = None;
	}

	fn hide_and_forget(&mut self) {
		self.overlay_visible = false;
		self.result_count = 0;
		self.rows.clear();
	}

	#[must_use]
	pub fn phase(&self) -> WidgetPhase {
		if self.debounce.is_pending() {
			WidgetPhase::Debouncing
		} else if self.loading {
			WidgetPhase::Loading
		} else if self.overlay_visible {
			WidgetPhase::Shown
		} else if self.result_count > 0 {
			WidgetPhase::HiddenCached
		} else if self.query.is_empty() {
			WidgetPhase::Idle
		} else {
			WidgetPhase::Empty
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn rows(&self) -> &RowList {
		&self.rows
	}

	#[must_use]
	pub fn result_count(&self) -> usize {
		self.result_count
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn overlay_visible(&self) -> bool {
		self.overlay_visible
	}

	#[must_use]
	pub fn clear_visible(&self) -> bool {
		self.clear_visible
	}

	/// Message of the last transport failure, until the next search.
	#[must_use]
	pub fn last_failure(&self) -> Option<&str> {
		self.last_failure.as_deref()
	}

	/// Time left before the pending keystroke fires.
	#[must_use]
	pub fn time_until_search(&self, now: Instant) -> Option<Duration> {
		self.debounce.time_until_ready(now)
	}

	#[must_use]
	pub fn options(&self) -> &WidgetOptions {
		&self.options
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::client::decode_failure;
	use crate::model::{Category, Product, SearchResponse};

	const STEP: Duration = Duration::from_millis(500);

	fn widget() -> SearchWidget {
		SearchWidget::default()
	}

	fn type_and_settle(widget: &mut SearchWidget, text: &str, now: Instant) -> Option<SearchRequest> {
		widget.on_input(text, now);
		widget.poll(now + STEP)
	}

	fn tools_response() -> SearchPayload {
		SearchPayload::Results(SearchResponse {
			main_products: vec![Product {
				id: "p1".into(),
				name: "Widget".into(),
				images: Vec::new(),
				main_product_category: "c1".into(),
			}],
			main_product_categories: vec![Category {
				id: "c1".into(),
				name: "Tools".into(),
				icon: Some("i.png".into()),
				group: None,
			}],
			main_product_category_groups: Vec::new(),
		})
	}

	fn shown_widget() -> SearchWidget {
		let mut widget = widget();
		let request = type_and_settle(&mut widget, "tool", Instant::now()).expect("request");
		assert_eq!(widget.apply(request.id, Ok(tools_response())), Applied::Shown);
		widget
	}

	#[test]
	fn short_queries_never_issue_requests() {
		let start = Instant::now();
		for text in ["a", "ab", "é", "éé"] {
			let mut widget = widget();
			assert_eq!(type_and_settle(&mut widget, text, start), None, "{text}");
			assert!(!widget.is_loading());
			assert!(!widget.overlay_visible());
		}
	}

	#[test]
	fn empty_query_hides_overlay_without_request() {
		let mut widget = shown_widget();
		let request = type_and_settle(&mut widget, "", Instant::now());

		assert_eq!(request, None);
		assert!(!widget.overlay_visible());
		assert_eq!(widget.result_count(), 0);
		assert_eq!(widget.phase(), WidgetPhase::Idle);
	}

	#[test]
	fn one_request_per_settled_edit() {
		let start = Instant::now();
		let mut widget = widget();
		widget.on_input("too", start);
		widget.on_input("tool", start + Duration::from_millis(200));
		widget.on_input("tools", start + Duration::from_millis(400));

		assert_eq!(widget.poll(start + Duration::from_millis(800)), None);
		assert_eq!(widget.phase(), WidgetPhase::Debouncing);

		let request = widget
			.poll(start + Duration::from_millis(900))
			.expect("request after quiet period");
		assert_eq!(request.query, "tools");
		assert_eq!(widget.phase(), WidgetPhase::Loading);
		assert_eq!(widget.poll(start + Duration::from_secs(5)), None);
	}

	#[test]
	fn category_and_product_rows_are_rendered() {
		let widget = shown_widget();
		let labels: Vec<_> = widget.rows().iter().map(|row| row.label.as_str()).collect();
		assert_eq!(labels, ["Tools", "Widget"]);
		assert_eq!(widget.result_count(), 2);
		assert!(widget.overlay_visible());
		assert!(!widget.is_loading());
		assert_eq!(widget.phase(), WidgetPhase::Shown);
	}

	#[test]
	fn empty_response_shows_placeholder() {
		let mut widget = widget();
		let request = type_and_settle(&mut widget, "zzz", Instant::now()).unwrap();
		let applied = widget.apply(
			request.id,
			Ok(SearchPayload::Results(SearchResponse::default())),
		);

		assert_eq!(applied, Applied::NoResults);
		assert!(widget.overlay_visible());
		assert_eq!(widget.result_count(), 0);
		assert_eq!(widget.rows().len(), 1);
		assert_eq!(widget.rows().get(0).unwrap().label, "No results found");
	}

	#[test]
	fn error_payload_hides_overlay_and_clears_rows() {
		let mut widget = shown_widget();
		let request = type_and_settle(&mut widget, "bad", Instant::now()).unwrap();
		let applied = widget.apply(request.id, Ok(SearchPayload::ApiError(json!(["bad query"]))));

		assert_eq!(applied, Applied::Hidden);
		assert!(!widget.overlay_visible());
		assert!(widget.rows().is_empty());
		assert_eq!(widget.result_count(), 0);
		assert_eq!(widget.phase(), WidgetPhase::Empty);
	}

	#[test]
	fn malformed_payload_is_treated_like_an_error() {
		let mut widget = shown_widget();
		let request = type_and_settle(&mut widget, "odd", Instant::now()).unwrap();
		let applied = widget.apply(
			request.id,
			Ok(SearchPayload::Malformed("missing `main_products`".into())),
		);

		assert_eq!(applied, Applied::Hidden);
		assert!(!widget.overlay_visible());
		assert!(widget.rows().is_empty());
	}

	#[test]
	fn transport_failure_keeps_previous_rows() {
		let mut widget = shown_widget();
		let request = type_and_settle(&mut widget, "next", Instant::now()).unwrap();
		let applied = widget.apply(request.id, Err(decode_failure("https://search.test/?q=next")));

		assert_eq!(applied, Applied::Failed);
		assert!(!widget.is_loading());
		assert!(widget.overlay_visible());
		assert_eq!(widget.rows().len(), 2);
		assert!(
			widget
				.last_failure()
				.is_some_and(|failure| failure.contains("?q=next is not valid JSON"))
		);

		let retry = widget.retry().expect("retry request");
		assert_eq!(retry.query, "next");
		assert!(retry.id > request.id);
		assert_eq!(widget.last_failure(), None);
	}

	#[test]
	fn retry_requires_a_failure() {
		let mut widget = shown_widget();
		assert_eq!(widget.retry(), None);
	}

	#[test]
	fn outside_click_hides_and_focus_reshows_without_request() {
		let mut widget = shown_widget();
		widget.on_outside_click();
		assert!(!widget.overlay_visible());
		assert_eq!(widget.phase(), WidgetPhase::HiddenCached);
		assert_eq!(widget.result_count(), 2);

		widget.on_focus();
		assert!(widget.overlay_visible());
		assert!(!widget.is_loading());
		assert_eq!(widget.poll(Instant::now() + Duration::from_secs(10)), None);
	}

	#[test]
	fn focus_with_zero_results_keeps_overlay_hidden() {
		let mut widget = widget();
		let request = type_and_settle(&mut widget, "zzz", Instant::now()).unwrap();
		widget.apply(
			request.id,
			Ok(SearchPayload::Results(SearchResponse::default())),
		);
		widget.on_blur();
		widget.on_focus();
		assert!(!widget.overlay_visible());
	}

	#[test]
	fn stale_responses_are_discarded() {
		let start = Instant::now();
		let mut widget = widget();
		let first = type_and_settle(&mut widget, "tool", start).unwrap();
		let second = type_and_settle(&mut widget, "tools", start + STEP).unwrap();

		assert_eq!(
			widget.apply(second.id, Ok(SearchPayload::Results(SearchResponse::default()))),
			Applied::NoResults
		);
		assert_eq!(widget.apply(first.id, Ok(tools_response())), Applied::Stale);
		assert_eq!(widget.result_count(), 0);
		assert_eq!(widget.rows().get(0).unwrap().label, "No results found");
	}

	#[test]
	fn out_of_order_arrival_keeps_loading_until_current_settles() {
		let start = Instant::now();
		let mut widget = widget();
		let first = type_and_settle(&mut widget, "tool", start).unwrap();
		let second = type_and_settle(&mut widget, "tools", start + STEP).unwrap();

		assert_eq!(widget.apply(first.id, Ok(tools_response())), Applied::Stale);
		assert!(widget.is_loading());
		assert_eq!(widget.apply(second.id, Ok(tools_response())), Applied::Shown);
		assert!(!widget.is_loading());
	}

	#[test]
	fn clear_resets_to_idle_and_drops_in_flight_results() {
		let start = Instant::now();
		let mut widget = shown_widget();
		let request = type_and_settle(&mut widget, "pump", start).unwrap();
		assert!(widget.clear_visible());

		widget.on_clear();
		assert_eq!(widget.query(), "");
		assert!(!widget.overlay_visible());
		assert!(!widget.clear_visible());
		assert_eq!(widget.phase(), WidgetPhase::Idle);
		assert_eq!(widget.apply(request.id, Ok(tools_response())), Applied::Stale);
	}

	#[test]
	fn clear_cancels_pending_keystroke() {
		let start = Instant::now();
		let mut widget = widget();
		widget.on_input("tools", start);
		widget.on_clear();
		assert_eq!(widget.poll(start + STEP), None);
	}

	#[test]
	fn count_tracks_latest_well_formed_response() {
		let mut widget = shown_widget();
		assert_eq!(widget.result_count(), 2);

		let request = type_and_settle(&mut widget, "again", Instant::now()).unwrap();
		widget.apply(request.id, Err(decode_failure("https://search.test/?q=again")));
		assert_eq!(widget.result_count(), 2);
	}

	#[test]
	fn custom_minimum_length_is_respected() {
		let options = WidgetOptions {
			min_query_chars: 1,
			..WidgetOptions::default()
		};
		let mut widget = SearchWidget::new(options, RequestSequence::default());
		assert!(type_and_settle(&mut widget, "a", Instant::now()).is_some());
	}
}

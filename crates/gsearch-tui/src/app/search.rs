//! Communication with the background search worker.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

use gsearch_core::{Applied, SearchCommand, SearchRequest, SearchResult};
use tracing::{debug, warn};

use super::App;

pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	disconnected: bool,
}

impl SearchRuntime {
	pub(crate) fn new(tx: Sender<SearchCommand>, rx: Receiver<SearchResult>) -> Self {
		Self {
			tx,
			rx,
			disconnected: false,
		}
	}

	pub(crate) fn dispatch(&mut self, request: SearchRequest) {
		let SearchRequest { id, query } = request;
		if self.tx.send(SearchCommand::Query { id, query }).is_err() && !self.disconnected {
			warn!("search worker is gone; requests are dropped");
			self.disconnected = true;
		}
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}

impl App<'_> {
	/// Fire the debounced keystroke if its quiet period has elapsed.
	pub(crate) fn pump_debounce(&mut self, now: Instant) {
		if let Some(request) = self.widget.poll(now) {
			self.search.dispatch(request);
		}
	}

	/// Drain settled requests from the worker into the widget.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(result) => self.handle_search_result(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_search_result(&mut self, result: SearchResult) {
		let SearchResult { id, query, outcome } = result;
		match self.widget.apply(id, outcome) {
			Applied::Shown | Applied::NoResults | Applied::Hidden => {
				self.overlay.reset_selection(self.widget.rows());
			}
			Applied::Stale => debug!(id, %query, "ignored outdated result"),
			Applied::Failed => {}
		}
	}

	/// Re-issue the last query after a failed request.
	pub(crate) fn retry_search(&mut self) {
		if let Some(request) = self.widget.retry() {
			self.search.dispatch(request);
		}
	}
}

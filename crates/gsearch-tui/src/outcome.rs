use gsearch_core::ResultRow;
use serde::Serialize;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// Whether the user picked a row rather than cancelling.
	pub accepted: bool,
	/// Prompt text at exit.
	pub query: String,
	/// The picked row, present only when `accepted` is true.
	pub selection: Option<ResultRow>,
}

impl SearchOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(query: impl Into<String>, row: ResultRow) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(row),
		}
	}

	/// Link of the picked row.
	#[must_use]
	pub fn link(&self) -> Option<&str> {
		self.selection.as_ref()?.link.as_deref()
	}
}

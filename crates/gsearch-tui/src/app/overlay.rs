use gsearch_core::RowList;
use ratatui::widgets::ListState;

use crate::components::{OverlayAreas, point_in_rect};

/// Selection and hit-test geometry of the results overlay.
#[derive(Debug, Default)]
pub(crate) struct OverlayState {
	pub(crate) list_state: ListState,
	/// Where the overlay was drawn in the last frame; `None` while hidden.
	pub(crate) areas: Option<OverlayAreas>,
}

impl OverlayState {
	/// Select the first navigable row, or nothing.
	pub(crate) fn reset_selection(&mut self, rows: &RowList) {
		let first = rows.iter().position(|row| row.is_navigable());
		self.list_state = ListState::default().with_selected(first);
	}

	pub(crate) fn selected(&self) -> Option<usize> {
		self.list_state.selected()
	}

	pub(crate) fn move_up(&mut self, rows: &RowList) {
		if let Some(selected) = self.selected() {
			let previous = (0..selected)
				.rev()
				.find(|&index| rows.get(index).is_some_and(|row| row.is_navigable()));
			if let Some(index) = previous {
				self.list_state.select(Some(index));
			}
		}
	}

	pub(crate) fn move_down(&mut self, rows: &RowList) {
		let start = self.selected().map_or(0, |selected| selected + 1);
		let next = (start..rows.len())
			.find(|&index| rows.get(index).is_some_and(|row| row.is_navigable()));
		if let Some(index) = next {
			self.list_state.select(Some(index));
		}
	}

	/// Row index under a terminal cell, if the cell lies on a rendered row.
	pub(crate) fn row_at(&self, column: u16, row: u16, rows: &RowList) -> Option<usize> {
		let area = self.areas?.rows;
		if !point_in_rect(column, row, area) {
			return None;
		}
		let index = self.list_state.offset() + usize::from(row - area.y);
		(index < rows.len()).then_some(index)
	}

	pub(crate) fn contains(&self, column: u16, row: u16) -> bool {
		self.areas
			.is_some_and(|areas| point_in_rect(column, row, areas.frame))
	}

	pub(crate) fn close_button_contains(&self, column: u16, row: u16) -> bool {
		self.areas
			.and_then(|areas| areas.close_button)
			.is_some_and(|button| point_in_rect(column, row, button))
	}
}

use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::components::point_in_rect;
use crate::outcome::SearchOutcome;

impl App<'_> {
	/// Process a keyboard event and return an outcome if the session ends.
	pub(crate) fn handle_key(
		&mut self,
		key: KeyEvent,
		now: Instant,
	) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return Ok(Some(self.cancelled())),
			KeyCode::Char('u') if ctrl => self.clear_query(),
			KeyCode::Char('r') if ctrl => self.retry_search(),
			KeyCode::Esc => {
				if !self.widget.overlay_visible() {
					return Ok(Some(self.cancelled()));
				}
				self.widget.on_outside_click();
			}
			KeyCode::Enter => {
				if let Some(outcome) = self.accept_selection() {
					return Ok(Some(outcome));
				}
				self.widget.on_focus();
			}
			KeyCode::Up if self.widget.overlay_visible() => {
				self.overlay.move_up(self.widget.rows());
			}
			KeyCode::Down if self.widget.overlay_visible() => {
				self.overlay.move_down(self.widget.rows());
			}
			_ => {
				if self.search_input.input(key) {
					self.widget.on_input(self.search_input.text(), now);
				}
			}
		}
		Ok(None)
	}

	/// Process a mouse event; double selection of a row accepts it.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<SearchOutcome> {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => return self.handle_click(column, row),
			MouseEventKind::ScrollUp if self.overlay_hit(column, row) => {
				self.overlay.move_up(self.widget.rows());
			}
			MouseEventKind::ScrollDown if self.overlay_hit(column, row) => {
				self.overlay.move_down(self.widget.rows());
			}
			_ => {}
		}
		None
	}

	/// The terminal window gained or lost focus.
	pub(crate) fn handle_focus(&mut self, gained: bool) {
		if gained {
			self.widget.on_focus();
		} else {
			self.widget.on_blur();
		}
	}

	fn handle_click(&mut self, column: u16, row: u16) -> Option<SearchOutcome> {
		if self
			.prompt
			.clear_button
			.is_some_and(|button| point_in_rect(column, row, button))
		{
			self.clear_query();
			return None;
		}
		if point_in_rect(column, row, self.prompt.input) {
			self.widget.on_focus();
			return None;
		}
		if !self.overlay_hit(column, row) {
			self.widget.on_outside_click();
			return None;
		}
		if self.overlay.close_button_contains(column, row) {
			self.widget.on_outside_click();
			return None;
		}

		let index = self.overlay.row_at(column, row, self.widget.rows())?;
		let navigable = self
			.widget
			.rows()
			.get(index)
			.is_some_and(|row| row.is_navigable());
		if !navigable {
			return None;
		}
		if self.overlay.selected() == Some(index) {
			return self.accept_selection();
		}
		self.overlay.list_state.select(Some(index));
		None
	}

	fn overlay_hit(&self, column: u16, row: u16) -> bool {
		self.widget.overlay_visible() && self.overlay.contains(column, row)
	}

	fn clear_query(&mut self) {
		self.search_input.clear();
		self.widget.on_clear();
		self.overlay.reset_selection(self.widget.rows());
	}

	fn accept_selection(&self) -> Option<SearchOutcome> {
		let row = self.selected_row().filter(|row| row.is_navigable())?;
		Some(SearchOutcome::accepted(self.search_input.text(), row.clone()))
	}

	fn cancelled(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.search_input.text())
	}
}

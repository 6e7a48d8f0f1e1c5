//! Single-line query prompt backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text input holding the search query.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	style: Style,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			style: Style::default(),
		};
		input.set_text(initial);
		input
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the text and move the cursor to its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.lines().next().unwrap_or_default().to_string();
		self.textarea = TextArea::new(vec![single_line]);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.set_style(self.style);
		self.textarea.move_cursor(CursorMove::End);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.textarea.set_style(style);
	}

	/// Feed a key press to the editor. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(key) || key.code == KeyCode::Tab {
			return false;
		}
		let before = self.textarea.lines().to_vec();
		self.textarea.input(key);
		self.textarea.lines() != before.as_slice()
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub input: &'a QueryInput<'a>,
	/// Shown while the query is empty.
	pub placeholder: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
	/// Label of the clear control, `None` while it is hidden.
	pub clear_button: Option<&'a str>,
}

/// Request status shown at the right edge of the prompt.
pub struct ProgressState<'a> {
	pub loading: bool,
	/// Hint rendered after a failed request.
	pub failure_hint: Option<&'a str>,
	pub throbber_state: &'a ThrobberState,
}

/// Regions of the prompt that react to mouse clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptAreas {
	pub input: Rect,
	pub clear_button: Option<Rect>,
}

/// Render the prompt row and report where its controls landed.
pub fn render_prompt(
	frame: &mut Frame,
	prompt: PromptContext<'_>,
	progress: ProgressState<'_>,
) -> PromptAreas {
	let PromptContext {
		input,
		placeholder,
		area,
		theme,
		clear_button,
	} = prompt;
	if area.width == 0 || area.height == 0 {
		return PromptAreas::default();
	}

	let area = Rect { height: 1, ..area };
	let (input_area, clear_area) = match clear_button {
		Some(label) => split_button(area, label),
		None => (area, None),
	};

	input.render(frame, input_area);
	if input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}
	if let (Some(label), Some(button)) = (clear_button, clear_area) {
		frame
			.buffer_mut()
			.set_stringn(button.x, button.y, label, button.width as usize, theme.button_style());
	}
	render_progress(frame, input_area, &progress, theme);

	PromptAreas {
		input: input_area,
		clear_button: clear_area,
	}
}

/// Reserve the right edge of `area` for a button, keeping one cell of gap.
fn split_button(area: Rect, label: &str) -> (Rect, Option<Rect>) {
	let width = label.width() as u16;
	if width == 0 || width + 1 >= area.width {
		return (area, None);
	}
	let button = Rect {
		x: area.right() - width,
		width,
		..area
	};
	let rest = Rect {
		width: area.width - width - 1,
		..area
	};
	(rest, Some(button))
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if text.is_empty() {
		return;
	}
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(text, theme.empty_style())),
		area.width,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: &ProgressState<'_>, theme: &Theme) {
	let muted = theme.empty_style();
	let line = if progress.loading {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		Line::from(spinner.to_symbol_span(progress.throbber_state))
	} else if let Some(hint) = progress.failure_hint {
		Line::from(Span::styled(hint, muted))
	} else {
		return;
	};

	let line_width = line.width() as u16;
	if line_width == 0 || area.width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Never draw over the end of the typed query.
	let last_glyph = (area.left()..area.right())
		.rev()
		.find(|&x| {
			buffer
				.cell((x, area.top()))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		});
	if let Some(last_x) = last_glyph {
		start_x = start_x.max(last_x.saturating_add(2));
	}
	if start_x >= area.right() {
		return;
	}

	let width = area.right() - start_x;
	buffer.set_line(start_x, area.top(), &line, width);
}

use gsearch_core::{ResultRow, RowKind, RowList};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Clear, HighlightSpacing, List, ListItem, ListState, Paragraph, Scrollbar,
	ScrollbarOrientation, ScrollbarState,
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Border rows plus the footer.
const CHROME_HEIGHT: u16 = 3;

/// Argument bundle for rendering the results overlay.
pub struct OverlayContext<'a> {
	pub rows: &'a RowList,
	pub title: &'a str,
	/// Footer text, e.g. `Showing 3 results`.
	pub footer: &'a str,
	/// Label of the close control; only drawn in compact mode.
	pub close_button: Option<&'a str>,
	pub theme: &'a Theme,
}

/// Where the overlay and its interactive parts were drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayAreas {
	pub frame: Rect,
	pub rows: Rect,
	pub close_button: Option<Rect>,
}

/// Height needed to show every row without scrolling, capped by `available`.
#[must_use]
pub fn overlay_height(row_count: usize, available: u16) -> u16 {
	let wanted = u16::try_from(row_count)
		.unwrap_or(u16::MAX)
		.saturating_add(CHROME_HEIGHT);
	wanted.min(available)
}

/// Draw the overlay over `area`, clearing whatever was underneath.
pub fn render_overlay(
	frame: &mut Frame,
	area: Rect,
	overlay: OverlayContext<'_>,
	list_state: &mut ListState,
) -> OverlayAreas {
	let OverlayContext {
		rows,
		title,
		footer,
		close_button,
		theme,
	} = overlay;

	frame.render_widget(Clear, area);
	let block = Block::bordered()
		.title(Span::styled(format!(" {title} "), theme.header))
		.border_style(theme.empty_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return OverlayAreas {
			frame: area,
			..OverlayAreas::default()
		};
	}

	let (close_row, list_area, footer_area) = if close_button.is_some() {
		let [close_row, list_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(inner);
		(Some(close_row), list_area, footer_area)
	} else {
		let [list_area, footer_area] =
			Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
		(None, list_area, footer_area)
	};

	let close_area = match (close_button, close_row) {
		(Some(label), Some(row)) => render_close_button(frame, row, label, theme),
		_ => None,
	};

	render_rows(frame, list_area, rows, list_state, theme);

	frame.render_widget(
		Paragraph::new(Span::styled(footer, theme.empty_style())),
		footer_area,
	);

	OverlayAreas {
		frame: area,
		rows: list_area,
		close_button: close_area,
	}
}

fn render_close_button(frame: &mut Frame, row: Rect, label: &str, theme: &Theme) -> Option<Rect> {
	let width = (label.width() as u16).min(row.width);
	if width == 0 {
		return None;
	}
	let button = Rect {
		x: row.right() - width,
		width,
		..row
	};
	frame
		.buffer_mut()
		.set_stringn(button.x, button.y, label, width as usize, theme.button_style());
	Some(button)
}

fn render_rows(
	frame: &mut Frame,
	area: Rect,
	rows: &RowList,
	list_state: &mut ListState,
	theme: &Theme,
) {
	if area.height == 0 {
		return;
	}
	let needs_scrollbar = rows.len() > area.height as usize;
	let label_width = (area.width as usize)
		.saturating_sub(HIGHLIGHT_SYMBOL.width())
		.saturating_sub(usize::from(needs_scrollbar));

	let items: Vec<ListItem> = rows
		.iter()
		.map(|row| ListItem::new(row_line(row, label_width, theme)))
		.collect();
	let list = List::new(items)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, area, list_state);

	if needs_scrollbar {
		let mut scrollbar_state =
			ScrollbarState::new(rows.len()).position(list_state.selected().unwrap_or(0));
		let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
			.begin_symbol(None)
			.end_symbol(None)
			.thumb_style(theme.header)
			.track_style(theme.empty_style());
		frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
	}
}

fn marker(kind: RowKind) -> &'static str {
	match kind {
		RowKind::Category => "▸ ",
		RowKind::Product => "· ",
		RowKind::Group => "» ",
		RowKind::Notice => "",
	}
}

/// One overlay line: indentation, a kind marker, then the truncated label.
fn row_line(row: &ResultRow, width: usize, theme: &Theme) -> Line<'static> {
	let indent = "  ".repeat(usize::from(row.indent));
	let prefix = format!("{indent}{}", marker(row.kind));
	let available = width.saturating_sub(prefix.width());
	let (label, _) = row.label.unicode_truncate(available);
	Line::from(vec![
		Span::styled(prefix, theme.empty_style()),
		Span::styled(label.to_string(), theme.row_style(row.kind)),
	])
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use crate::components::{
	OverlayContext, ProgressState, PromptContext, overlay_height, render_overlay, render_prompt,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.update_layout_mode(frame.area().width);
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [prompt_area, body] =
			Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

		let labels = &self.ui.labels;
		let prompt = PromptContext {
			input: &self.search_input,
			placeholder: &labels.placeholder,
			area: prompt_area,
			theme: &self.style.theme,
			clear_button: self
				.widget
				.clear_visible()
				.then_some(labels.clear_button.as_str()),
		};
		let progress = ProgressState {
			loading: self.widget.is_loading(),
			failure_hint: self
				.widget
				.last_failure()
				.map(|_| labels.failure_hint.as_str()),
			throbber_state: &self.throbber_state,
		};
		self.prompt = render_prompt(frame, prompt, progress);

		if !self.widget.overlay_visible() || body.height == 0 {
			self.overlay.areas = None;
			return;
		}

		// Compact terminals give the whole screen below the prompt to the overlay.
		let overlay_area = if self.compact {
			body
		} else {
			Rect {
				height: overlay_height(self.widget.rows().len(), body.height),
				..body
			}
		};
		let footer = labels.count_label(self.widget.result_count());
		let overlay = OverlayContext {
			rows: self.widget.rows(),
			title: &labels.overlay_title,
			footer: &footer,
			close_button: self.compact.then_some(labels.close_button.as_str()),
			theme: &self.style.theme,
		};
		let areas = render_overlay(frame, overlay_area, overlay, &mut self.overlay.list_state);
		self.overlay.areas = Some(areas);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::app::state::tests::{sample_app, search_for};

	fn render(app: &mut App<'_>, width: u16, height: u16) -> Vec<String> {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		let buffer = terminal.backend().buffer();
		(0..height)
			.map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
			.collect()
	}

	#[test]
	fn idle_app_shows_only_the_placeholder() {
		let mut app = sample_app();
		let lines = render(&mut app, 80, 10);
		assert!(lines[0].contains("Search products"));
		assert!(lines[1..].iter().all(|line| line.trim().is_empty()));
		assert_eq!(app.overlay.areas, None);
	}

	#[test]
	fn results_render_below_the_prompt_with_count() {
		let mut app = sample_app();
		search_for(&mut app, "tools");
		let lines = render(&mut app, 80, 12);

		assert!(lines[0].contains("tools"));
		assert!(lines[0].trim_end().ends_with("[x]"));
		assert!(lines[1].contains("Results"));
		assert!(lines[2].contains("Tools"));
		assert!(lines[3].contains("Widget"));
		assert!(lines[4].contains("All Waste"));
		assert!(lines[5].contains("Showing 3 results"));
		assert!(!lines.iter().any(|line| line.contains("[ Close ]")));
		assert_eq!(app.overlay.areas.map(|areas| areas.frame.height), Some(6));
	}

	#[test]
	fn narrow_terminals_use_the_fullscreen_overlay() {
		let mut app = sample_app();
		search_for(&mut app, "tools");
		let lines = render(&mut app, 40, 12);

		assert!(app.compact);
		assert!(lines[2].contains("[ Close ]"));
		assert!(lines[10].contains("Showing 3 results"));
		assert_eq!(app.overlay.areas.map(|areas| areas.frame.height), Some(11));
	}

	#[test]
	fn empty_result_shows_no_results_row() {
		let mut app = sample_app();
		search_for(&mut app, "zzz");
		let lines = render(&mut app, 80, 8);
		assert!(lines[2].contains("No results found"));
		assert!(lines[3].contains("Showing 0 results"));
	}

	#[test]
	fn hidden_overlay_is_not_drawn() {
		let mut app = sample_app();
		search_for(&mut app, "tools");
		app.widget.on_outside_click();
		let lines = render(&mut app, 80, 8);
		assert!(!lines.iter().any(|line| line.contains("Results")));
		assert_eq!(app.overlay.areas, None);
	}

	#[test]
	fn failure_hint_is_shown_in_the_prompt() {
		let mut app = sample_app();
		search_for(&mut app, "down");
		let lines = render(&mut app, 80, 4);
		assert!(lines[0].contains("ctrl+r to retry"));
	}
}

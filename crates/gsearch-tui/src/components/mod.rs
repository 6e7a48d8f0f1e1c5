//! Widgets drawn by the front-end.

/// Results overlay with footer and close control.
pub mod overlay;
/// Query prompt with clear control and progress indicator.
pub mod prompt;

use ratatui::layout::{Position, Rect};

pub use overlay::{OverlayAreas, OverlayContext, overlay_height, render_overlay};
pub use prompt::{ProgressState, PromptAreas, PromptContext, render_prompt};

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	area.contains(Position::new(column, row))
}

//! Vertical scrollbar for overflowing lists.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scrolling metrics for a viewport over `content_length` rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Empty metrics when either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Part of `area` left for content once the scrollbar takes its column.
	#[must_use]
	pub fn content_area(&self, area: Rect) -> Rect {
		if self.needs_scrollbar {
			Rect {
				width: area.width.saturating_sub(1),
				..area
			}
		} else {
			area
		}
	}

	/// State for the ratatui scrollbar at the given top row.
	#[must_use]
	pub fn state(&self, offset: usize) -> ScrollbarState {
		ScrollbarState::new(self.max_scroll.saturating_add(1))
			.viewport_content_length(self.viewport_len)
			.position(offset.min(self.max_scroll))
	}
}

/// Whether the cell at (`column`, `row`) lies inside `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Draw a scrollbar on the right edge of `area` when the content overflows.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	offset: usize,
	theme: &Theme,
) {
	if !metrics.needs_scrollbar || area.width == 0 {
		return;
	}
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border);

	let bar = Rect {
		x: area.x + area.width - 1,
		y: area.y,
		width: 1,
		height: area.height,
	};
	let mut state = metrics.state(offset);
	frame.render_stateful_widget(scrollbar, bar, &mut state);
}

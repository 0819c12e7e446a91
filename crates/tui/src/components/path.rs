//! Text field for a file or folder path with a browse button beside it.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::components::{ButtonBar, LineInput, point_in_rect};
use crate::style::Theme;

pub const BROWSE_LABEL: &str = "Browse...";

#[derive(Debug, Clone, Default)]
pub struct PathField {
	input: LineInput,
	browse: ButtonBar,
	area: Rect,
}

impl PathField {
	#[must_use]
	pub fn new(text: &str) -> Self {
		Self {
			input: LineInput::new(text),
			browse: ButtonBar::new([BROWSE_LABEL]),
			area: Rect::default(),
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.input.text()
	}

	pub fn set_text(&mut self, text: &str) {
		self.input.set_text(text);
	}

	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		self.input.handle_key(key)
	}

	/// Whether a click landed on the browse button.
	#[must_use]
	pub fn browse_hit(&self, column: u16, row: u16) -> bool {
		self.browse.hit(column, row).is_some()
	}

	/// Whether a click landed anywhere on the field.
	#[must_use]
	pub fn contains(&self, column: u16, row: u16) -> bool {
		point_in_rect(column, row, self.area)
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, label: &str, focused: bool, theme: &Theme) {
		self.area = area;
		let [input, button] =
			Layout::horizontal([Constraint::Fill(1), Constraint::Length(self.browse.width() + 1)])
				.areas(area);
		self.input.render(frame, input, label, focused, theme);
		let button_row = Rect {
			y: button.y + button.height / 2,
			height: button.height.min(1),
			..button
		};
		self.browse.render(frame, button_row, None, theme);
	}
}

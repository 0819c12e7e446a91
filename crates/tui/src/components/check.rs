//! Labelled check box.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::style::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckBox {
	label: String,
	checked: bool,
}

impl CheckBox {
	#[must_use]
	pub fn new(label: impl Into<String>, checked: bool) -> Self {
		Self {
			label: label.into(),
			checked,
		}
	}

	#[must_use]
	pub fn label(&self) -> &str {
		&self.label
	}

	#[must_use]
	pub fn is_checked(&self) -> bool {
		self.checked
	}

	pub fn set_checked(&mut self, checked: bool) {
		self.checked = checked;
	}

	pub fn toggle(&mut self) {
		self.checked = !self.checked;
	}

	/// Space toggles.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key.code == KeyCode::Char(' ') {
			self.toggle();
			return true;
		}
		false
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		let mark = if self.checked { "[x]" } else { "[ ]" };
		let style = if focused { theme.cursor } else { theme.prompt };
		frame.render_widget(
			Paragraph::new(Span::styled(format!("{mark} {}", self.label), style)),
			area,
		);
	}
}

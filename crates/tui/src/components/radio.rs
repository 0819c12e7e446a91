//! Mutually exclusive options drawn on one line.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::components::point_in_rect;
use crate::style::Theme;

const GAP: u16 = 3;

/// Radio buttons; possibly none selected until the user picks one.
#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
	labels: Vec<String>,
	selected: Option<usize>,
	areas: Vec<Rect>,
}

impl RadioGroup {
	#[must_use]
	pub fn new<I, S>(labels: I, selected: Option<usize>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
		let selected = selected.filter(|&index| index < labels.len());
		Self {
			labels,
			selected,
			areas: Vec::new(),
		}
	}

	#[must_use]
	pub fn labels(&self) -> &[String] {
		&self.labels
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn select(&mut self, index: usize) {
		if index < self.labels.len() {
			self.selected = Some(index);
		}
	}

	/// Left/Right move the choice; Space picks the first option when none is
	/// selected. Returns whether the selection changed.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		let before = self.selected;
		let last = self.labels.len().saturating_sub(1);
		match (key.code, self.selected) {
			(_, _) if self.labels.is_empty() => {}
			(KeyCode::Left, Some(index)) => self.selected = Some(index.saturating_sub(1)),
			(KeyCode::Right, Some(index)) => self.selected = Some((index + 1).min(last)),
			(KeyCode::Left | KeyCode::Right | KeyCode::Char(' '), None) => self.selected = Some(0),
			_ => {}
		}
		before != self.selected
	}

	/// Select the option under a click.
	pub fn click(&mut self, column: u16, row: u16) -> bool {
		match self.areas.iter().position(|area| point_in_rect(column, row, *area)) {
			Some(index) => {
				self.selected = Some(index);
				true
			}
			None => false,
		}
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		self.areas.clear();
		let mut spans = Vec::new();
		let mut x = area.x;
		for (index, label) in self.labels.iter().enumerate() {
			let chosen = self.selected == Some(index);
			let text = format!("({}) {label}", if chosen { "•" } else { " " });
			let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
			self.areas
				.push(Rect::new(x, area.y, width.min(area.right().saturating_sub(x)), 1));
			let style = match (chosen, focused) {
				(true, true) => theme.cursor,
				(true, false) => theme.marked,
				_ => theme.prompt,
			};
			if index > 0 {
				spans.push(Span::raw(" ".repeat(usize::from(GAP))));
			}
			spans.push(Span::styled(text, style));
			x = x.saturating_add(width).saturating_add(GAP);
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::{buffer_to_string, press};

	#[test]
	fn arrows_move_between_options() {
		let mut group = RadioGroup::new(["Excel", "CSV"], Some(0));
		assert!(group.handle_key(press(KeyCode::Right)));
		assert_eq!(group.selected(), Some(1));
		assert!(!group.handle_key(press(KeyCode::Right)));
		assert!(group.handle_key(press(KeyCode::Left)));
		assert_eq!(group.selected(), Some(0));
	}

	#[test]
	fn unset_group_takes_first_on_space() {
		let mut group = RadioGroup::new(["A", "B"], Some(7));
		assert_eq!(group.selected(), None);
		assert!(group.handle_key(press(KeyCode::Char(' '))));
		assert_eq!(group.selected(), Some(0));
	}

	#[test]
	fn render_and_click() {
		let mut group = RadioGroup::new(["Excel", "CSV"], Some(1));
		let mut terminal = Terminal::new(TestBackend::new(24, 1)).expect("terminal");
		terminal
			.draw(|frame| group.render(frame, frame.area(), false, &Theme::fallback()))
			.expect("draw");
		assert_eq!(
			buffer_to_string(terminal.backend().buffer()).trim_end(),
			"( ) Excel   (•) CSV"
		);
		assert!(group.click(2, 0));
		assert_eq!(group.selected(), Some(0));
		assert!(!group.click(10, 0));
	}
}

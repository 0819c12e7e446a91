//! Drop-down replacement: a single-line selector cycled with the arrow keys.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::style::Theme;

/// Options with at most one selected.
/// `position` moved by `delta` within `0..len`, wrapping at both ends.
pub(crate) fn wrap_index(position: usize, delta: isize, len: usize) -> usize {
	if len == 0 {
		return 0;
	}
	let position = position % len;
	let distance = delta.unsigned_abs() % len;
	if delta < 0 {
		(position + len - distance) % len
	} else {
		(position + distance) % len
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choice {
	options: Vec<String>,
	selected: Option<usize>,
}

impl Choice {
	/// Selector over `options` with the first one selected.
	#[must_use]
	pub fn new<I, S>(options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let options: Vec<String> = options.into_iter().map(Into::into).collect();
		let selected = (!options.is_empty()).then_some(0);
		Self { options, selected }
	}

	/// Select the option equal to `text`; keeps the current one otherwise.
	#[must_use]
	pub fn with_selected_text(mut self, text: &str) -> Self {
		if let Some(index) = self.options.iter().position(|option| option == text) {
			self.selected = Some(index);
		}
		self
	}

	/// Select by position. Out-of-range positions clear the selection.
	pub fn select_index(&mut self, index: Option<usize>) {
		self.selected = index.filter(|&index| index < self.options.len());
	}

	/// Replace the options and select the first.
	pub fn set_options<I, S>(&mut self, options: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		*self = Self::new(options);
	}

	#[must_use]
	pub fn options(&self) -> &[String] {
		&self.options
	}

	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		self.selected
	}

	/// Selected position as the host expects it: `-1` when nothing is selected.
	#[must_use]
	pub fn selected_position(&self) -> i64 {
		self.selected
			.and_then(|index| i64::try_from(index).ok())
			.unwrap_or(-1)
	}

	#[must_use]
	pub fn selected_text(&self) -> Option<&str> {
		self.selected
			.and_then(|index| self.options.get(index))
			.map(String::as_str)
	}

	/// Move the selection by `delta`, wrapping at both ends.
	pub fn cycle(&mut self, delta: isize) -> bool {
		let len = self.options.len();
		if len == 0 {
			return false;
		}
		let next = wrap_index(self.selected.unwrap_or(0), delta, len);
		let changed = self.selected != Some(next);
		self.selected = Some(next);
		changed
	}

	/// Handle selector keys. Returns whether the selection changed.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Left => self.cycle(-1),
			KeyCode::Right => self.cycle(1),
			KeyCode::Home if !self.options.is_empty() => {
				let changed = self.selected != Some(0);
				self.selected = Some(0);
				changed
			}
			KeyCode::End if !self.options.is_empty() => {
				let last = self.options.len() - 1;
				let changed = self.selected != Some(last);
				self.selected = Some(last);
				changed
			}
			_ => false,
		}
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, label: &str, focused: bool, theme: &Theme) {
		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_for(focused));
		if !label.is_empty() {
			block = block.title(label.to_string());
		}
		let line = match self.selected_text() {
			Some(text) => Line::from(vec![
				Span::styled("◀ ", theme.muted),
				Span::styled(text.to_string(), theme.prompt),
				Span::styled(" ▶", theme.muted),
			]),
			None => Line::from(Span::styled("(none)", theme.muted)),
		};
		frame.render_widget(Paragraph::new(line).block(block), area);
	}
}

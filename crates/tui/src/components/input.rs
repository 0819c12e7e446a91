//! Single-line text entry built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// Height of a bordered input row.
pub const INPUT_HEIGHT: u16 = 3;

/// One-line editable text field.
#[derive(Debug, Clone)]
pub struct LineInput {
	area: TextArea<'static>,
	placeholder: Option<String>,
}

impl Default for LineInput {
	fn default() -> Self {
		Self::new("")
	}
}

impl LineInput {
	/// Field pre-filled with `text`, cursor at the end.
	#[must_use]
	pub fn new(text: &str) -> Self {
		let first_line = text.lines().next().unwrap_or_default();
		let mut area = TextArea::new(vec![first_line.to_string()]);
		area.move_cursor(CursorMove::End);
		area.set_cursor_line_style(Style::default());
		Self {
			area,
			placeholder: None,
		}
	}

	/// Dimmed text shown while the field is empty.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Current contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.area.lines().first().map_or("", String::as_str)
	}

	/// Replace the contents, keeping the placeholder.
	pub fn set_text(&mut self, text: &str) {
		let placeholder = self.placeholder.take();
		*self = Self::new(text);
		self.placeholder = placeholder;
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would add lines or that dialogs use for navigation are
	/// ignored.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if matches!(
			key.code,
			KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc | KeyCode::Up | KeyCode::Down
		) {
			return false;
		}
		if key.modifiers.contains(KeyModifiers::CONTROL)
			&& matches!(key.code, KeyCode::Char('m' | 'j'))
		{
			return false;
		}
		let before = self.text().to_string();
		self.area.input(key);
		self.text() != before
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, label: &str, focused: bool, theme: &Theme) {
		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_for(focused));
		if !label.is_empty() {
			block = block.title(label.to_string());
		}
		self.area.set_block(block);
		self.area.set_style(theme.prompt);
		self.area.set_cursor_style(if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		});
		if let Some(placeholder) = &self.placeholder {
			self.area.set_placeholder_text(placeholder.clone());
			self.area.set_placeholder_style(theme.muted);
		}
		frame.render_widget(&self.area, area);
	}
}

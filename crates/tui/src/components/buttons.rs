//! Row of push buttons in a dialog footer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::components::point_in_rect;
use crate::style::Theme;

pub const DEFAULT_OK: &str = "OK";
pub const DEFAULT_CANCEL: &str = "Cancel";

const GAP: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Button {
	label: String,
	enabled: bool,
}

/// Buttons drawn right-aligned, remembering where each one landed.
#[derive(Debug, Clone, Default)]
pub struct ButtonBar {
	buttons: Vec<Button>,
	areas: Vec<Rect>,
}

impl ButtonBar {
	#[must_use]
	pub fn new<I, S>(labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			buttons: labels
				.into_iter()
				.map(|label| Button {
					label: label.into(),
					enabled: true,
				})
				.collect(),
			areas: Vec::new(),
		}
	}

	/// OK and Cancel with host-supplied captions; blank captions fall back to
	/// the defaults.
	#[must_use]
	pub fn ok_cancel(ok_text: &str, cancel_text: &str) -> Self {
		Self::new([caption(ok_text, DEFAULT_OK), caption(cancel_text, DEFAULT_CANCEL)])
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.buttons.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.buttons.is_empty()
	}

	#[must_use]
	pub fn label(&self, index: usize) -> Option<&str> {
		self.buttons.get(index).map(|button| button.label.as_str())
	}

	#[must_use]
	pub fn is_enabled(&self, index: usize) -> bool {
		self.buttons.get(index).is_some_and(|button| button.enabled)
	}

	pub fn set_enabled(&mut self, index: usize, enabled: bool) {
		if let Some(button) = self.buttons.get_mut(index) {
			button.enabled = enabled;
		}
	}

	/// Enabled button under a mouse click.
	#[must_use]
	pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
		self.areas
			.iter()
			.position(|area| point_in_rect(column, row, *area))
			.filter(|&index| self.is_enabled(index))
	}

	/// Total width the bar needs.
	#[must_use]
	pub fn width(&self) -> u16 {
		let labels: usize = self
			.buttons
			.iter()
			.map(|button| button_text(&button.label).width())
			.sum();
		let gaps = usize::from(GAP) * self.buttons.len().saturating_sub(1);
		u16::try_from(labels + gaps).unwrap_or(u16::MAX)
	}

	/// Draw right-aligned within `area`; `focused` names the button with
	/// keyboard focus.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: Option<usize>, theme: &Theme) {
		self.areas.clear();
		let mut x = area.x + area.width.saturating_sub(self.width());
		for (index, button) in self.buttons.iter().enumerate() {
			let text = button_text(&button.label);
			let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
			let width = width.min(area.right().saturating_sub(x));
			let slot = Rect::new(x, area.y, width, area.height.min(1));
			let style = if !button.enabled {
				theme.disabled
			} else if focused == Some(index) {
				theme.button_focus
			} else {
				theme.button
			};
			frame.render_widget(Paragraph::new(Span::styled(text, style)), slot);
			self.areas.push(slot);
			x = x.saturating_add(width).saturating_add(GAP);
		}
	}
}

fn caption<'a>(text: &'a str, fallback: &'a str) -> &'a str {
	if text.trim().is_empty() { fallback } else { text }
}

fn button_text(label: &str) -> String {
	format!("[ {label} ]")
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_to_string;

	#[test]
	fn blank_captions_use_defaults() {
		let bar = ButtonBar::ok_cancel("", "  ");
		assert_eq!(bar.label(0), Some("OK"));
		assert_eq!(bar.label(1), Some("Cancel"));
		let bar = ButtonBar::ok_cancel("Export", "Close");
		assert_eq!(bar.label(0), Some("Export"));
	}

	#[test]
	fn buttons_render_right_aligned_and_hit_test() {
		let mut bar = ButtonBar::ok_cancel("OK", "Cancel");
		let mut terminal = Terminal::new(TestBackend::new(30, 1)).expect("terminal");
		terminal
			.draw(|frame| bar.render(frame, frame.area(), Some(0), &Theme::fallback()))
			.expect("draw");
		let text = buffer_to_string(terminal.backend().buffer());
		assert_eq!(text, format!("{}[ OK ]  [ Cancel ]", " ".repeat(12)));
		assert_eq!(bar.hit(13, 0), Some(0));
		assert_eq!(bar.hit(25, 0), Some(1));
		assert_eq!(bar.hit(19, 0), None);
	}

	#[test]
	fn disabled_buttons_ignore_clicks() {
		let mut bar = ButtonBar::new(["OK", "Load", "Cancel"]);
		bar.set_enabled(0, false);
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).expect("terminal");
		terminal
			.draw(|frame| bar.render(frame, frame.area(), None, &Theme::fallback()))
			.expect("draw");
		let ok_x = 40 - bar.width();
		assert_eq!(bar.hit(ok_x + 1, 0), None);
		assert!(!bar.is_enabled(0));
		assert!(bar.is_enabled(1));
	}
}

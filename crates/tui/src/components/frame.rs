//! Dialog chrome: bordered window, title, prompt and footer.

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::components::{ButtonBar, Logo};
use crate::style::Theme;

pub const DEFAULT_TITLE: &str = "Dialog";

const MAX_WIDTH: u16 = 100;
const MAX_HEIGHT: u16 = 40;

/// Look shared by every dialog in a session.
#[derive(Debug, Clone, Default)]
pub struct Decorations {
	pub theme: Theme,
	pub logo: Option<Logo>,
}

impl Decorations {
	#[must_use]
	pub fn new(theme: Theme) -> Self {
		Self { theme, logo: None }
	}

	/// Attach the badge at `path`; unreadable badges are left out.
	#[must_use]
	pub fn with_logo_file(mut self, path: Option<&Path>) -> Self {
		self.logo = Logo::load_or_skip(path);
		self
	}
}

/// Text at the top of a dialog window.
#[derive(Debug, Clone, Copy)]
pub struct Heading<'a> {
	pub title: &'a str,
	pub prompt: &'a str,
}

/// Window centred in `area`, capped to a comfortable size.
#[must_use]
pub fn dialog_area(area: Rect) -> Rect {
	let width = area.width.min(MAX_WIDTH);
	let height = area.height.min(MAX_HEIGHT);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

/// Draw the window, prompt and footer; returns the area left for the
/// dialog's own controls.
pub fn render_frame(
	frame: &mut Frame,
	decorations: &Decorations,
	heading: Heading<'_>,
	buttons: &mut ButtonBar,
	focused_button: Option<usize>,
) -> Rect {
	let theme = &decorations.theme;
	let window = dialog_area(frame.area());
	frame.render_widget(Clear, window);

	let title = if heading.title.trim().is_empty() {
		DEFAULT_TITLE
	} else {
		heading.title
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border)
		.title(Span::styled(format!(" {title} "), theme.title));
	let inner = block.inner(window);
	frame.render_widget(block, window);

	let prompt_height = prompt_rows(heading.prompt, inner.width).min(inner.height / 3);
	let footer_height = decorations.logo.as_ref().map_or(1, Logo::height).max(1);
	let [prompt_area, body, footer] = Layout::vertical([
		Constraint::Length(prompt_height),
		Constraint::Min(1),
		Constraint::Length(footer_height),
	])
	.areas(inner);

	if prompt_height > 0 {
		let prompt = Paragraph::new(heading.prompt.to_string())
			.style(theme.prompt)
			.wrap(Wrap { trim: false });
		frame.render_widget(prompt, prompt_area);
	}

	if let Some(logo) = &decorations.logo {
		logo.render(frame, footer, theme);
	}
	let button_row = Rect {
		y: footer.bottom().saturating_sub(1),
		height: footer.height.min(1),
		..footer
	};
	buttons.render(frame, button_row, focused_button, theme);

	body
}

/// Rows the prompt needs when wrapped to `width` columns.
pub(crate) fn prompt_rows(prompt: &str, width: u16) -> u16 {
	if prompt.trim().is_empty() || width == 0 {
		return 0;
	}
	let width = usize::from(width);
	let rows: usize = prompt
		.lines()
		.map(|line| line.width().div_ceil(width).max(1))
		.sum();
	u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_to_string;

	#[test]
	fn window_is_centred_and_capped() {
		let area = dialog_area(Rect::new(0, 0, 200, 60));
		assert_eq!(area, Rect::new(50, 10, 100, 40));
		assert_eq!(dialog_area(Rect::new(0, 0, 20, 5)), Rect::new(0, 0, 20, 5));
	}

	#[test]
	fn prompt_rows_account_for_wrapping() {
		assert_eq!(prompt_rows("", 10), 0);
		assert_eq!(prompt_rows("short", 10), 1);
		assert_eq!(prompt_rows("exactly 20 chars....", 10), 2);
		assert_eq!(prompt_rows("a\nb\n\nc", 10), 4);
	}

	#[test]
	fn frame_draws_title_prompt_logo_and_buttons() {
		let decorations = Decorations {
			theme: Theme::fallback(),
			logo: Logo::from_text("BIM"),
		};
		let mut buttons = ButtonBar::ok_cancel("", "");
		let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("terminal");
		let mut body = Rect::default();
		terminal
			.draw(|frame| {
				body = render_frame(
					frame,
					&decorations,
					Heading {
						title: "",
						prompt: "Pick sheets",
					},
					&mut buttons,
					Some(0),
				);
			})
			.expect("draw");
		let text = buffer_to_string(terminal.backend().buffer());
		let lines: Vec<&str> = text.lines().collect();
		assert!(lines[0].contains(" Dialog "));
		assert!(lines[1].contains("Pick sheets"));
		assert!(lines[8].starts_with("│BIM"));
		assert!(lines[8].contains("[ OK ]  [ Cancel ]"));
		assert_eq!(body, Rect::new(1, 2, 38, 6));
	}
}

//! Small text badge drawn in the bottom-left corner of each dialog.

use std::fs;
use std::path::Path;

use bim_dialogs_core::DialogError;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tracing::debug;
use unicode_width::UnicodeWidthChar;

use crate::style::Theme;

pub const MAX_LINES: usize = 3;
pub const MAX_COLUMNS: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
	lines: Vec<String>,
}

impl Logo {
	/// Read a badge from a text file, clipped to the badge size.
	pub fn load(path: &Path) -> Result<Self, DialogError> {
		let contents =
			fs::read_to_string(path).map_err(|err| DialogError::missing_asset(path, err))?;
		Self::from_text(&contents).ok_or_else(|| DialogError::missing_asset(path, "file is blank"))
	}

	/// Like [`Logo::load`], but a missing or unreadable badge is simply left out.
	#[must_use]
	pub fn load_or_skip(path: Option<&Path>) -> Option<Self> {
		let path = path?;
		match Self::load(path) {
			Ok(logo) => Some(logo),
			Err(err) => {
				debug!("logo omitted: {err}");
				None
			}
		}
	}

	/// Badge from literal text. `None` when nothing printable remains.
	#[must_use]
	pub fn from_text(text: &str) -> Option<Self> {
		let lines: Vec<String> = text
			.lines()
			.map(|line| clip(line.trim_end()))
			.skip_while(String::is_empty)
			.take(MAX_LINES)
			.collect();
		let last = lines.iter().rposition(|line| !line.is_empty())?;
		Some(Self {
			lines: lines[..=last].to_vec(),
		})
	}

	#[must_use]
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	#[must_use]
	pub fn height(&self) -> u16 {
		u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
	}

	#[must_use]
	pub fn width(&self) -> u16 {
		let widest = self
			.lines
			.iter()
			.map(|line| unicode_width::UnicodeWidthStr::width(line.as_str()))
			.max()
			.unwrap_or(0);
		u16::try_from(widest).unwrap_or(u16::MAX)
	}

	/// Draw anchored to the bottom-left of `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let height = self.height().min(area.height);
		let slot = Rect {
			x: area.x,
			y: area.bottom().saturating_sub(height),
			width: self.width().min(area.width),
			height,
		};
		let lines: Vec<Line> = self
			.lines
			.iter()
			.map(|line| Line::styled(line.clone(), theme.muted))
			.collect();
		frame.render_widget(Paragraph::new(lines), slot);
	}
}

fn clip(line: &str) -> String {
	let mut width = 0;
	line.chars()
		.filter(|ch| !ch.is_control())
		.take_while(|ch| {
			width += ch.width().unwrap_or(0);
			width <= MAX_COLUMNS
		})
		.collect()
}

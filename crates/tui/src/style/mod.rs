//! Colour themes for the dialogs.
//!
//! Themes are TOML documents compiled into the binary. Exactly one may be
//! marked as the default; lookups by name also accept aliases and ignore
//! case.

mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use self::loader::load_themes;

const THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/themes");

/// Styles applied to every dialog element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Dialog and control borders.
	pub border: Style,
	/// Dialog title.
	pub title: Style,
	/// Prompt and label text.
	pub prompt: Style,
	/// Row under the keyboard cursor.
	pub cursor: Style,
	/// Checked rows and chosen options.
	pub marked: Style,
	/// Placeholders, counts, and hints.
	pub muted: Style,
	/// Border of the focused control.
	pub focus: Style,
	pub button: Style,
	pub button_focus: Style,
	/// Buttons that cannot be pressed.
	pub disabled: Style,
}

impl Theme {
	/// Theme used when the embedded documents cannot be read.
	#[must_use]
	pub const fn fallback() -> Self {
		Self {
			border: Style::new(),
			title: Style::new().add_modifier(Modifier::BOLD),
			prompt: Style::new(),
			cursor: Style::new().add_modifier(Modifier::REVERSED),
			marked: Style::new().add_modifier(Modifier::BOLD),
			muted: Style::new().fg(Color::DarkGray),
			focus: Style::new().fg(Color::Yellow),
			button: Style::new(),
			button_focus: Style::new().add_modifier(Modifier::REVERSED),
			disabled: Style::new().add_modifier(Modifier::DIM),
		}
	}

	/// Border style for a control, depending on focus.
	#[must_use]
	pub fn border_for(&self, focused: bool) -> Style {
		if focused { self.focus } else { self.border }
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named theme and its aliases.
#[derive(Debug, Clone)]
pub struct ThemeEntry {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}

impl ThemeEntry {
	fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

pub(crate) struct ThemeSet {
	pub(crate) entries: Vec<ThemeEntry>,
	pub(crate) default_index: usize,
}

fn themes() -> &'static ThemeSet {
	static THEMES: OnceLock<ThemeSet> = OnceLock::new();
	THEMES.get_or_init(|| {
		load_themes(&THEME_DIR).unwrap_or_else(|error| {
			warn!("built-in themes unavailable: {error:#}");
			ThemeSet {
				entries: vec![ThemeEntry {
					name: "fallback".to_string(),
					aliases: Vec::new(),
					theme: Theme::fallback(),
				}],
				default_index: 0,
			}
		})
	})
}

/// The theme marked as default.
#[must_use]
pub fn default_theme() -> Theme {
	let set = themes();
	set.entries
		.get(set.default_index)
		.map_or_else(Theme::fallback, |entry| entry.theme)
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	themes()
		.entries
		.iter()
		.find(|entry| entry.answers_to(name))
		.map(|entry| entry.theme)
}

/// Names of all bundled themes, in file order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	themes()
		.entries
		.iter()
		.map(|entry| entry.name.as_str())
		.collect()
}

/// All bundled themes.
#[must_use]
pub fn entries() -> &'static [ThemeEntry] {
	&themes().entries
}

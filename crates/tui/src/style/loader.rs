use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::{Theme, ThemeEntry, ThemeSet};

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: StylesDocument,
}

#[derive(Debug, Deserialize)]
struct StylesDocument {
	border: StyleDocument,
	title: StyleDocument,
	prompt: StyleDocument,
	cursor: StyleDocument,
	marked: StyleDocument,
	muted: StyleDocument,
	focus: StyleDocument,
	button: StyleDocument,
	button_focus: StyleDocument,
	disabled: StyleDocument,
}

impl StylesDocument {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |doc: &StyleDocument, key: &str| doc.to_style(&format!("{context}.{key}"));
		Ok(Theme {
			border: style(&self.border, "border")?,
			title: style(&self.title, "title")?,
			prompt: style(&self.prompt, "prompt")?,
			cursor: style(&self.cursor, "cursor")?,
			marked: style(&self.marked, "marked")?,
			muted: style(&self.muted, "muted")?,
			focus: style(&self.focus, "focus")?,
			button: style(&self.button, "button")?,
			button_focus: style(&self.button_focus, "button_focus")?,
			disabled: style(&self.disabled, "disabled")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
struct StyleDocument {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleDocument {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("{context}: foreground `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("{context}: background `{bg}`"))?);
		}
		for name in &self.modifiers {
			style = style.add_modifier(
				parse_modifier(name).with_context(|| format!("{context}: modifier `{name}`"))?,
			);
		}
		Ok(style)
	}
}

pub(super) fn load_themes(dir: &Dir) -> Result<ThemeSet> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut entries: Vec<ThemeEntry> = Vec::with_capacity(files.len());
	let mut default_index: Option<usize> = None;
	for file in files {
		let document = parse_document(file)?;
		if document.default {
			if let Some(index) = default_index {
				let existing = &entries[index];
				bail!(
					"themes `{}` and `{}` are both marked as default",
					existing.name,
					document.name
				);
			}
			default_index = Some(entries.len());
		}
		let context = format!("{:?}.styles", file.path());
		entries.push(ThemeEntry {
			theme: document.styles.into_theme(&context)?,
			name: document.name,
			aliases: document
				.aliases
				.into_iter()
				.map(|alias| alias.trim().to_string())
				.filter(|alias| !alias.is_empty())
				.collect(),
		});
	}

	if entries.is_empty() {
		bail!("no theme documents found");
	}

	Ok(ThemeSet {
		entries,
		default_index: default_index.unwrap_or(0),
	})
}

fn parse_document(file: &File) -> Result<ThemeDocument> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	toml::from_str(contents).with_context(|| format!("failed to parse theme {path:?}"))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();
	if let Some(hex) = value.strip_prefix('#') {
		if hex.len() != 6 || !hex.is_ascii() {
			bail!("hex colours need six digits");
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `{value}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}
	Ok(match normalise(value).as_str() {
		"reset" | "default" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	})
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	Ok(match normalise(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		other => bail!("unknown modifier `{other}`"),
	})
}

fn normalise(value: &str) -> String {
	value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

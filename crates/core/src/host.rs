//! Contract for the host's file and folder pickers.
//!
//! Pickers report cancellation and failure the same way: `None`. Dialogs
//! never see picker errors; implementations log them and return `None`.

use std::path::{Path, PathBuf};

/// Filter string used when a caller passes none.
pub const ALL_FILES: &str = "All files (*.*)|*.*";

/// One entry of a `"Label (*.ext)|*.ext"` filter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
	pub label: String,
	/// Extensions without the leading `*.`; `*` matches anything.
	pub extensions: Vec<String>,
}

impl FileFilter {
	/// Parse a `|`-separated list of label/pattern pairs.
	///
	/// Patterns within a pair are separated by `;`. A trailing label without
	/// patterns is dropped. Blank input yields the all-files filter.
	#[must_use]
	pub fn parse(spec: &str) -> Vec<Self> {
		let spec = if spec.trim().is_empty() { ALL_FILES } else { spec };
		let parts: Vec<&str> = spec.split('|').collect();
		parts
			.chunks_exact(2)
			.map(|pair| Self {
				label: pair[0].trim().to_string(),
				extensions: pair[1]
					.split(';')
					.map(str::trim)
					.filter(|pattern| !pattern.is_empty())
					.map(|pattern| {
						let pattern = pattern.strip_prefix("*.").unwrap_or(pattern);
						pattern.trim_start_matches('.').to_string()
					})
					.collect(),
			})
			.collect()
	}

	/// Whether the filter accepts any extension.
	#[must_use]
	pub fn is_wildcard(&self) -> bool {
		self.extensions.iter().any(|ext| ext == "*")
	}
}

/// Parameters of an open-file request.
#[derive(Debug, Clone, Default)]
pub struct OpenFile {
	pub title: String,
	pub filters: Vec<FileFilter>,
	pub initial_directory: Option<PathBuf>,
}

impl OpenFile {
	#[must_use]
	pub fn new(title: impl Into<String>, filter: &str) -> Self {
		Self {
			title: title.into(),
			filters: FileFilter::parse(filter),
			initial_directory: None,
		}
	}

	#[must_use]
	pub fn with_initial_directory(mut self, directory: Option<PathBuf>) -> Self {
		self.initial_directory = directory;
		self
	}
}

/// Parameters of a save-file request.
#[derive(Debug, Clone, Default)]
pub struct SaveFile {
	pub title: String,
	pub filters: Vec<FileFilter>,
	pub default_extension: Option<String>,
	pub initial_directory: Option<PathBuf>,
	pub file_name: String,
}

impl SaveFile {
	#[must_use]
	pub fn new(title: impl Into<String>, filter: &str) -> Self {
		Self {
			title: title.into(),
			filters: FileFilter::parse(filter),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_default_extension(mut self, extension: impl Into<String>) -> Self {
		let extension = extension.into();
		self.default_extension = (!extension.trim().is_empty()).then_some(extension);
		self
	}

	#[must_use]
	pub fn with_initial_directory(mut self, directory: Option<PathBuf>) -> Self {
		self.initial_directory = directory;
		self
	}

	#[must_use]
	pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
		self.file_name = name.into();
		self
	}

	/// Append the default extension when `path` has none.
	#[must_use]
	pub fn complete(&self, path: PathBuf) -> PathBuf {
		match &self.default_extension {
			Some(ext) if path.extension().is_none() => path.with_extension(ext),
			_ => path,
		}
	}
}

/// Native picker provided by the host environment.
pub trait FilePicker {
	fn open_file(&self, request: &OpenFile) -> Option<PathBuf>;

	fn save_file(&self, request: &SaveFile) -> Option<PathBuf>;

	fn pick_folder(&self, title: &str, initial_directory: Option<&Path>) -> Option<PathBuf>;
}

/// Picker for environments without native dialogs; always cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPicker;

impl FilePicker for NoPicker {
	fn open_file(&self, _request: &OpenFile) -> Option<PathBuf> {
		None
	}

	fn save_file(&self, _request: &SaveFile) -> Option<PathBuf> {
		None
	}

	fn pick_folder(&self, _title: &str, _initial_directory: Option<&Path>) -> Option<PathBuf> {
		None
	}
}

/// Directory to start a picker in, derived from whatever the user typed.
///
/// Returns `path` when it is a directory, else its parent when that exists,
/// else `None`.
#[must_use]
pub fn safe_directory(path: &str) -> Option<PathBuf> {
	let trimmed = path.trim();
	if trimmed.is_empty() {
		return None;
	}
	let candidate = Path::new(trimmed);
	if candidate.is_dir() {
		return Some(candidate.to_path_buf());
	}
	candidate
		.parent()
		.filter(|parent| !parent.as_os_str().is_empty() && parent.is_dir())
		.map(Path::to_path_buf)
}

/// File name component of `path`, or empty.
#[must_use]
pub fn file_name(path: &str) -> String {
	Path::new(path.trim())
		.file_name()
		.and_then(|name| name.to_str())
		.unwrap_or_default()
		.to_string()
}

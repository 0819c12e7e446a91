use std::path::PathBuf;

use thiserror::Error;

/// Failures that dialogs absorb locally instead of surfacing to the caller.
#[derive(Debug, Error)]
pub enum DialogError {
	/// A decorative asset could not be read; the decoration is omitted.
	#[error("asset {path} is unavailable: {reason}")]
	MissingAsset { path: PathBuf, reason: String },

	/// The native file or folder picker failed; treated as no selection.
	#[error("{picker} picker failed: {reason}")]
	HostPicker { picker: &'static str, reason: String },

	/// The terminal could not be prepared or drawn to.
	#[error("terminal unavailable: {0}")]
	Terminal(#[from] std::io::Error),

	/// A request document could not be read at all.
	#[error("invalid {dialog} request: {reason}")]
	InvalidRequest { dialog: &'static str, reason: String },
}

impl DialogError {
	pub fn missing_asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
		Self::MissingAsset {
			path: path.into(),
			reason: reason.to_string(),
		}
	}

	pub fn host_picker(picker: &'static str, reason: impl ToString) -> Self {
		Self::HostPicker {
			picker,
			reason: reason.to_string(),
		}
	}

	pub fn invalid_request(dialog: &'static str, reason: impl ToString) -> Self {
		Self::InvalidRequest {
			dialog,
			reason: reason.to_string(),
		}
	}
}

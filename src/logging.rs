//! File logging for the dialog harness.
//!
//! The terminal belongs to the dialog while it is open, so events are written
//! to a log file and never to stdout or stderr.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding an `EnvFilter` directive that overrides the
/// configured level.
pub const LOG_ENV: &str = "BIM_DIALOGS_LOG";

/// Filter from [`LOG_ENV`] when set, else from `level`. A malformed
/// [`LOG_ENV`] value is an error, not a silent fallback.
pub fn filter(level: &str) -> Result<EnvFilter> {
	let directive = env::var(LOG_ENV).ok();
	filter_from(directive.as_deref(), level)
}

fn filter_from(directive: Option<&str>, level: &str) -> Result<EnvFilter> {
	match directive.filter(|directive| !directive.trim().is_empty()) {
		Some(directive) => EnvFilter::builder()
			.parse(directive)
			.with_context(|| format!("invalid {LOG_ENV} filter '{directive}'")),
		None => EnvFilter::builder()
			.parse(level)
			.with_context(|| format!("invalid log filter '{level}'")),
	}
}

/// Install the global subscriber writing to `file`.
///
/// Calling this twice is an error from `tracing`; the harness calls it once
/// at startup.
pub fn initialize(level: &str, file: &Path) -> Result<()> {
	if let Some(dir) = file.parent() {
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	}
	let writer = OpenOptions::new()
		.append(true)
		.create(true)
		.open(file)
		.with_context(|| format!("failed to open log file {}", file.display()))?;

	tracing_subscriber::registry()
		.with(filter(level)?)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(Mutex::new(writer))
				.with_ansi(false),
		)
		.try_init()
		.context("failed to install tracing subscriber")?;
	tracing::debug!(file = %file.display(), "logging initialized");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn configured_level_parses() {
		assert!(filter("debug").is_ok());
		assert!(filter("bim_dialogs=trace,info").is_ok());
	}

	#[test]
	fn environment_directive_wins_and_is_validated() {
		let filter = filter_from(Some("bim_dialogs=trace"), "warn").expect("directive");
		assert!(filter.to_string().contains("bim_dialogs=trace"));

		let err = filter_from(Some("bim_dialogs=loud"), "warn").expect_err("malformed directive");
		assert!(err.to_string().contains(LOG_ENV), "{err}");

		let filter = filter_from(Some("  "), "warn").expect("blank falls back");
		assert!(filter.to_string().contains("warn"));
	}
}

use bim_dialogs::tui::{Theme, default_theme, style};
use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources};

/// Look up the configured theme; no name means the bundled default.
pub(super) fn theme(name: Option<&str>, sources: &ConfigSources) -> Result<Theme, ConfigError> {
	let Some(name) = name else {
		return Ok(default_theme());
	};
	style::by_name(name).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("unknown theme; available: {}", style::names().join(", ")),
		)
	})
}

pub(super) fn log_level(level: &str, sources: &ConfigSources) -> Result<(), ConfigError> {
	EnvFilter::try_new(level).map(drop).map_err(|err| {
		ConfigError::invalid(
			"logging.level",
			level,
			sources.source_for_log_level(),
			err.to_string(),
		)
	})
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	#[test]
	fn theme_lookup_accepts_aliases() {
		let sources = ConfigSources::default();
		assert_eq!(theme(Some("Dark"), &sources).expect("alias"), style::by_name("slate").expect("slate"));
		assert_eq!(theme(None, &sources).expect("default"), default_theme());
	}

	#[test]
	fn unknown_theme_lists_the_choices() {
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("BIM_DIALOGS__UI__THEME")),
			..ConfigSources::default()
		};
		let err = theme(Some("neon"), &sources).expect_err("unknown");
		let message = err.to_string();
		assert!(message.contains("BIM_DIALOGS__UI__THEME"), "{message}");
		assert!(message.contains("slate"), "{message}");
	}

	#[test]
	fn log_levels_use_filter_syntax() {
		let sources = ConfigSources::default();
		assert!(log_level("debug", &sources).is_ok());
		assert!(log_level("warn,bim_dialogs_tui=trace", &sources).is_ok());
		assert!(log_level("bim_dialogs=loud", &sources).is_err());
	}
}

use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use bim_dialogs::app_dirs;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	logo: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
		if let Some(logo) = &cli.logo {
			self.ui.logo = Some(logo.clone());
		}
		if let Some(level) = &cli.log_level {
			self.logging.level = Some(level.clone());
		}
	}

	/// Fill defaults and validate into a [`ResolvedConfig`].
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"BIM_DIALOGS__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"BIM_DIALOGS__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let log_file = match self.logging.file {
			Some(file) => file,
			None => app_dirs::default_log_file()?,
		};

		ResolvedConfig::build(
			self.ui.theme,
			self.ui.logo,
			self.logging.level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			log_file,
			&sources,
		)
		.map_err(Error::new)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;

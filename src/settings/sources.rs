use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use bim_dialogs::app_dirs;
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "BIM_DIALOGS";

/// Build a [`Config`] from the default locations, `--config` files and the
/// environment, in increasing priority.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Config files consulted unless `--no-config` is given.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join("bim-dialogs.toml"));
	}

	files
}

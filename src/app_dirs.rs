//! Configuration, data and cache directories for `bim-dialogs`.
//!
//! Each directory can be pinned with an environment variable; otherwise the
//! platform location from the `directories` crate is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "bim-tools";
const APPLICATION: &str = "bim-dialogs";

pub const CONFIG_DIR_ENV: &str = "BIM_DIALOGS_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "BIM_DIALOGS_DATA_DIR";
pub const CACHE_DIR_ENV: &str = "BIM_DIALOGS_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for bim-dialogs"))
}

/// Override directory from `name`; empty values count as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for logs and other persistent output.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Default log file: `<data dir>/logs/bim-dialogs.log`.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join("logs").join("bim-dialogs.log"))
}

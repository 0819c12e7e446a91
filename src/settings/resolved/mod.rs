use std::path::PathBuf;

use bim_dialogs::tui::{Decorations, Theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Theme as configured; `None` means the bundled default.
	pub theme_name: Option<String>,
	pub theme: Theme,
	/// Text badge drawn in the dialog footer.
	pub logo: Option<PathBuf>,
	pub log_level: String,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	pub(crate) fn build(
		theme_name: Option<String>,
		logo: Option<PathBuf>,
		log_level: String,
		log_file: PathBuf,
		sources: &ConfigSources,
	) -> Result<Self, ConfigError> {
		let theme = validation::theme(theme_name.as_deref(), sources)?;
		validation::log_level(&log_level, sources)?;
		Ok(Self {
			theme_name,
			theme,
			logo,
			log_level,
			log_file,
		})
	}

	/// Theme and logo shared by every dialog. An unreadable logo is skipped.
	pub fn decorations(&self) -> Decorations {
		Decorations::new(self.theme).with_logo_file(self.logo.as_deref())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

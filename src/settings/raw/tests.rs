use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

fn raw(theme: &str, level: &str) -> RawConfig {
	let mut config = RawConfig::default();
	config.ui.theme = Some(theme.into());
	config.logging.level = Some(level.into());
	config.logging.file = Some(PathBuf::from("/tmp/bim-dialogs.log"));
	config
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"bim-dialogs",
		"--theme",
		"plain",
		"--logo",
		"/tmp/logo.txt",
		"--log-level",
		"trace",
		"alert",
	]);

	let mut config = raw("slate", "warn");
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.theme.as_deref(), Some("plain"));
	assert_eq!(config.ui.logo, Some(PathBuf::from("/tmp/logo.txt")));
	assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

#[test]
fn missing_values_fall_back_to_defaults() {
	let cli = CliArgs::parse_from(["bim-dialogs", "alert"]);
	let mut config = RawConfig::default();
	config.logging.file = Some(PathBuf::from("/tmp/bim-dialogs.log"));

	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(resolved.theme_name, None);
	assert_eq!(resolved.log_level, "info");
	assert_eq!(resolved.log_file, PathBuf::from("/tmp/bim-dialogs.log"));
	assert!(resolved.logo.is_none());
}

#[test]
fn unknown_theme_names_the_flag() {
	let cli = CliArgs::parse_from(["bim-dialogs", "--theme", "no-such-theme", "alert"]);
	let mut config = raw("slate", "info");
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("unknown theme");
	let message = err.to_string();
	assert!(message.contains("ui.theme"), "{message}");
	assert!(message.contains("--theme"), "{message}");
	assert!(message.contains("no-such-theme"), "{message}");
}

#[test]
fn bad_log_level_names_the_config_key() {
	let cli = CliArgs::parse_from(["bim-dialogs", "alert"]);
	let config = {
		let mut config = RawConfig::default();
		config.logging.level = Some("bim_dialogs=loud".into());
		config.logging.file = Some(PathBuf::from("/tmp/bim-dialogs.log"));
		config
	};

	let err = config.resolve(&cli).expect_err("bad level");
	assert!(err.to_string().contains("logging.level"), "{err}");
}

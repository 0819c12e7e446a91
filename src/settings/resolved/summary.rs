use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("{}", summary_text(config));
}

fn summary_text(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!(
		"  UI theme: {}",
		config.theme_name.as_deref().unwrap_or("(bundled default)")
	));
	lines.push(match &config.logo {
		Some(path) => format!("  Logo: {}", path.display()),
		None => "  Logo: (none)".to_string(),
	});
	lines.push(format!("  Log level: {}", config.log_level));
	lines.push(format!("  Log file: {}", config.log_file.display()));
	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use bim_dialogs::tui::Theme;

	use super::*;

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			theme_name: Some("paper".into()),
			theme: Theme::fallback(),
			logo: None,
			log_level: "debug".into(),
			log_file: PathBuf::from("/tmp/bim-dialogs.log"),
		};

		let text = summary_text(&config);
		assert!(text.contains("UI theme: paper"));
		assert!(text.contains("Logo: (none)"));
		assert!(text.contains("Log level: debug"));
		assert!(text.contains("Log file: /tmp/bim-dialogs.log"));
	}
}

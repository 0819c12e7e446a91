mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use bim_dialogs::logging;
use cli::{DialogKind, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tracing::{debug, warn};
use workflow::{DialogWorkflow, read_request};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in bim_dialogs::tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let Some(dialog) = cli.dialog else {
		return Ok(());
	};

	if let Err(err) = logging::initialize(&resolved.log_level, &resolved.log_file) {
		eprintln!("logging disabled: {err:#}");
	}

	let request = read_request(&cli.request)?;
	run_dialog(cli.output, dialog, &resolved, &request)
}

/// Show the dialog and print its result in the chosen format.
fn run_dialog(
	format: OutputFormat,
	dialog: DialogKind,
	settings: &ResolvedConfig,
	request: &str,
) -> Result<()> {
	let outcome = DialogWorkflow::from_config(settings, dialog).run(request);
	if let Err(err) = bim_dialogs::shutdown() {
		warn!("failed to restore the terminal: {err:#}");
	}
	let outcome = outcome?;
	debug!(dialog = outcome.dialog.name(), "printing result");

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

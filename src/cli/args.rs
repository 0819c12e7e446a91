use std::fmt::Write;
use std::path::PathBuf;

use bim_dialogs::app_dirs;
use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

/// Version banner with the directories the harness reads and writes.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("bim-dialogs {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "bim-dialogs",
	version,
	long_version = long_version(),
	about = "Show a BIM tooling dialog for a JSON request and print the result",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(value_enum, required_unless_present_any = ["list_themes", "print_config"])]
	pub(crate) dialog: Option<DialogKind>,
	#[arg(
		short,
		long,
		value_name = "FILE",
		default_value = "-",
		help = "JSON request document, or - for stdin"
	)]
	pub(crate) request: PathBuf,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BIM_DIALOGS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: configured theme)")]
	pub(crate) theme: Option<String>,
	#[arg(long, value_name = "FILE", help = "Text badge drawn in the dialog footer (default: none)")]
	pub(crate) logo: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log filter directive (default: configured level)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

/// Dialogs the harness can show.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DialogKind {
	SelectFilter,
	SelectMode,
	ExportSchedules,
	ImportAreas,
	PromptText,
	Alert,
	Confirm,
	TextReport,
	SelectIndices,
	SheetRenumber,
	SheetRenumberList,
	ViewnameReplace,
	DuplicateSheet,
	ProjectUpgrader,
	FindReplace,
	RandomTrees,
	ParameterCopy,
	DuplicateView,
	MarketingView,
	Keyplan,
}

impl DialogKind {
	/// Name used on the command line and in log events.
	pub(crate) fn name(self) -> &'static str {
		match self {
			Self::SelectFilter => "select-filter",
			Self::SelectMode => "select-mode",
			Self::ExportSchedules => "export-schedules",
			Self::ImportAreas => "import-areas",
			Self::PromptText => "prompt-text",
			Self::Alert => "alert",
			Self::Confirm => "confirm",
			Self::TextReport => "text-report",
			Self::SelectIndices => "select-indices",
			Self::SheetRenumber => "sheet-renumber",
			Self::SheetRenumberList => "sheet-renumber-list",
			Self::ViewnameReplace => "viewname-replace",
			Self::DuplicateSheet => "duplicate-sheet",
			Self::ProjectUpgrader => "project-upgrader",
			Self::FindReplace => "find-replace",
			Self::RandomTrees => "random-trees",
			Self::ParameterCopy => "parameter-copy",
			Self::DuplicateView => "duplicate-view",
			Self::MarketingView => "marketing-view",
			Self::Keyplan => "keyplan",
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

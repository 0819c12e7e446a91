use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use bim_dialogs::core::requests;
use bim_dialogs::{DialogService, ModalHost, TerminalHost};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cli::DialogKind;
use crate::settings::ResolvedConfig;

/// What a dialog produced; `None` when the user cancelled.
#[derive(Debug)]
pub(crate) struct Outcome {
	pub(crate) dialog: DialogKind,
	pub(crate) result: Option<Value>,
}

/// Read the request document from `path`, or stdin for `-`.
pub(crate) fn read_request(path: &Path) -> Result<String> {
	if path.as_os_str() == "-" {
		let mut text = String::new();
		io::stdin()
			.read_to_string(&mut text)
			.context("failed to read request from stdin")?;
		return Ok(text);
	}
	fs::read_to_string(path).with_context(|| format!("failed to read request {}", path.display()))
}

/// Shows one dialog for a JSON request and captures its record.
pub(crate) struct DialogWorkflow<H = TerminalHost> {
	service: DialogService<H>,
	dialog: DialogKind,
}

impl DialogWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig, dialog: DialogKind) -> Self {
		Self::with_service(DialogService::new(config.decorations()), dialog)
	}
}

impl<H: ModalHost> DialogWorkflow<H> {
	pub(crate) fn with_service(service: DialogService<H>, dialog: DialogKind) -> Self {
		Self { service, dialog }
	}

	pub(crate) fn run(&self, request: &str) -> Result<Outcome> {
		let result = self.dispatch(request)?;
		info!(
			dialog = self.dialog.name(),
			cancelled = result.is_none(),
			"dialog closed"
		);
		Ok(Outcome {
			dialog: self.dialog,
			result,
		})
	}

	fn dispatch(&self, text: &str) -> Result<Option<Value>> {
		let service = &self.service;
		let name = self.dialog.name();
		match self.dialog {
			DialogKind::SelectFilter => {
				record(service.select_items_with_filter(&requests::parse(name, text)?))
			}
			DialogKind::SelectMode => record(service.select_items_with_mode(&requests::parse(name, text)?)),
			DialogKind::ExportSchedules => record(service.export_schedules(&requests::parse(name, text)?)),
			DialogKind::ImportAreas => record(service.import_area_keyplan(&requests::parse(name, text)?)),
			DialogKind::PromptText => record(service.prompt_text(&requests::parse(name, text)?)),
			DialogKind::Alert => {
				service.alert(&requests::parse(name, text)?);
				Ok(Some(Value::Bool(true)))
			}
			DialogKind::Confirm => Ok(acknowledged(service.confirm(&requests::parse(name, text)?))),
			DialogKind::TextReport => {
				Ok(acknowledged(service.show_text_report(&requests::parse(name, text)?)))
			}
			DialogKind::SelectIndices => {
				record(Some(service.select_indices(&requests::parse(name, text)?)))
			}
			DialogKind::SheetRenumber => {
				record(service.sheet_renumber_inputs(&requests::parse(name, text)?))
			}
			DialogKind::SheetRenumberList => {
				record(service.sheet_renumber_inputs_with_list(&requests::parse(name, text)?))
			}
			DialogKind::ViewnameReplace => {
				record(service.viewname_replace_inputs(&requests::parse(name, text)?))
			}
			DialogKind::DuplicateSheet => {
				record(service.duplicate_sheet_inputs(&requests::parse(name, text)?))
			}
			DialogKind::ProjectUpgrader => {
				record(service.project_upgrader_options(&requests::parse(name, text)?))
			}
			DialogKind::FindReplace => record(service.find_replace(&requests::parse(name, text)?)),
			DialogKind::RandomTrees => record(service.random_tree_settings(&requests::parse(name, text)?)),
			DialogKind::ParameterCopy => {
				record(service.parameter_copy_inputs(&requests::parse(name, text)?))
			}
			DialogKind::DuplicateView => {
				record(service.duplicate_view_options(&requests::parse(name, text)?))
			}
			DialogKind::MarketingView => {
				record(service.marketing_view_options(&requests::parse(name, text)?))
			}
			DialogKind::Keyplan => record(service.keyplan_options(&requests::parse(name, text)?)),
		}
	}
}

fn record<T: Serialize>(value: Option<T>) -> Result<Option<Value>> {
	Ok(value.map(serde_json::to_value).transpose()?)
}

fn acknowledged(pressed_ok: bool) -> Option<Value> {
	pressed_ok.then_some(Value::Bool(true))
}

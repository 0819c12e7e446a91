//! Host-facing entry points: one call per dialog, each blocking until the
//! user closes it.
//!
//! Nothing here returns an error. Terminal failures are logged and reported
//! the same way as Cancel, so a host only ever sees "a record" or "nothing".

use std::path::{Path, PathBuf};

use anyhow::Result;
use bim_dialogs_core::requests::{
	AreaImportRequest, DuplicateSheetRequest, DuplicateViewRequest, FilterSelectRequest,
	FindReplaceRequest, KeyplanRequest, MarketingViewRequest, MessageRequest, ModeSelectRequest,
	ParameterCopyRequest, ProjectUpgraderRequest, PromptTextRequest, RandomTreeRequest,
	ScheduleExportRequest, SelectIndicesRequest, SheetRenumberListRequest, SheetRenumberRequest,
	TextReportRequest, ViewnameReplaceRequest,
};
use bim_dialogs_core::results::{
	DuplicateSheetInputs, DuplicateViewOptions, FindReplace, KeyplanOptions,
	MarketingViewOptions, ParameterCopyInputs, ProjectUpgraderOptions, RandomTreeSettings,
	SheetRenumberInputs, SheetRenumberInputsWithList, ViewnameReplaceInputs,
};
use bim_dialogs_core::{
	AreaKeyplanImport, FilePicker, FilterSelection, OpenFile, SaveFile, ScheduleExport,
	SelectionWithMode,
};
use bim_dialogs_tui::{
	AreaImportDialog, Decorations, FilterSelectDialog, FormDialog, Modal, ModeSelectDialog,
	ScheduleExportDialog, records, show_modal,
};
use tracing::{debug, warn};

/// Where dialogs get shown. The terminal is the only real surface; tests
/// substitute a scripted one.
pub trait ModalHost {
	fn present<M: Modal>(&self, modal: &mut M) -> Result<Option<M::Output>>;
}

/// Shows dialogs on the process-wide terminal session.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost;

impl ModalHost for TerminalHost {
	fn present<M: Modal>(&self, modal: &mut M) -> Result<Option<M::Output>> {
		show_modal(modal)
	}
}

/// Dialog entry points sharing one look and one picker source.
pub struct DialogService<H = TerminalHost> {
	host: H,
	decorations: Decorations,
	pickers: fn() -> Box<dyn FilePicker>,
}

impl Default for DialogService {
	fn default() -> Self {
		Self::new(Decorations::default())
	}
}

impl DialogService {
	#[must_use]
	pub fn new(decorations: Decorations) -> Self {
		Self::with_host(TerminalHost, decorations)
	}
}

impl<H: ModalHost> DialogService<H> {
	#[must_use]
	pub fn with_host(host: H, decorations: Decorations) -> Self {
		Self {
			host,
			decorations,
			pickers: bim_dialogs_tui::default_picker,
		}
	}

	/// Replace where file and folder pickers come from.
	#[must_use]
	pub fn with_pickers(mut self, pickers: fn() -> Box<dyn FilePicker>) -> Self {
		self.pickers = pickers;
		self
	}

	#[must_use]
	pub fn decorations(&self) -> &Decorations {
		&self.decorations
	}

	fn show<M: Modal>(&self, dialog: &'static str, modal: &mut M) -> Option<M::Output> {
		match self.host.present(modal) {
			Ok(Some(output)) => {
				debug!(dialog, "dialog returned a result");
				Some(output)
			}
			Ok(None) => {
				debug!(dialog, "dialog cancelled");
				None
			}
			Err(err) => {
				warn!(dialog, error = %format!("{err:#}"), "dialog failed; treating as cancel");
				None
			}
		}
	}

	fn show_form<T>(&self, dialog: &'static str, form: FormDialog<T>) -> Option<T> {
		let mut form = form
			.with_decorations(self.decorations.clone())
			.with_picker((self.pickers)());
		self.show(dialog, &mut form)
	}

	/// Checklist with a parameter filter and a text search.
	pub fn select_items_with_filter(&self, request: &FilterSelectRequest) -> Option<FilterSelection> {
		let mut dialog = FilterSelectDialog::new(request, self.decorations.clone());
		self.show("select-filter", &mut dialog)
	}

	pub fn select_items_with_mode(&self, request: &ModeSelectRequest) -> Option<SelectionWithMode> {
		let mut dialog = ModeSelectDialog::new(request, self.decorations.clone());
		self.show("select-mode", &mut dialog)
	}

	pub fn export_schedules(&self, request: &ScheduleExportRequest) -> Option<ScheduleExport> {
		let mut dialog =
			ScheduleExportDialog::new(request, self.decorations.clone(), (self.pickers)());
		self.show("export-schedules", &mut dialog)
	}

	pub fn import_area_keyplan(&self, request: &AreaImportRequest) -> Option<AreaKeyplanImport> {
		let mut dialog = AreaImportDialog::new(request, self.decorations.clone(), (self.pickers)());
		self.show("import-areas", &mut dialog)
	}

	/// Typed text, or `None` on Cancel.
	pub fn prompt_text(&self, request: &PromptTextRequest) -> Option<String> {
		self.show_form("prompt-text", records::prompt_text(request))
	}

	pub fn alert(&self, request: &MessageRequest) {
		self.show_form("alert", records::alert(request));
	}

	/// `true` only when the user pressed OK.
	pub fn confirm(&self, request: &MessageRequest) -> bool {
		self.show_form("confirm", records::confirm(request)).unwrap_or(false)
	}

	pub fn show_text_report(&self, request: &TextReportRequest) -> bool {
		self.show_form("text-report", records::text_report(request)).is_some()
	}

	/// Chosen positions; empty on Cancel.
	pub fn select_indices(&self, request: &SelectIndicesRequest) -> Vec<usize> {
		self.show_form("select-indices", records::select_indices(request))
			.unwrap_or_default()
	}

	pub fn sheet_renumber_inputs(&self, request: &SheetRenumberRequest) -> Option<SheetRenumberInputs> {
		self.show_form("sheet-renumber", records::sheet_renumber(request))
	}

	pub fn sheet_renumber_inputs_with_list(
		&self,
		request: &SheetRenumberListRequest,
	) -> Option<SheetRenumberInputsWithList> {
		self.show_form("sheet-renumber-list", records::sheet_renumber_with_list(request))
	}

	pub fn viewname_replace_inputs(&self, request: &ViewnameReplaceRequest) -> Option<ViewnameReplaceInputs> {
		self.show_form("viewname-replace", records::viewname_replace(request))
	}

	pub fn duplicate_sheet_inputs(&self, request: &DuplicateSheetRequest) -> Option<DuplicateSheetInputs> {
		self.show_form("duplicate-sheet", records::duplicate_sheet(request))
	}

	pub fn project_upgrader_options(
		&self,
		request: &ProjectUpgraderRequest,
	) -> Option<ProjectUpgraderOptions> {
		self.show_form("project-upgrader", records::project_upgrader(request))
	}

	pub fn find_replace(&self, request: &FindReplaceRequest) -> Option<FindReplace> {
		self.show_form("find-replace", records::find_replace(request))
	}

	pub fn random_tree_settings(&self, request: &RandomTreeRequest) -> Option<RandomTreeSettings> {
		self.show_form("random-trees", records::random_trees(request))
	}

	pub fn parameter_copy_inputs(&self, request: &ParameterCopyRequest) -> Option<ParameterCopyInputs> {
		self.show_form("parameter-copy", records::parameter_copy(request))
	}

	pub fn duplicate_view_options(&self, request: &DuplicateViewRequest) -> Option<DuplicateViewOptions> {
		self.show_form("duplicate-view", records::duplicate_view(request))
	}

	pub fn marketing_view_options(&self, request: &MarketingViewRequest) -> Option<MarketingViewOptions> {
		self.show_form("marketing-view", records::marketing_view(request))
	}

	pub fn keyplan_options(&self, request: &KeyplanRequest) -> Option<KeyplanOptions> {
		self.show_form("keyplan", records::keyplan(request))
	}

	/// Native open-file picker; `None` when cancelled or unavailable.
	pub fn open_file(&self, request: &OpenFile) -> Option<PathBuf> {
		(self.pickers)().open_file(request)
	}

	/// Native save-file picker. The chosen path gets the default extension
	/// when it has none.
	pub fn save_file(&self, request: &SaveFile) -> Option<PathBuf> {
		(self.pickers)().save_file(request)
	}

	pub fn select_folder(&self, title: &str, initial_directory: Option<&Path>) -> Option<PathBuf> {
		(self.pickers)().pick_folder(title, initial_directory)
	}
}

#[cfg(test)]
mod tests;

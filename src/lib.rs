//! Modal dialogs that collect structured input for BIM tooling.
//!
//! [`DialogService`] is the entry point for hosts: every method shows one
//! dialog on the terminal and returns its record, or nothing when the user
//! cancelled. The headless state lives in [`core`] and the terminal front end
//! in [`tui`]; both are re-exported for embedders that need finer control.

pub mod app_dirs;
pub mod logging;
mod service;

pub use bim_dialogs_core as core;
pub use bim_dialogs_tui as tui;

pub use crate::service::{DialogService, ModalHost, TerminalHost};
pub use bim_dialogs_core::{
	AreaKeyplanImport, ColumnMapping, CsvDelimiter, ExportMode, FilterSelection, ScheduleExport,
	SelectionWithMode,
};
pub use bim_dialogs_tui::context::shutdown;

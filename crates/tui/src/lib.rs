//! Terminal front end for the BIM dialogs.
//!
//! Each dialog in [`dialogs`] is a [`Modal`] drawn with ratatui and driven by
//! [`show_modal`], which borrows the process-wide terminal session kept by
//! [`context`]. The session outlives individual dialogs; call
//! [`context::shutdown`] once the host is done.

pub mod components;
pub mod context;
pub mod dialogs;
pub mod host;
pub mod runtime;
pub mod style;

#[cfg(test)]
mod test_support;

pub use crate::components::Decorations;
pub use crate::dialogs::{
	AreaImportDialog, FilterSelectDialog, Form, FormDialog, FormValues, ModeSelectDialog,
	ScheduleExportDialog, records,
};
pub use crate::host::default_picker;
pub use crate::runtime::{Flow, Modal, drive, show_modal};
pub use crate::style::{Theme, default_theme};

//! Every dialog surface, each a [`Modal`](crate::runtime::Modal).

pub mod area_import;
pub mod export_schedules;
pub mod filter_select;
pub mod form;
pub mod mode_select;

pub use area_import::AreaImportDialog;
pub use export_schedules::ScheduleExportDialog;
pub use filter_select::FilterSelectDialog;
pub use form::{Form, FormDialog, FormValues, records};
pub use mode_select::ModeSelectDialog;

//! Headless state behind the selection dialogs.
//!
//! The crate holds everything that does not touch a terminal: the item
//! model, the filter/search pipeline, the global selection set and its
//! projection onto a list control, plus the request and result records the
//! dialogs exchange with hosts.

pub mod coerce;
pub mod error;
pub mod host;
pub mod model;
pub mod pipeline;
pub mod projection;
pub mod requests;
pub mod results;
pub mod selection;

pub use crate::error::DialogError;
pub use crate::host::{FileFilter, FilePicker, NoPicker, OpenFile, SaveFile};
pub use crate::model::{ItemEntry, ItemModel};
pub use crate::pipeline::{ActiveFilter, FilterPipeline};
pub use crate::projection::{
	CountReadout, DialogPhase, ListControl, ListEvent, ListRows, SelectionView,
};
pub use crate::results::{
	AreaKeyplanImport, ColumnMapping, CsvDelimiter, ExportMode, FilterSelection,
	ScheduleExport, SelectionWithMode,
};
pub use crate::selection::SelectionSet;

//! Records returned by committed dialogs.
//!
//! Every field is always present: strings default to empty and sequences to
//! empty vectors. A dismissed dialog returns no record at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Result of the filter/search selection dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
	/// Selected stable indices, ascending.
	pub selected_indices: Vec<usize>,
	/// Parameter of the active filter, or empty.
	pub filter_parameter: String,
	/// Value of the active filter, or empty.
	pub filter_value: String,
}

/// Result of the checklist dialog with a two-way mode switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionWithMode {
	pub selected_indices: Vec<usize>,
	/// `0` for the first option, `1` for the second.
	pub mode: u8,
}

/// Output format chosen in the schedule export dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
	#[default]
	Excel,
	Csv,
}

impl ExportMode {
	/// Mode for a host-supplied integer: `1` is CSV, anything else Excel.
	#[must_use]
	pub fn from_index(index: i64) -> Self {
		if index == 1 { Self::Csv } else { Self::Excel }
	}

	/// Integer form used by hosts.
	#[must_use]
	pub fn index(self) -> u8 {
		match self {
			Self::Excel => 0,
			Self::Csv => 1,
		}
	}
}

/// Field separator for CSV export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvDelimiter {
	#[default]
	Comma,
	Semicolon,
	Tab,
	Pipe,
}

impl CsvDelimiter {
	/// Every delimiter in the order offered to the user.
	pub const ALL: [Self; 4] = [Self::Comma, Self::Semicolon, Self::Tab, Self::Pipe];

	/// The separator character itself.
	#[must_use]
	pub fn as_char(self) -> char {
		match self {
			Self::Comma => ',',
			Self::Semicolon => ';',
			Self::Tab => '\t',
			Self::Pipe => '|',
		}
	}

	/// Human-readable label for the combo box.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Comma => "Comma (,)",
			Self::Semicolon => "Semicolon (;)",
			Self::Tab => "Tab",
			Self::Pipe => "Pipe (|)",
		}
	}

	/// Parse a separator, falling back to comma for anything unknown.
	#[must_use]
	pub fn parse_or_default(text: &str) -> Self {
		text.parse().unwrap_or_default()
	}
}

impl fmt::Display for CsvDelimiter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

impl FromStr for CsvDelimiter {
	type Err = ();

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		match text {
			"," => Ok(Self::Comma),
			";" => Ok(Self::Semicolon),
			"\t" | "\\t" => Ok(Self::Tab),
			"|" => Ok(Self::Pipe),
			_ => Err(()),
		}
	}
}

impl Serialize for CsvDelimiter {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for CsvDelimiter {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = Option::<String>::deserialize(deserializer)?;
		Ok(text.as_deref().map(Self::parse_or_default).unwrap_or_default())
	}
}

/// Result of the schedule export dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleExport {
	pub selected_indices: Vec<usize>,
	pub mode: ExportMode,
	/// Target workbook, meaningful in Excel mode.
	pub excel_path: String,
	/// Target folder, meaningful in CSV mode.
	pub csv_folder: String,
	pub csv_delimiter: CsvDelimiter,
	pub csv_quote_all: bool,
}

/// A spreadsheet column and the parameter it feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
	pub column_name: String,
	pub selected_option: String,
}

/// Result of the area keyplan import dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaKeyplanImport {
	pub file_path: String,
	pub mappings: Vec<ColumnMapping>,
	/// `true` when the user asked to (re)load the file rather than import.
	pub load_requested: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRenumberInputs {
	pub category: String,
	pub print_set: String,
	pub starting_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRenumberInputsWithList {
	pub selected_indices: Vec<usize>,
	pub starting_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewnameReplaceInputs {
	pub find: String,
	pub replace: String,
	pub prefix: String,
	pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateSheetInputs {
	pub selected_indices: Vec<usize>,
	pub duplicate_with_views: bool,
	/// Index into [`DUPLICATE_SHEET_OPTIONS`].
	pub duplicate_option: usize,
	pub prefix: String,
	pub suffix: String,
}

/// Choices offered by the duplicate-sheet dialog.
pub const DUPLICATE_SHEET_OPTIONS: [&str; 3] = [
	"Duplicate Views",
	"Duplicate Views w/Details",
	"Duplicate Views AsDependent",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpgraderOptions {
	pub folder: String,
	pub include_subfolders: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindReplace {
	pub find_text: String,
	pub replace_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomTreeSettings {
	pub random_rotation: bool,
	pub random_size: bool,
	pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterCopyInputs {
	pub source_param: String,
	pub target_param: String,
	pub find_text: String,
	pub replace_text: String,
	pub prefix: String,
	pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateViewOptions {
	pub prefix: String,
	pub suffix: String,
	/// Value paired with the chosen option label, or empty.
	pub option_value: String,
}

/// Combo indices are `-1` when the list offered nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingViewOptions {
	pub sheet_number_param: String,
	pub sheet_name_param: String,
	pub template_index: i64,
	pub titleblock_index: i64,
	pub keyplan_enabled: bool,
	pub keyplan_template_index: i64,
	pub fill_type_index: i64,
	pub overwrite_existing: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyplanOptions {
	pub template_index: i64,
	pub fill_type_index: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_delimiter_falls_back_to_comma() {
		assert_eq!(CsvDelimiter::parse_or_default(";"), CsvDelimiter::Semicolon);
		assert_eq!(CsvDelimiter::parse_or_default("\t"), CsvDelimiter::Tab);
		assert_eq!(CsvDelimiter::parse_or_default("::"), CsvDelimiter::Comma);
		assert_eq!(CsvDelimiter::parse_or_default(""), CsvDelimiter::Comma);
	}

	#[test]
	fn delimiter_serialises_as_its_character() {
		let export = ScheduleExport {
			selected_indices: vec![0, 2],
			mode: ExportMode::Csv,
			csv_delimiter: CsvDelimiter::Pipe,
			..ScheduleExport::default()
		};
		let json = serde_json::to_value(&export).expect("serialise");
		assert_eq!(json["csv_delimiter"], "|");
		assert_eq!(json["mode"], "csv");
		assert_eq!(json["excel_path"], "");

		let back: ScheduleExport = serde_json::from_value(json).expect("deserialise");
		assert_eq!(back, export);
	}

	#[test]
	fn null_delimiter_reads_as_comma() {
		let delimiter: CsvDelimiter = serde_json::from_str("null").expect("deserialise");
		assert_eq!(delimiter, CsvDelimiter::Comma);
	}

	#[test]
	fn export_mode_index_treats_unknown_as_excel() {
		assert_eq!(ExportMode::from_index(1), ExportMode::Csv);
		assert_eq!(ExportMode::from_index(0), ExportMode::Excel);
		assert_eq!(ExportMode::from_index(7), ExportMode::Excel);
		assert_eq!(ExportMode::Csv.index(), 1);
	}

	#[test]
	fn empty_filter_selection_has_defined_fields() {
		let json = serde_json::to_string(&FilterSelection::default()).expect("serialise");
		assert_eq!(
			json,
			r#"{"selected_indices":[],"filter_parameter":"","filter_value":""}"#
		);
	}
}

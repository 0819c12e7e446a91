//! Request records describing what each dialog should show.
//!
//! Requests arrive from hosts as loosely typed JSON; every field is optional
//! and read through [`crate::coerce`], so malformed content degrades to
//! empty values rather than failing the dialog.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::coerce;
use crate::error::DialogError;
use crate::model::ItemModel;

/// Parse a request document, naming the dialog in the error.
pub fn parse<T: DeserializeOwned>(dialog: &'static str, text: &str) -> Result<T, DialogError> {
	let text = text.trim();
	let text = if text.is_empty() { "{}" } else { text };
	serde_json::from_str(text).map_err(|err| DialogError::invalid_request(dialog, err))
}

/// Input of the filter/search selection dialog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterSelectRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prompt: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub items: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub filter_params: Vec<String>,
	/// One value list per filter parameter, aligned by position.
	#[serde(deserialize_with = "coerce::string_lists")]
	pub values_by_param: Vec<Vec<String>>,
	#[serde(deserialize_with = "coerce::index_list")]
	pub prechecked: Vec<usize>,
	#[serde(deserialize_with = "coerce::text")]
	pub default_filter_param: String,
	#[serde(deserialize_with = "coerce::text")]
	pub default_filter_value: String,
}

impl FilterSelectRequest {
	/// Item model pairing each parameter with its value list.
	///
	/// Parameters without a value list (and value lists without a parameter)
	/// are ignored.
	#[must_use]
	pub fn model(&self) -> ItemModel {
		let params = self
			.filter_params
			.iter()
			.cloned()
			.zip(self.values_by_param.iter().cloned());
		ItemModel::new(self.items.iter().cloned(), params)
	}
}

/// Input of the checklist dialog with a two-way mode switch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModeSelectRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prompt: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub items: Vec<String>,
	#[serde(deserialize_with = "coerce::text")]
	pub mode_label_a: String,
	#[serde(deserialize_with = "coerce::text")]
	pub mode_label_b: String,
	#[serde(deserialize_with = "coerce::integer")]
	pub default_mode: i64,
	/// With only the first label, check it when `default_mode` is `1`
	/// instead of `0`. The reported mode is `0` for checked either way.
	#[serde(deserialize_with = "coerce::flag")]
	pub invert_single_mode: bool,
	#[serde(deserialize_with = "coerce::index_list")]
	pub prechecked: Vec<usize>,
}

/// Input of the schedule export dialog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleExportRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prompt: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub items: Vec<String>,
	#[serde(deserialize_with = "coerce::text")]
	pub mode_label_excel: String,
	#[serde(deserialize_with = "coerce::text")]
	pub mode_label_csv: String,
	#[serde(deserialize_with = "coerce::integer")]
	pub default_mode: i64,
	#[serde(deserialize_with = "coerce::index_list")]
	pub prechecked: Vec<usize>,
	#[serde(deserialize_with = "coerce::text")]
	pub excel_path: String,
	#[serde(deserialize_with = "coerce::text")]
	pub csv_folder: String,
	#[serde(deserialize_with = "coerce::text")]
	pub csv_delimiter: String,
	#[serde(deserialize_with = "coerce::flag")]
	pub csv_quote_all: bool,
}

/// Input of the area keyplan import dialog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AreaImportRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub file_path: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub column_names: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub preview_lines: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub parameter_options: Vec<String>,
	/// Preferred option per column, aligned by position.
	#[serde(deserialize_with = "coerce::string_list")]
	pub default_selections: Vec<String>,
}

/// Single-line text prompt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptTextRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prompt: String,
	#[serde(deserialize_with = "coerce::text")]
	pub default_value: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
}

/// Alert or confirmation message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub message: String,
}

/// Read-only multi-line report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextReportRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
}

/// Plain single or multiple choice from a list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectIndicesRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prompt: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub items: Vec<String>,
	#[serde(deserialize_with = "coerce::flag")]
	pub multiselect: bool,
}

/// Sheet renumbering: optional category and print set choices.
///
/// A missing list hides its combo box.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SheetRenumberRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::optional_string_list")]
	pub categories: Option<Vec<String>>,
	#[serde(deserialize_with = "coerce::optional_string_list")]
	pub print_sets: Option<Vec<String>>,
	#[serde(deserialize_with = "coerce::text")]
	pub category_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub print_set_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub starting_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
}

/// Sheet renumbering over a checklist of sheets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SheetRenumberListRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prompt: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub items: Vec<String>,
	#[serde(deserialize_with = "coerce::text")]
	pub starting_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViewnameReplaceRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub find_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub replace_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prefix_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub suffix_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DuplicateSheetRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prompt: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub items: Vec<String>,
	#[serde(deserialize_with = "coerce::text")]
	pub options_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub duplicate_with_views_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prefix_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub suffix_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectUpgraderRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub description: String,
	#[serde(deserialize_with = "coerce::text")]
	pub include_subfolders_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub initial_folder: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FindReplaceRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub find_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub replace_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
	#[serde(deserialize_with = "coerce::text")]
	pub cancel_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RandomTreeRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub rotation_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub size_label: String,
	#[serde(deserialize_with = "coerce::text")]
	pub percent_label: String,
	/// Shown initially, and used when the typed value does not parse.
	#[serde(deserialize_with = "coerce::number")]
	pub default_percent: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParameterCopyRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub param_names: Vec<String>,
	#[serde(deserialize_with = "coerce::text")]
	pub source_default: String,
	#[serde(deserialize_with = "coerce::text")]
	pub target_default: String,
	#[serde(deserialize_with = "coerce::text")]
	pub find_default: String,
	#[serde(deserialize_with = "coerce::text")]
	pub replace_default: String,
	#[serde(deserialize_with = "coerce::text")]
	pub prefix_default: String,
	#[serde(deserialize_with = "coerce::text")]
	pub suffix_default: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DuplicateViewRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::text")]
	pub description: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub option_labels: Vec<String>,
	/// Values returned for each label, aligned by position.
	#[serde(deserialize_with = "coerce::string_list")]
	pub option_values: Vec<String>,
	#[serde(deserialize_with = "coerce::integer")]
	pub default_index: i64,
	#[serde(deserialize_with = "coerce::text")]
	pub prefix_default: String,
	#[serde(deserialize_with = "coerce::text")]
	pub suffix_default: String,
	#[serde(deserialize_with = "coerce::text")]
	pub ok_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketingViewRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub sheet_params: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub template_names: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub titleblock_names: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub keyplan_template_names: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub fill_type_names: Vec<String>,
	#[serde(deserialize_with = "coerce::optional_text")]
	pub area_label: Option<String>,
	#[serde(deserialize_with = "coerce::text")]
	pub door_label: String,
	#[serde(deserialize_with = "coerce::flag")]
	pub keyplan_enabled: bool,
	#[serde(deserialize_with = "coerce::flag")]
	pub overwrite_existing: bool,
	#[serde(deserialize_with = "coerce::integer")]
	pub template_index: i64,
	#[serde(deserialize_with = "coerce::integer")]
	pub titleblock_index: i64,
	#[serde(deserialize_with = "coerce::integer")]
	pub keyplan_template_index: i64,
	#[serde(deserialize_with = "coerce::integer")]
	pub fill_type_index: i64,
	#[serde(deserialize_with = "coerce::text")]
	pub sheet_number_param: String,
	#[serde(deserialize_with = "coerce::text")]
	pub sheet_name_param: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyplanRequest {
	#[serde(deserialize_with = "coerce::text")]
	pub title: String,
	#[serde(deserialize_with = "coerce::string_list")]
	pub template_names: Vec<String>,
	#[serde(deserialize_with = "coerce::string_list")]
	pub fill_type_names: Vec<String>,
	#[serde(deserialize_with = "coerce::optional_text")]
	pub area_label: Option<String>,
	#[serde(deserialize_with = "coerce::integer")]
	pub template_index: i64,
	#[serde(deserialize_with = "coerce::integer")]
	pub fill_type_index: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filter_request_pairs_params_with_value_lists() {
		let request: FilterSelectRequest = parse(
			"select-filter",
			r#"{
				"items": ["Door 01", "Door 02", 3],
				"filter_params": ["Level", "Phase"],
				"values_by_param": [["L1", "l1", null]],
				"prechecked": [0, -2, "9"]
			}"#,
		)
		.expect("parses");

		assert_eq!(request.items, vec!["Door 01", "Door 02", "3"]);
		assert_eq!(request.prechecked, vec![0, 9]);

		let model = request.model();
		assert_eq!(model.count(), 3);
		assert!(model.has_param("level"));
		assert!(!model.has_param("Phase"));
		assert_eq!(model.value("Level", 2), Some(""));
	}

	#[test]
	fn empty_document_is_an_empty_request() {
		let request: FilterSelectRequest = parse("select-filter", "  ").expect("parses");
		assert!(request.items.is_empty());
		assert_eq!(request.default_filter_param, "");
	}

	#[test]
	fn malformed_document_names_the_dialog() {
		let err = parse::<ModeSelectRequest>("select-mode", "[1, 2").expect_err("fails");
		assert!(err.to_string().contains("select-mode"));
	}

	#[test]
	fn missing_rename_lists_stay_absent() {
		let request: SheetRenumberRequest =
			parse("sheet-renumber", r#"{"categories": ["A"], "print_sets": null}"#).expect("parses");
		assert_eq!(request.categories, Some(vec!["A".to_string()]));
		assert_eq!(request.print_sets, None);
	}

	#[test]
	fn numeric_fields_accept_text() {
		let request: RandomTreeRequest =
			parse("random-trees", r#"{"default_percent": "15"}"#).expect("parses");
		assert_eq!(request.default_percent, 15.0);

		let request: KeyplanRequest =
			parse("keyplan", r#"{"template_index": "2", "area_label": null}"#).expect("parses");
		assert_eq!(request.template_index, 2);
		assert_eq!(request.area_label, None);
	}
}

//! Forms for the host's prompt, message and option-sheet dialogs.

use bim_dialogs_core::coerce::parse_number_or;
use bim_dialogs_core::requests::{
	DuplicateSheetRequest, DuplicateViewRequest, FindReplaceRequest, KeyplanRequest,
	MarketingViewRequest, MessageRequest, ParameterCopyRequest, ProjectUpgraderRequest,
	PromptTextRequest, RandomTreeRequest, SelectIndicesRequest, SheetRenumberListRequest,
	SheetRenumberRequest, TextReportRequest, ViewnameReplaceRequest,
};
use bim_dialogs_core::results::{
	DUPLICATE_SHEET_OPTIONS, DuplicateSheetInputs, DuplicateViewOptions, FindReplace,
	KeyplanOptions, MarketingViewOptions, ParameterCopyInputs, ProjectUpgraderOptions,
	RandomTreeSettings, SheetRenumberInputs, SheetRenumberInputsWithList, ViewnameReplaceInputs,
};

use super::{Form, FormDialog};
use crate::components::ButtonBar;
use crate::components::buttons::DEFAULT_OK;

const NOT_SELECTED: &str = "(not selected)";

fn or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
	if text.trim().is_empty() { fallback } else { text }
}

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| (*value).to_string()).collect()
}

/// Single-line text entry; commits the typed text.
#[must_use]
pub fn prompt_text(request: &PromptTextRequest) -> FormDialog<String> {
	let form = Form::new(&request.title, &request.prompt)
		.text("value", "", &request.default_value)
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, &request.cancel_text));
	FormDialog::new(form, |values| values.text("value").to_string())
}

/// Message with a lone OK button.
#[must_use]
pub fn alert(request: &MessageRequest) -> FormDialog<()> {
	let form = Form::new(&request.title, &request.message).with_buttons(ButtonBar::new([DEFAULT_OK]));
	FormDialog::new(form, |_| ())
}

/// Message with OK and Cancel; commits `true` on OK.
#[must_use]
pub fn confirm(request: &MessageRequest) -> FormDialog<bool> {
	let form = Form::new(&request.title, &request.message);
	FormDialog::new(form, |_| true)
}

/// Scrollable read-only text. The Cancel button only appears when the host
/// names it.
#[must_use]
pub fn text_report(request: &TextReportRequest) -> FormDialog<()> {
	let ok = or(&request.ok_text, DEFAULT_OK);
	let buttons = if request.cancel_text.trim().is_empty() {
		ButtonBar::new([ok])
	} else {
		ButtonBar::new([ok, request.cancel_text.as_str()])
	};
	let form = Form::new(&request.title, "")
		.report(&request.text)
		.with_buttons(buttons);
	FormDialog::new(form, |_| ())
}

/// Plain list choice: check boxes when `multiselect`, otherwise a single
/// highlighted row.
#[must_use]
pub fn select_indices(request: &SelectIndicesRequest) -> FormDialog<Vec<usize>> {
	let form = Form::new(&request.title, &request.prompt);
	let form = if request.multiselect {
		form.checklist("items", "", &request.items, &[])
	} else {
		form.pick("items", &request.items)
	};
	FormDialog::new(form, |values| values.indices("items").to_vec())
}

#[must_use]
pub fn sheet_renumber(request: &SheetRenumberRequest) -> FormDialog<SheetRenumberInputs> {
	let mut form = Form::new(&request.title, "");
	if let Some(categories) = &request.categories {
		form = form.choice("category", &request.category_label, categories, "");
	}
	if let Some(print_sets) = &request.print_sets {
		form = form.choice("print_set", &request.print_set_label, print_sets, "");
	}
	let form = form
		.text("start", &request.starting_label, "")
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, &request.cancel_text));
	FormDialog::new(form, |values| SheetRenumberInputs {
		category: values.text("category").to_string(),
		print_set: values.text("print_set").to_string(),
		starting_number: values.text("start").to_string(),
	})
}

#[must_use]
pub fn sheet_renumber_with_list(
	request: &SheetRenumberListRequest,
) -> FormDialog<SheetRenumberInputsWithList> {
	let form = Form::new(&request.title, &request.prompt)
		.checklist("sheets", "", &request.items, &[])
		.text("start", &request.starting_label, "")
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, &request.cancel_text));
	FormDialog::new(form, |values| SheetRenumberInputsWithList {
		selected_indices: values.indices("sheets").to_vec(),
		starting_number: values.text("start").to_string(),
	})
}

#[must_use]
pub fn viewname_replace(request: &ViewnameReplaceRequest) -> FormDialog<ViewnameReplaceInputs> {
	let form = Form::new(&request.title, "")
		.text("find", &request.find_label, "")
		.text("replace", &request.replace_label, "")
		.text("prefix", &request.prefix_label, "")
		.text("suffix", &request.suffix_label, "")
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, &request.cancel_text));
	FormDialog::new(form, |values| ViewnameReplaceInputs {
		find: values.text("find").to_string(),
		replace: values.text("replace").to_string(),
		prefix: values.text("prefix").to_string(),
		suffix: values.text("suffix").to_string(),
	})
}

#[must_use]
pub fn duplicate_sheet(request: &DuplicateSheetRequest) -> FormDialog<DuplicateSheetInputs> {
	let form = Form::new(&request.title, &request.prompt)
		.checklist("sheets", "", &request.items, &[])
		.check("with_views", &request.duplicate_with_views_label, true)
		.choice("option", &request.options_label, &strings(&DUPLICATE_SHEET_OPTIONS), "")
		.text("prefix", &request.prefix_label, "")
		.text("suffix", &request.suffix_label, "")
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, &request.cancel_text));
	FormDialog::new(form, |values| DuplicateSheetInputs {
		selected_indices: values.indices("sheets").to_vec(),
		duplicate_with_views: values.flag("with_views"),
		duplicate_option: usize::try_from(values.position("option")).unwrap_or(0),
		prefix: values.text("prefix").to_string(),
		suffix: values.text("suffix").to_string(),
	})
}

#[must_use]
pub fn project_upgrader(request: &ProjectUpgraderRequest) -> FormDialog<ProjectUpgraderOptions> {
	let mut form = Form::new(&request.title, "");
	if !request.description.trim().is_empty() {
		form = form.note(request.description.clone());
	}
	let form = form
		.folder("folder", "Folder", &request.initial_folder, or(&request.title, "Select Folder"))
		.check(
			"subfolders",
			or(&request.include_subfolders_label, "Include subfolders"),
			true,
		)
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, &request.cancel_text));
	FormDialog::new(form, |values| ProjectUpgraderOptions {
		folder: values.text("folder").to_string(),
		include_subfolders: values.flag("subfolders"),
	})
}

#[must_use]
pub fn find_replace(request: &FindReplaceRequest) -> FormDialog<FindReplace> {
	let form = Form::new(&request.title, "")
		.text("find", &request.find_label, "")
		.text("replace", &request.replace_label, "")
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, &request.cancel_text));
	FormDialog::new(form, |values| FindReplace {
		find_text: values.text("find").to_string(),
		replace_text: values.text("replace").to_string(),
	})
}

/// Tree randomisation options. An unparsable percentage falls back to the
/// default.
#[must_use]
pub fn random_trees(request: &RandomTreeRequest) -> FormDialog<RandomTreeSettings> {
	let default_percent = request.default_percent;
	let form = Form::new(&request.title, "")
		.check("rotation", or(&request.rotation_label, "Random Rotation"), true)
		.check("size", or(&request.size_label, "Random Size"), true)
		.text(
			"percent",
			or(&request.percent_label, "Size variance (%)"),
			&format!("{default_percent:.0}"),
		);
	FormDialog::new(form, move |values| RandomTreeSettings {
		random_rotation: values.flag("rotation"),
		random_size: values.flag("size"),
		percent: parse_number_or(values.text("percent"), default_percent),
	})
}

#[must_use]
pub fn parameter_copy(request: &ParameterCopyRequest) -> FormDialog<ParameterCopyInputs> {
	let names = &request.param_names;
	let form = Form::new(&request.title, "")
		.choice("source", "Source Parameter", names, &request.source_default)
		.choice("target", "Target Parameter", names, &request.target_default)
		.text("find", "Find Text", &request.find_default)
		.text("replace", "Replace Text", &request.replace_default)
		.text("prefix", "Prefix", &request.prefix_default)
		.text("suffix", "Suffix", &request.suffix_default);
	FormDialog::new(form, |values| ParameterCopyInputs {
		source_param: values.text("source").to_string(),
		target_param: values.text("target").to_string(),
		find_text: values.text("find").to_string(),
		replace_text: values.text("replace").to_string(),
		prefix: values.text("prefix").to_string(),
		suffix: values.text("suffix").to_string(),
	})
}

/// Prefix/suffix plus one of the host's duplicate modes. With nothing
/// picked the first mode's value is reported.
#[must_use]
pub fn duplicate_view(request: &DuplicateViewRequest) -> FormDialog<DuplicateViewOptions> {
	let mut form = Form::new(&request.title, "");
	if !request.description.trim().is_empty() {
		form = form.note(request.description.clone());
	}
	let selected = usize::try_from(request.default_index).ok();
	let form = form
		.text("prefix", "Prefix", &request.prefix_default)
		.text("suffix", "Suffix", &request.suffix_default)
		.radio("option", "Duplicate Option", &request.option_labels, selected)
		.with_buttons(ButtonBar::ok_cancel(&request.ok_text, ""));
	let option_values = request.option_values.clone();
	FormDialog::new(form, move |values| DuplicateViewOptions {
		prefix: values.text("prefix").to_string(),
		suffix: values.text("suffix").to_string(),
		option_value: option_values
			.get(values.radio("option").unwrap_or(0))
			.cloned()
			.unwrap_or_default(),
	})
}

#[must_use]
pub fn marketing_view(request: &MarketingViewRequest) -> FormDialog<MarketingViewOptions> {
	let area = request.area_label.as_deref().unwrap_or(NOT_SELECTED);
	let mut form = Form::new(&request.title, "").note(format!("Area: {area}"));
	if !request.door_label.trim().is_empty() {
		form = form.note(format!("Door: {}", request.door_label));
	}
	let form = form
		.choice(
			"sheet_number",
			"Sheet number parameter:",
			&request.sheet_params,
			&request.sheet_number_param,
		)
		.choice(
			"sheet_name",
			"Sheet name parameter:",
			&request.sheet_params,
			&request.sheet_name_param,
		)
		.choice_at(
			"template",
			"Marketing view template:",
			&request.template_names,
			request.template_index,
		)
		.choice_at(
			"titleblock",
			"Titleblock:",
			&request.titleblock_names,
			request.titleblock_index,
		)
		.check("keyplan", "Create Keyplan", request.keyplan_enabled)
		.choice_at(
			"keyplan_template",
			"Keyplan view template:",
			&request.keyplan_template_names,
			request.keyplan_template_index,
		)
		.choice_at(
			"fill_type",
			"Keyplan filled region type:",
			&request.fill_type_names,
			request.fill_type_index,
		)
		.check(
			"overwrite",
			"Overwrite existing sheet if sheet number exists",
			request.overwrite_existing,
		)
		.with_buttons(ButtonBar::ok_cancel("Create", ""));
	FormDialog::new(form, |values| MarketingViewOptions {
		sheet_number_param: values.text("sheet_number").to_string(),
		sheet_name_param: values.text("sheet_name").to_string(),
		template_index: values.position("template"),
		titleblock_index: values.position("titleblock"),
		keyplan_enabled: values.flag("keyplan"),
		keyplan_template_index: values.position("keyplan_template"),
		fill_type_index: values.position("fill_type"),
		overwrite_existing: values.flag("overwrite"),
	})
}

#[must_use]
pub fn keyplan(request: &KeyplanRequest) -> FormDialog<KeyplanOptions> {
	let area = request.area_label.as_deref().unwrap_or(NOT_SELECTED);
	let form = Form::new(&request.title, "")
		.note(format!("Areas: {area}"))
		.choice_at(
			"template",
			"Keyplan view template:",
			&request.template_names,
			request.template_index,
		)
		.choice_at(
			"fill_type",
			"Keyplan filled region type:",
			&request.fill_type_names,
			request.fill_type_index,
		)
		.with_buttons(ButtonBar::ok_cancel("Create", ""));
	FormDialog::new(form, |values| KeyplanOptions {
		template_index: values.position("template"),
		fill_type_index: values.position("fill_type"),
	})
}

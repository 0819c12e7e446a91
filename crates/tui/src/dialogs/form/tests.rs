use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use bim_dialogs_core::requests::{
	DuplicateSheetRequest, DuplicateViewRequest, MarketingViewRequest, MessageRequest,
	ProjectUpgraderRequest, PromptTextRequest, RandomTreeRequest, SelectIndicesRequest,
	SheetRenumberRequest, TextReportRequest,
};
use bim_dialogs_core::{FilePicker, OpenFile, SaveFile};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyCode};

use super::{FormDialog, records};
use crate::components::Decorations;
use crate::runtime::{Modal, drive};
use crate::style::Theme;
use crate::test_support::{buffer_to_string, click, ctrl, press, typed};

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| (*value).to_string()).collect()
}

fn run<T>(dialog: &mut FormDialog<T>, events: Vec<Event>) -> Option<T> {
	let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("terminal");
	drive(&mut terminal, dialog, events.into_iter().map(Ok)).expect("drive")
}

fn screen<T>(dialog: &mut FormDialog<T>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("terminal");
	terminal.draw(|frame| dialog.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

fn keys(codes: &[KeyCode]) -> Vec<Event> {
	codes.iter().map(|&code| Event::Key(press(code))).collect()
}

#[test]
fn prompt_text_appends_to_the_default() {
	let request = PromptTextRequest {
		title: "Rename".into(),
		prompt: "New name".into(),
		default_value: "Level".into(),
		..PromptTextRequest::default()
	};
	let mut dialog = records::prompt_text(&request);
	let mut events = typed(" 2");
	events.push(Event::Key(press(KeyCode::Enter)));
	assert_eq!(run(&mut dialog, events), Some("Level 2".to_string()));
	assert_eq!(run(&mut records::prompt_text(&request), keys(&[KeyCode::Esc])), None);
}

#[test]
fn alert_has_only_ok_and_confirm_commits_true() {
	let request = MessageRequest {
		title: "Done".into(),
		message: "Export finished".into(),
	};
	let mut alert = records::alert(&request).with_decorations(Decorations::new(Theme::fallback()));
	let text = screen(&mut alert);
	assert!(text.contains("Export finished"));
	assert!(text.contains("[ OK ]"));
	assert!(!text.contains("Cancel"));

	let mut confirm = records::confirm(&request);
	assert_eq!(run(&mut confirm, keys(&[KeyCode::Enter])), Some(true));
	assert_eq!(run(&mut records::confirm(&request), keys(&[KeyCode::Esc])), None);
}

#[test]
fn text_report_shows_cancel_only_when_named() {
	let request = TextReportRequest {
		title: "Report".into(),
		text: "Sheet A-101 renamed\nSheet A-102 skipped".into(),
		..TextReportRequest::default()
	};
	let text = screen(&mut records::text_report(&request));
	assert!(text.contains("Sheet A-102 skipped"));
	assert!(!text.contains("Cancel"));

	let request = TextReportRequest {
		ok_text: "Close".into(),
		cancel_text: "Abort".into(),
		..request
	};
	let text = screen(&mut records::text_report(&request));
	assert!(text.contains("[ Close ]  [ Abort ]"));
}

#[test]
fn single_select_reports_nothing_until_a_row_is_chosen() {
	let request = SelectIndicesRequest {
		title: "Pick".into(),
		items: strings(&["North", "South", "East"]),
		..SelectIndicesRequest::default()
	};
	assert_eq!(run(&mut records::select_indices(&request), keys(&[KeyCode::Enter])), Some(vec![]));
	let events = keys(&[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
	assert_eq!(run(&mut records::select_indices(&request), events), Some(vec![1]));

	let request = SelectIndicesRequest {
		multiselect: true,
		..request
	};
	let events = keys(&[KeyCode::Char(' '), KeyCode::End, KeyCode::Char(' '), KeyCode::Enter]);
	assert_eq!(run(&mut records::select_indices(&request), events), Some(vec![0, 2]));
}

#[test]
fn sheet_renumber_omits_missing_lists() {
	let request = SheetRenumberRequest {
		categories: Some(strings(&["Architectural", "Structural"])),
		print_sets: None,
		starting_label: "Start at".into(),
		..SheetRenumberRequest::default()
	};
	let mut dialog = records::sheet_renumber(&request);
	let mut events = keys(&[KeyCode::Right, KeyCode::Tab]);
	events.extend(typed("A-201"));
	events.push(Event::Key(press(KeyCode::Enter)));
	let result = run(&mut dialog, events).expect("committed");
	assert_eq!(result.category, "Structural");
	assert_eq!(result.print_set, "");
	assert_eq!(result.starting_number, "A-201");
}

#[test]
fn duplicate_sheet_defaults_and_edits() {
	let request = DuplicateSheetRequest {
		items: strings(&["A-101", "A-102"]),
		duplicate_with_views_label: "Duplicate with views".into(),
		options_label: "Options".into(),
		..DuplicateSheetRequest::default()
	};
	let defaults = records::duplicate_sheet(&request).result();
	assert!(defaults.duplicate_with_views);
	assert_eq!(defaults.duplicate_option, 0);
	assert!(defaults.selected_indices.is_empty());

	let events = keys(&[
		KeyCode::Down,
		KeyCode::Char(' '),
		KeyCode::Tab,
		KeyCode::Char(' '),
		KeyCode::Tab,
		KeyCode::Left,
		KeyCode::Enter,
	]);
	let result = run(&mut records::duplicate_sheet(&request), events).expect("committed");
	assert_eq!(result.selected_indices, vec![1]);
	assert!(!result.duplicate_with_views);
	assert_eq!(result.duplicate_option, 2);
}

#[test]
fn random_trees_falls_back_on_bad_percent() {
	let request = RandomTreeRequest {
		default_percent: 15.0,
		..RandomTreeRequest::default()
	};
	let mut dialog = records::random_trees(&request);
	let text = screen(&mut dialog);
	for expected in ["[x] Random Rotation", "[x] Random Size", "Size variance (%)", "15"] {
		assert!(text.contains(expected), "missing {expected:?}\n{text}");
	}

	let mut events = keys(&[KeyCode::Char(' '), KeyCode::Tab, KeyCode::Tab]);
	events.extend(typed("x"));
	events.push(Event::Key(press(KeyCode::Enter)));
	let result = run(&mut dialog, events).expect("committed");
	assert!(!result.random_rotation);
	assert!(result.random_size);
	assert_eq!(result.percent, 15.0);

	let mut dialog = records::random_trees(&request);
	let mut events = keys(&[KeyCode::Tab, KeyCode::Tab, KeyCode::Backspace, KeyCode::Backspace]);
	events.extend(typed("2.5"));
	events.push(Event::Key(press(KeyCode::Enter)));
	assert_eq!(run(&mut dialog, events).map(|result| result.percent), Some(2.5));
}

#[test]
fn duplicate_view_reports_the_paired_value() {
	let request = DuplicateViewRequest {
		option_labels: strings(&["Duplicate", "With Detailing", "As Dependent"]),
		option_values: strings(&["plain", "detailing"]),
		default_index: -1,
		..DuplicateViewRequest::default()
	};
	assert_eq!(records::duplicate_view(&request).result().option_value, "plain");

	let request = DuplicateViewRequest {
		default_index: 1,
		..request
	};
	assert_eq!(records::duplicate_view(&request).result().option_value, "detailing");

	let request = DuplicateViewRequest {
		default_index: 2,
		..request
	};
	assert_eq!(records::duplicate_view(&request).result().option_value, "");
}

#[test]
fn marketing_view_indices_follow_the_lists() {
	let request = MarketingViewRequest {
		title: "Marketing Plan".into(),
		sheet_params: strings(&["Sheet Number", "Unit Number", "Unit Name"]),
		titleblock_names: strings(&["TB-A1"]),
		titleblock_index: 4,
		fill_type_names: strings(&["Solid", "Hatch"]),
		fill_type_index: 1,
		sheet_number_param: "Unit Number".into(),
		keyplan_enabled: true,
		..MarketingViewRequest::default()
	};
	let mut dialog = records::marketing_view(&request);
	let result = dialog.result();
	assert_eq!(result.sheet_number_param, "Unit Number");
	assert_eq!(result.sheet_name_param, "Sheet Number");
	assert_eq!(result.template_index, -1);
	assert_eq!(result.titleblock_index, 0);
	assert_eq!(result.keyplan_template_index, -1);
	assert_eq!(result.fill_type_index, 1);
	assert!(result.keyplan_enabled);
	assert!(!result.overwrite_existing);

	let mut terminal = Terminal::new(TestBackend::new(70, 40)).expect("terminal");
	terminal.draw(|frame| dialog.draw(frame)).expect("draw");
	let text = buffer_to_string(terminal.backend().buffer());
	assert!(text.contains("Area: (not selected)"));
	assert!(!text.contains("Door:"));
	assert!(text.contains("[ Create ]"));
}

struct FolderPicker {
	answer: PathBuf,
	asked: Rc<RefCell<Vec<String>>>,
}

impl FilePicker for FolderPicker {
	fn open_file(&self, _request: &OpenFile) -> Option<PathBuf> {
		None
	}

	fn save_file(&self, _request: &SaveFile) -> Option<PathBuf> {
		None
	}

	fn pick_folder(&self, title: &str, _initial_directory: Option<&Path>) -> Option<PathBuf> {
		self.asked.borrow_mut().push(title.to_string());
		Some(self.answer.clone())
	}
}

#[test]
fn project_upgrader_browses_for_a_folder() {
	let asked = Rc::new(RefCell::new(Vec::new()));
	let picker = FolderPicker {
		answer: PathBuf::from("/projects/2024"),
		asked: Rc::clone(&asked),
	};
	let request = ProjectUpgraderRequest {
		initial_folder: "/projects".into(),
		..ProjectUpgraderRequest::default()
	};
	let mut dialog = records::project_upgrader(&request).with_picker(Box::new(picker));
	let events = vec![
		Event::Key(ctrl('o')),
		Event::Key(press(KeyCode::Tab)),
		Event::Key(press(KeyCode::Char(' '))),
		Event::Key(press(KeyCode::Enter)),
	];
	let result = run(&mut dialog, events).expect("committed");
	assert_eq!(result.folder, "/projects/2024");
	assert!(!result.include_subfolders);
	assert_eq!(*asked.borrow(), vec!["Select Folder".to_string()]);
}

#[test]
fn clicking_a_check_box_toggles_it() {
	let request = RandomTreeRequest::default();
	let mut dialog = records::random_trees(&request);
	let text = screen(&mut dialog);
	let (x, y) = text
		.lines()
		.enumerate()
		.find_map(|(y, line)| {
			line.find("[x] Random Size")
				.map(|byte| (line[..byte].chars().count(), y))
		})
		.expect("check box");
	dialog.handle_mouse(click(x as u16 + 1, y as u16));
	assert!(!dialog.result().random_size);
	assert!(dialog.result().random_rotation);
}

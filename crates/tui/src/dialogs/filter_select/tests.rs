use bim_dialogs_core::requests::FilterSelectRequest;
use bim_dialogs_core::{DialogPhase, FilterSelection};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyCode};

use super::{FilterSelectDialog, Focus};
use crate::components::Decorations;
use crate::runtime::{Modal, drive};
use crate::style::Theme;
use crate::test_support::{buffer_to_string, click, ctrl, press, typed};

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| (*value).to_string()).collect()
}

fn request() -> FilterSelectRequest {
	FilterSelectRequest {
		title: "Select Sheets".into(),
		prompt: "Pick".into(),
		items: strings(&["Door A", "Door B", "Window"]),
		filter_params: strings(&["Level", "Phase"]),
		values_by_param: vec![
			strings(&["L1", "L2", "L1"]),
			strings(&["New", "New", "Existing"]),
		],
		prechecked: vec![2],
		..FilterSelectRequest::default()
	}
}

fn dialog(request: &FilterSelectRequest) -> FilterSelectDialog {
	FilterSelectDialog::new(request, Decorations::new(Theme::fallback()))
}

fn key(code: KeyCode) -> Event {
	Event::Key(press(code))
}

fn chord(ch: char) -> Event {
	Event::Key(ctrl(ch))
}

fn run(dialog: &mut FilterSelectDialog, events: Vec<Event>) -> Option<FilterSelection> {
	let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
	drive(&mut terminal, dialog, events.into_iter().map(Ok)).expect("drive")
}

fn selection(indices: &[usize], parameter: &str, value: &str) -> Option<FilterSelection> {
	Some(FilterSelection {
		selected_indices: indices.to_vec(),
		filter_parameter: parameter.into(),
		filter_value: value.into(),
	})
}

#[test]
fn enter_returns_prechecked_items_without_filter() {
	let mut dialog = dialog(&request());
	assert_eq!(run(&mut dialog, vec![key(KeyCode::Enter)]), selection(&[2], "", ""));
	assert_eq!(dialog.view().phase(), DialogPhase::Committed);
}

#[test]
fn escape_cancels() {
	let mut dialog = dialog(&request());
	assert_eq!(run(&mut dialog, vec![chord('a'), key(KeyCode::Esc)]), None);
	assert_eq!(dialog.view().phase(), DialogPhase::Dismissed);
}

#[test]
fn applied_filter_is_reported_with_the_selection() {
	let mut dialog = dialog(&request());
	let events = vec![
		key(KeyCode::Tab),
		key(KeyCode::Tab),
		key(KeyCode::Tab),
		chord('f'),
		key(KeyCode::Tab),
		chord('r'),
		key(KeyCode::Enter),
	];
	assert_eq!(run(&mut dialog, events), selection(&[0], "Level", "L1"));
}

#[test]
fn search_gestures_keep_hidden_selection() {
	let mut dialog = dialog(&request());
	let mut events = typed("door");
	events.push(chord('a'));
	events.push(chord('d'));
	events.push(key(KeyCode::Enter));
	assert_eq!(run(&mut dialog, events), selection(&[2], "", ""));
	assert_eq!(dialog.search.text(), "door");
	assert_eq!(dialog.view().visible(), [0, 1]);
}

#[test]
fn space_in_search_is_text() {
	let mut dialog = dialog(&request());
	for event in typed("door a") {
		if let Event::Key(key) = event {
			dialog.handle_key(key);
		}
	}
	assert_eq!(dialog.view().visible(), [0]);
	assert_eq!(dialog.view().snapshot(), vec![2]);
}

#[test]
fn changing_parameter_repopulates_values() {
	let mut dialog = dialog(&request());
	dialog.handle_key(press(KeyCode::Tab));
	dialog.handle_key(press(KeyCode::Tab));
	assert_eq!(dialog.focus(), Focus::Parameter);
	assert_eq!(dialog.values.options(), ["L1", "L2"]);

	dialog.handle_key(press(KeyCode::Right));
	assert_eq!(dialog.params.selected_text(), Some("Phase"));
	assert_eq!(dialog.values.options(), ["Existing", "New"]);
	assert_eq!(dialog.values.selected_text(), Some("Existing"));

	dialog.handle_key(press(KeyCode::Enter));
	assert_eq!(dialog.view().visible(), [2]);

	dialog.handle_key(ctrl('x'));
	assert_eq!(dialog.view().visible(), [0, 1, 2]);
}

#[test]
fn default_filter_is_preselected_but_not_applied() {
	let request = FilterSelectRequest {
		default_filter_param: "Phase".into(),
		default_filter_value: "New".into(),
		..request()
	};
	let mut dialog = dialog(&request);
	assert_eq!(dialog.params.selected_text(), Some("Phase"));
	assert_eq!(dialog.values.selected_text(), Some("New"));
	assert_eq!(dialog.view().visible().len(), 3);
	assert_eq!(run(&mut dialog, vec![key(KeyCode::Enter)]), selection(&[2], "", ""));
}

#[test]
fn unknown_parameter_clears_the_filter() {
	let request = FilterSelectRequest {
		filter_params: strings(&["Level", "Ghost"]),
		values_by_param: vec![strings(&["L1", "L2", "L1"])],
		..request()
	};
	let mut dialog = dialog(&request);
	let events = vec![
		key(KeyCode::Tab),
		key(KeyCode::Tab),
		key(KeyCode::Tab),
		chord('f'),
		key(KeyCode::BackTab),
		key(KeyCode::Right),
		key(KeyCode::Enter),
		key(KeyCode::Tab),
		key(KeyCode::Tab),
		key(KeyCode::Enter),
	];
	assert_eq!(run(&mut dialog, events), selection(&[2], "", ""));
	assert_eq!(dialog.values.selected_text(), None);
}

#[test]
fn render_shows_every_control() {
	let mut dialog = dialog(&request());
	let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
	terminal.draw(|frame| dialog.draw(frame)).expect("draw");
	let screen = buffer_to_string(terminal.backend().buffer());
	for expected in [
		"Select Sheets",
		"Pick",
		"Search",
		"Filter parameter",
		"◀ Level ▶",
		"◀ L1 ▶",
		"[x] Window",
		"[ ] Door A",
		"1 selected | 3 visible | 3 total",
		"[ OK ]",
		"[ Cancel ]",
	] {
		assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
	}
}

#[test]
fn active_filter_is_shown_in_the_list_title() {
	let mut dialog = dialog(&request());
	dialog.handle_key(ctrl('f'));
	let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
	terminal.draw(|frame| dialog.draw(frame)).expect("draw");
	let screen = buffer_to_string(terminal.backend().buffer());
	assert!(screen.contains("Items (Level = L1)"));
	assert!(screen.contains("1 selected | 2 visible | 3 total"));
}

#[test]
fn mouse_toggles_rows_and_presses_ok() {
	let mut dialog = dialog(&request());
	let events = vec![Event::Mouse(click(10, 10)), Event::Mouse(click(43, 18))];
	assert_eq!(run(&mut dialog, events), selection(&[1, 2], "", ""));
	assert_eq!(dialog.focus(), Focus::List);
}

#[test]
fn cancel_button_dismisses() {
	let mut dialog = dialog(&request());
	assert_eq!(run(&mut dialog, vec![Event::Mouse(click(52, 18))]), None);
}

#[test]
fn focus_ring_wraps_both_ways() {
	assert_eq!(Focus::Search.step(-1), Focus::Value);
	assert_eq!(Focus::Value.step(1), Focus::Search);
	assert_eq!(Focus::List.step(2), Focus::Value);
	assert_eq!(Focus::Parameter.step(-6), Focus::Search);
}

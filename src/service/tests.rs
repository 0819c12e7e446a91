use std::cell::RefCell;

use anyhow::{Result, bail};
use bim_dialogs_core::requests::{
	FilterSelectRequest, MessageRequest, RandomTreeRequest, SelectIndicesRequest,
};
use bim_dialogs_core::{FilePicker, NoPicker, OpenFile};
use bim_dialogs_tui::{Decorations, Modal, drive};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::{DialogService, ModalHost};

/// Feeds a fixed key script to every dialog shown.
struct ScriptedHost {
	keys: RefCell<Vec<KeyCode>>,
}

impl ScriptedHost {
	fn new(keys: &[KeyCode]) -> Self {
		Self {
			keys: RefCell::new(keys.to_vec()),
		}
	}
}

impl ModalHost for ScriptedHost {
	fn present<M: Modal>(&self, modal: &mut M) -> Result<Option<M::Output>> {
		let mut terminal = Terminal::new(TestBackend::new(60, 20))?;
		let keys: Vec<KeyCode> = self.keys.borrow_mut().drain(..).collect();
		let events = keys
			.into_iter()
			.map(|code| Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))));
		drive(&mut terminal, modal, events)
	}
}

struct BrokenHost;

impl ModalHost for BrokenHost {
	fn present<M: Modal>(&self, _modal: &mut M) -> Result<Option<M::Output>> {
		bail!("terminal unavailable")
	}
}

fn service(keys: &[KeyCode]) -> DialogService<ScriptedHost> {
	DialogService::with_host(ScriptedHost::new(keys), Decorations::default())
		.with_pickers(|| Box::new(NoPicker) as Box<dyn FilePicker>)
}

fn message() -> MessageRequest {
	MessageRequest {
		title: "Delete".into(),
		message: "Delete 3 sheets?".into(),
	}
}

#[test]
fn filter_dialog_returns_prechecked_items() {
	let request = FilterSelectRequest {
		items: vec!["A-101".into(), "A-102".into()],
		prechecked: vec![1],
		..FilterSelectRequest::default()
	};
	let result = service(&[KeyCode::Enter])
		.select_items_with_filter(&request)
		.expect("committed");
	assert_eq!(result.selected_indices, vec![1]);
	assert_eq!(result.filter_parameter, "");
}

#[test]
fn confirm_maps_cancel_to_false() {
	assert!(service(&[KeyCode::Enter]).confirm(&message()));
	assert!(!service(&[KeyCode::Esc]).confirm(&message()));
}

#[test]
fn cancelled_selection_is_empty() {
	let request = SelectIndicesRequest {
		items: vec!["North".into(), "South".into()],
		..SelectIndicesRequest::default()
	};
	assert!(service(&[KeyCode::Down, KeyCode::Esc]).select_indices(&request).is_empty());
	assert_eq!(
		service(&[KeyCode::Down, KeyCode::Enter]).select_indices(&request),
		vec![0]
	);
}

#[test]
fn terminal_failure_reads_as_cancel() {
	let service = DialogService::with_host(BrokenHost, Decorations::default());
	assert!(!service.confirm(&message()));
	assert_eq!(service.random_tree_settings(&RandomTreeRequest::default()), None);
	assert!(!service.show_text_report(&Default::default()));
}

#[test]
fn random_tree_defaults_round_trip_through_the_service() {
	let request = RandomTreeRequest {
		default_percent: 20.0,
		..RandomTreeRequest::default()
	};
	let settings = service(&[KeyCode::Enter])
		.random_tree_settings(&request)
		.expect("committed");
	assert!(settings.random_rotation);
	assert!(settings.random_size);
	assert_eq!(settings.percent, 20.0);
}

#[test]
fn pickers_without_native_support_cancel() {
	let service = service(&[]);
	assert_eq!(service.open_file(&OpenFile::new("Open", "All Files (*.*)|*.*")), None);
	assert_eq!(service.select_folder("Folder", None), None);
}

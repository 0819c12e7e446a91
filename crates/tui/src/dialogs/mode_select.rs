//! Checklist with a two-way mode switch underneath.

use bim_dialogs_core::requests::ModeSelectRequest;
use bim_dialogs_core::{ItemModel, SelectionView, SelectionWithMode};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};

use crate::components::{
	ButtonBar, CheckBox, ChecklistPane, Decorations, Heading, RadioGroup, point_in_rect,
	render_frame,
};
use crate::runtime::{Flow, Modal};

pub const DEFAULT_LABEL_A: &str = "Option A";
pub const DEFAULT_LABEL_B: &str = "Option B";
const OK_TEXT: &str = "Export";

/// How the mode switch is shown.
///
/// Mode `0` always means the first option, whether it is drawn as a radio
/// pair or as a lone check box.
#[derive(Debug, Clone)]
enum ModePanel {
	Hidden { mode: u8 },
	Single(CheckBox),
	Pair(RadioGroup),
}

impl ModePanel {
	fn new(label_a: &str, label_b: &str, default_mode: i64, invert_single: bool) -> Self {
		let has_a = !label_a.trim().is_empty();
		let has_b = !label_b.trim().is_empty();
		match (has_a, has_b) {
			(false, false) => Self::Hidden {
				mode: u8::from(default_mode != 0),
			},
			(true, false) => {
				let checked = if invert_single { default_mode == 1 } else { default_mode == 0 };
				Self::Single(CheckBox::new(label_a, checked))
			}
			_ => {
				let label_a = if has_a { label_a } else { DEFAULT_LABEL_A };
				let label_b = if has_b { label_b } else { DEFAULT_LABEL_B };
				let selected = match default_mode {
					0 => Some(0),
					1 => Some(1),
					_ => None,
				};
				Self::Pair(RadioGroup::new([label_a, label_b], selected))
			}
		}
	}

	fn mode(&self) -> u8 {
		match self {
			Self::Hidden { mode } => *mode,
			Self::Single(check) => u8::from(!check.is_checked()),
			Self::Pair(group) => u8::from(group.selected() != Some(0)),
		}
	}

	fn is_hidden(&self) -> bool {
		matches!(self, Self::Hidden { .. })
	}

	fn handle_key(&mut self, key: KeyEvent) {
		match self {
			Self::Hidden { .. } => {}
			Self::Single(check) => {
				check.handle_key(key);
			}
			Self::Pair(group) => {
				group.handle_key(key);
			}
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
	List,
	Mode,
}

#[derive(Debug)]
pub struct ModeSelectDialog {
	title: String,
	prompt: String,
	pane: ChecklistPane,
	panel: ModePanel,
	panel_area: Rect,
	focus: Focus,
	buttons: ButtonBar,
	decorations: Decorations,
}

impl ModeSelectDialog {
	#[must_use]
	pub fn new(request: &ModeSelectRequest, decorations: Decorations) -> Self {
		let model = ItemModel::from_items(request.items.iter().cloned());
		Self {
			title: request.title.clone(),
			prompt: request.prompt.clone(),
			pane: ChecklistPane::new(SelectionView::new(model, request.prechecked.iter().copied())),
			panel: ModePanel::new(
				&request.mode_label_a,
				&request.mode_label_b,
				request.default_mode,
				request.invert_single_mode,
			),
			panel_area: Rect::default(),
			focus: Focus::List,
			buttons: ButtonBar::ok_cancel(OK_TEXT, ""),
			decorations,
		}
	}

	/// Mode the dialog would report right now.
	#[must_use]
	pub fn mode(&self) -> u8 {
		self.panel.mode()
	}

	fn confirm(&mut self) -> Flow<SelectionWithMode> {
		let mode = self.panel.mode();
		match self.pane.view_mut().commit() {
			Some(selection) => Flow::Commit(SelectionWithMode {
				selected_indices: selection.selected_indices,
				mode,
			}),
			None => Flow::Dismiss,
		}
	}

	fn cancel(&mut self) -> Flow<SelectionWithMode> {
		self.pane.view_mut().dismiss();
		Flow::Dismiss
	}
}

impl Modal for ModeSelectDialog {
	type Output = SelectionWithMode;

	fn handle_key(&mut self, key: KeyEvent) -> Flow<SelectionWithMode> {
		match key.code {
			KeyCode::Esc => return self.cancel(),
			KeyCode::Enter => return self.confirm(),
			KeyCode::Tab | KeyCode::BackTab if !self.panel.is_hidden() => {
				self.focus = match self.focus {
					Focus::List => Focus::Mode,
					Focus::Mode => Focus::List,
				};
			}
			_ => match self.focus {
				Focus::List => {
					self.pane.handle_key(key);
				}
				Focus::Mode => self.panel.handle_key(key),
			},
		}
		Flow::Continue
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow<SelectionWithMode> {
		let left_click = mouse.kind == MouseEventKind::Down(MouseButton::Left);
		if left_click {
			match self.buttons.hit(mouse.column, mouse.row) {
				Some(0) => return self.confirm(),
				Some(_) => return self.cancel(),
				None => {}
			}
		}
		if self.pane.handle_mouse(mouse) {
			self.focus = Focus::List;
		} else if left_click && point_in_rect(mouse.column, mouse.row, self.panel_area) {
			self.focus = Focus::Mode;
			match &mut self.panel {
				ModePanel::Hidden { .. } => {}
				ModePanel::Single(check) => check.toggle(),
				ModePanel::Pair(group) => {
					group.click(mouse.column, mouse.row);
				}
			}
		}
		Flow::Continue
	}

	fn draw(&mut self, frame: &mut Frame) {
		let theme = self.decorations.theme;
		let heading = Heading {
			title: &self.title,
			prompt: &self.prompt,
		};
		let body = render_frame(frame, &self.decorations, heading, &mut self.buttons, Some(0));
		let panel_height = if self.panel.is_hidden() { 0 } else { 1 };
		let [list, panel] =
			Layout::vertical([Constraint::Min(3), Constraint::Length(panel_height)]).areas(body);

		self.pane
			.render(frame, list, "Items", self.focus == Focus::List, &theme);
		self.panel_area = panel;
		let focused = self.focus == Focus::Mode;
		match &mut self.panel {
			ModePanel::Hidden { .. } => {}
			ModePanel::Single(check) => check.render(frame, panel, focused, &theme),
			ModePanel::Pair(group) => group.render(frame, panel, focused, &theme),
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::Event;

	use super::*;
	use crate::runtime::drive;
	use crate::style::Theme;
	use crate::test_support::{buffer_to_string, press};

	fn request(label_a: &str, label_b: &str, default_mode: i64) -> ModeSelectRequest {
		ModeSelectRequest {
			title: "Export".into(),
			prompt: "Choose schedules".into(),
			items: vec!["A-101".into(), "A-102".into(), "A-103".into()],
			mode_label_a: label_a.into(),
			mode_label_b: label_b.into(),
			default_mode,
			invert_single_mode: false,
			prechecked: vec![0, 9],
		}
	}

	fn run(request: &ModeSelectRequest, codes: &[KeyCode]) -> Option<SelectionWithMode> {
		let mut dialog = ModeSelectDialog::new(request, Decorations::new(Theme::fallback()));
		let mut terminal = Terminal::new(TestBackend::new(50, 16)).expect("terminal");
		let events = codes.iter().map(|&code| Ok(Event::Key(press(code))));
		drive(&mut terminal, &mut dialog, events).expect("drive")
	}

	#[test]
	fn pair_defaults_and_switches() {
		let request = request("Excel", "CSV", 0);
		assert_eq!(
			run(&request, &[KeyCode::Enter]),
			Some(SelectionWithMode {
				selected_indices: vec![0],
				mode: 0,
			})
		);
		let switched = run(
			&request,
			&[
				KeyCode::Down,
				KeyCode::Char(' '),
				KeyCode::Tab,
				KeyCode::Right,
				KeyCode::Enter,
			],
		);
		assert_eq!(
			switched,
			Some(SelectionWithMode {
				selected_indices: vec![0, 1],
				mode: 1,
			})
		);
	}

	#[test]
	fn blank_labels_get_placeholders() {
		let dialog = ModeSelectDialog::new(&request("", "CSV", 1), Decorations::default());
		let ModePanel::Pair(group) = &dialog.panel else {
			panic!("expected a radio pair");
		};
		assert_eq!(group.labels(), ["Option A", "CSV"]);
		assert_eq!(dialog.mode(), 1);
	}

	#[test]
	fn single_label_uses_zero_for_checked() {
		let request = request("Include linked", "", 0);
		assert_eq!(run(&request, &[KeyCode::Enter]).map(|result| result.mode), Some(0));
		let toggled = run(&request, &[KeyCode::Tab, KeyCode::Char(' '), KeyCode::Enter]);
		assert_eq!(toggled.map(|result| result.mode), Some(1));
	}

	#[test]
	fn single_label_can_follow_the_inverted_default() {
		let mut request = request("Include linked", "", 1);
		assert_eq!(run(&request, &[KeyCode::Enter]).map(|result| result.mode), Some(1));

		request.invert_single_mode = true;
		assert_eq!(run(&request, &[KeyCode::Enter]).map(|result| result.mode), Some(0));
		let toggled = run(&request, &[KeyCode::Tab, KeyCode::Char(' '), KeyCode::Enter]);
		assert_eq!(toggled.map(|result| result.mode), Some(1));

		let parsed: ModeSelectRequest = bim_dialogs_core::requests::parse(
			"select-mode",
			r#"{"mode_label_a": "Include linked", "default_mode": 1, "invert_single_mode": true}"#,
		)
		.expect("request");
		assert!(parsed.invert_single_mode);
	}

	#[test]
	fn hidden_panel_reports_default_and_ignores_tab() {
		let request = request(" ", "", 1);
		let result = run(&request, &[KeyCode::Tab, KeyCode::Char(' '), KeyCode::Enter]);
		assert_eq!(
			result,
			Some(SelectionWithMode {
				selected_indices: vec![],
				mode: 1,
			})
		);
	}

	#[test]
	fn escape_cancels() {
		assert_eq!(run(&request("A", "B", 0), &[KeyCode::Esc]), None);
	}

	#[test]
	fn render_shows_radios_and_export_button() {
		let mut dialog = ModeSelectDialog::new(&request("Excel", "CSV", 1), Decorations::new(Theme::fallback()));
		let mut terminal = Terminal::new(TestBackend::new(50, 16)).expect("terminal");
		terminal.draw(|frame| dialog.draw(frame)).expect("draw");
		let screen = buffer_to_string(terminal.backend().buffer());
		assert!(screen.contains("( ) Excel   (•) CSV"));
		assert!(screen.contains("[ Export ]"));
		assert!(screen.contains("[x] A-101"));
	}
}

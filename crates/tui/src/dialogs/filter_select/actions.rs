use bim_dialogs_core::FilterSelection;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use super::{FilterSelectDialog, Focus};
use crate::components::point_in_rect;
use crate::runtime::Flow;

const OK: usize = 0;
const CANCEL: usize = 1;

impl FilterSelectDialog {
	pub(super) fn on_key(&mut self, key: KeyEvent) -> Flow<FilterSelection> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return self.cancel(),
			KeyCode::Tab => self.focus = self.focus.step(1),
			KeyCode::BackTab => self.focus = self.focus.step(-1),
			KeyCode::Char('f') if ctrl => self.apply_filter(),
			KeyCode::Char('x') if ctrl => self.clear_filter(),
			KeyCode::Enter => match self.focus {
				Focus::Parameter | Focus::Value => self.apply_filter(),
				Focus::Search | Focus::List => return self.confirm(),
			},
			_ => self.route_key(key, ctrl),
		}
		Flow::Continue
	}

	fn route_key(&mut self, key: KeyEvent, ctrl: bool) {
		match self.focus {
			Focus::Search => {
				let list_key = ctrl
					|| matches!(
						key.code,
						KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown
					);
				if list_key && self.pane.handle_key(key) {
					return;
				}
				if self.search.handle_key(key) {
					let term = self.search.text().to_string();
					self.pane.view_mut().set_search(&term);
				}
			}
			Focus::List => {
				self.pane.handle_key(key);
			}
			Focus::Parameter => {
				if self.params.handle_key(key) {
					self.refresh_values();
				}
			}
			Focus::Value => {
				self.values.handle_key(key);
			}
		}
	}

	/// Repopulate the value selector for the chosen parameter.
	fn refresh_values(&mut self) {
		let options = self
			.params
			.selected_text()
			.map(|param| self.pane.view().value_options(param))
			.unwrap_or_default();
		self.values.set_options(options);
	}

	fn apply_filter(&mut self) {
		let param = self.params.selected_text().unwrap_or_default().to_string();
		let value = self.values.selected_text().map(str::to_string);
		let active = self.pane.view_mut().apply_filter(&param, value.as_deref());
		debug!(parameter = %param, value = ?value, active, "filter applied");
	}

	fn clear_filter(&mut self) {
		self.pane.view_mut().clear_filter();
		debug!("filter cleared");
	}

	fn confirm(&mut self) -> Flow<FilterSelection> {
		match self.pane.view_mut().commit() {
			Some(selection) => Flow::Commit(selection),
			None => Flow::Dismiss,
		}
	}

	fn cancel(&mut self) -> Flow<FilterSelection> {
		self.pane.view_mut().dismiss();
		Flow::Dismiss
	}

	pub(super) fn on_mouse(&mut self, mouse: MouseEvent) -> Flow<FilterSelection> {
		if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
			match self.buttons.hit(mouse.column, mouse.row) {
				Some(OK) => return self.confirm(),
				Some(CANCEL) => return self.cancel(),
				_ => {}
			}
		}
		if self.pane.handle_mouse(mouse) {
			self.focus = Focus::List;
			return Flow::Continue;
		}

		let at = |area| point_in_rect(mouse.column, mouse.row, area);
		let target = if at(self.areas.search) {
			Focus::Search
		} else if at(self.areas.parameter) {
			Focus::Parameter
		} else if at(self.areas.value) {
			Focus::Value
		} else {
			return Flow::Continue;
		};
		self.focus = target;
		let delta = match mouse.kind {
			MouseEventKind::ScrollUp => -1,
			MouseEventKind::ScrollDown => 1,
			_ => return Flow::Continue,
		};
		match target {
			Focus::Parameter => {
				if self.params.cycle(delta) {
					self.refresh_values();
				}
			}
			Focus::Value => {
				self.values.cycle(delta);
			}
			Focus::Search | Focus::List => {}
		}
		Flow::Continue
	}
}

//! Checklist with a parameter=value filter and a live text search.

mod actions;
mod render;
#[cfg(test)]
mod tests;

use bim_dialogs_core::requests::FilterSelectRequest;
use bim_dialogs_core::{FilterSelection, SelectionView};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::components::choice::wrap_index;
use crate::components::{ButtonBar, ChecklistPane, Choice, Decorations, LineInput};
use crate::runtime::{Flow, Modal};

/// Control that receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Focus {
	#[default]
	Search,
	List,
	Parameter,
	Value,
}

impl Focus {
	const RING: [Self; 4] = [Self::Search, Self::List, Self::Parameter, Self::Value];

	fn step(self, delta: isize) -> Self {
		let position = Self::RING.iter().position(|&focus| focus == self).unwrap_or(0);
		Self::RING[wrap_index(position, delta, Self::RING.len())]
	}
}

#[derive(Debug, Default, Clone, Copy)]
struct Areas {
	search: Rect,
	parameter: Rect,
	value: Rect,
}

/// The filter/search selection dialog.
#[derive(Debug)]
pub struct FilterSelectDialog {
	title: String,
	prompt: String,
	pane: ChecklistPane,
	search: LineInput,
	params: Choice,
	values: Choice,
	focus: Focus,
	buttons: ButtonBar,
	decorations: Decorations,
	areas: Areas,
}

impl FilterSelectDialog {
	/// Dialog showing every item, with the default parameter and value
	/// preselected in the filter selectors but not yet applied.
	#[must_use]
	pub fn new(request: &FilterSelectRequest, decorations: Decorations) -> Self {
		let view = SelectionView::new(request.model(), request.prechecked.iter().copied());
		let params = Choice::new(request.filter_params.iter().cloned())
			.with_selected_text(&request.default_filter_param);
		let values = params
			.selected_text()
			.map(|param| Choice::new(view.value_options(param)))
			.unwrap_or_default()
			.with_selected_text(&request.default_filter_value);
		Self {
			title: request.title.clone(),
			prompt: request.prompt.clone(),
			pane: ChecklistPane::new(view),
			search: LineInput::default().with_placeholder("Type to search"),
			params,
			values,
			focus: Focus::default(),
			buttons: ButtonBar::ok_cancel("", ""),
			decorations,
			areas: Areas::default(),
		}
	}

	#[must_use]
	pub fn view(&self) -> &SelectionView {
		self.pane.view()
	}

	#[must_use]
	pub(crate) fn focus(&self) -> Focus {
		self.focus
	}
}

impl Modal for FilterSelectDialog {
	type Output = FilterSelection;

	fn handle_key(&mut self, key: KeyEvent) -> Flow<FilterSelection> {
		self.on_key(key)
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow<FilterSelection> {
		self.on_mouse(mouse)
	}

	fn draw(&mut self, frame: &mut Frame) {
		self.render(frame);
	}
}

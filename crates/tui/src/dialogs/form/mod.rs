//! Declarative dialogs: a column of labelled controls above a button row.
//!
//! The smaller host dialogs (prompts, confirmations, the option sheets in
//! [`records`]) are all a [`Form`] plus a function that turns the committed
//! [`FormValues`] into the host's record.

mod field;
pub mod records;

#[cfg(test)]
mod tests;

use bim_dialogs_core::host::safe_directory;
use bim_dialogs_core::{FilePicker, ItemModel, NoPicker, SelectionView};
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout};
use tracing::debug;

pub use self::field::{FieldValue, PickList, ReportView};
use self::field::{Control, Field};
use crate::components::choice::wrap_index;
use crate::components::{
	ButtonBar, CheckBox, ChecklistPane, Choice, Decorations, Heading, LineInput, PathField,
	RadioGroup, point_in_rect, render_frame,
};
use crate::runtime::{Flow, Modal};

const MIN_FILL: u16 = 3;

/// Values of every field that reports one, keyed by field key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
	entries: Vec<(&'static str, FieldValue)>,
}

impl FormValues {
	fn get(&self, key: &str) -> Option<&FieldValue> {
		self.entries
			.iter()
			.find(|(name, _)| *name == key)
			.map(|(_, value)| value)
	}

	/// Text of a text, folder or choice field; empty when absent.
	#[must_use]
	pub fn text(&self, key: &str) -> &str {
		match self.get(key) {
			Some(FieldValue::Text(text) | FieldValue::Choice { text, .. }) => text,
			_ => "",
		}
	}

	/// Position chosen in a choice field, `-1` when nothing was offered.
	#[must_use]
	pub fn position(&self, key: &str) -> i64 {
		match self.get(key) {
			Some(FieldValue::Choice { position, .. }) => *position,
			_ => -1,
		}
	}

	#[must_use]
	pub fn flag(&self, key: &str) -> bool {
		matches!(self.get(key), Some(FieldValue::Flag(true)))
	}

	#[must_use]
	pub fn radio(&self, key: &str) -> Option<usize> {
		match self.get(key) {
			Some(FieldValue::Radio(selected)) => *selected,
			_ => None,
		}
	}

	#[must_use]
	pub fn indices(&self, key: &str) -> &[usize] {
		match self.get(key) {
			Some(FieldValue::Indices(indices)) => indices,
			_ => &[],
		}
	}
}

/// A stack of fields built up with the chained constructors below.
pub struct Form {
	title: String,
	prompt: String,
	fields: Vec<Field>,
	focus: usize,
	buttons: ButtonBar,
	decorations: Decorations,
	picker: Box<dyn FilePicker>,
}

impl Form {
	#[must_use]
	pub fn new(title: &str, prompt: &str) -> Self {
		Self {
			title: title.to_string(),
			prompt: prompt.to_string(),
			fields: Vec::new(),
			focus: 0,
			buttons: ButtonBar::ok_cancel("", ""),
			decorations: Decorations::default(),
			picker: Box::new(NoPicker),
		}
	}

	fn push(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	/// Static wrapped text between fields.
	#[must_use]
	pub fn note(self, text: impl Into<String>) -> Self {
		self.push(Field::new("", "", Control::Note(text.into())))
	}

	#[must_use]
	pub fn text(self, key: &'static str, label: &str, value: &str) -> Self {
		self.push(Field::new(key, label, Control::Text(LineInput::new(value))))
	}

	/// Choice preselecting `selected` when it is one of `options`, else the
	/// first option.
	#[must_use]
	pub fn choice(self, key: &'static str, label: &str, options: &[String], selected: &str) -> Self {
		let mut choice = Choice::new(options.iter().cloned());
		if !selected.trim().is_empty() {
			choice = choice.with_selected_text(selected);
		}
		self.push(Field::new(key, label, Control::Choice(choice)))
	}

	/// Choice preselecting a position; out-of-range positions keep the first
	/// option.
	#[must_use]
	pub fn choice_at(self, key: &'static str, label: &str, options: &[String], position: i64) -> Self {
		let mut choice = Choice::new(options.iter().cloned());
		if let Some(index) = usize::try_from(position).ok().filter(|&index| index < options.len()) {
			choice.select_index(Some(index));
		}
		self.push(Field::new(key, label, Control::Choice(choice)))
	}

	#[must_use]
	pub fn check(self, key: &'static str, label: &str, checked: bool) -> Self {
		self.push(Field::new(key, "", Control::Check(CheckBox::new(label, checked))))
	}

	#[must_use]
	pub fn radio(self, key: &'static str, label: &str, options: &[String], selected: Option<usize>) -> Self {
		let group = RadioGroup::new(options.iter().cloned(), selected);
		self.push(Field::new(key, label, Control::Radio(group)))
	}

	/// Checkable list with search-free selection gestures.
	#[must_use]
	pub fn checklist(self, key: &'static str, label: &str, items: &[String], prechecked: &[usize]) -> Self {
		let model = ItemModel::from_items(items.iter().cloned());
		let view = SelectionView::new(model, prechecked.iter().copied());
		self.push(Field::new(key, label, Control::Checklist(ChecklistPane::new(view))))
	}

	#[must_use]
	pub fn pick(self, key: &'static str, items: &[String]) -> Self {
		self.push(Field::new(key, "", Control::Pick(PickList::new(items.to_vec()))))
	}

	#[must_use]
	pub fn report(self, text: &str) -> Self {
		self.push(Field::new("", "", Control::Report(ReportView::new(text))))
	}

	/// Folder path with a browse button that opens the folder picker.
	#[must_use]
	pub fn folder(self, key: &'static str, label: &str, value: &str, picker_title: &str) -> Self {
		let control = Control::Folder {
			path: PathField::new(value),
			picker_title: picker_title.to_string(),
		};
		self.push(Field::new(key, label, control))
	}

	#[must_use]
	pub fn with_buttons(mut self, buttons: ButtonBar) -> Self {
		self.buttons = buttons;
		self
	}

	#[must_use]
	pub fn with_decorations(mut self, decorations: Decorations) -> Self {
		self.decorations = decorations;
		self
	}

	#[must_use]
	pub fn with_picker(mut self, picker: Box<dyn FilePicker>) -> Self {
		self.picker = picker;
		self
	}

	/// Current values, as they would be committed.
	#[must_use]
	pub fn values(&self) -> FormValues {
		FormValues {
			entries: self
				.fields
				.iter()
				.filter_map(|field| field.value().map(|value| (field.key, value)))
				.collect(),
		}
	}

	fn focusable(&self) -> Vec<usize> {
		self.fields
			.iter()
			.enumerate()
			.filter(|(_, field)| field.is_focusable())
			.map(|(index, _)| index)
			.collect()
	}

	fn focused_field(&self) -> Option<usize> {
		self.focusable().get(self.focus).copied()
	}

	fn step_focus(&mut self, delta: isize) {
		let count = self.focusable().len();
		if count == 0 {
			return;
		}
		self.focus = wrap_index(self.focus, delta, count);
	}

	fn commit(&self) -> Flow<FormValues> {
		debug!(title = %self.title, "form committed");
		Flow::Commit(self.values())
	}

	fn browse(&mut self, index: usize) {
		let Some(Field {
			control: Control::Folder { path, picker_title },
			..
		}) = self.fields.get_mut(index)
		else {
			return;
		};
		let initial = safe_directory(path.text());
		if let Some(folder) = self.picker.pick_folder(picker_title, initial.as_deref()) {
			path.set_text(&folder.to_string_lossy());
		}
	}
}

impl Modal for Form {
	type Output = FormValues;

	fn handle_key(&mut self, key: KeyEvent) -> Flow<FormValues> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Flow::Dismiss,
			KeyCode::Enter => return self.commit(),
			KeyCode::Tab => self.step_focus(1),
			KeyCode::BackTab => self.step_focus(-1),
			KeyCode::Char('o') if ctrl => {
				if let Some(index) = self.focused_field() {
					self.browse(index);
				}
			}
			_ => {
				if let Some(index) = self.focused_field() {
					self.fields[index].handle_key(key);
				}
			}
		}
		Flow::Continue
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow<FormValues> {
		let click = mouse.kind == MouseEventKind::Down(MouseButton::Left);
		if click {
			match self.buttons.hit(mouse.column, mouse.row) {
				Some(0) => return self.commit(),
				Some(_) => return Flow::Dismiss,
				None => {}
			}
		}
		let Some(index) = self
			.fields
			.iter()
			.position(|field| field.is_focusable() && point_in_rect(mouse.column, mouse.row, field.area))
		else {
			return Flow::Continue;
		};
		if click {
			if let Some(position) = self.focusable().iter().position(|&field| field == index) {
				self.focus = position;
			}
		}
		let browse = matches!(
			&self.fields[index].control,
			Control::Folder { path, .. } if click && path.browse_hit(mouse.column, mouse.row)
		);
		if browse {
			self.browse(index);
		} else {
			self.fields[index].handle_mouse(mouse);
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

		let constraints: Vec<Constraint> = self
			.fields
			.iter()
			.map(|field| match field.height(body.width) {
				Some(height) => Constraint::Length(height),
				None => Constraint::Min(MIN_FILL),
			})
			.collect();
		let areas = Layout::vertical(constraints).split(body);
		let focused = self.focused_field();
		for (index, (field, area)) in self.fields.iter_mut().zip(areas.iter()).enumerate() {
			field.render(frame, *area, focused == Some(index), &theme);
		}
	}
}

/// A [`Form`] paired with the reader that builds its result record.
pub struct FormDialog<T> {
	form: Form,
	read: Box<dyn Fn(&FormValues) -> T>,
}

impl<T> FormDialog<T> {
	#[must_use]
	pub fn new(form: Form, read: impl Fn(&FormValues) -> T + 'static) -> Self {
		Self {
			form,
			read: Box::new(read),
		}
	}

	#[must_use]
	pub fn with_decorations(self, decorations: Decorations) -> Self {
		Self {
			form: self.form.with_decorations(decorations),
			read: self.read,
		}
	}

	#[must_use]
	pub fn with_picker(self, picker: Box<dyn FilePicker>) -> Self {
		Self {
			form: self.form.with_picker(picker),
			read: self.read,
		}
	}

	#[must_use]
	pub fn form(&self) -> &Form {
		&self.form
	}

	/// The record the dialog would return if committed now.
	#[must_use]
	pub fn result(&self) -> T {
		(self.read)(&self.form.values())
	}
}

impl<T> Modal for FormDialog<T> {
	type Output = T;

	fn handle_key(&mut self, key: KeyEvent) -> Flow<T> {
		self.form.handle_key(key).map(|values| (self.read)(&values))
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow<T> {
		self.form.handle_mouse(mouse).map(|values| (self.read)(&values))
	}

	fn draw(&mut self, frame: &mut Frame) {
		self.form.draw(frame);
	}
}

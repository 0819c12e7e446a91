//! Controls a [`Form`](super::Form) can stack, and the values they report.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, Wrap};

use crate::components::frame::prompt_rows;
use crate::components::{
	CheckBox, ChecklistPane, Choice, INPUT_HEIGHT, LineInput, PathField, RadioGroup,
	ScrollMetrics, point_in_rect, render_scrollbar,
};
use crate::style::Theme;

const WHEEL_STEP: isize = 3;
const PICK_SYMBOL: &str = "▶ ";

/// Single-choice list; nothing is chosen until the user moves onto a row.
#[derive(Debug, Clone, Default)]
pub struct PickList {
	items: Vec<String>,
	state: ListState,
	rows_area: Rect,
}

impl PickList {
	#[must_use]
	pub fn new(items: Vec<String>) -> Self {
		Self {
			items,
			state: ListState::default(),
			rows_area: Rect::default(),
		}
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.state.selected()
	}

	fn step(&mut self, delta: isize) {
		if self.items.is_empty() {
			return;
		}
		let last = self.items.len() - 1;
		let next = match self.state.selected() {
			None if delta < 0 => last,
			None => 0,
			Some(current) => current.saturating_add_signed(delta).min(last),
		};
		self.state.select(Some(next));
	}

	fn page(&self) -> isize {
		self.rows_area.height.max(1) as isize
	}

	fn handle_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.step(-1),
			KeyCode::Down => self.step(1),
			KeyCode::PageUp => self.step(-self.page()),
			KeyCode::PageDown => self.step(self.page()),
			KeyCode::Home if !self.items.is_empty() => self.state.select(Some(0)),
			KeyCode::End => self.step(isize::MAX),
			_ => {}
		}
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollUp => self.step(-WHEEL_STEP),
			MouseEventKind::ScrollDown => self.step(WHEEL_STEP),
			MouseEventKind::Down(MouseButton::Left)
				if point_in_rect(mouse.column, mouse.row, self.rows_area) =>
			{
				let row = self.state.offset() + usize::from(mouse.row - self.rows_area.y);
				if row < self.items.len() {
					self.state.select(Some(row));
				}
			}
			_ => {}
		}
	}

	fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_for(focused));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let metrics = ScrollMetrics::compute(self.items.len(), usize::from(inner.height));
		self.rows_area = metrics.content_area(inner);
		let items: Vec<ListItem> = self.items.iter().map(|item| ListItem::new(item.clone())).collect();
		let list = List::new(items)
			.highlight_symbol(PICK_SYMBOL)
			.highlight_spacing(HighlightSpacing::Always)
			.highlight_style(if focused { theme.cursor } else { theme.marked });
		frame.render_stateful_widget(list, self.rows_area, &mut self.state);
		render_scrollbar(frame, inner, metrics, self.state.offset(), theme);
	}
}

/// Read-only text, scrolled rather than wrapped.
#[derive(Debug, Clone, Default)]
pub struct ReportView {
	lines: Vec<String>,
	offset: usize,
	viewport: u16,
}

impl ReportView {
	#[must_use]
	pub fn new(text: &str) -> Self {
		Self {
			lines: text.lines().map(str::to_string).collect(),
			offset: 0,
			viewport: 0,
		}
	}

	fn scroll(&mut self, delta: isize) {
		let max = self.lines.len().saturating_sub(usize::from(self.viewport.max(1)));
		self.offset = self.offset.saturating_add_signed(delta).min(max);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		let page = self.viewport.max(1) as isize;
		match key.code {
			KeyCode::Up => self.scroll(-1),
			KeyCode::Down => self.scroll(1),
			KeyCode::PageUp => self.scroll(-page),
			KeyCode::PageDown => self.scroll(page),
			KeyCode::Home => self.offset = 0,
			KeyCode::End => self.scroll(isize::MAX),
			_ => {}
		}
	}

	fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_for(focused));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let metrics = ScrollMetrics::compute(self.lines.len(), usize::from(inner.height));
		let content = metrics.content_area(inner);
		self.viewport = content.height;
		let lines: Vec<Line> = self.lines.iter().map(|line| Line::raw(line.clone())).collect();
		let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);
		frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), content);
		render_scrollbar(frame, inner, metrics, self.offset, theme);
	}
}

/// The control behind a form field.
#[derive(Debug)]
pub enum Control {
	/// Static text; never takes focus.
	Note(String),
	Text(LineInput),
	Choice(Choice),
	Check(CheckBox),
	Radio(RadioGroup),
	Checklist(ChecklistPane),
	Pick(PickList),
	Report(ReportView),
	Folder { path: PathField, picker_title: String },
}

/// What a field reported when the form was committed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	Text(String),
	Choice { position: i64, text: String },
	Flag(bool),
	Radio(Option<usize>),
	Indices(Vec<usize>),
}

#[derive(Debug)]
pub struct Field {
	pub(super) key: &'static str,
	pub(super) label: String,
	pub(super) control: Control,
	pub(super) area: Rect,
}

impl Field {
	pub(super) fn new(key: &'static str, label: impl Into<String>, control: Control) -> Self {
		Self {
			key,
			label: label.into(),
			control,
			area: Rect::default(),
		}
	}

	pub(super) fn is_focusable(&self) -> bool {
		!matches!(self.control, Control::Note(_))
	}

	pub(super) fn value(&self) -> Option<FieldValue> {
		let value = match &self.control {
			Control::Note(_) => return None,
			Control::Text(input) => FieldValue::Text(input.text().to_string()),
			Control::Folder { path, .. } => FieldValue::Text(path.text().to_string()),
			Control::Choice(choice) => FieldValue::Choice {
				position: choice.selected_position(),
				text: choice.selected_text().unwrap_or_default().to_string(),
			},
			Control::Check(check) => FieldValue::Flag(check.is_checked()),
			Control::Radio(group) => FieldValue::Radio(group.selected()),
			Control::Checklist(pane) => FieldValue::Indices(pane.view().snapshot()),
			Control::Pick(list) => FieldValue::Indices(list.selected().into_iter().collect()),
			Control::Report(_) => return None,
		};
		Some(value)
	}

	/// Height this field wants at `width` columns; `None` means "take what is
	/// left".
	pub(super) fn height(&self, width: u16) -> Option<u16> {
		let label_row = u16::from(!self.label.is_empty());
		match &self.control {
			Control::Note(text) => Some(prompt_rows(text, width).max(1)),
			Control::Text(_) | Control::Choice(_) | Control::Folder { .. } => Some(INPUT_HEIGHT),
			Control::Check(_) => Some(1),
			Control::Radio(_) => Some(1 + label_row),
			Control::Checklist(_) | Control::Pick(_) | Control::Report(_) => None,
		}
	}

	pub(super) fn handle_key(&mut self, key: KeyEvent) {
		match &mut self.control {
			Control::Note(_) => {}
			Control::Text(input) => {
				input.handle_key(key);
			}
			Control::Folder { path, .. } => {
				path.handle_key(key);
			}
			Control::Choice(choice) => {
				choice.handle_key(key);
			}
			Control::Check(check) => {
				check.handle_key(key);
			}
			Control::Radio(group) => {
				group.handle_key(key);
			}
			Control::Checklist(pane) => {
				pane.handle_key(key);
			}
			Control::Pick(list) => list.handle_key(key),
			Control::Report(report) => report.handle_key(key),
		}
	}

	/// Mouse input that landed inside the field.
	pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let click = mouse.kind == MouseEventKind::Down(MouseButton::Left);
		let wheel = match mouse.kind {
			MouseEventKind::ScrollUp => -1,
			MouseEventKind::ScrollDown => 1,
			_ => 0,
		};
		match &mut self.control {
			Control::Note(_) | Control::Text(_) | Control::Folder { .. } => {}
			Control::Choice(choice) if click => {
				choice.cycle(1);
			}
			Control::Choice(choice) if wheel != 0 => {
				choice.cycle(wheel);
			}
			Control::Choice(_) => {}
			Control::Check(check) if click => check.toggle(),
			Control::Check(_) => {}
			Control::Radio(group) if click => {
				group.click(mouse.column, mouse.row);
			}
			Control::Radio(_) => {}
			Control::Checklist(pane) => {
				pane.handle_mouse(mouse);
			}
			Control::Pick(list) => list.handle_mouse(mouse),
			Control::Report(report) => report.scroll(wheel * WHEEL_STEP),
		}
	}

	pub(super) fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		self.area = area;
		let label = self.label.as_str();
		match &mut self.control {
			Control::Note(text) => {
				let note = Paragraph::new(text.clone())
					.style(theme.prompt)
					.wrap(Wrap { trim: false });
				frame.render_widget(note, area);
			}
			Control::Text(input) => input.render(frame, area, label, focused, theme),
			Control::Folder { path, .. } => path.render(frame, area, label, focused, theme),
			Control::Choice(choice) => choice.render(frame, area, label, focused, theme),
			Control::Check(check) => check.render(frame, area, focused, theme),
			Control::Radio(group) => {
				let [heading, row] = Layout::vertical([
					Constraint::Length(u16::from(!label.is_empty())),
					Constraint::Length(1),
				])
				.areas(area);
				if !label.is_empty() {
					frame.render_widget(Paragraph::new(Span::styled(label.to_string(), theme.title)), heading);
				}
				group.render(frame, row, focused, theme);
			}
			Control::Checklist(pane) => pane.render(frame, area, label, focused, theme),
			Control::Pick(list) => list.render(frame, area, focused, theme),
			Control::Report(report) => report.render(frame, area, focused, theme),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::press;

	#[test]
	fn pick_list_starts_empty_and_follows_the_cursor() {
		let mut list = PickList::new(vec!["A".into(), "B".into(), "C".into()]);
		assert_eq!(list.selected(), None);
		list.handle_key(press(KeyCode::Down));
		assert_eq!(list.selected(), Some(0));
		list.handle_key(press(KeyCode::End));
		assert_eq!(list.selected(), Some(2));
		list.handle_key(press(KeyCode::Down));
		assert_eq!(list.selected(), Some(2));

		let mut list = PickList::new(vec!["A".into(), "B".into()]);
		list.handle_key(press(KeyCode::Up));
		assert_eq!(list.selected(), Some(1));
	}

	#[test]
	fn report_scroll_stops_at_the_last_page() {
		let mut report = ReportView::new("1\n2\n3\n4\n5");
		report.viewport = 2;
		report.handle_key(press(KeyCode::End));
		assert_eq!(report.offset, 3);
		report.handle_key(press(KeyCode::PageUp));
		assert_eq!(report.offset, 1);
		report.handle_key(press(KeyCode::Home));
		assert_eq!(report.offset, 0);
	}

	#[test]
	fn notes_and_reports_carry_no_value() {
		let note = Field::new("", "", Control::Note("Hello".into()));
		assert!(!note.is_focusable());
		assert_eq!(note.value(), None);

		let choice = Field::new("c", "Pick", Control::Choice(Choice::new(Vec::<String>::new())));
		assert_eq!(
			choice.value(),
			Some(FieldValue::Choice {
				position: -1,
				text: String::new(),
			})
		);
	}
}

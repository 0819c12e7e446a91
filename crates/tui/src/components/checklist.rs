//! Checkable item list bound to a [`SelectionView`].

use bim_dialogs_core::{ListControl, SelectionView};
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::components::{ScrollMetrics, point_in_rect, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const WHEEL_STEP: isize = 3;
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// List pane with keyboard and mouse selection gestures.
#[derive(Debug, Default)]
pub struct ChecklistPane {
	view: SelectionView,
	table_state: TableState,
	rows_area: Rect,
}

impl ChecklistPane {
	#[must_use]
	pub fn new(view: SelectionView) -> Self {
		Self {
			view,
			table_state: TableState::default(),
			rows_area: Rect::default(),
		}
	}

	#[must_use]
	pub fn view(&self) -> &SelectionView {
		&self.view
	}

	pub fn view_mut(&mut self) -> &mut SelectionView {
		&mut self.view
	}

	fn page(&self) -> isize {
		self.rows_area.height.max(1) as isize
	}

	/// Handle list keys. Returns whether the key was consumed.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Up => self.view.move_cursor(-1),
			KeyCode::Down => self.view.move_cursor(1),
			KeyCode::PageUp => self.view.move_cursor(-self.page()),
			KeyCode::PageDown => self.view.move_cursor(self.page()),
			KeyCode::Home => self.view.set_cursor(0),
			KeyCode::End => self.view.set_cursor(usize::MAX),
			KeyCode::Char(' ') if !ctrl => self.view.toggle_cursor_row(),
			KeyCode::Char('a') if ctrl => self.view.select_all_visible(),
			KeyCode::Char('d') if ctrl => self.view.select_none_visible(),
			KeyCode::Char('r') if ctrl => self.view.invert_visible(),
			_ => return false,
		}
		true
	}

	/// Handle a mouse event over the list. Returns whether it landed on the
	/// list.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
		if !point_in_rect(mouse.column, mouse.row, self.rows_area) {
			return false;
		}
		match mouse.kind {
			MouseEventKind::ScrollUp => self.view.move_cursor(-WHEEL_STEP),
			MouseEventKind::ScrollDown => self.view.move_cursor(WHEEL_STEP),
			MouseEventKind::Down(MouseButton::Left) => {
				let row = self.table_state.offset() + usize::from(mouse.row - self.rows_area.y);
				if row < self.view.list().len() {
					self.view.set_cursor(row);
					self.view.toggle_row(row);
				}
			}
			_ => {}
		}
		true
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, title: &str, focused: bool, theme: &Theme) {
		let readout = self.view.readout().to_string();
		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_for(focused))
			.title_bottom(Line::from(Span::styled(format!(" {readout} "), theme.muted)).right_aligned());
		if !title.is_empty() {
			block = block.title(title.to_string());
		}
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let list = self.view.list();
		let model = self.view.model();
		if list.is_empty() {
			self.rows_area = inner;
			*self.table_state.offset_mut() = 0;
			self.table_state.select(None);
			frame.render_widget(
				Paragraph::new(Span::styled("No matching items", theme.muted)),
				inner,
			);
			return;
		}

		let rows: Vec<Row> = list
			.row_indices()
			.iter()
			.enumerate()
			.map(|(row, &index)| {
				let checked = list.is_highlighted(row);
				let style = if checked { theme.marked } else { Style::default() };
				Row::new([
					Cell::from(if checked { CHECKED } else { UNCHECKED }),
					Cell::from(model.text(index).to_string()),
				])
				.style(style)
			})
			.collect();

		let metrics = ScrollMetrics::compute(rows.len(), usize::from(inner.height));
		let content = metrics.content_area(inner);
		self.rows_area = content;
		self.table_state.select(Some(self.view.cursor()));

		let table = Table::new(rows, [Constraint::Length(3), Constraint::Fill(1)])
			.column_spacing(1)
			.highlight_spacing(HighlightSpacing::Always)
			.highlight_symbol(HIGHLIGHT_SYMBOL)
			.row_highlight_style(if focused { theme.cursor } else { Style::default() });
		frame.render_stateful_widget(table, content, &mut self.table_state);
		render_scrollbar(frame, inner, metrics, self.table_state.offset(), theme);
	}
}

#[cfg(test)]
mod tests {
	use bim_dialogs_core::ItemModel;
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_to_string;

	fn pane(items: &[&str], prechecked: &[usize]) -> ChecklistPane {
		let model = ItemModel::new(items.iter().copied(), Vec::<(String, Vec<String>)>::new());
		ChecklistPane::new(SelectionView::new(model, prechecked.iter().copied()))
	}

	fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	fn draw(pane: &mut ChecklistPane, width: u16, height: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
		terminal
			.draw(|frame| pane.render(frame, frame.area(), "Items", true, &Theme::fallback()))
			.expect("draw");
		buffer_to_string(terminal.backend().buffer())
	}

	#[test]
	fn keys_drive_selection_gestures() {
		let mut pane = pane(&["Door", "Window", "Wall"], &[]);
		assert!(pane.handle_key(key(KeyCode::Down, KeyModifiers::NONE)));
		assert!(pane.handle_key(key(KeyCode::Char(' '), KeyModifiers::NONE)));
		assert_eq!(pane.view().snapshot(), vec![1]);
		assert!(pane.handle_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)));
		assert_eq!(pane.view().snapshot(), vec![0, 2]);
		assert!(pane.handle_key(key(KeyCode::Char('a'), KeyModifiers::CONTROL)));
		assert_eq!(pane.view().snapshot(), vec![0, 1, 2]);
		assert!(pane.handle_key(key(KeyCode::Char('d'), KeyModifiers::CONTROL)));
		assert!(pane.view().snapshot().is_empty());
		assert!(!pane.handle_key(key(KeyCode::Char('x'), KeyModifiers::NONE)));
	}

	#[test]
	fn render_marks_checked_rows_and_readout() {
		let mut pane = pane(&["Door", "Window"], &[1]);
		let text = draw(&mut pane, 40, 5);
		let lines: Vec<&str> = text.lines().collect();
		assert!(lines[0].contains("Items"));
		assert!(lines[1].contains("▶ [ ] Door"));
		assert!(lines[2].contains("  [x] Window"));
		assert!(lines[4].contains("1 selected | 2 visible | 2 total"));
	}

	#[test]
	fn click_toggles_row_under_pointer() {
		let mut pane = pane(&["Door", "Window", "Wall"], &[]);
		draw(&mut pane, 40, 6);
		let click = MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: 5,
			row: 3,
			modifiers: KeyModifiers::NONE,
		};
		assert!(pane.handle_mouse(click));
		assert_eq!(pane.view().snapshot(), vec![2]);
		assert_eq!(pane.view().cursor(), 2);

		let outside = MouseEvent { row: 0, ..click };
		assert!(!pane.handle_mouse(outside));
	}

	#[test]
	fn empty_list_shows_placeholder() {
		let mut pane = pane(&["Door"], &[]);
		pane.view_mut().set_search("zzz");
		let text = draw(&mut pane, 40, 4);
		assert!(text.contains("No matching items"));
		assert!(text.contains("0 selected | 0 visible | 1 total"));
	}
}

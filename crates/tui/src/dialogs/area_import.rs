//! Spreadsheet column mapping for the area keyplan import.

use bim_dialogs_core::host::{self, OpenFile};
use bim_dialogs_core::requests::AreaImportRequest;
use bim_dialogs_core::{AreaKeyplanImport, ColumnMapping, FilePicker};
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use tracing::debug;

use crate::components::choice::wrap_index;
use crate::components::{
	ButtonBar, Choice, Decorations, Heading, INPUT_HEIGHT, PathField, point_in_rect, render_frame,
};
use crate::runtime::{Flow, Modal};
use crate::style::Theme;

const OPEN_TITLE: &str = "Select Excel File";
const OPEN_FILTER: &str = "Excel Files (*.xlsx)|*.xlsx|All Files (*.*)|*.*";
const OK: usize = 0;
const LOAD: usize = 1;
const CANCEL: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
	File,
	Mappings,
	Preview,
}

/// One spreadsheet column and the parameter chosen for it.
#[derive(Debug, Clone)]
struct MappingRow {
	column: String,
	option: Choice,
}

pub struct AreaImportDialog {
	title: String,
	file: PathField,
	rows: Vec<MappingRow>,
	table_state: TableState,
	rows_area: Rect,
	preview: Vec<String>,
	preview_offset: usize,
	preview_area: Rect,
	focus: Focus,
	buttons: ButtonBar,
	decorations: Decorations,
	picker: Box<dyn FilePicker>,
}

impl AreaImportDialog {
	#[must_use]
	pub fn new(
		request: &AreaImportRequest,
		decorations: Decorations,
		picker: Box<dyn FilePicker>,
	) -> Self {
		let options = &request.parameter_options;
		let rows: Vec<MappingRow> = request
			.column_names
			.iter()
			.enumerate()
			.map(|(i, column)| {
				let wanted = request
					.default_selections
					.get(i)
					.filter(|selection| !selection.trim().is_empty());
				let option = match wanted {
					Some(selection) => Choice::new(options.iter().cloned()).with_selected_text(selection),
					None => Choice::new(options.iter().cloned()),
				};
				MappingRow {
					column: column.clone(),
					option,
				}
			})
			.collect();

		let mut buttons = ButtonBar::new(["OK", "Load", "Cancel"]);
		buttons.set_enabled(OK, !rows.is_empty());
		let mut table_state = TableState::default();
		table_state.select((!rows.is_empty()).then_some(0));
		Self {
			title: request.title.clone(),
			file: PathField::new(&request.file_path),
			rows,
			table_state,
			rows_area: Rect::default(),
			preview: request.preview_lines.clone(),
			preview_offset: 0,
			preview_area: Rect::default(),
			focus: Focus::File,
			buttons,
			decorations,
			picker,
		}
	}

	/// Mappings as they would be returned now.
	#[must_use]
	pub fn mappings(&self) -> Vec<ColumnMapping> {
		self.rows
			.iter()
			.map(|row| ColumnMapping {
				column_name: row.column.clone(),
				selected_option: row.option.selected_text().unwrap_or_default().to_string(),
			})
			.collect()
	}

	fn has_mappings(&self) -> bool {
		!self.rows.is_empty()
	}

	fn finish(&self, load_requested: bool) -> Flow<AreaKeyplanImport> {
		debug!(load_requested, "area import closed");
		Flow::Commit(AreaKeyplanImport {
			file_path: self.file.text().to_string(),
			mappings: self.mappings(),
			load_requested,
		})
	}

	fn confirm(&self) -> Flow<AreaKeyplanImport> {
		if self.buttons.is_enabled(OK) {
			self.finish(false)
		} else {
			Flow::Continue
		}
	}

	fn browse(&mut self) {
		let request = OpenFile::new(OPEN_TITLE, OPEN_FILTER)
			.with_initial_directory(host::safe_directory(self.file.text()));
		if let Some(path) = self.picker.open_file(&request) {
			self.file.set_text(&path.to_string_lossy());
		}
	}

	fn ring(&self) -> &'static [Focus] {
		if self.has_mappings() {
			&[Focus::File, Focus::Mappings, Focus::Preview]
		} else {
			&[Focus::File, Focus::Preview]
		}
	}

	fn step_focus(&mut self, delta: isize) {
		let ring = self.ring();
		let position = ring.iter().position(|&focus| focus == self.focus).unwrap_or(0);
		self.focus = ring[wrap_index(position, delta, ring.len())];
	}

	fn cursor(&self) -> usize {
		self.table_state.selected().unwrap_or(0)
	}

	fn move_cursor(&mut self, delta: isize) {
		if self.rows.is_empty() {
			return;
		}
		let last = self.rows.len() - 1;
		let next = self.cursor().saturating_add_signed(delta).min(last);
		self.table_state.select(Some(next));
	}

	fn scroll_preview(&mut self, delta: isize) {
		let last = self.preview.len().saturating_sub(1);
		self.preview_offset = self.preview_offset.saturating_add_signed(delta).min(last);
	}

	fn route_key(&mut self, key: KeyEvent) {
		match self.focus {
			Focus::File => {
				self.file.handle_key(key);
			}
			Focus::Mappings => match key.code {
				KeyCode::Up => self.move_cursor(-1),
				KeyCode::Down => self.move_cursor(1),
				KeyCode::Home => self.table_state.select(Some(0)),
				KeyCode::End => self.move_cursor(isize::MAX),
				_ => {
					let cursor = self.cursor();
					if let Some(row) = self.rows.get_mut(cursor) {
						row.option.handle_key(key);
					}
				}
			},
			Focus::Preview => match key.code {
				KeyCode::Up => self.scroll_preview(-1),
				KeyCode::Down => self.scroll_preview(1),
				KeyCode::PageUp => self.scroll_preview(-(self.preview_area.height.max(1) as isize)),
				KeyCode::PageDown => self.scroll_preview(self.preview_area.height.max(1) as isize),
				_ => {}
			},
		}
	}

	fn render_mappings(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let focused = self.focus == Focus::Mappings;
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_for(focused))
			.title("Column mapping");
		let inner = block.inner(area);
		frame.render_widget(block, area);

		if self.rows.is_empty() {
			self.rows_area = Rect::default();
			frame.render_widget(
				Paragraph::new(Span::styled("No columns to map", theme.muted)),
				inner,
			);
			return;
		}

		let cursor = self.cursor();
		let rows: Vec<Row> = self
			.rows
			.iter()
			.enumerate()
			.map(|(index, row)| {
				let option = row.option.selected_text().unwrap_or("(none)");
				let option = if focused && index == cursor {
					format!("◀ {option} ▶")
				} else {
					option.to_string()
				};
				Row::new([row.column.clone(), option])
			})
			.collect();
		let header = Row::new(["Column", "Parameter"]).style(theme.title);
		let table = Table::new(rows, [Constraint::Percentage(45), Constraint::Fill(1)])
			.header(header)
			.column_spacing(1)
			.row_highlight_style(if focused { theme.cursor } else { theme.marked });
		frame.render_stateful_widget(table, inner, &mut self.table_state);
		self.rows_area = Rect {
			y: inner.y + 1,
			height: inner.height.saturating_sub(1),
			..inner
		};
	}

	fn render_preview(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_for(self.focus == Focus::Preview))
			.title("Preview");
		self.preview_area = block.inner(area);
		let lines: Vec<Line> = self
			.preview
			.iter()
			.skip(self.preview_offset)
			.map(|line| Line::styled(line.clone(), theme.muted))
			.collect();
		frame.render_widget(Paragraph::new(lines).block(block), area);
	}
}

impl Modal for AreaImportDialog {
	type Output = AreaKeyplanImport;

	fn handle_key(&mut self, key: KeyEvent) -> Flow<AreaKeyplanImport> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Flow::Dismiss,
			KeyCode::Enter => return self.confirm(),
			KeyCode::Char('l') if ctrl => return self.finish(true),
			KeyCode::Char('o') if ctrl => self.browse(),
			KeyCode::Tab => self.step_focus(1),
			KeyCode::BackTab => self.step_focus(-1),
			_ => self.route_key(key),
		}
		Flow::Continue
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow<AreaKeyplanImport> {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				match self.buttons.hit(column, row) {
					Some(OK) => return self.confirm(),
					Some(LOAD) => return self.finish(true),
					Some(CANCEL) => return Flow::Dismiss,
					_ => {}
				}
				if self.file.browse_hit(column, row) {
					self.focus = Focus::File;
					self.browse();
				} else if self.file.contains(column, row) {
					self.focus = Focus::File;
				} else if point_in_rect(column, row, self.rows_area) {
					let index = self.table_state.offset() + usize::from(row - self.rows_area.y);
					if let Some(mapping) = self.rows.get_mut(index) {
						if self.focus == Focus::Mappings && self.table_state.selected() == Some(index) {
							mapping.option.cycle(1);
						}
						self.table_state.select(Some(index));
						self.focus = Focus::Mappings;
					}
				} else if point_in_rect(column, row, self.preview_area) {
					self.focus = Focus::Preview;
				}
			}
			MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
				let delta = if mouse.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
				if point_in_rect(column, row, self.preview_area) {
					self.scroll_preview(delta * 3);
				} else if point_in_rect(column, row, self.rows_area) {
					self.move_cursor(delta);
				}
			}
			_ => {}
		}
		Flow::Continue
	}

	fn draw(&mut self, frame: &mut Frame) {
		let theme = self.decorations.theme;
		let heading = Heading {
			title: &self.title,
			prompt: "",
		};
		let default_button = if self.has_mappings() { OK } else { LOAD };
		let body = render_frame(
			frame,
			&self.decorations,
			heading,
			&mut self.buttons,
			Some(default_button),
		);
		let [file, mappings, preview] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Fill(3),
			Constraint::Fill(2),
		])
		.areas(body);

		self.file
			.render(frame, file, "Excel file", self.focus == Focus::File, &theme);
		self.render_mappings(frame, mappings, &theme);
		self.render_preview(frame, preview, &theme);
	}
}

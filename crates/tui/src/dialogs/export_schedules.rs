//! Schedule checklist with Excel or CSV export options.

use bim_dialogs_core::host::{self, SaveFile};
use bim_dialogs_core::requests::ScheduleExportRequest;
use bim_dialogs_core::{
	CsvDelimiter, ExportMode, FilePicker, ItemModel, ScheduleExport, SelectionView,
};
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Rect};
use tracing::debug;

use crate::components::choice::wrap_index;
use crate::components::{
	ButtonBar, CheckBox, ChecklistPane, Choice, Decorations, Heading, INPUT_HEIGHT, PathField,
	RadioGroup, point_in_rect, render_frame,
};
use crate::runtime::{Flow, Modal};

pub const DEFAULT_EXCEL_LABEL: &str = "Export to Excel";
pub const DEFAULT_CSV_LABEL: &str = "Export to CSV";
pub const QUOTE_ALL_LABEL: &str = "Quote all values";
const SAVE_TITLE: &str = "Export Schedules";
const SAVE_FILTER: &str = "Excel Workbook (*.xlsx)|*.xlsx";
const FOLDER_TITLE: &str = "Select CSV Folder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
	List,
	Mode,
	ExcelPath,
	CsvFolder,
	Delimiter,
	QuoteAll,
}

#[derive(Debug, Default, Clone, Copy)]
struct Areas {
	mode: Rect,
	delimiter: Rect,
	quote_all: Rect,
}

pub struct ScheduleExportDialog {
	title: String,
	prompt: String,
	pane: ChecklistPane,
	modes: RadioGroup,
	excel_path: PathField,
	csv_folder: PathField,
	delimiter: Choice,
	quote_all: CheckBox,
	focus: Focus,
	buttons: ButtonBar,
	decorations: Decorations,
	picker: Box<dyn FilePicker>,
	areas: Areas,
}

impl ScheduleExportDialog {
	#[must_use]
	pub fn new(
		request: &ScheduleExportRequest,
		decorations: Decorations,
		picker: Box<dyn FilePicker>,
	) -> Self {
		let model = ItemModel::from_items(request.items.iter().cloned());
		let label = |text: &str, fallback: &'static str| {
			if text.trim().is_empty() {
				fallback.to_string()
			} else {
				text.to_string()
			}
		};
		let mode = ExportMode::from_index(request.default_mode);
		let delimiter = CsvDelimiter::parse_or_default(&request.csv_delimiter);
		let mut delimiters = Choice::new(CsvDelimiter::ALL.map(CsvDelimiter::label));
		delimiters.select_index(CsvDelimiter::ALL.iter().position(|&d| d == delimiter));
		Self {
			title: request.title.clone(),
			prompt: request.prompt.clone(),
			pane: ChecklistPane::new(SelectionView::new(model, request.prechecked.iter().copied())),
			modes: RadioGroup::new(
				[
					label(&request.mode_label_excel, DEFAULT_EXCEL_LABEL),
					label(&request.mode_label_csv, DEFAULT_CSV_LABEL),
				],
				Some(usize::from(mode.index())),
			),
			excel_path: PathField::new(&request.excel_path),
			csv_folder: PathField::new(&request.csv_folder),
			delimiter: delimiters,
			quote_all: CheckBox::new(QUOTE_ALL_LABEL, request.csv_quote_all),
			focus: Focus::List,
			buttons: ButtonBar::ok_cancel("", ""),
			decorations,
			picker,
			areas: Areas::default(),
		}
	}

	/// Currently selected mode; one is always selected.
	#[must_use]
	pub fn mode(&self) -> ExportMode {
		match self.modes.selected() {
			Some(1) => ExportMode::Csv,
			_ => ExportMode::Excel,
		}
	}

	fn delimiter(&self) -> CsvDelimiter {
		self.delimiter
			.selected_index()
			.and_then(|index| CsvDelimiter::ALL.get(index).copied())
			.unwrap_or_default()
	}

	fn ring(&self) -> &'static [Focus] {
		match self.mode() {
			ExportMode::Excel => &[Focus::List, Focus::Mode, Focus::ExcelPath],
			ExportMode::Csv => &[
				Focus::List,
				Focus::Mode,
				Focus::CsvFolder,
				Focus::Delimiter,
				Focus::QuoteAll,
			],
		}
	}

	fn step_focus(&mut self, delta: isize) {
		let ring = self.ring();
		let position = ring.iter().position(|&focus| focus == self.focus).unwrap_or(0);
		self.focus = ring[wrap_index(position, delta, ring.len())];
	}

	fn browse_excel(&mut self) {
		let current = self.excel_path.text().to_string();
		let request = SaveFile::new(SAVE_TITLE, SAVE_FILTER)
			.with_default_extension("xlsx")
			.with_initial_directory(host::safe_directory(&current))
			.with_file_name(host::file_name(&current));
		if let Some(path) = self.picker.save_file(&request) {
			debug!(path = %path.display(), "excel target chosen");
			self.excel_path.set_text(&path.to_string_lossy());
		}
	}

	fn browse_csv(&mut self) {
		let current = self.csv_folder.text().to_string();
		let initial = host::safe_directory(&current);
		if let Some(path) = self.picker.pick_folder(FOLDER_TITLE, initial.as_deref()) {
			debug!(path = %path.display(), "csv folder chosen");
			self.csv_folder.set_text(&path.to_string_lossy());
		}
	}

	fn confirm(&mut self) -> Flow<ScheduleExport> {
		let mode = self.mode();
		let delimiter = self.delimiter();
		match self.pane.view_mut().commit() {
			Some(selection) => Flow::Commit(ScheduleExport {
				selected_indices: selection.selected_indices,
				mode,
				excel_path: self.excel_path.text().to_string(),
				csv_folder: self.csv_folder.text().to_string(),
				csv_delimiter: delimiter,
				csv_quote_all: self.quote_all.is_checked(),
			}),
			None => Flow::Dismiss,
		}
	}

	fn cancel(&mut self) -> Flow<ScheduleExport> {
		self.pane.view_mut().dismiss();
		Flow::Dismiss
	}

	fn route_key(&mut self, key: KeyEvent) {
		match self.focus {
			Focus::List => {
				self.pane.handle_key(key);
			}
			Focus::Mode => {
				self.modes.handle_key(key);
			}
			Focus::ExcelPath => {
				self.excel_path.handle_key(key);
			}
			Focus::CsvFolder => {
				self.csv_folder.handle_key(key);
			}
			Focus::Delimiter => {
				self.delimiter.handle_key(key);
			}
			Focus::QuoteAll => {
				self.quote_all.handle_key(key);
			}
		}
	}
}

impl Modal for ScheduleExportDialog {
	type Output = ScheduleExport;

	fn handle_key(&mut self, key: KeyEvent) -> Flow<ScheduleExport> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return self.cancel(),
			KeyCode::Enter => return self.confirm(),
			KeyCode::Tab => self.step_focus(1),
			KeyCode::BackTab => self.step_focus(-1),
			KeyCode::Char('o') if ctrl => match self.focus {
				Focus::ExcelPath => self.browse_excel(),
				Focus::CsvFolder => self.browse_csv(),
				_ => {}
			},
			_ => self.route_key(key),
		}
		Flow::Continue
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow<ScheduleExport> {
		if self.pane.handle_mouse(mouse) {
			self.focus = Focus::List;
			return Flow::Continue;
		}
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return Flow::Continue;
		}
		let (column, row) = (mouse.column, mouse.row);
		match self.buttons.hit(column, row) {
			Some(0) => return self.confirm(),
			Some(_) => return self.cancel(),
			None => {}
		}
		let csv = self.mode() == ExportMode::Csv;
		if point_in_rect(column, row, self.areas.mode) {
			self.focus = Focus::Mode;
			self.modes.click(column, row);
		} else if !csv && self.excel_path.browse_hit(column, row) {
			self.focus = Focus::ExcelPath;
			self.browse_excel();
		} else if !csv && self.excel_path.contains(column, row) {
			self.focus = Focus::ExcelPath;
		} else if csv && self.csv_folder.browse_hit(column, row) {
			self.focus = Focus::CsvFolder;
			self.browse_csv();
		} else if csv && self.csv_folder.contains(column, row) {
			self.focus = Focus::CsvFolder;
		} else if csv && point_in_rect(column, row, self.areas.delimiter) {
			self.focus = Focus::Delimiter;
			self.delimiter.cycle(1);
		} else if csv && point_in_rect(column, row, self.areas.quote_all) {
			self.focus = Focus::QuoteAll;
			self.quote_all.toggle();
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
		let csv = self.mode() == ExportMode::Csv;
		let options_height = if csv { INPUT_HEIGHT * 2 } else { INPUT_HEIGHT };
		let [list, mode, options] = Layout::vertical([
			Constraint::Min(3),
			Constraint::Length(1),
			Constraint::Length(options_height),
		])
		.areas(body);

		self.pane
			.render(frame, list, "Schedules", self.focus == Focus::List, &theme);
		self.modes
			.render(frame, mode, self.focus == Focus::Mode, &theme);
		self.areas.mode = mode;

		if csv {
			let [folder, row] = Layout::vertical([Constraint::Length(INPUT_HEIGHT); 2]).areas(options);
			let [delimiter, quote_all] =
				Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)]).areas(row);
			let quote_all = Rect {
				x: quote_all.x + 1,
				y: quote_all.y + 1,
				height: 1,
				width: quote_all.width.saturating_sub(1),
			};
			self.csv_folder
				.render(frame, folder, "CSV folder", self.focus == Focus::CsvFolder, &theme);
			self.delimiter
				.render(frame, delimiter, "Delimiter", self.focus == Focus::Delimiter, &theme);
			self.quote_all
				.render(frame, quote_all, self.focus == Focus::QuoteAll, &theme);
			self.areas.delimiter = delimiter;
			self.areas.quote_all = quote_all;
		} else {
			self.excel_path
				.render(frame, options, "Excel file", self.focus == Focus::ExcelPath, &theme);
			self.areas.delimiter = Rect::default();
			self.areas.quote_all = Rect::default();
		}
	}
}

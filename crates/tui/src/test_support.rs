use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Buffer contents as text, one line per row.
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

pub(crate) fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

pub(crate) fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub(crate) fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

/// Key events typing `text`.
pub(crate) fn typed(text: &str) -> Vec<Event> {
	text.chars()
		.map(|ch| Event::Key(press(KeyCode::Char(ch))))
		.collect()
}

//! Blocking modal loop shared by every dialog.

use std::io;
use std::iter;

use anyhow::{Context, Result};
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::context;

/// What a dialog wants after handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<T> {
	/// Keep the dialog open.
	Continue,
	/// Close with OK and this result.
	Commit(T),
	/// Close with Cancel.
	Dismiss,
}

impl<T> Flow<T> {
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Flow<U> {
		match self {
			Self::Continue => Flow::Continue,
			Self::Commit(output) => Flow::Commit(f(output)),
			Self::Dismiss => Flow::Dismiss,
		}
	}
}

/// A dialog that can be driven by the modal loop.
pub trait Modal {
	type Output;

	fn handle_key(&mut self, key: KeyEvent) -> Flow<Self::Output>;

	fn handle_mouse(&mut self, _mouse: MouseEvent) -> Flow<Self::Output> {
		Flow::Continue
	}

	fn draw(&mut self, frame: &mut Frame);
}

/// Run `modal` against `terminal` until it closes or `events` runs dry.
///
/// The dialog is redrawn before every event. Only key presses are
/// forwarded; releases and repeats reported by some terminals are dropped.
/// Running out of events counts as Cancel.
pub fn drive<B, M, E>(terminal: &mut Terminal<B>, modal: &mut M, events: E) -> Result<Option<M::Output>>
where
	B: Backend,
	M: Modal + ?Sized,
	E: IntoIterator<Item = io::Result<Event>>,
{
	let mut events = events.into_iter();
	loop {
		terminal
			.draw(|frame| modal.draw(frame))
			.context("failed to draw dialog")?;

		let Some(event) = events.next() else {
			debug!("input exhausted; dialog dismissed");
			return Ok(None);
		};
		let flow = match event.context("failed to read terminal input")? {
			Event::Key(key) if key.kind == KeyEventKind::Press => modal.handle_key(key),
			Event::Mouse(mouse) => modal.handle_mouse(mouse),
			_ => Flow::Continue,
		};
		match flow {
			Flow::Continue => {}
			Flow::Commit(output) => {
				debug!("dialog committed");
				return Ok(Some(output));
			}
			Flow::Dismiss => {
				debug!("dialog dismissed");
				return Ok(None);
			}
		}
	}
}

/// Show `modal` on the process-wide terminal session and block until it
/// closes. `Ok(None)` means the user cancelled.
pub fn show_modal<M: Modal + ?Sized>(modal: &mut M) -> Result<Option<M::Output>> {
	context::with_session(|terminal| drive(terminal, modal, iter::repeat_with(event::read)))
}

#[cfg(test)]
mod tests {
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
	use ratatui::widgets::Paragraph;

	use super::*;
	use crate::test_support::{buffer_to_string, click, press};

	#[derive(Default)]
	struct Counter {
		presses: usize,
		clicks: usize,
	}

	impl Modal for Counter {
		type Output = usize;

		fn handle_key(&mut self, key: KeyEvent) -> Flow<usize> {
			match key.code {
				KeyCode::Enter => Flow::Commit(self.presses),
				KeyCode::Esc => Flow::Dismiss,
				_ => {
					self.presses += 1;
					Flow::Continue
				}
			}
		}

		fn handle_mouse(&mut self, _mouse: MouseEvent) -> Flow<usize> {
			self.clicks += 1;
			Flow::Continue
		}

		fn draw(&mut self, frame: &mut Frame) {
			frame.render_widget(Paragraph::new(format!("{} {}", self.presses, self.clicks)), frame.area());
		}
	}

	fn run(events: Vec<Event>) -> (Option<usize>, String) {
		let mut terminal = Terminal::new(TestBackend::new(10, 1)).expect("terminal");
		let mut modal = Counter::default();
		let result = drive(&mut terminal, &mut modal, events.into_iter().map(Ok)).expect("drive");
		(result, buffer_to_string(terminal.backend().buffer()))
	}

	#[test]
	fn enter_commits_after_redraws() {
		let events = vec![
			Event::Key(press(KeyCode::Char('a'))),
			Event::Mouse(click(0, 0)),
			Event::Key(press(KeyCode::Char('b'))),
			Event::Key(press(KeyCode::Enter)),
		];
		let (result, screen) = run(events);
		assert_eq!(result, Some(2));
		assert_eq!(screen.trim_end(), "2 1");
	}

	#[test]
	fn escape_and_exhaustion_cancel() {
		assert_eq!(run(vec![Event::Key(press(KeyCode::Esc))]).0, None);
		assert_eq!(run(vec![Event::Key(press(KeyCode::Char('x')))]).0, None);
	}

	#[test]
	fn key_releases_are_ignored() {
		let release = KeyEvent {
			code: KeyCode::Enter,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Release,
			state: KeyEventState::NONE,
		};
		let (result, _) = run(vec![Event::Key(release), Event::Key(press(KeyCode::Char('z')))]);
		assert_eq!(result, None);
	}

	#[test]
	fn input_errors_propagate() {
		let mut terminal = Terminal::new(TestBackend::new(10, 1)).expect("terminal");
		let mut modal = Counter::default();
		let events = vec![Err(io::Error::other("tty gone"))];
		let err = drive(&mut terminal, &mut modal, events).expect_err("fails");
		assert!(format!("{err:#}").contains("tty gone"));
	}
}

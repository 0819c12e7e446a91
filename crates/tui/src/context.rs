//! Process-wide terminal session.
//!
//! The terminal is put into raw mode by the first dialog and stays that way
//! for the rest of the process, so consecutive dialogs do not flicker back
//! to the shell. Only [`shutdown`] restores it. The session lock is held
//! while a dialog is open; dialogs never nest.

use std::io::stdout;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow, bail};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

struct Session {
	terminal: DefaultTerminal,
}

impl Session {
	fn open() -> Result<Self> {
		let terminal = open_with(
			|| ratatui::try_init().context("failed to initialise terminal"),
			prepare,
			|| {
				if let Err(err) = restore() {
					warn!("failed to restore terminal after setup error: {err:#}");
				}
			},
		)?;
		debug!("terminal session opened");
		Ok(Self { terminal })
	}
}

/// Run `init`, then `prepare`. When `prepare` fails the terminal has already
/// left cooked mode, so `undo` runs before the error is returned.
fn open_with<T>(
	init: impl FnOnce() -> Result<T>,
	prepare: impl FnOnce(&mut T) -> Result<()>,
	undo: impl FnOnce(),
) -> Result<T> {
	let mut terminal = init()?;
	if let Err(err) = prepare(&mut terminal) {
		undo();
		return Err(err);
	}
	Ok(terminal)
}

fn prepare(terminal: &mut DefaultTerminal) -> Result<()> {
	execute!(stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;
	terminal.clear().context("failed to clear terminal")?;
	Ok(())
}

fn restore() -> Result<()> {
	if let Err(err) = execute!(stdout(), DisableMouseCapture) {
		warn!("failed to disable mouse capture: {err}");
	}
	ratatui::try_restore().context("failed to restore terminal")
}

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Run `f` with the session terminal, opening the session on first use.
pub fn with_session<T>(f: impl FnOnce(&mut DefaultTerminal) -> Result<T>) -> Result<T> {
	let mut guard = SESSION
		.lock()
		.map_err(|_| anyhow!("terminal session lock poisoned"))?;
	if guard.is_none() {
		*guard = Some(Session::open()?);
	}
	let Some(session) = guard.as_mut() else {
		bail!("terminal session unavailable");
	};
	f(&mut session.terminal)
}

/// Whether a dialog has opened the terminal session.
#[must_use]
pub fn is_active() -> bool {
	SESSION.lock().is_ok_and(|guard| guard.is_some())
}

/// Restore the terminal. Safe to call when no session was opened.
pub fn shutdown() -> Result<()> {
	let mut guard = SESSION
		.lock()
		.map_err(|_| anyhow!("terminal session lock poisoned"))?;
	let Some(_session) = guard.take() else {
		return Ok(());
	};
	restore()?;
	debug!("terminal session closed");
	Ok(())
}

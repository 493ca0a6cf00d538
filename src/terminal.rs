//! Raw-mode terminal guard for interactive mode. Narrowed from a full
//! terminal backend (`core-terminal`'s `CrosstermBackend`/`TerminalGuard`):
//! TRAC has no display model to render, so entering just means raw mode and
//! bracketed-paste reporting — no alternate screen, no cursor hide, nothing
//! to repaint on leave.

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// RAII guard: enables raw mode and bracketed-paste reporting on
/// construction, restores both on drop even if the caller panics or
/// returns early.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnableBracketedPaste)?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = execute!(stdout(), DisableBracketedPaste);
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

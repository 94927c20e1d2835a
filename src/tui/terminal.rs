//! Terminal handles and the scoped leases taken on them during a session.
//!
//! Two independent guards are held while the menu runs:
//!
//! - [`RawModeGuard`] switches the input into raw mode and switches it back on drop.
//! - [`CursorGuard`] hides the cursor and shows it again on drop.
//!
//! Neither depends on the other succeeding when they are released.

use std::io::{self, Read, Write};
use std::ops::{Deref, DerefMut};

use crossterm::cursor::{Hide, Show};
use crossterm::tty::IsTty;
use crossterm::{execute, terminal};
use log::{debug, warn};

/// A handle that may or may not be attached to an interactive terminal.
pub trait TerminalHandle {
    fn is_interactive(&self) -> bool;
}

/// An input handle whose terminal mode can be switched to raw and back.
///
/// `disable_raw_mode` must restore the mode captured by `enable_raw_mode`
/// and must be harmless when called again.
pub trait RawModeInput: Read + TerminalHandle {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;
}

impl TerminalHandle for io::Stdin {
    fn is_interactive(&self) -> bool {
        self.is_tty()
    }
}

impl TerminalHandle for io::Stdout {
    fn is_interactive(&self) -> bool {
        self.is_tty()
    }
}

impl RawModeInput for io::Stdin {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        // crossterm saves the original termios and restores it on disable
        terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Raw-mode lease on an input handle.
pub struct RawModeGuard<'a, I: RawModeInput> {
    input: &'a mut I,
    active: bool,
}

impl<'a, I: RawModeInput> RawModeGuard<'a, I> {
    pub fn acquire(input: &'a mut I) -> io::Result<Self> {
        input.enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(Self {
            input,
            active: true,
        })
    }

    /// Restore the captured mode. Later calls (including the one from `Drop`) are no-ops.
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.input.disable_raw_mode()?;
        debug!("Raw mode restored");
        Ok(())
    }
}

impl<I: RawModeInput> Deref for RawModeGuard<'_, I> {
    type Target = I;

    fn deref(&self) -> &I {
        self.input
    }
}

impl<I: RawModeInput> DerefMut for RawModeGuard<'_, I> {
    fn deref_mut(&mut self) -> &mut I {
        self.input
    }
}

impl<I: RawModeInput> Drop for RawModeGuard<'_, I> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Hidden-cursor lease on an output handle.
pub struct CursorGuard<'a, W: Write> {
    output: &'a mut W,
    hidden: bool,
}

impl<'a, W: Write> CursorGuard<'a, W> {
    pub fn hide(output: &'a mut W) -> io::Result<Self> {
        execute!(output, Hide)?;
        Ok(Self {
            output,
            hidden: true,
        })
    }

    /// Show the cursor again. Later calls (including the one from `Drop`) are no-ops.
    pub fn release(&mut self) -> io::Result<()> {
        if !self.hidden {
            return Ok(());
        }
        self.hidden = false;
        execute!(self.output, Show)
    }
}

impl<W: Write> Deref for CursorGuard<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.output
    }
}

impl<W: Write> DerefMut for CursorGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        self.output
    }
}

impl<W: Write> Drop for CursorGuard<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("Failed to show cursor: {}", e);
        }
    }
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use crate::tui::terminal::{RawModeInput, TerminalHandle};

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// Scripted keyboard. Records every mode switch as `"raw"` or `"cooked"`.
pub struct FakeInput {
    bytes: VecDeque<u8>,
    tty: bool,
    raw: bool,
    mode_log: Vec<&'static str>,
    fail_enable: bool,
    fail_disable: bool,
    fail_when_drained: bool,
    interrupt_once: bool,
}

impl FakeInput {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            tty: true,
            raw: false,
            mode_log: Vec::new(),
            fail_enable: false,
            fail_disable: false,
            fail_when_drained: false,
            interrupt_once: false,
        }
    }

    pub fn not_a_terminal(mut self) -> Self {
        self.tty = false;
        self
    }

    pub fn fail_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    pub fn fail_disable(mut self) -> Self {
        self.fail_disable = true;
        self
    }

    /// Return `BrokenPipe` instead of EOF once the script runs out.
    pub fn fail_when_drained(mut self) -> Self {
        self.fail_when_drained = true;
        self
    }

    /// Fail the first read with `Interrupted`, as a signal arriving mid-read would.
    pub fn interrupt_once(mut self) -> Self {
        self.interrupt_once = true;
        self
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn mode_log(&self) -> &[&'static str] {
        &self.mode_log
    }
}

impl Read for FakeInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.interrupt_once {
            self.interrupt_once = false;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        match self.bytes.pop_front() {
            Some(b) => {
                buf[0] = b;
                Ok(1)
            }
            None if self.fail_when_drained => {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "keyboard unplugged"))
            }
            None => Ok(0),
        }
    }
}

impl TerminalHandle for FakeInput {
    fn is_interactive(&self) -> bool {
        self.tty
    }
}

impl RawModeInput for FakeInput {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        if self.fail_enable {
            return Err(io::Error::other("tcsetattr failed"));
        }
        self.raw = true;
        self.mode_log.push("raw");
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        if self.fail_disable {
            return Err(io::Error::other("tcsetattr failed"));
        }
        if self.raw {
            self.raw = false;
            self.mode_log.push("cooked");
        }
        Ok(())
    }
}

/// Captures everything written to the "screen".
pub struct FakeOutput {
    written: Vec<u8>,
    tty: bool,
    fail_writes: bool,
    fail_show_cursor: bool,
}

impl FakeOutput {
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            tty: true,
            fail_writes: false,
            fail_show_cursor: false,
        }
    }

    pub fn not_a_terminal(mut self) -> Self {
        self.tty = false;
        self
    }

    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Fail only the write that would show the cursor again.
    pub fn fail_show_cursor(mut self) -> Self {
        self.fail_show_cursor = true;
        self
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }

    /// Cursor visibility implied by the last hide/show sequence written (visible initially).
    pub fn cursor_visible(&self) -> bool {
        let text = self.text();
        match (text.rfind(HIDE_CURSOR), text.rfind(SHOW_CURSOR)) {
            (Some(hide), Some(show)) => show > hide,
            (Some(_), None) => false,
            _ => true,
        }
    }
}

impl Write for FakeOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "screen gone"));
        }
        if self.fail_show_cursor && buf.starts_with(SHOW_CURSOR.as_bytes()) {
            return Err(io::Error::other("show cursor rejected"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TerminalHandle for FakeOutput {
    fn is_interactive(&self) -> bool {
        self.tty
    }
}

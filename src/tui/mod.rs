//! # TUI Adapter
//!
//! The terminal-specific layer. Owns raw mode, decodes input bytes into
//! `core::action::Action` values and redraws the menu in place.
//!
//! ## Session Lifecycle
//!
//! ```text
//! Initializing ──► Running ──► Confirmed | Canceled | Failed
//! ```
//!
//! - **Initializing**: validate the request, check both handles are
//!   terminals, take the raw-mode and hidden-cursor leases, draw frame one.
//! - **Running**: one blocking single-byte read per iteration. There is no
//!   timeout and no background work.
//! - **Terminal states**: the leases are dropped in reverse order (cursor
//!   shown, then mode restored) on every path out of [`select`], including
//!   `?` on an I/O error.

pub mod event;
pub mod render;
pub mod terminal;

use log::{debug, info};
use std::io::{self, Read, Write};

use crate::core::action::{Effect, update};
use crate::core::error::SelectError;
use crate::core::state::{Menu, SelectRequest, Selection};
use crate::tui::event::KeyDecoder;
use crate::tui::render::Renderer;
use crate::tui::terminal::{CursorGuard, RawModeGuard, RawModeInput, TerminalHandle};

/// Run one interactive selection on the given handles.
///
/// Returns the chosen item or [`Selection::Canceled`]. The input's terminal
/// mode and the cursor visibility are restored before this returns, whatever
/// the outcome.
pub fn select<I, W>(
    request: SelectRequest,
    input: &mut I,
    output: &mut W,
) -> Result<Selection, SelectError>
where
    I: RawModeInput,
    W: Write + TerminalHandle,
{
    let mut menu = Menu::from_request(request)?;

    if !input.is_interactive() || !output.is_interactive() {
        info!("Interactive selection unavailable: not a terminal");
        return Err(SelectError::NotATerminal);
    }

    info!(
        "Selection session started ({} items, default index {})",
        menu.items().len(),
        menu.selected()
    );

    // Declaration order matters: the cursor guard drops first.
    let mut input = RawModeGuard::acquire(input)?;
    let mut output = CursorGuard::hide(output)?;

    let mut renderer = Renderer::new();
    let mut decoder = KeyDecoder::new();
    renderer.render(&mut *output, &menu)?;

    loop {
        let byte = read_byte(&mut *input)?;

        let Some(action) = decoder.feed(byte) else {
            continue;
        };

        match update(&mut menu, action) {
            Effect::None => {}
            Effect::Redraw => renderer.render(&mut *output, &menu)?,
            Effect::Confirm => {
                // Leave the finished menu on screen and start below it
                output.write_all(b"\r\n")?;
                output.flush()?;
                let selection = menu.into_selection();
                info!("Selection confirmed: {:?}", selection);
                return Ok(selection);
            }
            Effect::Cancel => {
                info!("Selection canceled");
                return Ok(Selection::Canceled);
            }
        }
        debug!("selected index {}", menu.selected());
    }
}

/// Blocking single-byte read. `Interrupted` is retried; EOF is an error.
fn read_byte<R: Read>(input: &mut R) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed during selection",
                ));
            }
            Ok(_) => return Ok(buf[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                debug!("Read interrupted, retrying");
            }
            Err(e) => return Err(e),
        }
    }
}

/// [`select`] bound to the process's stdin and stdout.
pub fn select_stdio(request: SelectRequest) -> Result<Selection, SelectError> {
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();
    select(request, &mut stdin, &mut stdout)
}

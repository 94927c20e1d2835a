//! termselect library exports
//!
//! The engine lives in [`tui::select`]; everything it needs to be driven
//! from a caller (request, outcome, errors) is re-exported here.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::error::SelectError;
pub use crate::core::state::{DEFAULT_HINT, DEFAULT_PROMPT, SelectRequest, Selection};
pub use crate::tui::terminal::{RawModeInput, TerminalHandle};
pub use crate::tui::{select, select_stdio};

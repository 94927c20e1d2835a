use std::fmt;
use std::io;

/// Failures that end a selection session without an outcome.
///
/// User cancellation is not an error; see [`crate::Selection::Canceled`].
#[derive(Debug)]
pub enum SelectError {
    /// The request had no items. Raised before the terminal is touched.
    NoItems,
    /// Input or output is not an interactive terminal. Raised before any mode change.
    NotATerminal,
    /// A read or write failed mid-session. The terminal is restored before this is returned.
    Io(io::Error),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::NoItems => write!(f, "no items to select"),
            SelectError::NotATerminal => write!(f, "not a terminal"),
            SelectError::Io(e) => write!(f, "terminal I/O error: {e}"),
        }
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SelectError {
    fn from(e: io::Error) -> Self {
        SelectError::Io(e)
    }
}

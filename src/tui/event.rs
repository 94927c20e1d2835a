//! Byte-level key decoding for raw-mode input.
//!
//! Input arrives one byte at a time. Plain keys map straight to an
//! [`Action`]; arrow keys arrive as `ESC [ A` (CSI) or `ESC O A` (SS3) and
//! need the small state machine below. Only vertical arrows are recognised.

use crate::core::action::Action;

const CTRL_C: u8 = 0x03;
const ESC: u8 = 0x1b;

/// Where the decoder is inside a (possibly multi-byte) key sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    #[default]
    Normal,
    /// Saw `ESC`.
    EscPending,
    /// Saw `ESC [`.
    CsiPending,
    /// Saw `ESC O`.
    Ss3Pending,
}

/// Pure transition function: one byte in, next state and optional action out.
pub fn decode(state: DecoderState, byte: u8) -> (DecoderState, Option<Action>) {
    use DecoderState::*;

    match state {
        Normal => match byte {
            b'\r' | b'\n' => (Normal, Some(Action::Confirm)),
            CTRL_C | b'q' | b'Q' => (Normal, Some(Action::Cancel)),
            b'k' | b'K' => (Normal, Some(Action::MoveUp)),
            b'j' | b'J' => (Normal, Some(Action::MoveDown)),
            ESC => (EscPending, None),
            _ => (Normal, None),
        },
        EscPending => match byte {
            b'[' => (CsiPending, None),
            b'O' => (Ss3Pending, None),
            // ESC ESC cancels. Not advertised in the hint.
            ESC => (Normal, Some(Action::Cancel)),
            _ => (Normal, None),
        },
        CsiPending | Ss3Pending => match byte {
            b'A' => (Normal, Some(Action::MoveUp)),
            b'B' => (Normal, Some(Action::MoveDown)),
            _ => (Normal, None),
        },
    }
}

/// Stateful wrapper around [`decode`] for the session loop.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: DecoderState,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    pub fn feed(&mut self, byte: u8) -> Option<Action> {
        let (next, action) = decode(self.state, byte);
        if next != self.state {
            log::trace!("decoder {:?} -> {:?} on {:#04x}", self.state, next, byte);
        }
        self.state = next;
        action
    }
}

//! # Actions
//!
//! Every decoded keypress becomes an `Action`.
//! User presses `j` or the down arrow? That's `Action::MoveDown`.
//!
//! The `update()` function applies an action to the menu and returns the
//! `Effect` the driver has to carry out. No I/O here.
//!
//! ```text
//! Menu + Action  →  update()  →  Menu' + Effect
//! ```

use log::debug;

use crate::core::state::Menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

/// What the session driver must do after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed (e.g. a move against a bound).
    None,
    Redraw,
    Confirm,
    Cancel,
}

pub fn update(menu: &mut Menu, action: Action) -> Effect {
    let effect = match action {
        Action::MoveUp => {
            if menu.move_up() {
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::MoveDown => {
            if menu.move_down() {
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Confirm => Effect::Confirm,
        Action::Cancel => Effect::Cancel,
    };
    debug!(
        "update: {:?} -> {:?} (selected={})",
        action,
        effect,
        menu.selected()
    );
    effect
}

//! # Selection State
//!
//! ```text
//! SelectRequest (caller-owned, consumed by one session)
//! ├── items: Vec<String>      // labels, order-significant, duplicates allowed
//! ├── default_index: usize    // clamped to 0 when out of range
//! ├── prompt: String          // "" → DEFAULT_PROMPT
//! └── hint: String            // "" → DEFAULT_HINT
//!
//! Menu (session-owned)
//! ├── items, prompt, hint     // resolved copy of the request
//! └── selected: usize         // always in [0, items.len())
//! ```
//!
//! `Menu` only changes through `update(menu, action)` in action.rs.

use crate::core::error::SelectError;

pub const DEFAULT_PROMPT: &str = "Select:";
pub const DEFAULT_HINT: &str = "↑/↓ to move, Enter to select, q to cancel";

/// Everything one interactive session needs, apart from the terminal handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectRequest {
    pub items: Vec<String>,
    pub default_index: usize,
    pub prompt: String,
    pub hint: String,
}

impl SelectRequest {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            default_index: 0,
            prompt: String::new(),
            hint: String::new(),
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    /// Preselect the first item equal to `label`. Leaves the default untouched when absent.
    pub fn default_label(mut self, label: &str) -> Self {
        if let Some(index) = self.items.iter().position(|item| item == label) {
            self.default_index = index;
        }
        self
    }
}

/// Outcome of a session that ended without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected { index: usize, label: String },
    Canceled,
}

impl Selection {
    pub fn label(&self) -> Option<&str> {
        match self {
            Selection::Selected { label, .. } => Some(label),
            Selection::Canceled => None,
        }
    }
}

/// Live session state: the resolved request plus the current index.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<String>,
    prompt: String,
    hint: String,
    selected: usize,
}

impl Menu {
    /// Validate a request and resolve its defaults.
    ///
    /// Fails with [`SelectError::NoItems`] for an empty item list.
    pub fn from_request(request: SelectRequest) -> Result<Self, SelectError> {
        let SelectRequest {
            items,
            default_index,
            prompt,
            hint,
        } = request;

        if items.is_empty() {
            return Err(SelectError::NoItems);
        }

        let selected = if default_index < items.len() {
            default_index
        } else {
            0
        };

        Ok(Self {
            items,
            prompt: non_empty_or(prompt, DEFAULT_PROMPT),
            hint: non_empty_or(hint, DEFAULT_HINT),
            selected,
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.items[self.selected]
    }

    /// Returns `true` if the selection moved, `false` if already at the top.
    pub fn move_up(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }

    /// Returns `true` if the selection moved, `false` if already at the bottom.
    pub fn move_down(&mut self) -> bool {
        if self.selected + 1 >= self.items.len() {
            return false;
        }
        self.selected += 1;
        true
    }

    pub fn into_selection(self) -> Selection {
        let index = self.selected;
        let label = self.items.into_iter().nth(index).unwrap_or_default();
        Selection::Selected { index, label }
    }
}

fn non_empty_or(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(items: &[&str], default_index: usize) -> Menu {
        Menu::from_request(SelectRequest::new(items.iter().copied()).default_index(default_index))
            .unwrap()
    }

    #[test]
    fn test_empty_items_rejected() {
        let result = Menu::from_request(SelectRequest::new(Vec::<String>::new()));
        assert!(matches!(result, Err(SelectError::NoItems)));
    }

    #[test]
    fn test_default_in_range_is_kept() {
        for d in 0..3 {
            assert_eq!(menu(&["a", "b", "c"], d).selected(), d);
        }
    }

    #[test]
    fn test_default_out_of_range_clamps_to_zero() {
        assert_eq!(menu(&["a", "b", "c"], 3).selected(), 0);
        assert_eq!(menu(&["a", "b", "c"], usize::MAX).selected(), 0);
    }

    #[test]
    fn test_empty_prompt_and_hint_fall_back() {
        let m = menu(&["a"], 0);
        assert_eq!(m.prompt(), DEFAULT_PROMPT);
        assert_eq!(m.hint(), DEFAULT_HINT);
    }

    #[test]
    fn test_custom_prompt_and_hint_kept() {
        let m = Menu::from_request(
            SelectRequest::new(["a"])
                .prompt("Select profile:")
                .hint("pick one"),
        )
        .unwrap();
        assert_eq!(m.prompt(), "Select profile:");
        assert_eq!(m.hint(), "pick one");
    }

    #[test]
    fn test_move_up_clamps_at_top() {
        let mut m = menu(&["a", "b"], 0);
        assert!(!m.move_up());
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_move_down_clamps_at_bottom() {
        let mut m = menu(&["a", "b"], 1);
        assert!(!m.move_down());
        assert_eq!(m.selected(), 1);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut m = menu(&["only"], 0);
        assert!(!m.move_up());
        assert!(!m.move_down());
        assert_eq!(m.selected_label(), "only");
    }

    #[test]
    fn test_default_label_picks_first_match() {
        let req = SelectRequest::new(["x", "dup", "dup"]).default_label("dup");
        assert_eq!(req.default_index, 1);
    }

    #[test]
    fn test_default_label_missing_keeps_index() {
        let req = SelectRequest::new(["x", "y"])
            .default_index(1)
            .default_label("nope");
        assert_eq!(req.default_index, 1);
    }

    #[test]
    fn test_duplicates_are_distinct_positions() {
        let mut m = menu(&["same", "same"], 0);
        assert!(m.move_down());
        assert_eq!(
            m.into_selection(),
            Selection::Selected {
                index: 1,
                label: "same".to_string()
            }
        );
    }
}

//! Focus and emptiness of the search field

/// Focus and emptiness flags owned by a mounted `SearchBar`
///
/// Only the search bar's focus, blur and change-text hooks write to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub(crate) has_focus: bool,
    pub(crate) is_empty: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            has_focus: false,
            is_empty: true,
        }
    }
}

impl FieldState {
    /// Unfocused state for a field holding `initial_text`
    pub(crate) fn new(initial_text: &str) -> Self {
        Self {
            has_focus: false,
            is_empty: initial_text.is_empty(),
        }
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }
}

//! Default key bindings for the search bar

use tui_searchbar_core::{BindingContext, Command, Keybindings};

/// Bindings are looked up by whether the bar has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusContext {
    Focused,
    Unfocused,
}

impl BindingContext for FocusContext {
    fn name(&self) -> &'static str {
        match self {
            FocusContext::Focused => "focused",
            FocusContext::Unfocused => "unfocused",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "focused" => Some(FocusContext::Focused),
            "unfocused" => Some(FocusContext::Unfocused),
            _ => None,
        }
    }
}

/// Imperative operations reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCommand {
    Focus,
    Blur,
    Clear,
    Cancel,
}

impl Command for SearchCommand {
    fn name(&self) -> &'static str {
        match self {
            SearchCommand::Focus => "focus",
            SearchCommand::Blur => "blur",
            SearchCommand::Clear => "clear",
            SearchCommand::Cancel => "cancel",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "focus" => Some(SearchCommand::Focus),
            "blur" => Some(SearchCommand::Blur),
            "clear" => Some(SearchCommand::Clear),
            "cancel" => Some(SearchCommand::Cancel),
            _ => None,
        }
    }
}

pub type SearchKeybindings = Keybindings<FocusContext, SearchCommand>;

/// `/` focuses; while focused `esc` cancels and `ctrl+u` clears
pub fn default_keybindings() -> SearchKeybindings {
    let mut bindings = Keybindings::new();
    bindings.add(
        FocusContext::Unfocused,
        SearchCommand::Focus,
        vec!["/".to_string()],
    );
    bindings.add(
        FocusContext::Focused,
        SearchCommand::Cancel,
        vec!["esc".to_string()],
    );
    bindings.add(
        FocusContext::Focused,
        SearchCommand::Clear,
        vec!["ctrl+u".to_string()],
    );
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_searchbar_core::testing::key;

    #[test]
    fn test_defaults() {
        let bindings = default_keybindings();
        assert_eq!(
            bindings.command_for(&key("/"), FocusContext::Unfocused),
            Some(SearchCommand::Focus)
        );
        assert_eq!(bindings.command_for(&key("/"), FocusContext::Focused), None);
        assert_eq!(
            bindings.command_for(&key("esc"), FocusContext::Focused),
            Some(SearchCommand::Cancel)
        );
        assert_eq!(
            bindings.command_for(&key("ctrl+u"), FocusContext::Focused),
            Some(SearchCommand::Clear)
        );
    }

    #[test]
    fn test_user_bindings_merge_over_defaults() {
        let user: SearchKeybindings =
            serde_json::from_str(r#"{ "focused": { "cancel": ["ctrl+c"], "blur": ["tab"] } }"#)
                .unwrap();
        let merged = Keybindings::merge(default_keybindings(), user);

        assert_eq!(merged.command_for(&key("esc"), FocusContext::Focused), None);
        assert_eq!(
            merged.command_for(&key("ctrl+c"), FocusContext::Focused),
            Some(SearchCommand::Cancel)
        );
        assert_eq!(
            merged.command_for(&key("tab"), FocusContext::Focused),
            Some(SearchCommand::Blur)
        );
        assert_eq!(
            merged.command_for(&key("ctrl+u"), FocusContext::Focused),
            Some(SearchCommand::Clear)
        );
    }
}

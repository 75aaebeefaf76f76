//! Search bar components for ratatui
//!
//! Components implement the `Component<A>` trait and emit actions via callback
//! functions passed through Props.
//!
//! # Components
//!
//! - [`SearchBar`] - Themeable search field with clear, cancel and loading affordances
//! - [`TextInput`] - Single-line text input primitive the search bar drives
//!
//! # Example
//!
//! ```ignore
//! use tui_searchbar_components::{SearchBar, SearchBarConfig, SearchBarProps};
//!
//! let config = SearchBarConfig::from_json(r#"{ "round": true, "placeholder": "Find" }"#)?;
//! let mut search = SearchBar::new();
//!
//! // In your render function:
//! search.render(frame, area, SearchBarProps::new(&config).on_change_text(Action::Query));
//!
//! // From your own key handler:
//! let actions = search.clear(SearchBarProps::new(&config).on_clear(|| Action::Reset))?;
//! ```

pub mod adornment;
pub mod colors;
mod config;
mod error;
mod field_state;
pub mod icon;
mod keymap;
pub mod loading;
mod search_bar;
mod text_input;

pub use adornment::{compose_trailing, Adornment, LOADING_CLEAR_GAP};
pub use config::{InputOverrides, SearchBarConfig, SearchBarOverrides};
pub use error::{Result, SearchBarError};
pub use field_state::FieldState;
pub use icon::{
    default_clear_icon, default_search_icon, resolve_icon, IconDescriptor, IconFamily,
    IconSource, PartialIcon, ResolvedIcon,
};
pub use keymap::{default_keybindings, FocusContext, SearchCommand, SearchKeybindings};
pub use loading::{LoadingIndicator, LoadingProps, LoadingStyle};
pub use search_bar::{SearchBar, SearchBarProps};
pub use text_input::{InputEvent, TextInput, TextInputOptions, TextInputProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        IconFamily, IconSource, LoadingProps, SearchBar, SearchBarConfig, SearchBarError,
        SearchBarOverrides, SearchBarProps, TextInputOptions,
    };
}

//! tui-searchbar: a themeable search bar for ratatui apps
//!
//! Components are driven by props and return actions; the search bar keeps
//! only its own focus/emptiness state and the text input it mounts.
//!
//! # Example
//! ```ignore
//! use tui_searchbar::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum Action {
//!     Query(String),
//!     Reset,
//! }
//!
//! let config = SearchBarConfig::default();
//! let mut search = SearchBar::new();
//!
//! let props = SearchBarProps::new(&config)
//!     .on_change_text(Action::Query)
//!     .on_clear(|| Action::Reset);
//!
//! terminal.draw(|frame| search.render(frame, frame.area(), props))?;
//! for action in search.handle_event(&EventKind::Key(key), props) {
//!     // dispatch
//! }
//! ```

// Re-export everything from core
pub use tui_searchbar_core::*;

// Re-export the components
pub use tui_searchbar_components::*;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use tui_searchbar_core::{BindingContext, Command, Component, Mount};

    // Events and keybindings
    pub use tui_searchbar_core::{parse_key_string, EventKind, Keybindings};

    // Search bar
    pub use tui_searchbar_components::prelude::*;
    pub use tui_searchbar_components::{FieldState, FocusContext, SearchCommand};

    // Ratatui re-exports
    pub use tui_searchbar_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}

//! Core traits and types for tui-searchbar
//!
//! This crate provides the foundations the search bar components are built on:
//!
//! - **Component**: Pure UI elements that render from props and turn events into actions
//! - **Mount**: Lifecycle for components that hold a native primitive
//! - **EventKind**: The raw events components receive
//! - **Keybindings**: Context-aware key mapping onto typed commands
//! - **testing**: Key/click helpers, a render harness and action assertions
//!
//! # Basic Example
//!
//! ```ignore
//! use tui_searchbar_core::prelude::*;
//!
//! fn on_event(bar: &mut SearchBar, event: crossterm::event::Event, config: &SearchBarConfig) -> Vec<Action> {
//!     let Some(kind) = EventKind::from_crossterm(event) else {
//!         return Vec::new();
//!     };
//!     let props = SearchBarProps::new(config).on_change_text(Action::Query);
//!     bar.handle_event(&kind, props).into_iter().collect()
//! }
//! ```

pub mod component;
pub mod event;
pub mod keybindings;
pub mod testing;

pub use component::{Component, Mount};
pub use event::EventKind;
pub use keybindings::{parse_key_string, BindingContext, Command, Keybindings};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

pub use testing::{
    buffer_rect_to_string_plain, buffer_to_string_plain, char_key, click, ctrl_key, key,
    type_text, RenderHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::component::{Component, Mount};
    pub use crate::event::EventKind;
    pub use crate::keybindings::{parse_key_string, BindingContext, Command, Keybindings};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}

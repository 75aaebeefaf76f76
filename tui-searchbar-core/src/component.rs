//! Component and lifecycle traits for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders based on props and emits actions
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data needed for rendering, including the
///    callbacks used to build actions
/// 2. `handle_event` returns actions instead of calling back into the app
/// 3. `render` is a function of props plus internal UI state (cursor, focus)
///
/// A "callback" in this crate is a `fn(..) -> A` carried in props. Invoking it
/// means pushing its action onto the returned list, so the order of the
/// returned actions is the order in which callbacks fired.
///
/// # Example
///
/// ```ignore
/// use tui_searchbar::prelude::*;
///
/// let config = SearchBarConfig::default();
/// let props = SearchBarProps::new(&config).on_change_text(Action::Query);
///
/// let actions: Vec<Action> = search_bar
///     .handle_event(&EventKind::Key(key("a")), props)
///     .into_iter()
///     .collect();
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `vec![...]` - multiple actions, in callback order
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

/// Mount/unmount lifecycle for components that own a native primitive
///
/// Between `mount` and `unmount` the component holds its primitive and
/// imperative operations are valid. Outside that window they are usage errors.
pub trait Mount {
    /// Configuration read when the primitive is attached
    type Config;

    /// Attach the primitive. Mounting an already mounted component is a no-op.
    fn mount(&mut self, config: &Self::Config);

    /// Detach the primitive and drop any component-local state
    fn unmount(&mut self);

    /// Whether the primitive is currently attached
    fn is_mounted(&self) -> bool;
}

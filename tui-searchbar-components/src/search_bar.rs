//! Themeable search bar with clear, cancel and loading affordances

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use tui_searchbar_core::{Component, EventKind, Mount};

use crate::adornment::{adornments_width, compose_trailing, Adornment};
use crate::colors;
use crate::config::SearchBarConfig;
use crate::error::{Result, SearchBarError};
use crate::field_state::FieldState;
use crate::icon::{default_search_icon, resolve_icon};
use crate::keymap::{FocusContext, SearchCommand};
use crate::text_input::{InputEvent, TextInput, TextInputProps};

/// Props for SearchBar
///
/// Every callback is optional; a missing one simply emits nothing.
pub struct SearchBarProps<'a, A> {
    pub config: &'a SearchBarConfig,
    /// Called with the new text after every edit, including `clear`
    pub on_change_text: Option<fn(String) -> A>,
    pub on_focus: Option<fn() -> A>,
    pub on_blur: Option<fn() -> A>,
    /// Called after the text has been cleared and `on_change_text("")` fired
    pub on_clear: Option<fn() -> A>,
    /// Called after the bar has been blurred by `cancel`
    pub on_cancel: Option<fn() -> A>,
    /// Called with the current text on Enter
    pub on_submit: Option<fn(String) -> A>,
}

impl<A> Clone for SearchBarProps<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for SearchBarProps<'_, A> {}

impl<'a, A> SearchBarProps<'a, A> {
    /// Props with no callbacks
    pub fn new(config: &'a SearchBarConfig) -> Self {
        Self {
            config,
            on_change_text: None,
            on_focus: None,
            on_blur: None,
            on_clear: None,
            on_cancel: None,
            on_submit: None,
        }
    }

    pub fn on_change_text(mut self, f: fn(String) -> A) -> Self {
        self.on_change_text = Some(f);
        self
    }

    pub fn on_focus(mut self, f: fn() -> A) -> Self {
        self.on_focus = Some(f);
        self
    }

    pub fn on_blur(mut self, f: fn() -> A) -> Self {
        self.on_blur = Some(f);
        self
    }

    pub fn on_clear(mut self, f: fn() -> A) -> Self {
        self.on_clear = Some(f);
        self
    }

    pub fn on_cancel(mut self, f: fn() -> A) -> Self {
        self.on_cancel = Some(f);
        self
    }

    pub fn on_submit(mut self, f: fn(String) -> A) -> Self {
        self.on_submit = Some(f);
        self
    }
}

/// Screen regions from the last render, for mouse hit-testing
#[derive(Debug, Clone, Copy)]
struct HitAreas {
    bar: Rect,
    clear: Option<Rect>,
}

/// A search field with a leading search icon and trailing loading/clear adornments
///
/// Rendering mounts the input primitive on first use. Imperative operations
/// (`focus`, `blur`, `clear`, `cancel`) return `SearchBarError::NotMounted`
/// outside the mount window.
#[derive(Debug, Default)]
pub struct SearchBar {
    input: Option<TextInput>,
    state: FieldState,
    /// Spinner frame index, advanced on tick
    spinner_phase: usize,
    hit_areas: Option<HitAreas>,
}

impl SearchBar {
    /// Create an unmounted SearchBar
    pub fn new() -> Self {
        Self::default()
    }

    /// Current focus/emptiness flags
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Text held by the input primitive, if mounted
    pub fn value(&self) -> Option<&str> {
        self.input.as_ref().map(TextInput::value)
    }

    /// Focus event hook: notify, then mark focused
    pub fn on_focus<A>(&mut self, props: SearchBarProps<'_, A>) -> Vec<A> {
        let actions = props.on_focus.map(|f| f()).into_iter().collect();
        self.state.has_focus = true;
        tracing::debug!("search bar focused");
        actions
    }

    /// Blur event hook: notify, then mark unfocused
    pub fn on_blur<A>(&mut self, props: SearchBarProps<'_, A>) -> Vec<A> {
        let actions = props.on_blur.map(|f| f()).into_iter().collect();
        self.state.has_focus = false;
        tracing::debug!("search bar blurred");
        actions
    }

    /// Text-change event hook: notify with `text`, then track emptiness
    pub fn on_change_text<A>(&mut self, text: String, props: SearchBarProps<'_, A>) -> Vec<A> {
        let is_empty = text.is_empty();
        let actions = props.on_change_text.map(|f| f(text)).into_iter().collect();
        self.state.is_empty = is_empty;
        actions
    }

    /// Focus the input primitive
    pub fn focus<A>(&mut self, props: SearchBarProps<'_, A>) -> Result<Vec<A>> {
        let event = self.input_mut("focus")?.focus();
        Ok(self.route_all(event, props))
    }

    /// Blur the input primitive
    pub fn blur<A>(&mut self, props: SearchBarProps<'_, A>) -> Result<Vec<A>> {
        let event = self.input_mut("blur")?.blur();
        Ok(self.route_all(event, props))
    }

    /// Erase the text: primitive first, then `on_change_text("")`, then `on_clear`
    pub fn clear<A>(&mut self, props: SearchBarProps<'_, A>) -> Result<Vec<A>> {
        self.input_mut("clear")?.clear();
        let mut actions = self.on_change_text(String::new(), props);
        actions.extend(props.on_clear.map(|f| f()));
        tracing::debug!("search bar cleared");
        Ok(actions)
    }

    /// Blur, then `on_cancel`. The text is left alone.
    pub fn cancel<A>(&mut self, props: SearchBarProps<'_, A>) -> Result<Vec<A>> {
        self.input_mut("cancel")?;
        let mut actions = self.blur(props)?;
        actions.extend(props.on_cancel.map(|f| f()));
        tracing::debug!("search bar cancelled");
        Ok(actions)
    }

    fn input_mut(&mut self, operation: &'static str) -> Result<&mut TextInput> {
        self.input.as_mut().ok_or_else(|| {
            tracing::warn!(operation, "search bar operation before mount");
            SearchBarError::NotMounted { operation }
        })
    }

    fn route<A>(&mut self, event: InputEvent, props: SearchBarProps<'_, A>) -> Vec<A> {
        match event {
            InputEvent::Focus => self.on_focus(props),
            InputEvent::Blur => self.on_blur(props),
            InputEvent::ChangeText(text) => self.on_change_text(text, props),
            InputEvent::Submit(text) => props.on_submit.map(|f| f(text)).into_iter().collect(),
        }
    }

    fn route_all<A>(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        props: SearchBarProps<'_, A>,
    ) -> Vec<A> {
        let mut actions = Vec::new();
        for event in events {
            actions.extend(self.route(event, props));
        }
        actions
    }

    fn run_command<A>(&mut self, command: SearchCommand, props: SearchBarProps<'_, A>) -> Vec<A> {
        let result = match command {
            SearchCommand::Focus => self.focus(props),
            SearchCommand::Blur => self.blur(props),
            SearchCommand::Clear => self.clear(props),
            SearchCommand::Cancel => self.cancel(props),
        };
        result.unwrap_or_else(|err| {
            tracing::warn!(%err, ?command, "search command failed");
            Vec::new()
        })
    }

    fn command_for_click(&self, event: &EventKind, focused: bool) -> Option<SearchCommand> {
        let position = event.left_click()?;
        let areas = self.hit_areas?;
        if areas.clear.is_some_and(|rect| rect.contains(position)) {
            Some(SearchCommand::Clear)
        } else if areas.bar.contains(position) {
            Some(SearchCommand::Focus)
        } else if focused {
            Some(SearchCommand::Blur)
        } else {
            None
        }
    }
}

impl Mount for SearchBar {
    type Config = SearchBarConfig;

    fn mount(&mut self, config: &SearchBarConfig) {
        if self.input.is_some() {
            return;
        }
        self.input = Some(TextInput::new(&config.input));
        self.state = FieldState::new(&config.input.default_value);
        tracing::debug!(is_empty = self.state.is_empty, "search bar mounted");
    }

    fn unmount(&mut self) {
        self.input = None;
        self.state = FieldState::default();
        self.spinner_phase = 0;
        self.hit_areas = None;
        tracing::debug!("search bar unmounted");
    }

    fn is_mounted(&self) -> bool {
        self.input.is_some()
    }
}

/// Styles derived from the theme flags and caller overrides
struct Theme {
    container: Style,
    border: Style,
    input_container: Style,
}

impl Theme {
    fn new(config: &SearchBarConfig) -> Self {
        let mut container = Style::default()
            .bg(colors::GREY0)
            .patch(config.container_style);
        let mut border = Style::default().fg(colors::BORDER_DARK);
        let mut input_container = Style::default()
            .bg(colors::SEARCH_BG)
            .patch(config.input_container_style);

        if config.light_theme {
            container = container.bg(colors::GREY5);
            border = border.fg(colors::BORDER_LIGHT);
            input_container = input_container.bg(colors::GREY4);
        }

        Self {
            container,
            border,
            input_container,
        }
    }
}

impl<A> Component<A> for SearchBar {
    type Props<'a> = SearchBarProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let Some(input) = self.input.as_ref() else {
            tracing::debug!("ignoring event, search bar not mounted");
            return Vec::new();
        };
        let focused = input.is_focused();
        let config = props.config;

        match event {
            EventKind::Key(key) => {
                let context = if focused {
                    FocusContext::Focused
                } else {
                    FocusContext::Unfocused
                };
                if let Some(command) = config.keybindings.command_for(key, context) {
                    return self.run_command(command, props);
                }
                if !focused {
                    return Vec::new();
                }

                let input_props = TextInputProps {
                    options: &config.input,
                    style: Style::default(),
                    placeholder_color: config.placeholder_text_color,
                };
                let events: Vec<InputEvent> = match self.input.as_mut() {
                    Some(input) => input.handle_event(event, input_props).into_iter().collect(),
                    None => Vec::new(),
                };
                self.route_all(events, props)
            }
            EventKind::Mouse(_) => match self.command_for_click(event, focused) {
                Some(command) => self.run_command(command, props),
                None => Vec::new(),
            },
            EventKind::Tick => {
                if config.show_loading && config.loading_props.animating {
                    self.spinner_phase = self.spinner_phase.wrapping_add(1);
                }
                Vec::new()
            }
            EventKind::Resize(_, _) => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let config = props.config;
        self.mount(config);
        self.hit_areas = None;

        let theme = Theme::new(config);

        let mut block = Block::default()
            .style(theme.container)
            .padding(Padding::horizontal(1));
        if area.height >= 3 {
            block = block
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(theme.border);
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let row = Rect { height: 1, ..inner };

        // Rounded caps take one cell on each side
        let cap = if config.round && row.width > 2 { 1 } else { 0 };
        let field = Rect {
            x: row.x + cap,
            width: row.width - 2 * cap,
            ..row
        };
        frame.render_widget(Block::default().style(theme.input_container), field);

        if cap > 0 {
            let cap_style = Style::default()
                .fg(theme.input_container.bg.unwrap_or(Color::Reset))
                .bg(theme.container.bg.unwrap_or(Color::Reset));
            frame.render_widget(
                Paragraph::new("◖").style(cap_style),
                Rect { width: 1, ..row },
            );
            frame.render_widget(
                Paragraph::new("◗").style(cap_style),
                Rect {
                    x: field.right(),
                    width: 1,
                    ..row
                },
            );
        }

        let search_icon = resolve_icon(config.search_icon.as_ref(), &default_search_icon());
        let adornments = compose_trailing(
            config.show_loading,
            &config.loading_props,
            config.clear_icon.as_ref(),
            self.state.is_empty,
        );

        // [margin icon gap] [input ...] [adornments margin]
        let left = Rect {
            width: search_icon.width().saturating_add(2).min(field.width),
            ..field
        };
        let right_width = adornments_width(&adornments)
            .saturating_add(1)
            .min(field.width - left.width);
        let right = Rect {
            x: field.right() - right_width,
            width: right_width,
            ..field
        };
        let input_area = Rect {
            x: left.right(),
            width: right.x - left.right(),
            ..field
        };

        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::raw(" "), search_icon.to_span()]))
                .style(theme.input_container.patch(config.left_icon_container_style)),
            left,
        );

        let mut clear_area = None;
        let mut spans = Vec::new();
        let mut x = right.x;
        for adornment in &adornments {
            if let Adornment::Clear(icon) = adornment {
                clear_area = Some(Rect {
                    x,
                    width: icon.width(),
                    ..right
                })
                .filter(|rect| rect.right() <= right.right());
            }
            x = x.saturating_add(adornment.width());
            spans.extend(adornment.spans(self.spinner_phase));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .style(theme.input_container.patch(config.right_icon_container_style)),
            right,
        );

        if let Some(input) = self.input.as_mut() {
            let input_props = TextInputProps {
                options: &config.input,
                style: theme
                    .input_container
                    .fg(colors::GREY3)
                    .patch(config.input_style),
                placeholder_color: config.placeholder_text_color,
            };
            input.render(frame, input_area, input_props);
        }

        self.hit_areas = Some(HitAreas {
            bar: area,
            clear: clear_area,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconSource;
    use crate::text_input::TextInputOptions;
    use tui_searchbar_core::testing::{click, key, type_text, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
        Focus,
        Blur,
        Clear,
        Cancel,
        Submit(String),
    }

    fn props(config: &SearchBarConfig) -> SearchBarProps<'_, TestAction> {
        SearchBarProps::new(config)
            .on_change_text(TestAction::Change)
            .on_focus(|| TestAction::Focus)
            .on_blur(|| TestAction::Blur)
            .on_clear(|| TestAction::Clear)
            .on_cancel(|| TestAction::Cancel)
            .on_submit(TestAction::Submit)
    }

    fn mounted(config: &SearchBarConfig) -> SearchBar {
        let mut bar = SearchBar::new();
        bar.mount(config);
        bar
    }

    fn send(bar: &mut SearchBar, config: &SearchBarConfig, event: EventKind) -> Vec<TestAction> {
        bar.handle_event(&event, props(config)).into_iter().collect()
    }

    #[test]
    fn test_starts_unfocused_and_empty() {
        let config = SearchBarConfig::default();
        let bar = mounted(&config);
        assert!(!bar.state().has_focus());
        assert!(bar.state().is_empty());
    }

    #[test]
    fn test_prefilled_value_is_not_empty() {
        let mut config = SearchBarConfig::default();
        config.input.default_value = "rust".into();
        let bar = mounted(&config);
        assert!(!bar.state().is_empty());
        assert_eq!(bar.value(), Some("rust"));
    }

    #[test]
    fn test_focus_hook_notifies_then_sets() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);
        assert_eq!(bar.on_focus(props(&config)), vec![TestAction::Focus]);
        assert!(bar.state().has_focus());
        assert_eq!(bar.on_blur(props(&config)), vec![TestAction::Blur]);
        assert!(!bar.state().has_focus());
    }

    #[test]
    fn test_hooks_without_callbacks_emit_nothing() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);
        let bare: SearchBarProps<'_, TestAction> = SearchBarProps::new(&config);
        assert!(bar.on_change_text("x".into(), bare).is_empty());
        assert!(!bar.state().is_empty());
        assert!(bar.clear(bare).unwrap().is_empty());
        assert!(bar.state().is_empty());
    }

    #[test]
    fn test_focus_is_idempotent() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);
        assert_eq!(bar.focus(props(&config)).unwrap(), vec![TestAction::Focus]);
        assert!(bar.focus(props(&config)).unwrap().is_empty());
        assert!(bar.state().has_focus());
    }

    #[test]
    fn test_clear_order() {
        let mut config = SearchBarConfig::default();
        config.input.default_value = "query".into();
        let mut bar = mounted(&config);

        let actions = bar.clear(props(&config)).unwrap();

        assert_eq!(
            actions,
            vec![TestAction::Change(String::new()), TestAction::Clear]
        );
        assert_eq!(bar.value(), Some(""));
        assert!(bar.state().is_empty());
    }

    #[test]
    fn test_cancel_blurs_then_notifies_and_keeps_text() {
        let mut config = SearchBarConfig::default();
        config.input.default_value = "query".into();
        let mut bar = mounted(&config);
        bar.focus(props(&config)).unwrap();

        let actions = bar.cancel(props(&config)).unwrap();

        assert_eq!(actions, vec![TestAction::Blur, TestAction::Cancel]);
        assert!(!bar.state().has_focus());
        assert_eq!(bar.value(), Some("query"));
        assert!(!bar.state().is_empty());
    }

    #[test]
    fn test_operations_before_mount_fail() {
        let config = SearchBarConfig::default();
        let mut bar = SearchBar::new();

        for result in [
            bar.focus(props(&config)),
            bar.blur(props(&config)),
            bar.clear(props(&config)),
            bar.cancel(props(&config)),
        ] {
            assert!(matches!(result, Err(SearchBarError::NotMounted { .. })));
        }
    }

    #[test]
    fn test_not_mounted_names_operation() {
        let config = SearchBarConfig::default();
        let mut bar = SearchBar::new();
        let err = bar.cancel(props(&config)).unwrap_err();
        assert_eq!(err.to_string(), "cannot cancel: search bar is not mounted");
    }

    #[test]
    fn test_unmount_resets() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);
        bar.focus(props(&config)).unwrap();
        bar.unmount();

        assert!(!bar.is_mounted());
        assert_eq!(bar.state(), FieldState::default());
        assert!(bar.focus(props(&config)).is_err());
    }

    #[test]
    fn test_typing_tracks_emptiness() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);
        bar.focus(props(&config)).unwrap();

        assert_eq!(
            send(&mut bar, &config, EventKind::Key(key("a"))),
            vec![TestAction::Change("a".into())]
        );
        assert!(!bar.state().is_empty());

        assert_eq!(
            send(&mut bar, &config, EventKind::Key(key("backspace"))),
            vec![TestAction::Change(String::new())]
        );
        assert!(bar.state().is_empty());
    }

    #[test]
    fn test_keys_ignored_while_unfocused() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);
        assert!(send(&mut bar, &config, EventKind::Key(key("a"))).is_empty());
        assert_eq!(bar.value(), Some(""));
    }

    #[test]
    fn test_slash_focuses_and_escape_cancels() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);

        assert_eq!(
            send(&mut bar, &config, EventKind::Key(key("/"))),
            vec![TestAction::Focus]
        );
        // Focused: "/" is ordinary text
        assert_eq!(
            send(&mut bar, &config, EventKind::Key(key("/"))),
            vec![TestAction::Change("/".into())]
        );
        assert_eq!(
            send(&mut bar, &config, EventKind::Key(key("esc"))),
            vec![TestAction::Blur, TestAction::Cancel]
        );
    }

    #[test]
    fn test_ctrl_u_runs_full_clear() {
        let config = SearchBarConfig::default();
        let mut bar = mounted(&config);
        bar.focus(props(&config)).unwrap();
        for event in type_text("hi") {
            send(&mut bar, &config, event);
        }

        assert_eq!(
            send(&mut bar, &config, EventKind::Key(key("ctrl+u"))),
            vec![TestAction::Change(String::new()), TestAction::Clear]
        );
    }

    #[test]
    fn test_enter_submits() {
        let mut config = SearchBarConfig::default();
        config.input.default_value = "needle".into();
        let mut bar = mounted(&config);
        bar.focus(props(&config)).unwrap();

        assert_eq!(
            send(&mut bar, &config, EventKind::Key(key("enter"))),
            vec![TestAction::Submit("needle".into())]
        );
    }

    #[test]
    fn test_events_before_mount_are_ignored() {
        let config = SearchBarConfig::default();
        let mut bar = SearchBar::new();
        assert!(send(&mut bar, &config, EventKind::Key(key("/"))).is_empty());
    }

    #[test]
    fn test_render_mounts_and_shows_placeholder() {
        let config = SearchBarConfig::default();
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(30, 3);

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(&config));
        });

        assert!(bar.is_mounted());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "  ⌕ Search");
    }

    #[test]
    fn test_render_shows_clear_icon_when_not_empty() {
        let mut config = SearchBarConfig::default();
        config.input.default_value = "abc".into();
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(30, 3);

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(&config));
        });

        let row = output.lines().nth(1).unwrap();
        assert!(row.contains("abc"));
        assert!(row.ends_with('✕'));
    }

    #[test]
    fn test_render_spinner_and_clear() {
        let mut config = SearchBarConfig::default();
        config.show_loading = true;
        config.clear_icon = Some(IconSource::named("close"));
        config.input.default_value = "abc".into();
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(30, 3);

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(&config));
        });
        assert!(output.lines().nth(1).unwrap().ends_with("◐ ✕"));

        send(&mut bar, &config, EventKind::Tick);
        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(&config));
        });
        assert!(output.lines().nth(1).unwrap().ends_with("◓ ✕"));
    }

    #[test]
    fn test_click_on_clear_icon_clears() {
        let mut config = SearchBarConfig::default();
        config.input.default_value = "abc".into();
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(30, 3);
        render.render(|frame| bar.render(frame, frame.area(), props(&config)));

        // Inner row spans x = 1..29; the trailing margin is x = 28
        let actions = send(&mut bar, &config, click(27, 1));

        assert_eq!(
            actions,
            vec![TestAction::Change(String::new()), TestAction::Clear]
        );
        assert_eq!(bar.value(), Some(""));
    }

    #[test]
    fn test_click_on_multi_cell_element_clear_icon() {
        let mut config = SearchBarConfig::default();
        config.input.default_value = "abc".into();
        config.clear_icon = Some(IconSource::element("[x]"));
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(30, 3);

        let buffer = render.render(|frame| {
            bar.render(frame, frame.area(), props(&config));
        });
        // Element spans x = 25..28, followed by the trailing margin at x = 28
        assert_eq!(buffer[(25, 1)].symbol(), "[");
        assert_eq!(buffer[(26, 1)].symbol(), "x");
        assert_eq!(buffer[(27, 1)].symbol(), "]");
        assert_eq!(buffer[(28, 1)].symbol(), " ");

        assert_eq!(
            send(&mut bar, &config, click(28, 1)),
            vec![TestAction::Focus]
        );
        assert_eq!(
            send(&mut bar, &config, click(27, 1)),
            vec![TestAction::Change(String::new()), TestAction::Clear]
        );
        assert_eq!(bar.value(), Some(""));

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(&config));
        });
        assert!(!output.contains("[x]"));
    }

    #[test]
    fn test_click_focuses_and_click_outside_blurs() {
        let config = SearchBarConfig::default();
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(30, 5);
        render.render(|frame| {
            bar.render(frame, Rect::new(0, 0, 30, 3), props(&config));
        });

        assert_eq!(
            send(&mut bar, &config, click(10, 1)),
            vec![TestAction::Focus]
        );
        assert_eq!(
            send(&mut bar, &config, click(10, 4)),
            vec![TestAction::Blur]
        );
        assert!(send(&mut bar, &config, click(10, 4)).is_empty());
    }

    #[test]
    fn test_round_draws_caps() {
        let mut config = SearchBarConfig::default();
        config.round = true;
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(20, 3);

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(&config));
        });

        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with(" ◖"));
        assert!(row.ends_with('◗'));
    }

    #[test]
    fn test_light_theme_overrides_container_style() {
        let mut config = SearchBarConfig::default();
        config.light_theme = true;
        config.container_style = Style::default().bg(Color::Red);
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(20, 3);

        let buffer = render.render(|frame| bar.render(frame, frame.area(), props(&config)));

        assert_eq!(buffer[(0, 1)].bg, colors::GREY5);
        assert_eq!(buffer[(5, 1)].bg, colors::GREY4);
        assert_eq!(buffer[(0, 0)].fg, colors::BORDER_LIGHT);
    }

    #[test]
    fn test_caller_container_style_applies_in_dark_theme() {
        let mut config = SearchBarConfig::default();
        config.container_style = Style::default().bg(Color::Red);
        let mut bar = SearchBar::new();
        let mut render = RenderHarness::new(20, 3);

        let buffer = render.render(|frame| bar.render(frame, frame.area(), props(&config)));

        assert_eq!(buffer[(0, 1)].bg, Color::Red);
    }

    #[test]
    fn test_focused_render_places_cursor() {
        let mut config = SearchBarConfig::default();
        config.input = TextInputOptions {
            default_value: "ab".into(),
            ..TextInputOptions::default()
        };
        let mut bar = mounted(&config);
        bar.focus(props(&config)).unwrap();
        let mut render = RenderHarness::new(30, 3);

        render.render(|frame| bar.render(frame, frame.area(), props(&config)));

        // padding(1) + margin(1) + icon(1) + gap(1) = input starts at x = 4
        assert_eq!(render.cursor_position(), (6, 1));
    }
}

//! Single-line text input primitive
//!
//! Owns its text, cursor and native focus. The search bar drives it through
//! `focus`/`blur`/`clear` and receives [`InputEvent`]s back.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tui_searchbar_core::{Component, EventKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Events raised by the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Focus,
    Blur,
    ChangeText(String),
    Submit(String),
}

/// Options forwarded untouched from the search bar configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextInputOptions {
    /// Placeholder text when empty
    pub placeholder: String,
    /// Text present when the input is mounted
    pub default_value: String,
    /// Whether typing changes the value
    pub editable: bool,
    /// Maximum length in characters
    pub max_length: Option<usize>,
    /// Options this input has no built-in handling for, kept as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TextInputOptions {
    fn default() -> Self {
        Self {
            placeholder: "Search".to_string(),
            default_value: String::new(),
            editable: true,
            max_length: None,
            extra: Map::new(),
        }
    }
}

/// Props for TextInput rendering and key handling
#[derive(Clone, Copy)]
pub struct TextInputProps<'a> {
    pub options: &'a TextInputOptions,
    /// Style for typed text (background included)
    pub style: Style,
    /// Foreground used for the placeholder
    pub placeholder_color: Color,
}

/// A single-line text input with cursor
///
/// Handles typing, backspace, delete, and cursor movement.
/// Emits `ChangeText` for each edit and `Submit` for Enter.
#[derive(Debug, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position (byte index)
    cursor: usize,
    focused: bool,
    /// First visible display column when the value is wider than the area
    scroll: usize,
    extra: Map<String, Value>,
}

impl TextInput {
    /// Create an unfocused input holding `options.default_value`
    pub fn new(options: &TextInputOptions) -> Self {
        Self {
            value: options.default_value.clone(),
            cursor: options.default_value.len(),
            focused: false,
            scroll: 0,
            extra: options.extra.clone(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// A pass-through option supplied at mount
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Take focus; raises `Focus` only on an actual transition
    pub fn focus(&mut self) -> Option<InputEvent> {
        if self.focused {
            return None;
        }
        self.focused = true;
        Some(InputEvent::Focus)
    }

    /// Drop focus; raises `Blur` only on an actual transition
    pub fn blur(&mut self) -> Option<InputEvent> {
        if !self.focused {
            return None;
        }
        self.focused = false;
        Some(InputEvent::Blur)
    }

    /// Erase the text. Does not raise `ChangeText`.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    fn move_cursor_left(&mut self) {
        if let Some((i, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, c: char, max_length: Option<usize>) -> Option<InputEvent> {
        if max_length.is_some_and(|max| self.value.chars().count() >= max) {
            return None;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        Some(InputEvent::ChangeText(self.value.clone()))
    }

    /// Backspace
    fn delete_char_before(&mut self) -> Option<InputEvent> {
        let (start, _) = self.value[..self.cursor].char_indices().next_back()?;
        self.value.remove(start);
        self.cursor = start;
        Some(InputEvent::ChangeText(self.value.clone()))
    }

    /// Delete key
    fn delete_char_at(&mut self) -> Option<InputEvent> {
        if self.cursor >= self.value.len() {
            return None;
        }
        self.value.remove(self.cursor);
        Some(InputEvent::ChangeText(self.value.clone()))
    }

    /// Display column of the cursor
    fn cursor_column(&self) -> usize {
        self.value[..self.cursor].width()
    }

    /// Keep the cursor inside a viewport of `width` cells
    fn ensure_cursor_visible(&mut self, width: usize) {
        if width == 0 {
            return;
        }
        let column = self.cursor_column();
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + width {
            // Scroll must start on a character boundary, never inside a wide glyph
            let target = column + 1 - width;
            let mut start = 0;
            for c in self.value.chars() {
                if start >= target {
                    break;
                }
                start += c.width().unwrap_or(0);
            }
            self.scroll = start;
        }
    }

    /// Characters that fit in `width` cells starting at the scroll column
    fn visible_text(&self, width: usize) -> String {
        let mut column = 0;
        let mut visible = String::new();
        for c in self.value.chars() {
            let w = c.width().unwrap_or(0);
            if column >= self.scroll {
                if column + w - self.scroll > width {
                    break;
                }
                visible.push(c);
            }
            column += w;
        }
        visible
    }
}

impl Component<InputEvent> for TextInput {
    type Props<'a> = TextInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = InputEvent> {
        if !self.focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        let editable = props.options.editable;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = self.value.len();
                    None
                }
                // Ctrl+U: clear line
                KeyCode::Char('u') if editable && !self.value.is_empty() => {
                    self.clear();
                    Some(InputEvent::ChangeText(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) if editable => self.insert_char(c, props.options.max_length),
            KeyCode::Backspace if editable => self.delete_char_before(),
            KeyCode::Delete if editable => self.delete_char_at(),
            KeyCode::Left => {
                self.move_cursor_left();
                None
            }
            KeyCode::Right => {
                self.move_cursor_right();
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                None
            }
            KeyCode::Enter => Some(InputEvent::Submit(self.value.clone())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        let paragraph = if self.value.is_empty() {
            self.scroll = 0;
            Paragraph::new(props.options.placeholder.clone())
                .style(props.style.fg(props.placeholder_color))
        } else {
            self.ensure_cursor_visible(width);
            Paragraph::new(self.visible_text(width)).style(props.style)
        };
        frame.render_widget(paragraph, area);

        if self.focused {
            let offset = self.cursor_column().saturating_sub(self.scroll);
            if offset < width {
                frame.set_cursor_position((area.x + offset as u16, area.y));
            }
        }
    }
}

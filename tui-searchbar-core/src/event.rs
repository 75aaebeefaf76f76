//! Event types delivered to components

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// The raw event payload handed to `Component::handle_event`
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick (drives spinners)
    Tick,
}

impl EventKind {
    /// Screen position of a left-button press, if this is one
    pub fn left_click(&self) -> Option<Position> {
        match self {
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Position::new(*column, *row)),
            _ => None,
        }
    }

    /// Convert a raw crossterm event, dropping kinds components never see
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(key) => Some(EventKind::Key(key)),
            crossterm::event::Event::Mouse(mouse) => Some(EventKind::Mouse(mouse)),
            crossterm::event::Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
            _ => None,
        }
    }
}

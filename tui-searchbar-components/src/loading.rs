//! Loading indicator shown at the trailing edge while a search is in flight

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use serde::Deserialize;

use crate::colors;

/// Spinner frames, advanced once per tick
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Layout and style overrides for the indicator
///
/// Applied after the computed defaults, so an explicit `margin_right` wins
/// over the gap the composer leaves for the clear icon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingStyle {
    pub style: Style,
    pub margin_right: Option<u16>,
}

/// Pass-through configuration for the loading indicator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadingProps {
    #[serde(skip)]
    pub style: LoadingStyle,
    /// Spinner colour (None = palette grey)
    pub color: Option<Color>,
    /// Whether the spinner advances on tick
    pub animating: bool,
    /// Hide the spinner entirely while not animating
    pub hides_when_stopped: bool,
}

impl Default for LoadingProps {
    fn default() -> Self {
        Self {
            style: LoadingStyle::default(),
            color: None,
            animating: true,
            hides_when_stopped: true,
        }
    }
}

/// A composed loading indicator, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingIndicator {
    /// Empty cells kept to the right of the spinner
    pub margin_right: u16,
    pub style: Style,
    pub animating: bool,
    pub hides_when_stopped: bool,
}

impl LoadingIndicator {
    /// Build an indicator with `default_margin`, then apply the caller's props
    pub fn new(props: &LoadingProps, default_margin: u16) -> Self {
        let base = Style::default().fg(props.color.unwrap_or(colors::GREY3));
        Self {
            margin_right: props.style.margin_right.unwrap_or(default_margin),
            style: base.patch(props.style.style),
            animating: props.animating,
            hides_when_stopped: props.hides_when_stopped,
        }
    }

    /// Whether anything is drawn at all
    pub fn is_visible(&self) -> bool {
        self.animating || !self.hides_when_stopped
    }

    /// Cells occupied, margin included
    pub fn width(&self) -> u16 {
        if self.is_visible() {
            1 + self.margin_right
        } else {
            0
        }
    }

    /// Spans for the given spinner phase: the frame, then the margin
    pub fn spans(&self, phase: usize) -> Vec<Span<'static>> {
        if !self.is_visible() {
            return Vec::new();
        }
        let frame = if self.animating {
            SPINNER_FRAMES[phase % SPINNER_FRAMES.len()]
        } else {
            SPINNER_FRAMES[0]
        };
        let mut spans = vec![Span::styled(frame, self.style)];
        if self.margin_right > 0 {
            spans.push(Span::raw(" ".repeat(self.margin_right as usize)));
        }
        spans
    }
}

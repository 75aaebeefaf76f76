//! Trailing adornments: loading indicator and clear icon

use ratatui::text::Span;

use crate::icon::{default_clear_icon, resolve_icon, IconSource, ResolvedIcon};
use crate::loading::{LoadingIndicator, LoadingProps};

/// Gap kept between the spinner and a configured clear icon
pub const LOADING_CLEAR_GAP: u16 = 1;

/// One item at the trailing edge of the input
#[derive(Debug, Clone, PartialEq)]
pub enum Adornment {
    Loading(LoadingIndicator),
    Clear(ResolvedIcon),
}

impl Adornment {
    /// Cells occupied
    pub fn width(&self) -> u16 {
        match self {
            Adornment::Loading(indicator) => indicator.width(),
            Adornment::Clear(icon) => icon.width(),
        }
    }

    /// Spans to draw; `phase` drives the spinner
    pub fn spans(&self, phase: usize) -> Vec<Span<'static>> {
        match self {
            Adornment::Loading(indicator) => indicator.spans(phase),
            Adornment::Clear(icon) => vec![icon.to_span()],
        }
    }
}

/// Decide what to draw at the trailing edge, in left-to-right order
///
/// The loading indicator always precedes the clear icon. The clear icon shows
/// whenever there is text, falling back to the default glyph when no icon is
/// configured. The spinner only leaves a gap when a clear icon is configured
/// and about to be drawn.
pub fn compose_trailing(
    show_loading: bool,
    loading: &LoadingProps,
    clear_icon: Option<&IconSource>,
    is_empty: bool,
) -> Vec<Adornment> {
    let mut adornments = Vec::with_capacity(2);

    if show_loading {
        let gap = if clear_icon.is_some() && !is_empty {
            LOADING_CLEAR_GAP
        } else {
            0
        };
        adornments.push(Adornment::Loading(LoadingIndicator::new(loading, gap)));
    }

    if !is_empty {
        adornments.push(Adornment::Clear(resolve_icon(
            clear_icon,
            &default_clear_icon(),
        )));
    }

    adornments
}

/// Total width of a composed list
pub fn adornments_width(adornments: &[Adornment]) -> u16 {
    adornments
        .iter()
        .fold(0u16, |acc, a| acc.saturating_add(a.width()))
}

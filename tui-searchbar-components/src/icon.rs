//! Icon descriptors, the glyph primitive and icon resolution

use ratatui::{style::Color, style::Style, text::Span};
use serde::{Deserialize, Serialize};

use crate::colors;

/// Glyph drawn when a family/name pair has no known glyph
pub const FALLBACK_GLYPH: &str = "?";

/// Supported icon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconFamily {
    #[default]
    MaterialCommunity,
    Material,
    FontAwesome,
    Ionicon,
    Octicon,
    Feather,
    Entypo,
    Antdesign,
    Evilicon,
    SimpleLineIcon,
    Foundation,
    Zocial,
}

/// A fully specified icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub family: IconFamily,
    pub name: String,
    /// Nominal size; terminal backends draw every glyph in a single cell
    pub size: u16,
    pub color: Color,
}

/// A caller-supplied descriptor where any field may be left to the default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialIcon {
    pub family: Option<IconFamily>,
    pub name: Option<String>,
    pub size: Option<u16>,
    pub color: Option<Color>,
}

impl PartialIcon {
    /// Fill every missing field from `default`
    pub fn merge_over(&self, default: &IconDescriptor) -> IconDescriptor {
        IconDescriptor {
            family: self.family.unwrap_or(default.family),
            name: self.name.clone().unwrap_or_else(|| default.name.clone()),
            size: self.size.unwrap_or(default.size),
            color: self.color.unwrap_or(default.color),
        }
    }
}

/// What a caller can put in an icon slot
///
/// Deserializes from a [`PartialIcon`]; pre-rendered elements are code-only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PartialIcon")]
pub enum IconSource {
    /// Descriptor merged over the slot's default
    Descriptor(PartialIcon),
    /// Pre-rendered icon used as-is
    Element(Span<'static>),
}

impl IconSource {
    /// Descriptor that only overrides the icon name
    pub fn named(name: impl Into<String>) -> Self {
        IconSource::Descriptor(PartialIcon {
            name: Some(name.into()),
            ..PartialIcon::default()
        })
    }

    /// Pre-rendered icon
    pub fn element(span: impl Into<Span<'static>>) -> Self {
        IconSource::Element(span.into())
    }
}

impl From<PartialIcon> for IconSource {
    fn from(partial: PartialIcon) -> Self {
        IconSource::Descriptor(partial)
    }
}

/// An icon ready to draw
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedIcon {
    Glyph(IconDescriptor),
    Element(Span<'static>),
}

impl ResolvedIcon {
    pub fn to_span(&self) -> Span<'static> {
        match self {
            ResolvedIcon::Glyph(descriptor) => render_icon(descriptor),
            ResolvedIcon::Element(span) => span.clone(),
        }
    }

    /// Display width in cells
    pub fn width(&self) -> u16 {
        u16::try_from(self.to_span().width()).unwrap_or(u16::MAX)
    }
}

/// Built-in leading icon
pub fn default_search_icon() -> IconDescriptor {
    IconDescriptor {
        family: IconFamily::MaterialCommunity,
        name: "magnify".to_string(),
        size: 18,
        color: colors::GREY3,
    }
}

/// Built-in clear icon
pub fn default_clear_icon() -> IconDescriptor {
    IconDescriptor {
        family: IconFamily::MaterialCommunity,
        name: "close".to_string(),
        size: 18,
        color: colors::GREY3,
    }
}

/// Resolve an icon slot against its default
///
/// Elements pass through, descriptors are merged over `default`, and an empty
/// slot yields `default` itself.
pub fn resolve_icon(source: Option<&IconSource>, default: &IconDescriptor) -> ResolvedIcon {
    match source {
        Some(IconSource::Element(span)) => ResolvedIcon::Element(span.clone()),
        Some(IconSource::Descriptor(partial)) => ResolvedIcon::Glyph(partial.merge_over(default)),
        None => ResolvedIcon::Glyph(default.clone()),
    }
}

/// Terminal glyph for an icon name, if one is known
pub fn icon_glyph(family: IconFamily, name: &str) -> Option<&'static str> {
    let name = match family {
        IconFamily::Ionicon => name
            .strip_prefix("md-")
            .or_else(|| name.strip_prefix("ios-"))
            .unwrap_or(name),
        _ => name,
    };

    let glyph = match name {
        "magnify" | "search" | "search1" => "⌕",
        "close" | "clear" | "x" | "times" | "cross" => "✕",
        "close-circle" | "cancel" | "times-circle" | "x-circle" => "⊗",
        "filter" | "filter-variant" | "funnel" => "▿",
        "arrow-left" | "arrow-back" | "chevron-left" => "‹",
        "refresh" | "reload" | "sync" => "↻",
        "menu" | "bars" => "≡",
        "check" => "✓",
        "star" => "★",
        "heart" => "♥",
        _ => return None,
    };
    Some(glyph)
}

/// Draw a descriptor, falling back to [`FALLBACK_GLYPH`] for unknown names
pub fn render_icon(descriptor: &IconDescriptor) -> Span<'static> {
    let glyph = icon_glyph(descriptor.family, &descriptor.name).unwrap_or_else(|| {
        tracing::trace!(
            family = ?descriptor.family,
            name = %descriptor.name,
            "no glyph for icon, using fallback"
        );
        FALLBACK_GLYPH
    });
    Span::styled(glyph, Style::default().fg(descriptor.color))
}

//! Search bar configuration: central defaults and caller overrides
//!
//! [`SearchBarOverrides`] is what a caller supplies, in code or as JSON.
//! [`SearchBarConfig::resolve`] shallow-merges it over the defaults. Keys the
//! search bar does not recognise land in the input primitive's options.

use ratatui::style::{Color, Style};
use serde::Deserialize;
use serde_json::{Map, Value};
use tui_searchbar_core::Keybindings;

use crate::colors;
use crate::error::Result;
use crate::icon::IconSource;
use crate::keymap::{default_keybindings, SearchKeybindings};
use crate::loading::LoadingProps;
use crate::text_input::TextInputOptions;

/// Fully resolved configuration read by `SearchBar` on every call
#[derive(Debug, Clone)]
pub struct SearchBarConfig {
    /// Light container/background styling instead of dark
    pub light_theme: bool,
    /// Rounded caps on the input row
    pub round: bool,
    pub search_icon: Option<IconSource>,
    pub clear_icon: Option<IconSource>,
    pub show_loading: bool,
    pub loading_props: LoadingProps,
    pub container_style: Style,
    pub input_container_style: Style,
    pub input_style: Style,
    pub left_icon_container_style: Style,
    pub right_icon_container_style: Style,
    pub placeholder_text_color: Color,
    pub keybindings: SearchKeybindings,
    /// Forwarded to the text input primitive
    pub input: TextInputOptions,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            light_theme: false,
            round: false,
            search_icon: None,
            clear_icon: None,
            show_loading: false,
            loading_props: LoadingProps::default(),
            container_style: Style::default(),
            input_container_style: Style::default(),
            input_style: Style::default(),
            left_icon_container_style: Style::default(),
            right_icon_container_style: Style::default(),
            placeholder_text_color: colors::GREY3,
            keybindings: default_keybindings(),
            input: TextInputOptions::default(),
        }
    }
}

/// Caller overrides; `None` keeps the default
///
/// Styles and pre-rendered icons can only be set from code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchBarOverrides {
    pub light_theme: Option<bool>,
    pub round: Option<bool>,
    pub search_icon: Option<IconSource>,
    pub clear_icon: Option<IconSource>,
    pub show_loading: Option<bool>,
    pub loading_props: Option<LoadingProps>,
    #[serde(skip)]
    pub container_style: Option<Style>,
    #[serde(skip)]
    pub input_container_style: Option<Style>,
    #[serde(skip)]
    pub input_style: Option<Style>,
    #[serde(skip)]
    pub left_icon_container_style: Option<Style>,
    #[serde(skip)]
    pub right_icon_container_style: Option<Style>,
    pub placeholder_text_color: Option<Color>,
    /// Merged per command over the default bindings
    pub keybindings: Option<SearchKeybindings>,
    #[serde(flatten)]
    pub input: InputOverrides,
}

/// Pass-through options for the text input primitive
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputOverrides {
    pub placeholder: Option<String>,
    pub default_value: Option<String>,
    pub editable: Option<bool>,
    pub max_length: Option<usize>,
    /// Every other key, handed to the input unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InputOverrides {
    fn apply(self, defaults: TextInputOptions) -> TextInputOptions {
        TextInputOptions {
            placeholder: self.placeholder.unwrap_or(defaults.placeholder),
            default_value: self.default_value.unwrap_or(defaults.default_value),
            editable: self.editable.unwrap_or(defaults.editable),
            max_length: self.max_length.or(defaults.max_length),
            extra: {
                let mut extra = defaults.extra;
                extra.extend(self.extra);
                extra
            },
        }
    }
}

impl SearchBarConfig {
    /// Merge `overrides` over the defaults
    pub fn resolve(overrides: SearchBarOverrides) -> Self {
        let defaults = Self::default();
        let keybindings = match overrides.keybindings {
            Some(user) => Keybindings::merge(defaults.keybindings, user),
            None => defaults.keybindings,
        };

        Self {
            light_theme: overrides.light_theme.unwrap_or(defaults.light_theme),
            round: overrides.round.unwrap_or(defaults.round),
            search_icon: overrides.search_icon.or(defaults.search_icon),
            clear_icon: overrides.clear_icon.or(defaults.clear_icon),
            show_loading: overrides.show_loading.unwrap_or(defaults.show_loading),
            loading_props: overrides.loading_props.unwrap_or(defaults.loading_props),
            container_style: overrides
                .container_style
                .unwrap_or(defaults.container_style),
            input_container_style: overrides
                .input_container_style
                .unwrap_or(defaults.input_container_style),
            input_style: overrides.input_style.unwrap_or(defaults.input_style),
            left_icon_container_style: overrides
                .left_icon_container_style
                .unwrap_or(defaults.left_icon_container_style),
            right_icon_container_style: overrides
                .right_icon_container_style
                .unwrap_or(defaults.right_icon_container_style),
            placeholder_text_color: overrides
                .placeholder_text_color
                .unwrap_or(defaults.placeholder_text_color),
            keybindings,
            input: overrides.input.apply(defaults.input),
        }
    }

    /// Parse JSON overrides and resolve them
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: SearchBarOverrides = serde_json::from_str(json)?;
        Ok(Self::resolve(overrides))
    }
}

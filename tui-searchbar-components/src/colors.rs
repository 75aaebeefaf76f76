//! Palette shared by the search bar and its default icons

use ratatui::style::Color;

pub const GREY0: Color = Color::Rgb(0x39, 0x3e, 0x42);
pub const GREY3: Color = Color::Rgb(0x86, 0x93, 0x9e);
pub const GREY4: Color = Color::Rgb(0xbd, 0xc6, 0xcf);
pub const GREY5: Color = Color::Rgb(0xe1, 0xe8, 0xee);

/// Input row background in the dark theme
pub const SEARCH_BG: Color = Color::Rgb(0x30, 0x33, 0x37);

/// Container border colours
pub const BORDER_DARK: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const BORDER_LIGHT: Color = Color::Rgb(0xe1, 0xe1, 0xe1);

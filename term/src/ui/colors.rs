//! Theme and color palette definitions for the terminal UI.

use std::str::FromStr;

use ratatui::style::{Color, palette::tailwind};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub row_bg: Color,
    pub selected_row_fg: Color,
    pub error: Color,
    pub header_text: Color,
    pub label: Color,
    pub text: Color,
    pub border_color: Color,
    pub gray: Color,
    pub input_editing: Color,
    pub scroll_bar_fg: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Colors::new(Theme::default().to_palette(true), true)
    }
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        if true_color_enabled {
            Self {
                buffer_bg: tailwind::SLATE.c950,
                row_bg: tailwind::SLATE.c900,
                selected_row_fg: color.c400,
                error: tailwind::RED.c600,
                header_text: color.c600,
                label: color.c400,
                text: tailwind::SLATE.c200,
                border_color: color.c400,
                gray: tailwind::SLATE.c500,
                input_editing: tailwind::AMBER.c600,
                scroll_bar_fg: color.c800,
            }
        } else {
            Self {
                buffer_bg: Color::Black,
                row_bg: Color::Black,
                selected_row_fg: color.c400,
                error: Color::Red,
                header_text: color.c400,
                label: color.c400,
                text: Color::White,
                border_color: color.c400,
                gray: Color::DarkGray,
                input_editing: Color::LightYellow,
                scroll_bar_fg: color.c500,
            }
        }
    }
}

/// Available color themes for the application.
#[derive(
    Debug, Default, Eq, PartialEq, Copy, Clone, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Blue,
    Emerald,
    Indigo,
    Red,
}

// Fallback palettes for terminals without true color support.
const fn basic_palette(light: Color, dark: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: dark,
        c600: dark,
        c700: dark,
        c800: dark,
        c900: dark,
        c950: dark,
    }
}

const BASIC_BLUE_PALETTE: tailwind::Palette =
    basic_palette(Color::LightCyan, Color::Cyan);
const BASIC_RED_PALETTE: tailwind::Palette =
    basic_palette(Color::LightRed, Color::Red);
const BASIC_GREEN_PALETTE: tailwind::Palette =
    basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA_PALETTE: tailwind::Palette =
    basic_palette(Color::LightMagenta, Color::Magenta);

impl Theme {
    /// Parses a theme from its string name, defaulting to Blue.
    pub fn from_string(value: &str) -> Theme {
        Theme::from_str(value).unwrap_or_default()
    }

    /// Returns the theme following this one, wrapping around.
    pub fn next(self) -> Theme {
        Theme::iter()
            .cycle()
            .skip_while(|t| *t != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(
        self,
        true_color_enabled: bool,
    ) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALETTE,
                Theme::Red => &BASIC_RED_PALETTE,
                Theme::Indigo => &BASIC_MAGENTA_PALETTE,
                Theme::Emerald => &BASIC_GREEN_PALETTE,
            }
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;

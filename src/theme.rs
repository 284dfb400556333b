//! Theme selection and the accent colors used for cooking-mode highlights.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

/// Custom theme for the recipe card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

impl Theme {
    /// Background for the step being cooked right now.
    pub fn current_step_color(self) -> Color {
        match self {
            Theme::Light => Color::from_rgb8(0xfe, 0xf9, 0xc3),
            Theme::Dark => Color::from_rgba8(0xfa, 0xcc, 0x15, 0.25),
        }
    }

    /// Background for steps already finished.
    pub fn done_step_color(self) -> Color {
        match self {
            Theme::Light => Color::from_rgb8(0xdc, 0xfc, 0xe7),
            Theme::Dark => Color::from_rgba8(0x4a, 0xde, 0x80, 0.2),
        }
    }

    pub fn timer_color(self) -> Color {
        match self {
            Theme::Light => Color::from_rgb8(0xea, 0x58, 0x0c),
            Theme::Dark => Color::from_rgb8(0xfb, 0x92, 0x3c),
        }
    }
}

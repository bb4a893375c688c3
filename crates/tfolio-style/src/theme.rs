//! Semantic theme slots with dark and light variants.
//!
//! Widgets and panels never pick raw colors; they ask the active [`Theme`]
//! for a slot so that toggling [`ThemeMode`] restyles the whole page.

use crate::color::Color;
use crate::style::Style;

/// Which of the two built-in palettes is active. Default is dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stable string form, used for the persisted `theme` preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse the persisted form. Unknown values fall back to dark.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Glyph shown on the theme toggle control: offers the mode a press
    /// would switch to.
    #[must_use]
    pub fn toggle_glyph(self) -> char {
        match self {
            Self::Dark => '☀',
            Self::Light => '☾',
        }
    }
}

/// Semantic color slots for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Page backdrop behind everything, including particles.
    pub backdrop: Color,
    /// Raised surfaces: header bar, menus, dropdowns.
    pub surface: Color,
    /// Primary body text.
    pub text: Color,
    /// Secondary text: hints, separators, inactive links.
    pub muted: Color,
    /// Accent for headings, active links, and the typewriter line.
    pub accent: Color,
    /// Background particle glyphs.
    pub particle: Color,
}

impl Theme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            backdrop: Color::rgb(0x12, 0x12, 0x1a),
            surface: Color::rgb(0x1e, 0x1e, 0x2a),
            text: Color::rgb(0xdc, 0xdc, 0xe4),
            muted: Color::rgb(0x80, 0x80, 0x92),
            accent: Color::rgb(0x64, 0xb5, 0xf6),
            particle: Color::rgb(0x3a, 0x3a, 0x50),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            backdrop: Color::rgb(0xf5, 0xf5, 0xf8),
            surface: Color::rgb(0xe6, 0xe6, 0xee),
            text: Color::rgb(0x22, 0x22, 0x2a),
            muted: Color::rgb(0x6e, 0x6e, 0x7c),
            accent: Color::rgb(0x15, 0x65, 0xc0),
            particle: Color::rgb(0xc8, 0xc8, 0xd8),
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Base style for ordinary content.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.backdrop)
    }

    /// Style for secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted).bg(self.backdrop)
    }

    /// Style for headings and active affordances.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent).bg(self.backdrop).bold()
    }

    /// Style for raised surfaces (header, menus).
    #[must_use]
    pub fn surface_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.surface)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

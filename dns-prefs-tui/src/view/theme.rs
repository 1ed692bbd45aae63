//! Theme and style definitions

use ratatui::style::Color;

/// Theme colors
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub fg: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
    pub key_hint: Color,
}

impl ThemeColors {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            muted: Color::Rgb(128, 128, 128),
            highlight: Color::Rgb(0, 122, 204),
            error: Color::Rgb(244, 71, 71),
            key_hint: Color::Yellow,
        }
    }
}

/// Current color scheme
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

// Color theme for the TUI
//
// Two built-in palettes selected by name from the config. Alert kinds map
// onto the semantic colors so banners read like their web counterparts.

use crate::page::alerts::AlertKind;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub selection: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Look up a theme by config name; unknown names fall back to dark.
    pub fn named(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 24, 20),
            foreground: Color::Rgb(222, 228, 222),
            muted: Color::Rgb(130, 142, 132),
            accent: Color::Rgb(92, 184, 122),
            success: Color::Rgb(110, 196, 124),
            warning: Color::Rgb(222, 184, 84),
            danger: Color::Rgb(222, 96, 96),
            selection: Color::Rgb(44, 66, 50),
            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(246, 249, 246),
            foreground: Color::Rgb(32, 42, 34),
            muted: Color::Rgb(118, 128, 118),
            accent: Color::Rgb(36, 128, 70),
            success: Color::Rgb(40, 140, 72),
            warning: Color::Rgb(168, 128, 24),
            danger: Color::Rgb(176, 48, 48),
            selection: Color::Rgb(210, 232, 214),
            border_type: BorderType::Rounded,
        }
    }

    /// Banner color for an alert kind.
    pub fn alert_color(&self, kind: AlertKind) -> Color {
        match kind {
            AlertKind::Info => self.accent,
            AlertKind::Success => self.success,
            AlertKind::Danger => self.danger,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

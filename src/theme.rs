// Theme support for the TUI
//
// Named palettes selected via config, env or --theme. "Terminal" sticks to the
// ANSI palette; the others use true color (RGB).

use crate::logging::LogLevel;
use crate::session::aqi::AqiBand;
use crate::session::models::Severity;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Resolved color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub highlight: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub status_bar: Color,
    pub panel_logs: Color,

    // ─── Semantic Colors ─────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // ─── Map ─────────────────────────────────────────────────
    pub map_land: Color,
    pub marker: Color,

    // ─── AQI bands, Good through Hazardous ───────────────────
    pub aqi: [Color; 6],
}

impl Theme {
    /// Themes in the order 't' cycles through them
    pub const NAMES: [&'static str; 4] = ["Forest", "Ocean", "Ember", "Terminal"];

    /// Load theme by name (case-insensitive); unknown names fall back to Forest
    pub fn by_name(name: &str, use_theme_background: bool) -> Self {
        let mut theme = match name.trim().to_lowercase().as_str() {
            "ocean" => Self::ocean(),
            "ember" => Self::ember(),
            "terminal" => Self::terminal(),
            "forest" => Self::forest(),
            other => {
                tracing::warn!(theme = other, "Unknown theme, using Forest");
                Self::forest()
            }
        };
        if !use_theme_background {
            theme.background = Color::Reset;
        }
        theme
    }

    /// Name of the theme after this one in [`Theme::NAMES`]
    pub fn next_name(&self) -> &'static str {
        let current = Self::NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(&self.name))
            .unwrap_or(0);
        Self::NAMES[(current + 1) % Self::NAMES.len()]
    }

    pub fn forest() -> Self {
        Self {
            name: "Forest".to_string(),
            background: Color::Rgb(0x1b, 0x26, 0x1e),
            foreground: Color::Rgb(0xe3, 0xea, 0xdc),
            muted: Color::Rgb(0x8a, 0x9a, 0x86),
            title: Color::Rgb(0x7c, 0xc4, 0x6a),
            border: Color::Rgb(0x4f, 0x63, 0x50),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(0xb9, 0xe7, 0x6b),
            selection: Color::Rgb(0x2f, 0x4a, 0x33),
            selection_fg: Color::Rgb(0xf2, 0xf7, 0xee),
            status_bar: Color::Rgb(0x9c, 0xc9, 0x8c),
            panel_logs: Color::Rgb(0x7c, 0xc4, 0x6a),
            success: Color::Rgb(0x6f, 0xc2, 0x76),
            warning: Color::Rgb(0xe5, 0xc0, 0x7b),
            danger: Color::Rgb(0xe0, 0x6c, 0x75),
            info: Color::Rgb(0x7f, 0xb8, 0xd8),
            map_land: Color::Rgb(0x56, 0x7d, 0x4f),
            marker: Color::Rgb(0xff, 0x7a, 0x59),
            aqi: EPA_BANDS,
        }
    }

    pub fn ocean() -> Self {
        Self {
            name: "Ocean".to_string(),
            background: Color::Rgb(0x0f, 0x1c, 0x2b),
            foreground: Color::Rgb(0xd8, 0xe6, 0xf0),
            muted: Color::Rgb(0x7d, 0x93, 0xa8),
            title: Color::Rgb(0x56, 0xb6, 0xc2),
            border: Color::Rgb(0x3a, 0x55, 0x70),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(0x8b, 0xe9, 0xfd),
            selection: Color::Rgb(0x1f, 0x3b, 0x57),
            selection_fg: Color::Rgb(0xf0, 0xf6, 0xfa),
            status_bar: Color::Rgb(0x8f, 0xbc, 0xd6),
            panel_logs: Color::Rgb(0x56, 0xb6, 0xc2),
            success: Color::Rgb(0x98, 0xc3, 0x79),
            warning: Color::Rgb(0xe5, 0xc0, 0x7b),
            danger: Color::Rgb(0xef, 0x6b, 0x73),
            info: Color::Rgb(0x61, 0xaf, 0xef),
            map_land: Color::Rgb(0x4b, 0x6a, 0x88),
            marker: Color::Rgb(0xff, 0xb8, 0x6c),
            aqi: EPA_BANDS,
        }
    }

    pub fn ember() -> Self {
        Self {
            name: "Ember".to_string(),
            background: Color::Rgb(0x28, 0x1d, 0x1a),
            foreground: Color::Rgb(0xf0, 0xe0, 0xd0),
            muted: Color::Rgb(0xa0, 0x8a, 0x7a),
            title: Color::Rgb(0xff, 0xa0, 0x57),
            border: Color::Rgb(0x6b, 0x4f, 0x42),
            border_type: BorderType::Plain,
            highlight: Color::Rgb(0xff, 0xd1, 0x66),
            selection: Color::Rgb(0x4a, 0x33, 0x2a),
            selection_fg: Color::Rgb(0xff, 0xf4, 0xe8),
            status_bar: Color::Rgb(0xe0, 0xb0, 0x8c),
            panel_logs: Color::Rgb(0xff, 0xa0, 0x57),
            success: Color::Rgb(0xa9, 0xc7, 0x6b),
            warning: Color::Rgb(0xff, 0xd1, 0x66),
            danger: Color::Rgb(0xf2, 0x5f, 0x4c),
            info: Color::Rgb(0x9a, 0xb8, 0xd0),
            map_land: Color::Rgb(0x8c, 0x6a, 0x4f),
            marker: Color::Rgb(0xff, 0x5f, 0x87),
            aqi: EPA_BANDS,
        }
    }

    /// Uses the terminal's ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            title: Color::Green,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
            highlight: Color::Yellow,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            status_bar: Color::Green,
            panel_logs: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            info: Color::Cyan,
            map_land: Color::Green,
            marker: Color::LightRed,
            aqi: [
                Color::Green,
                Color::Yellow,
                Color::LightRed,
                Color::Red,
                Color::Magenta,
                Color::LightMagenta,
            ],
        }
    }

    pub fn aqi_color(&self, band: AqiBand) -> Color {
        let index = match band {
            AqiBand::Good => 0,
            AqiBand::Moderate => 1,
            AqiBand::UnhealthyForSensitive => 2,
            AqiBand::Unhealthy => 3,
            AqiBand::VeryUnhealthy => 4,
            AqiBand::Hazardous => 5,
        };
        self.aqi[index]
    }

    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::High => Style::default()
                .fg(self.danger)
                .add_modifier(Modifier::BOLD),
            Severity::Medium => Style::default().fg(self.warning),
            Severity::Low => Style::default().fg(self.foreground),
        }
    }

    pub fn log_level_style(&self, level: LogLevel) -> Style {
        match level {
            LogLevel::Error => Style::default()
                .fg(self.danger)
                .add_modifier(Modifier::BOLD),
            LogLevel::Warn => Style::default().fg(self.warning),
            LogLevel::Info => Style::default().fg(self.info),
            LogLevel::Debug | LogLevel::Trace => Style::default().fg(self.muted),
        }
    }

    pub fn block_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::forest()
    }
}

/// EPA-style band colors shared by the true-color themes
const EPA_BANDS: [Color; 6] = [
    Color::Rgb(0x00, 0xe4, 0x00),
    Color::Rgb(0xff, 0xff, 0x00),
    Color::Rgb(0xff, 0x7e, 0x00),
    Color::Rgb(0xff, 0x00, 0x00),
    Color::Rgb(0x8f, 0x3f, 0x97),
    Color::Rgb(0x7e, 0x00, 0x23),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_theme_loads() {
        for name in Theme::NAMES {
            assert_eq!(Theme::by_name(name, true).name, name);
        }
        assert_eq!(Theme::by_name("ocean", true).name, "Ocean");
    }

    #[test]
    fn unknown_theme_falls_back() {
        assert_eq!(Theme::by_name("Solarized", true).name, "Forest");
    }

    #[test]
    fn background_toggle() {
        assert_eq!(Theme::by_name("Forest", false).background, Color::Reset);
        assert_ne!(Theme::by_name("Forest", true).background, Color::Reset);
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(Theme::forest().next_name(), "Ocean");
        assert_eq!(Theme::terminal().next_name(), "Forest");
    }
}

//! Theme System
//!
//! Dark, light and high-contrast visuals for the viewer panels. The dark
//! palette is the default; link-styled controls (component names, the pin
//! trigger fallback glyph) pick up `hyperlink_color` from the active visuals.

use egui::{Color32, Style, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
    /// High contrast for accessibility
    HighContrast,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub font_size: f32,
    pub spacing: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 14.0,
            spacing: 4.0,
        }
    }
}

/// Shared color constants for the viewer palette
pub mod colors {
    use egui::Color32;

    pub const LINK_BLUE: Color32 = Color32::from_rgb(91, 156, 222); // Component links / pin accent
    pub const PANEL_GREY: Color32 = Color32::from_rgb(24, 26, 30); // Main panel background
    pub const HEADER_GREY: Color32 = Color32::from_rgb(38, 41, 48); // Panel headers
    pub const STROKE_GREY: Color32 = Color32::from_rgb(70, 74, 84); // Borders
    pub const WARN_ORANGE: Color32 = Color32::from_rgb(237, 125, 32); // Warnings
}

impl ThemeConfig {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        style.visuals = match self.theme {
            Theme::Dark => Self::dark_visuals(),
            Theme::Light => Self::light_visuals(),
            Theme::HighContrast => Self::high_contrast_visuals(),
        };
        style.spacing.item_spacing = egui::vec2(self.spacing * 2.0, self.spacing);
        style.spacing.button_padding = egui::vec2(self.spacing * 2.0, self.spacing);

        ctx.set_style(style);
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = colors::PANEL_GREY;
        visuals.window_fill = colors::PANEL_GREY;
        visuals.hyperlink_color = colors::LINK_BLUE;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, colors::STROKE_GREY);
        visuals.selection.bg_fill = colors::LINK_BLUE.linear_multiply(0.3);
        visuals
    }

    fn light_visuals() -> Visuals {
        let mut visuals = Visuals::light();
        visuals.hyperlink_color = Color32::from_rgb(35, 107, 178);
        visuals
    }

    fn high_contrast_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = Color32::BLACK;
        visuals.window_fill = Color32::BLACK;
        visuals.override_text_color = Some(Color32::WHITE);
        visuals.hyperlink_color = Color32::from_rgb(130, 190, 255);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let config = ThemeConfig::default();
        assert_eq!(config.theme, Theme::Dark);

        let ctx = egui::Context::default();
        config.apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.hyperlink_color, colors::LINK_BLUE);
    }

    #[test]
    fn test_light_theme_applies() {
        let ctx = egui::Context::default();
        ThemeConfig {
            theme: Theme::Light,
            ..ThemeConfig::default()
        }
        .apply(&ctx);
        assert!(!ctx.style().visuals.dark_mode);
    }
}

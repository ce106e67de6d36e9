use crate::engine::config::ThemeConfig;
use ratatui::style::Color;
use std::str::FromStr;

/// Colours used by the reader view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            anchor: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    /// Builds a theme from configured hex strings. Unparseable entries keep
    /// the midnight colour.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::midnight();
        Self {
            background: parse_color(&config.background_color, base.background),
            text: parse_color(&config.text_color, base.text),
            anchor: parse_color(&config.anchor_color, base.anchor),
            dimmed: parse_color(&config.dimmed_color, base.dimmed),
        }
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value.trim()).unwrap_or_else(|_| {
        log::warn!("invalid theme colour {value:?}");
        fallback
    })
}

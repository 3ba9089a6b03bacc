use crossterm::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the table view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub notice: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            selection_fg: Color::Black,
            selection_bg: Color::Cyan,
            notice: Color::Yellow,
            error: Color::Red,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "selection_fg" => theme.selection_fg = color,
                    "selection_bg" => theme.selection_bg = color,
                    "notice" => theme.notice = color,
                    "error" => theme.error = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

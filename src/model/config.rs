use serde::Deserialize;
use std::collections::HashMap;

/// Configuration from labelmark.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Rows shown on each side of the cursor.
    #[serde(default = "default_radius")]
    pub radius: usize,
    /// Rows moved by a page-up or page-down.
    #[serde(default = "default_page")]
    pub page: usize,
    /// Color overrides (e.g. selection_bg = "#00ff00").
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_radius() -> usize {
    5
}

fn default_page() -> usize {
    20
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            radius: default_radius(),
            page: default_page(),
            colors: HashMap::new(),
        }
    }
}

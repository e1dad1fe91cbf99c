//! Scene configuration

use crate::config::Config;
use crate::foundation::math::Color;
use serde::{Deserialize, Serialize};

/// Settings applied when a scene is entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Name used in log output
    pub name: String,

    /// Stage background colour, `0xRRGGBB`
    pub clear_color: Color,

    /// Whether pointer input is routed to the scene
    pub interactive: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "scene".to_string(),
            clear_color: Color::BLACK,
            interactive: true,
        }
    }
}

impl SceneConfig {
    /// Default settings under the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the background colour from a packed `0xRRGGBB` value
    pub fn with_clear_color(mut self, rgb: u32) -> Self {
        self.clear_color = Color::from(rgb);
        self
    }

    /// Enable or disable pointer input
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

impl Config for SceneConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.clear_color, Color(0x00_0000));
        assert!(config.interactive);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SceneConfig::from_toml_str("clear_color = 0x336699\n").unwrap();
        assert_eq!(config.clear_color, Color(0x33_6699));
        assert!(config.interactive);
        assert_eq!(config.name, "scene");
    }
}

//! Window configuration types.

use pipeweaver_common::{MinimumSize, WindowGeometry};
use serde::{Deserialize, Serialize};

/// Window title, minimum size, and the geometry used when the host has
/// none stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub min_width: i32,
    pub min_height: i32,
    pub default_x: i32,
    pub default_y: i32,
    pub default_width: i32,
    pub default_height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        let geometry = WindowGeometry::DEFAULT;
        let minimum = MinimumSize::default();
        Self {
            title: "Pipeweaver".into(),
            min_width: minimum.width,
            min_height: minimum.height,
            default_x: geometry.x,
            default_y: geometry.y,
            default_width: geometry.width,
            default_height: geometry.height,
        }
    }
}

impl WindowConfig {
    pub fn minimum_size(&self) -> MinimumSize {
        MinimumSize {
            width: self.min_width,
            height: self.min_height,
        }
    }

    pub fn default_geometry(&self) -> WindowGeometry {
        WindowGeometry::new(
            self.default_x,
            self.default_y,
            self.default_width,
            self.default_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Pipeweaver");
        assert_eq!(config.minimum_size(), MinimumSize::default());
        assert_eq!(
            config.default_geometry(),
            WindowGeometry::new(100, 100, 1000, 600)
        );
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str(
            r#"
title = "Mixer"
default_width = 1280
"#,
        )
        .unwrap();
        assert_eq!(config.title, "Mixer");
        assert_eq!(config.default_width, 1280);
        // Defaults preserved
        assert_eq!(config.default_height, 600);
        assert_eq!(config.min_width, 1000);
    }
}

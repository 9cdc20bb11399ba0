//! Renderer configuration.

use serde::{Deserialize, Serialize};

use crate::primitives::Color;

/// Configuration for a [`Renderer`](crate::raster::Renderer).
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Largest width or height of any single buffer, in pixels.
    pub max_dimension: u32,

    /// Maximum tree depth. `None` means unlimited.
    pub max_depth: Option<usize>,

    /// Outline color for nodes with the `debug` style flag.
    pub debug_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_dimension: 16_384,
            max_depth: None,
            debug_color: Color::MAGENTA,
        }
    }
}

impl RenderConfig {
    /// Parse a JSON config. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

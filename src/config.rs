// config.rs - Construction parameters for a trackball controller
use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Arcball hemisphere radius in normalized pointer units
pub const DEFAULT_RADIUS: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackballConfig {
    /// Viewer looks along +Z; selects the -Z hemisphere for the arcball
    pub gaze_positive_z: bool,
    /// Translation restored by `reset`
    pub default_translation: [f32; 3],
}

impl TrackballConfig {
    pub fn default_translation(&self) -> Vec3 {
        Vec3::from_array(self.default_translation)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse trackball config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trackball config: {:?}", path))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }
}

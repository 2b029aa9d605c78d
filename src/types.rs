use serde::{Deserialize, Serialize};

/// Trackball state laid out for a GPU uniform buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TrackballUniform {
    pub transform: [[f32; 4]; 4], // Column-major, rotation then translation
    pub rotation: [f32; 4],       // (w, x, y, z)
    pub translation: [f32; 3],
    pub active: f32, // 1.0 while a drag is in progress
}

/// Accumulated view for save/restore, rotation stored as (w, x, y, z)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub rotation: [f32; 4],
    pub translation: [f32; 3],
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation: [1.0, 0.0, 0.0, 0.0],
            translation: [0.0; 3],
        }
    }
}

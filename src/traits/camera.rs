use glam::{Mat4, Quat, Vec3};

/// Camera orientation/position source consumed by a renderer
pub trait CameraController {
    /// Accumulated orientation
    fn rotation(&self) -> Quat;

    /// Accumulated translation
    fn translation(&self) -> Vec3;

    /// Rotation followed by translation
    fn view_matrix(&self) -> Mat4;

    /// True while a drag is in progress
    fn is_active(&self) -> bool;
}

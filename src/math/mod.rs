mod arcball;
mod matrix;

pub use arcball::{arc_quat, drag_rotation, hamilton, normalize_or_identity, project_to_hemisphere};
pub use matrix::{rotation_matrix, transformation_matrix, translation_matrix};

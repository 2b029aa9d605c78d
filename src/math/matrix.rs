use glam::{Mat4, Quat, Vec3, Vec4};

/// Homogeneous rotation matrix for a unit quaternion, column-major.
///
/// Off-unit input is converted as-is, not renormalized.
pub fn rotation_matrix(q: Quat) -> Mat4 {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    Mat4::from_cols(
        Vec4::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + z * w),
            2.0 * (x * z - y * w),
            0.0,
        ),
        Vec4::new(
            2.0 * (x * y - z * w),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + x * w),
            0.0,
        ),
        Vec4::new(
            2.0 * (x * z + y * w),
            2.0 * (y * z - x * w),
            1.0 - 2.0 * (x * x + y * y),
            0.0,
        ),
        Vec4::W,
    )
}

pub fn translation_matrix(t: Vec3) -> Mat4 {
    Mat4::from_translation(t)
}

/// Rotation matrix with its translation column replaced by `t`.
pub fn transformation_matrix(q: Quat, t: Vec3) -> Mat4 {
    let mut m = rotation_matrix(q);
    m.w_axis = t.extend(1.0);
    m
}

use glam::{Quat, Vec2, Vec3};

/// Projects a pointer position onto the arcball hemisphere.
///
/// Points inside the disc of `radius` are lifted onto the hemisphere on the
/// side selected by `hemisphere_sign`. Points outside stay on the `z = 0`
/// plane unchanged; they are not clamped onto the rim, so the rotation axis
/// jumps when a drag crosses the boundary.
pub fn project_to_hemisphere(point: Vec2, radius: f32, hemisphere_sign: f32) -> Vec3 {
    let d = point.length_squared();
    let r2 = radius * radius;
    if d <= r2 {
        Vec3::new(point.x, point.y, hemisphere_sign * (r2 - d).sqrt())
    } else {
        Vec3::new(point.x, point.y, 0.0)
    }
}

/// Quaternion spanning the arc from `from` to `to`.
///
/// Real part is `from · to`, vector part is `from × to`. The result is left
/// un-normalized.
pub fn arc_quat(from: Vec3, to: Vec3) -> Quat {
    let axis = from.cross(to);
    Quat::from_xyzw(axis.x, axis.y, axis.z, from.dot(to))
}

/// Hamilton product `a * b`. Neither operand needs to be unit length.
pub fn hamilton(a: Quat, b: Quat) -> Quat {
    Quat::from_xyzw(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

/// Scales `q` to unit length, or returns the identity if its length is zero.
pub fn normalize_or_identity(q: Quat) -> Quat {
    let len = (q.w * q.w + q.x * q.x + q.y * q.y + q.z * q.z).sqrt();
    if len == 0.0 {
        log::trace!("degenerate rotation quaternion, falling back to identity");
        return Quat::IDENTITY;
    }
    let inv = 1.0 / len;
    Quat::from_xyzw(q.x * inv, q.y * inv, q.z * inv, q.w * inv)
}

/// Incremental rotation for a drag from `from` to `to`, composed onto
/// `accumulated` and renormalized.
pub fn drag_rotation(
    accumulated: Quat,
    from: Vec2,
    to: Vec2,
    radius: f32,
    hemisphere_sign: f32,
) -> Quat {
    let p0 = project_to_hemisphere(from, radius, hemisphere_sign);
    let p1 = project_to_hemisphere(to, radius, hemisphere_sign);
    normalize_or_identity(hamilton(arc_quat(p0, p1), accumulated))
}

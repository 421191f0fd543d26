//! Vector and Frame Helpers
//!
//! Vector decomposition (projection, rejection, reflection), quaternion
//! shortcuts, and construction of orthonormal 3x3 bases from partial axis
//! information.
//!
//! Bases are right-handed with columns `[right, up, front]` satisfying
//! `right x up = front` (matching the world X/Y/Z axes).

use glam::{Mat3, Quat, Vec3};

use crate::scalar::{EPSILON, PI};

/// Projection of `d` onto `n`. `n` need not be unit length, but must not be
/// zero.
pub fn proj(d: Vec3, n: Vec3) -> Vec3 {
    n * (d.dot(n) / n.dot(n))
}

/// Component of `d` perpendicular to `n`: `d` minus its projection onto `n`.
pub fn perp(d: Vec3, n: Vec3) -> Vec3 {
    d - proj(d, n)
}

/// Mirror of `d` about the plane with normal `n`.
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - proj(d, n) * 2.0
}

/// Rotates `v` by the quaternion `r`.
pub fn quat_rotate(r: Quat, v: Vec3) -> Vec3 {
    r * v
}

/// The smallest rotation taking direction `d0` to direction `d1`.
///
/// Anti-parallel inputs have no unique answer; the fallback is a half-turn
/// about a generated axis orthogonal to `d0`.
pub fn shortest_arc(d0: Vec3, d1: Vec3) -> Quat {
    let a = d0.normalize();
    let b = d1.normalize();
    let d = a.dot(b);

    if d >= 1.0 - EPSILON {
        return Quat::IDENTITY;
    }
    if d <= -1.0 + EPSILON {
        let axis = a.cross(fallback_reference(a)).normalize();
        return Quat::from_axis_angle(axis, PI);
    }

    let c = a.cross(b);
    Quat::from_xyzw(c.x, c.y, c.z, 1.0 + d).normalize()
}

/// Right axis (first column) of a basis matrix.
pub fn right_of(m: &Mat3) -> Vec3 {
    m.x_axis
}

/// Up axis (second column) of a basis matrix.
pub fn up_of(m: &Mat3) -> Vec3 {
    m.y_axis
}

/// Front axis (third column) of a basis matrix.
pub fn front_of(m: &Mat3) -> Vec3 {
    m.z_axis
}

/// Basis with `up` pinned; `front` is bent to orthogonality.
///
/// The two-axis builders require their inputs not to be parallel or
/// anti-parallel; the result is unspecified if they are. Validate first when
/// the inputs come from outside.
pub fn up_front(up: Vec3, front: Vec3) -> Mat3 {
    let up = up.normalize();
    let right = up.cross(front).normalize();
    let front = right.cross(up);
    Mat3::from_cols(right, up, front)
}

/// Basis with `up` pinned; `right` is bent to orthogonality.
pub fn up_right(up: Vec3, right: Vec3) -> Mat3 {
    let up = up.normalize();
    let front = right.cross(up).normalize();
    let right = up.cross(front);
    Mat3::from_cols(right, up, front)
}

/// Basis with `front` pinned; `up` is bent to orthogonality.
pub fn front_up(front: Vec3, up: Vec3) -> Mat3 {
    let front = front.normalize();
    let right = up.cross(front).normalize();
    let up = front.cross(right);
    Mat3::from_cols(right, up, front)
}

/// Basis with `front` pinned; `right` is bent to orthogonality.
pub fn front_right(front: Vec3, right: Vec3) -> Mat3 {
    let front = front.normalize();
    let up = front.cross(right).normalize();
    let right = up.cross(front);
    Mat3::from_cols(right, up, front)
}

/// Basis with `right` pinned; `up` is bent to orthogonality.
pub fn right_up(right: Vec3, up: Vec3) -> Mat3 {
    let right = right.normalize();
    let front = right.cross(up).normalize();
    let up = front.cross(right);
    Mat3::from_cols(right, up, front)
}

/// Basis with `right` pinned; `front` is bent to orthogonality.
pub fn right_front(right: Vec3, front: Vec3) -> Mat3 {
    let right = right.normalize();
    let up = front.cross(right).normalize();
    let front = right.cross(up);
    Mat3::from_cols(right, up, front)
}

/// World axis to resolve the free axes against when only one axis is pinned:
/// world Z, or world X when the pinned axis is nearly parallel to Z.
fn fallback_reference(pinned: Vec3) -> Vec3 {
    if pinned.dot(Vec3::Z).abs() > 0.99 {
        Vec3::X
    } else {
        Vec3::Z
    }
}

/// Basis with only `dir` pinned as the up axis; the other axes are resolved
/// against a fallback world axis.
pub fn pin_up(dir: Vec3) -> Mat3 {
    let up = dir.normalize();
    let right = up.cross(fallback_reference(up)).normalize();
    let front = right.cross(up);
    Mat3::from_cols(right, up, front)
}

/// Basis with only `dir` pinned as the front axis.
pub fn pin_front(dir: Vec3) -> Mat3 {
    let front = dir.normalize();
    let right = fallback_reference(front).cross(front).normalize();
    let up = front.cross(right);
    Mat3::from_cols(right, up, front)
}

/// Basis with only `dir` pinned as the right axis.
pub fn pin_right(dir: Vec3) -> Mat3 {
    let right = dir.normalize();
    let front = right.cross(fallback_reference(right)).normalize();
    let up = front.cross(right);
    Mat3::from_cols(right, up, front)
}

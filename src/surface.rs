//! Derived Surface Geometry
//!
//! Helpers computed from triangle and plane data: face normals, tangent-space
//! vectors for normal mapping, reflection and view matrices, and a couple of
//! scalar conveniences used by culling and distribution code.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

use crate::scalar::{EPSILON, TWO_PI};
use crate::shapes::{Aabb, Plane};

/// A triangle whose positions or texture coordinates are too degenerate to
/// produce the requested result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateTriangle;

impl std::fmt::Display for DegenerateTriangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "degenerate triangle: positions or texture coordinates are singular"
        )
    }
}

impl std::error::Error for DegenerateTriangle {}

/// Unnormalized face normal of a counter-clockwise-wound triangle.
pub fn basic_face_normal_unnormalized(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v1).cross(v3 - v1)
}

/// Unit face normal of a counter-clockwise-wound triangle.
pub fn basic_face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    basic_face_normal_unnormalized(v1, v2, v3).normalize()
}

/// Unit face normal with the homogeneous plane offset in `w`, so the result
/// can be used directly as plane-equation coefficients.
pub fn face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec4 {
    let normal = basic_face_normal(v1, v2, v3);
    Vec4::new(normal.x, normal.y, normal.z, -normal.dot(v1))
}

/// Like [`face_normal`] but without normalizing, for callers that only care
/// about orientation and want to skip the square root.
pub fn face_normal_unnormalized(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec4 {
    let normal = basic_face_normal_unnormalized(v1, v2, v3);
    Vec4::new(normal.x, normal.y, normal.z, -normal.dot(v1))
}

/// Tangent-space vector for a triangle from its positions and texture
/// coordinates.
///
/// Solves the 2x2 system given by the UV deltas along two edges and returns
/// the tangent aligned with the U gradient, flipped if needed so that
/// tangent x binormal agrees with the face normal.
///
/// # Returns
/// * `Ok(tangent)` - Unit tangent vector
/// * `Err(DegenerateTriangle)` - Collinear positions or a singular UV
///   configuration, where no finite tangent exists
pub fn tangent_space_vector(
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    uv1: Vec2,
    uv2: Vec2,
    uv3: Vec2,
) -> Result<Vec3, DegenerateTriangle> {
    let side0 = p1 - p2;
    let side1 = p3 - p1;

    let normal = side1.cross(side0);
    if normal.length_squared() < EPSILON {
        return Err(DegenerateTriangle);
    }
    let normal = normal.normalize();

    let delta_v0 = uv1.y - uv2.y;
    let delta_v1 = uv3.y - uv1.y;
    let tangent = side0 * delta_v1 - side1 * delta_v0;

    let delta_u0 = uv1.x - uv2.x;
    let delta_u1 = uv3.x - uv1.x;
    let binormal = side0 * delta_u1 - side1 * delta_u0;

    if tangent.length_squared() < EPSILON || binormal.length_squared() < EPSILON {
        return Err(DegenerateTriangle);
    }
    let tangent = tangent.normalize();
    let binormal = binormal.normalize();

    if tangent.cross(binormal).dot(normal) < 0.0 {
        Ok(-tangent)
    } else {
        Ok(tangent)
    }
}

/// Householder reflection matrix about a plane with a unit normal.
pub fn reflection_matrix(plane: &Plane) -> Mat4 {
    let n = plane.normal;
    let d = plane.d;
    Mat4::from_cols(
        Vec4::new(1.0 - 2.0 * n.x * n.x, -2.0 * n.y * n.x, -2.0 * n.z * n.x, 0.0),
        Vec4::new(-2.0 * n.x * n.y, 1.0 - 2.0 * n.y * n.y, -2.0 * n.z * n.y, 0.0),
        Vec4::new(-2.0 * n.x * n.z, -2.0 * n.y * n.z, 1.0 - 2.0 * n.z * n.z, 0.0),
        Vec4::new(-2.0 * n.x * d, -2.0 * n.y * d, -2.0 * n.z * d, 1.0),
    )
}

/// View matrix for a camera at `position` with the given orientation: the
/// inverse of the camera's rigid transform, optionally pre-composed with a
/// reflection matrix for mirror rendering.
pub fn view_matrix(position: Vec3, orientation: Quat, reflection: Option<&Mat4>) -> Mat4 {
    let rot_t = Mat3::from_quat(orientation).transpose();
    let trans = -(rot_t * position);

    let mut view = Mat4::from_mat3(rot_t);
    view.w_axis = Vec4::new(trans.x, trans.y, trans.z, 1.0);

    match reflection {
        Some(reflect) => view * *reflect,
        None => view,
    }
}

/// Gaussian (normal) distribution density at `x` for the given mean offset
/// and standard-deviation scale.
pub fn gaussian(x: f32, offset: f32, scale: f32) -> f32 {
    let nom = (-(x - offset) * (x - offset) / (2.0 * scale * scale)).exp();
    let denom = scale * TWO_PI.sqrt();
    nom / denom
}

/// Bounding radius of an axis-aligned box: half its diagonal length.
pub fn bounding_radius_from_aabb(aabb: &Aabb) -> f32 {
    aabb.bounding_radius()
}

//! Intersection Tests
//!
//! Ray/shape and shape/shape intersection queries over the types in
//! [`crate::shapes`].
//!
//! Parametric tests return `Option<f32>`: the distance along the ray (in
//! multiples of its direction) on a hit, `None` on a miss. A miss is the
//! normal outcome of a geometric query, not an error. Boolean tests return
//! `bool`.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection: the ray is clipped
//! against the axis-aligned interval of each axis in turn, intersecting the
//! entry/exit parameter ranges.

use glam::{Vec2, Vec3};

use crate::scalar::EPSILON;
use crate::shapes::{Aabb, Plane, PlaneSide, Ray, Sphere};

/// Ray / plane intersection.
///
/// Returns `None` when the ray is parallel to the plane (denominator within
/// [`EPSILON`] of zero) or the intersection lies behind the ray origin.
pub fn ray_plane(ray: &Ray, plane: &Plane) -> Option<f32> {
    let denom = plane.normal.dot(ray.direction);
    if denom.abs() < EPSILON {
        // Parallel to the plane
        return None;
    }
    let t = -(plane.normal.dot(ray.origin) + plane.d) / denom;
    (t >= 0.0).then_some(t)
}

/// Ray / sphere intersection.
///
/// # Arguments
/// * `ray` - The ray to test
/// * `sphere` - The sphere to test against
/// * `discard_inside` - When true, an origin inside the sphere counts as a
///   miss; when false, the exit-point distance is reported instead
///
/// # Returns
/// * `Some(t)` - Distance to the nearest intersection in front of the origin
/// * `None` - No intersection, or the origin was inside and discarded
pub fn ray_sphere(ray: &Ray, sphere: &Sphere, discard_inside: bool) -> Option<f32> {
    // Work relative to the sphere center
    let rel = ray.origin - sphere.center;
    let radius2 = sphere.radius * sphere.radius;

    if discard_inside && rel.length_squared() <= radius2 {
        return None;
    }

    // Quadratic in t: |rel + t * dir|^2 = r^2
    let a = ray.direction.length_squared();
    let b = 2.0 * rel.dot(ray.direction);
    let c = rel.length_squared() - radius2;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let mut t = (-b - sqrt_disc) / (2.0 * a);
    if t < 0.0 {
        // Entry point is behind the origin; fall back to the exit point
        t = (-b + sqrt_disc) / (2.0 * a);
    }
    (t >= 0.0).then_some(t)
}

/// Clips the ray against the box slabs. Returns the unclamped parameter span
/// (near may be negative when the origin is inside); `None` when the span is
/// empty or entirely behind the origin.
fn slab_clip(ray: &Ray, aabb: &Aabb) -> Option<(f32, f32)> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

        if dir.abs() < EPSILON {
            // Parallel to this slab: either always inside it or never
            if origin < lo || origin > hi {
                return None;
            }
        } else {
            let inv = 1.0 / dir;
            let mut t1 = (lo - origin) * inv;
            let mut t2 = (hi - origin) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_near = t_near.max(t1);
            t_far = t_far.min(t2);
            if t_near > t_far {
                return None;
            }
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some((t_near, t_far))
}

/// Ray / axis-aligned box intersection, single distance.
///
/// Uses the slab method. An origin inside the box reports the exit distance.
///
/// # Returns
/// * `Some(t)` - Distance to the intersection point (t >= 0)
/// * `None` - No intersection in front of the origin
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let (t_near, t_far) = slab_clip(ray, aabb)?;
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Ray / axis-aligned box intersection, entry and exit distances.
///
/// # Returns
/// * `Some((d1, d2))` - Near and far intersection distances, with
///   `0 <= d1 <= d2` guaranteed (an origin inside the box clamps `d1` to 0)
/// * `None` - No intersection; no distances are produced
pub fn ray_aabb_span(ray: &Ray, aabb: &Aabb) -> Option<(f32, f32)> {
    let (t_near, t_far) = slab_clip(ray, aabb)?;
    Some((t_near.max(0.0), t_far))
}

/// Ray / triangle intersection with a caller-supplied face normal.
///
/// The normal does not need to be unit length: it only contributes through
/// ratios, so any scale cancels out of the distance math.
///
/// # Arguments
/// * `ray` - The ray to test
/// * `a`, `b`, `c` - Triangle vertices
/// * `normal` - Face normal (any length), typically precomputed by the caller
/// * `positive_side` - Allow hits entering against the normal (front face)
/// * `negative_side` - Allow hits entering along the normal (back face)
///
/// # Returns
/// * `Some(t)` - Distance from the ray origin to the intersection point
/// * `None` - No intersection on an enabled side
pub fn ray_triangle(
    ray: &Ray,
    a: Vec3,
    b: Vec3,
    c: Vec3,
    normal: Vec3,
    positive_side: bool,
    negative_side: bool,
) -> Option<f32> {
    let denom = normal.dot(ray.direction);

    if denom > EPSILON {
        if !negative_side {
            return None;
        }
    } else if denom < -EPSILON {
        if !positive_side {
            return None;
        }
    } else {
        // Parallel to the triangle plane (or degenerate normal): even a
        // coplanar ray is treated as a miss since the distance is ambiguous
        return None;
    }

    let t = normal.dot(a - ray.origin) / denom;
    if t < 0.0 {
        return None;
    }

    // Project onto the dominant-axis plane and check the point against the
    // triangle with sign-consistent barycentric areas
    let (i0, i1) = {
        let n = normal.abs();
        let mut i0 = 1;
        let mut i1 = 2;
        if n.y > n.z {
            if n.y > n.x {
                i0 = 0;
            }
        } else if n.z > n.x {
            i1 = 0;
        }
        (i0, i1)
    };

    let u1 = b[i0] - a[i0];
    let v1 = b[i1] - a[i1];
    let u2 = c[i0] - a[i0];
    let v2 = c[i1] - a[i1];
    let u0 = t * ray.direction[i0] + ray.origin[i0] - a[i0];
    let v0 = t * ray.direction[i1] + ray.origin[i1] - a[i1];

    let alpha = u0 * v2 - u2 * v0;
    let beta = u1 * v0 - u0 * v1;
    let area = u1 * v2 - u2 * v1;

    // Tolerance scales with the projected area to keep edge hits stable
    let tolerance = -EPSILON * area;

    if area > 0.0 {
        if alpha < tolerance || beta < tolerance || alpha + beta > area - tolerance {
            return None;
        }
    } else if alpha > tolerance || beta > tolerance || alpha + beta < area - tolerance {
        return None;
    }

    Some(t)
}

/// Ray / triangle intersection computing the face normal internally via the
/// edge cross product.
pub fn ray_triangle_auto(
    ray: &Ray,
    a: Vec3,
    b: Vec3,
    c: Vec3,
    positive_side: bool,
    negative_side: bool,
) -> Option<f32> {
    let normal = crate::surface::basic_face_normal_unnormalized(a, b, c);
    ray_triangle(ray, a, b, c, normal, positive_side, negative_side)
}

/// Ray / convex volume intersection against an ordered list of bounding
/// planes.
///
/// # Arguments
/// * `ray` - The ray to test
/// * `planes` - Planes whose half-space intersection forms the convex volume
/// * `normal_is_outside` - Whether the plane normals point out of the volume
///
/// # Returns
/// * `Some(t)` - Distance to the entry point: the largest crossing distance
///   over the planes separating the origin from the volume, or 0 when the
///   origin is already inside every plane
/// * `None` - The ray passes outside some plane's half-space, or exits the
///   volume before entering it
pub fn ray_convex_planes(ray: &Ray, planes: &[Plane], normal_is_outside: bool) -> Option<f32> {
    let outside = if normal_is_outside {
        PlaneSide::Positive
    } else {
        PlaneSide::Negative
    };

    let mut all_inside = true;
    // Entry: latest crossing of a plane the origin is outside of.
    // Exit: earliest crossing of a plane the origin is inside of.
    let mut entry: Option<f32> = None;
    let mut exit: Option<f32> = None;

    for plane in planes {
        if plane.side(ray.origin) == outside {
            all_inside = false;
            match ray_plane(ray, plane) {
                Some(t) => entry = Some(entry.map_or(t, |e| e.max(t))),
                // Parallel to or heading away from a separating plane
                None => return None,
            }
        } else if let Some(t) = ray_plane(ray, plane) {
            exit = Some(exit.map_or(t, |e| e.min(t)));
        }
    }

    if all_inside {
        // Origin is within the volume
        return Some(0.0);
    }

    let entry = entry?;
    if let Some(exit) = exit {
        if exit < entry {
            return None;
        }
    }
    Some(entry)
}

/// Sphere / axis-aligned box overlap test.
///
/// Clamps the sphere center onto the box and compares the residual distance
/// against the radius.
pub fn sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> bool {
    let closest = sphere.center.clamp(aabb.min, aabb.max);
    (closest - sphere.center).length_squared() <= sphere.radius * sphere.radius
}

/// Plane / axis-aligned box intersection test.
pub fn plane_aabb(plane: &Plane, aabb: &Aabb) -> bool {
    plane.side_of_box(aabb.center(), aabb.half_size()) == PlaneSide::Both
}

/// Sphere / plane intersection test.
///
/// A coarse yes/no: the absolute signed distance from the plane to the center
/// against the radius. Callers needing which side, or by how much, should use
/// [`Plane::distance`] directly.
pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.distance(sphere.center).abs() <= sphere.radius
}

// Near-zero tolerance for the edge cross products in the point-in-triangle
// tests; edge and vertex contact counts as inside.
const TRI_EDGE_TOLERANCE: f32 = 1e-3;

/// Whether a 2D point lies inside a triangle.
///
/// The vertices must be wound consistently, clockwise or counter-clockwise;
/// either order works. Points on edges or vertices count as inside.
pub fn point_in_tri_2d(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let cross = [
        (b - a).perp_dot(p - a),
        (c - b).perp_dot(p - b),
        (a - c).perp_dot(p - c),
    ];
    signs_consistent(cross)
}

/// Whether a 3D point lies inside a triangle.
///
/// Assumes `p` already lies in the triangle's plane. The face normal is taken
/// as a parameter since callers typically have it precomputed; it only
/// orients the sign test, so any length works.
pub fn point_in_tri_3d(p: Vec3, a: Vec3, b: Vec3, c: Vec3, normal: Vec3) -> bool {
    let cross = [
        (b - a).cross(p - a).dot(normal),
        (c - b).cross(p - b).dot(normal),
        (a - c).cross(p - c).dot(normal),
    ];
    signs_consistent(cross)
}

/// True when the non-negligible entries all share a sign. Near-zero entries
/// (colinear or coincident configurations) are ignored.
fn signs_consistent(cross: [f32; 3]) -> bool {
    let zero = [
        cross[0].abs() <= TRI_EDGE_TOLERANCE,
        cross[1].abs() <= TRI_EDGE_TOLERANCE,
        cross[2].abs() <= TRI_EDGE_TOLERANCE,
    ];

    if !zero[0] && !zero[1] && (cross[0] > 0.0) != (cross[1] > 0.0) {
        return false;
    }
    if (!zero[0] && !zero[2] && (cross[0] > 0.0) != (cross[2] > 0.0))
        || (!zero[1] && !zero[2] && (cross[1] > 0.0) != (cross[2] > 0.0))
    {
        return false;
    }
    true
}

//! Geometric Shape Types
//!
//! The caller-owned value types the intersection algorithms operate on: rays,
//! planes, spheres and axis-aligned boxes. All are plain `#[repr(C)]` data
//! carriers with GPU-friendly layouts; the algorithms never retain references
//! to them past a call.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scalar::EPSILON;

/// A half-line: origin plus a direction.
///
/// The direction is stored as given. Intersection distances are measured in
/// multiples of it, so callers wanting euclidean distances should pass a
/// normalized direction. A zero direction is a caller error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vec3,
    /// Direction the ray extends in.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray from an origin and a direction.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Which side of a plane something lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// The half-space the normal points into.
    Positive,
    /// The half-space the normal points away from.
    Negative,
    /// On the plane, or straddling it (for extended shapes).
    Both,
}

/// An infinite plane satisfying `normal . p + d = 0`.
///
/// The constructors produce a unit normal; the distance helpers assume one.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Plane {
    /// Plane normal.
    pub normal: Vec3,
    /// Offset term of the plane equation.
    pub d: f32,
}

impl Plane {
    /// Creates a plane directly from its equation coefficients.
    pub const fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane through `point` with the given normal (normalized here).
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Plane through three non-collinear points, wound counter-clockwise as
    /// seen from the positive side.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self {
            normal,
            d: -normal.dot(a),
        }
    }

    /// Signed distance from the plane to `point`; positive on the side the
    /// normal points into.
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Classifies a point against the plane. Points within [`EPSILON`] of the
    /// plane report [`PlaneSide::Both`].
    pub fn side(&self, point: Vec3) -> PlaneSide {
        let dist = self.distance(point);
        if dist > EPSILON {
            PlaneSide::Positive
        } else if dist < -EPSILON {
            PlaneSide::Negative
        } else {
            PlaneSide::Both
        }
    }

    /// Classifies an axis-aligned box given by center and half-size.
    /// [`PlaneSide::Both`] means the box straddles the plane.
    pub fn side_of_box(&self, center: Vec3, half_size: Vec3) -> PlaneSide {
        let dist = self.distance(center);
        let max_abs_dist = self.normal.abs().dot(half_size);
        if dist > max_abs_dist {
            PlaneSide::Positive
        } else if dist < -max_abs_dist {
            PlaneSide::Negative
        } else {
            PlaneSide::Both
        }
    }
}

/// A sphere: center plus radius.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere from its center and radius.
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True when `point` lies inside or on the sphere.
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// An axis-aligned bounding box.
///
/// `min` components must not exceed their `max` counterparts; the helpers
/// assume that invariant rather than checking it on every call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its minimum and maximum corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered at `center` extending `half_size` in each direction.
    pub fn from_center_half_size(center: Vec3, half_size: Vec3) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-extent along each axis.
    pub fn half_size(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Full extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True when `point` lies inside or on the box (faces inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Smallest box containing both boxes.
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Radius of the tightest sphere around the box center that contains the
    /// box: half the diagonal length.
    pub fn bounding_radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

static_assertions::assert_eq_size!(Ray, [f32; 6]);
static_assertions::assert_eq_size!(Plane, [f32; 4]);
static_assertions::assert_eq_size!(Sphere, [f32; 4]);
static_assertions::assert_eq_size!(Aabb, [f32; 6]);

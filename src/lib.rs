//! Geomath Library
//!
//! A strongly-typed 2D/3D geometry and scalar-math core for game-oriented
//! runtimes: angle arithmetic that keeps radians and degrees apart at compile
//! time, a scalar facade with an optional lookup-table fast path for
//! trigonometry, and a suite of ray/shape intersection tests.
//!
//! Vectors, matrices and quaternions come from [`glam`]; this crate layers
//! the shape types, the angle discipline and the algorithms on top. It has no
//! dependency on any renderer, window system or script VM.
//!
//! # Modules
//!
//! - [`angle`] - `Radian`/`Degree`/`Angle` wrappers and the angle-unit policy
//! - [`scalar`] - Constants, epsilon comparisons, trig/exp/log wrappers,
//!   generic clamp/wrap, interpolation and curve evaluation
//! - [`trig_table`] - Precomputed sine/tangent tables for table-mode trig
//! - [`shapes`] - `Ray`, `Plane`, `Sphere`, `Aabb` value types
//! - [`intersect`] - Ray/shape and shape/shape intersection tests
//! - [`surface`] - Face normals, tangent space, reflection/view matrices
//! - [`vector`] - Projection/reflection and orthonormal basis construction
//! - [`random`] - Explicit, seedable uniform random source
//! - [`settings`] - JSON startup settings (angle unit, table resolution)
//!
//! # Example
//!
//! ```
//! use geomath::{Aabb, Radian, Ray, Sphere};
//! use geomath::intersect::{ray_aabb, ray_sphere};
//! use glam::Vec3;
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
//!
//! let sphere = Sphere::new(Vec3::ZERO, 1.0);
//! assert_eq!(ray_sphere(&ray, &sphere, true), Some(4.0));
//!
//! let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
//! assert_eq!(ray_aabb(&ray, &aabb), Some(4.0));
//!
//! let quarter_turn = Radian::new(geomath::scalar::HALF_PI);
//! assert!((quarter_turn.to_degrees() - 90.0).abs() < 1e-4);
//! ```

pub mod angle;
pub mod intersect;
pub mod random;
pub mod scalar;
pub mod settings;
pub mod shapes;
pub mod surface;
pub mod trig_table;
pub mod vector;

// Re-export the everyday types at crate level for convenience
pub use angle::{Angle, AngleUnit, Degree, Radian, angle_unit, set_angle_unit};
pub use random::MathRng;
pub use settings::{MathSettings, SettingsError};
pub use shapes::{Aabb, Plane, PlaneSide, Ray, Sphere};
pub use surface::DegenerateTriangle;
pub use trig_table::TrigTable;

//! Core types for the physics simulation.
//!
//! All units are SI:
//! - Position: meters (m)
//! - Velocity: meters per second (m/s)
//! - Gravity: meters per second squared (m/s²)
//! - Mass: kilograms (kg, derived from radius)

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities, and gravity.
///
/// Coordinate system:
/// - X: horizontal
/// - Y: vertical (positive upward)
/// - Z: horizontal, toward the viewer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector pointing straight up.
    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if magnitude is zero
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < constants::EPSILON {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }

    /// Reflect this vector about a unit normal: v − 2·dot(v, n)·n
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * 2.0 * self.dot(normal)
    }

    /// Project this vector onto another vector
    pub fn project_onto(&self, other: &Self) -> Self {
        let other_mag_sq = other.magnitude_squared();
        if other_mag_sq < constants::EPSILON {
            Self::ZERO
        } else {
            *other * (self.dot(other) / other_mag_sq)
        }
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// World
// =============================================================================

/// Immutable environment parameters: gravity and the reference floor height.
///
/// Owned by the engine and replaced wholesale on reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Gravity in m/s²
    pub gravity: Vec3,
    /// Floor plane height in meters
    pub floor_height: f64,
}

impl World {
    /// Earth gravity, floor at y = 0
    pub const EARTH: World = World {
        gravity: Vec3::new(0.0, -9.807, 0.0),
        floor_height: 0.0,
    };

    /// Moon gravity, floor at y = 0
    pub const MOON: World = World {
        gravity: Vec3::new(0.0, -1.62, 0.0),
        floor_height: 0.0,
    };

    /// No gravity at all
    pub const ZERO: World = World {
        gravity: Vec3::ZERO,
        floor_height: 0.0,
    };
}

impl Default for World {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Sphere
// =============================================================================

fn default_radius() -> f64 {
    Sphere::DEFAULT_RADIUS
}

/// A movable body: position, velocity, and a radius fixed at construction.
///
/// Mass is derived from the radius as the sphere volume (4/3)·π·r³, a
/// volumetric proxy rather than a density-normalized mass. Only mass ratios
/// enter the collision response, so the missing density constant cancels out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Position in meters
    pub position: Vec3,
    /// Velocity in meters per second
    #[serde(default)]
    pub velocity: Vec3,
    /// Radius in meters, strictly positive
    #[serde(default = "default_radius")]
    pub radius: f64,
}

impl Sphere {
    pub const DEFAULT_RADIUS: f64 = 0.5;

    pub fn new(position: Vec3, velocity: Vec3, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Sphere at rest with the default radius
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO, Self::DEFAULT_RADIUS)
    }

    /// Mass in kilograms, derived from the radius
    pub fn mass(&self) -> f64 {
        (4.0 / 3.0) * std::f64::consts::PI * self.radius.powi(3)
    }

    /// Translational kinetic energy: ½·m·|v|²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.magnitude_squared()
    }
}

// =============================================================================
// Plane
// =============================================================================

/// An immovable half-space boundary.
///
/// Defined by a support point the plane passes through and a unit normal
/// pointing away from the solid side. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// A point the plane passes through
    pub support_vector: Vec3,
    /// Unit normal, points away from the solid side
    pub normal_vector: Vec3,
}

impl Plane {
    /// Create a plane through `position` facing `direction`.
    ///
    /// The direction is normalized here so the unit-normal invariant holds
    /// for every plane built through this constructor.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            support_vector: position,
            normal_vector: direction.normalized(),
        }
    }

    /// Horizontal floor plane at the given height, normal pointing up
    pub fn floor(height: f64) -> Self {
        Self::new(Vec3::new(0.0, height, 0.0), Vec3::UP)
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Physical constants used in the simulation.
pub mod constants {
    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================

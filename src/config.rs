//! Engine configurations: one complete scenario as a plain value.
//!
//! A configuration bundles the initial spheres and planes, the world, the
//! integration scheme, and the cadence hints for the driving render loop.
//! The engine never mutates a configuration in place; reconfiguring
//! replaces its internal state wholesale.
//!
//! Named presets cover the classic demo scenarios, from a single dropped
//! sphere up to head-on collisions inside a closed box of planes. They are
//! built by chaining the small `with_*` helpers, which makes them easy to
//! tweak in calling code.

use serde::{Deserialize, Serialize};

use crate::integrator::IntegrationScheme;
use crate::types::{Plane, Sphere, Vec3, World};

fn default_iteration_count() -> u32 {
    1
}

fn default_use_real_elapsed_time() -> bool {
    true
}

/// A complete scenario: bodies, world, scheme, and driver cadence hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub planes: Vec<Plane>,
    pub spheres: Vec<Sphere>,
    pub world: World,
    pub algorithm: IntegrationScheme,
    /// How many engine steps the driving loop performs per frame.
    pub iteration_count: u32,
    /// Whether the driving loop feeds real frame times into `step` or pins
    /// the elapsed time to a constant.
    pub use_real_elapsed_time: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            planes: Vec::new(),
            spheres: Vec::new(),
            world: World::ZERO,
            algorithm: IntegrationScheme::default(),
            iteration_count: default_iteration_count(),
            use_real_elapsed_time: default_use_real_elapsed_time(),
        }
    }
}

impl EngineConfig {
    /// Empty scenario: no bodies, zero gravity, midpoint integration.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Builder helpers
    // -------------------------------------------------------------------------

    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a resting sphere with the default radius.
    pub fn with_sphere_at(self, position: Vec3) -> Self {
        self.with_sphere(Sphere::at(position))
    }

    pub fn with_plane(mut self, plane: Plane) -> Self {
        self.planes.push(plane);
        self
    }

    /// Add a plane through `position` facing `direction`.
    pub fn with_plane_at(self, position: Vec3, direction: Vec3) -> Self {
        self.with_plane(Plane::new(position, direction))
    }

    pub fn with_world(mut self, world: World) -> Self {
        self.world = world;
        self
    }

    pub fn with_algorithm(mut self, algorithm: IntegrationScheme) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_iteration_count(mut self, iteration_count: u32) -> Self {
        self.iteration_count = iteration_count;
        self
    }

    pub fn with_real_elapsed_time(mut self, use_real_elapsed_time: bool) -> Self {
        self.use_real_elapsed_time = use_real_elapsed_time;
        self
    }

    /// Overwrite the velocity of every sphere added so far.
    pub fn with_velocity_of_all_spheres(mut self, velocity: Vec3) -> Self {
        for sphere in &mut self.spheres {
            sphere.velocity = velocity;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Named presets
    // -------------------------------------------------------------------------

    /// One sphere floating at (0, 3, 0), nothing else.
    pub fn single_sphere() -> Self {
        Self::new().with_sphere_at(Vec3::new(0.0, 3.0, 0.0))
    }

    /// The single sphere, drifting slowly along +Z.
    pub fn drifting_sphere() -> Self {
        Self::single_sphere().with_velocity_of_all_spheres(Vec3::new(0.0, 0.0, 0.2))
    }

    /// The single sphere in free fall under Earth gravity, no floor.
    pub fn free_fall() -> Self {
        Self::single_sphere().with_world(World::EARTH)
    }

    /// A sphere dropped onto a floor plane under Earth gravity.
    pub fn falling_sphere() -> Self {
        Self::free_fall().with_plane_at(Vec3::ZERO, Vec3::UP)
    }

    /// The dropped sphere with an initial upward/forward kick.
    pub fn bouncing_sphere() -> Self {
        Self::falling_sphere().with_velocity_of_all_spheres(Vec3::new(0.0, 0.5, 0.5))
    }

    /// Two walls facing each other on the x axis, no gravity.
    fn walled_corridor() -> Self {
        Self::new()
            .with_plane_at(Vec3::new(4.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0))
            .with_plane_at(Vec3::new(-4.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0))
    }

    /// The corridor closed off above and below as well.
    fn walled_box_2d() -> Self {
        Self::walled_corridor()
            .with_plane_at(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, -1.0, 0.0))
            .with_plane_at(Vec3::new(0.0, -4.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
    }

    /// Fully closed box: walls on all six sides.
    fn walled_box_3d() -> Self {
        Self::walled_box_2d()
            .with_plane_at(Vec3::new(0.0, 0.0, 4.0), Vec3::new(0.0, 0.0, -1.0))
            .with_plane_at(Vec3::new(0.0, 0.0, -4.0), Vec3::new(0.0, 0.0, 1.0))
    }

    /// Head-on collision along the x axis between two walls.
    pub fn sphere_collision_1d() -> Self {
        Self::walled_corridor()
            .with_sphere(Sphere::new(
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Sphere::DEFAULT_RADIUS,
            ))
            .with_sphere(Sphere::new(
                Vec3::new(-2.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Sphere::DEFAULT_RADIUS,
            ))
    }

    /// Diagonal collision inside a 2D box of four walls.
    pub fn sphere_collision_2d() -> Self {
        Self::walled_box_2d()
            .with_sphere(Sphere::new(
                Vec3::new(2.0, 2.0, 0.0),
                Vec3::new(-1.0, -1.0, 0.0).normalized(),
                Sphere::DEFAULT_RADIUS,
            ))
            .with_sphere(Sphere::new(
                Vec3::new(-2.0, -2.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0).normalized(),
                Sphere::DEFAULT_RADIUS,
            ))
    }

    /// Slightly offset diagonal collision in three dimensions.
    pub fn sphere_collision_3d() -> Self {
        Self::walled_box_3d()
            .with_sphere(Sphere::new(
                Vec3::new(2.0, 2.0, 2.0),
                Vec3::new(-1.0, -1.0, -1.0).normalized(),
                Sphere::DEFAULT_RADIUS,
            ))
            .with_sphere(Sphere::new(
                Vec3::new(-2.0, -2.0, -1.0),
                Vec3::new(1.0, 1.0, 1.0).normalized(),
                Sphere::DEFAULT_RADIUS,
            ))
    }

    /// A sphere ricocheting inside a diamond of four inclined walls.
    pub fn inclined_planes() -> Self {
        Self::new()
            .with_plane_at(Vec3::new(-2.0, 2.0, 0.0), Vec3::new(1.0, -1.0, 0.0))
            .with_plane_at(Vec3::new(2.0, 2.0, 0.0), Vec3::new(-1.0, -1.0, 0.0))
            .with_plane_at(Vec3::new(2.0, -2.0, 0.0), Vec3::new(-1.0, 1.0, 0.0))
            .with_plane_at(Vec3::new(-2.0, -2.0, 0.0), Vec3::new(1.0, 1.0, 0.0))
            .with_sphere(Sphere::new(
                Vec3::new(0.0, 2.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Sphere::DEFAULT_RADIUS,
            ))
    }

    /// Every named preset, in demo-menu order.
    pub fn all() -> Vec<EngineConfig> {
        vec![
            Self::single_sphere(),
            Self::drifting_sphere(),
            Self::free_fall(),
            Self::falling_sphere(),
            Self::bouncing_sphere(),
            Self::sphere_collision_1d(),
            Self::sphere_collision_2d(),
            Self::sphere_collision_3d(),
            Self::inclined_planes(),
        ]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_zero_gravity() {
        let config = EngineConfig::default();
        assert!(config.spheres.is_empty());
        assert!(config.planes.is_empty());
        assert_eq!(config.world, World::ZERO);
        assert_eq!(config.algorithm, IntegrationScheme::Midpoint);
        assert_eq!(config.iteration_count, 1);
        assert!(config.use_real_elapsed_time);
    }

    #[test]
    fn test_builders_compose() {
        let config = EngineConfig::new()
            .with_world(World::MOON)
            .with_sphere_at(Vec3::new(0.0, 1.0, 0.0))
            .with_sphere_at(Vec3::new(1.0, 1.0, 0.0))
            .with_plane_at(Vec3::ZERO, Vec3::UP)
            .with_velocity_of_all_spheres(Vec3::new(0.0, 0.0, 1.0))
            .with_iteration_count(4)
            .with_real_elapsed_time(false);

        assert_eq!(config.spheres.len(), 2);
        assert_eq!(config.planes.len(), 1);
        assert_eq!(config.world, World::MOON);
        assert_eq!(config.iteration_count, 4);
        assert!(!config.use_real_elapsed_time);
        for sphere in &config.spheres {
            assert_eq!(sphere.velocity, Vec3::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_builders_do_not_mutate_source() {
        // Presets are values: deriving one scenario from another must leave
        // the base untouched.
        let base = EngineConfig::single_sphere();
        let derived = base
            .clone()
            .with_velocity_of_all_spheres(Vec3::new(0.0, 0.0, 0.2));

        assert_eq!(base.spheres[0].velocity, Vec3::ZERO);
        assert_eq!(derived.spheres[0].velocity, Vec3::new(0.0, 0.0, 0.2));
    }

    #[test]
    fn test_collision_presets_shape() {
        let one_d = EngineConfig::sphere_collision_1d();
        assert_eq!(one_d.spheres.len(), 2);
        assert_eq!(one_d.planes.len(), 2);
        assert_eq!(one_d.world, World::ZERO);

        let two_d = EngineConfig::sphere_collision_2d();
        assert_eq!(two_d.planes.len(), 4);
        // Diagonal speeds are normalized to 1 m/s.
        for sphere in &two_d.spheres {
            assert!((sphere.velocity.magnitude() - 1.0).abs() < 1e-10);
        }

        let three_d = EngineConfig::sphere_collision_3d();
        assert_eq!(three_d.planes.len(), 6);
    }

    #[test]
    fn test_falling_sphere_has_floor() {
        let config = EngineConfig::falling_sphere();
        assert_eq!(config.world, World::EARTH);
        assert_eq!(config.planes.len(), 1);
        assert_eq!(config.planes[0].normal_vector, Vec3::UP);
    }

    #[test]
    fn test_inclined_plane_normals_are_unit() {
        for plane in &EngineConfig::inclined_planes().planes {
            assert!((plane.normal_vector.magnitude() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_all_presets_listed() {
        let presets = EngineConfig::all();
        assert_eq!(presets.len(), 9);
        // Every preset with spheres keeps radii strictly positive.
        for preset in &presets {
            for sphere in &preset.spheres {
                assert!(sphere.radius > 0.0);
            }
        }
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = EngineConfig::sphere_collision_2d();
        let yaml = serde_yaml::to_string(&config).expect("serialize");
        let restored: EngineConfig = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(restored, config);
    }
}

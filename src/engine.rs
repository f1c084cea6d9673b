//! The simulation engine: owns the bodies, runs the per-frame pipeline.
//!
//! One `step` performs, in this fixed order:
//!
//! 1. clamp the caller-supplied elapsed time to [`PhysicsEngine::MAX_DELTA_T`]
//! 2. integrate every sphere (no interactions)
//! 3. detect and resolve every sphere pair, ascending `{i, j}` with `i < j`
//! 4. detect and resolve every sphere × plane contact, ascending indices
//!
//! The pipeline is synchronous and deterministic: identical configurations
//! fed identical elapsed-time sequences produce identical states. Observers
//! are notified inline while collisions are resolved; they receive sphere
//! indices that are positions in the current sphere sequence and become
//! meaningless after the next reconfiguration.

use tracing::{debug, trace};

use crate::collision::{detection, resolution};
use crate::config::EngineConfig;
use crate::integrator::IntegrationScheme;
use crate::types::{Plane, Sphere, Vec3, World};

// =============================================================================
// Collision observers
// =============================================================================

/// Receiver for collision notifications.
///
/// Both methods default to no-ops so an observer only implements the cases
/// it cares about. Delivery is synchronous within `step`; an observer must
/// not call back into the engine.
pub trait CollisionObserver {
    /// Two spheres collided. States are the pre-resolution ones; indices are
    /// positions in the engine's current sphere sequence.
    fn sphere_sphere_collision(
        &mut self,
        _sphere: Sphere,
        _sphere_index: usize,
        _other: Sphere,
        _other_index: usize,
        _contact_point: Vec3,
    ) {
    }

    /// A sphere hit a plane. The sphere state is the post-resolution one;
    /// the contact point belongs to the uncorrected sphere.
    fn sphere_plane_collision(
        &mut self,
        _sphere: Sphere,
        _sphere_index: usize,
        _plane: Plane,
        _plane_index: usize,
        _contact_point: Vec3,
    ) {
    }
}

/// Handle returned by [`PhysicsEngine::add_observer`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

// =============================================================================
// PhysicsEngine
// =============================================================================

/// Owns the sphere/plane collections and the world, and advances them.
pub struct PhysicsEngine {
    world: World,
    algorithm: IntegrationScheme,
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    iteration_count: u32,
    use_real_elapsed_time: bool,
    observers: Vec<(ObserverId, Box<dyn CollisionObserver>)>,
    next_observer_id: u64,
}

impl PhysicsEngine {
    /// Maximum delta time in seconds for one step.
    ///
    /// Elapsed times above this are clamped, so a frame-time spike (e.g.
    /// returning from a pause) cannot blow up the integration.
    pub const MAX_DELTA_T: f64 = 1.0 / 30.0;

    /// Engine with no bodies, under the given world.
    pub fn new(world: World) -> Self {
        Self {
            world,
            algorithm: IntegrationScheme::default(),
            spheres: Vec::new(),
            planes: Vec::new(),
            iteration_count: 1,
            use_real_elapsed_time: true,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Engine initialized from a configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        let mut engine = Self::new(World::ZERO);
        engine.set_configuration(config);
        engine
    }

    // -------------------------------------------------------------------------
    // Configuration and inspection
    // -------------------------------------------------------------------------

    /// Replace spheres, planes, world, and algorithm wholesale.
    ///
    /// Observers stay subscribed. Sphere indices handed out in earlier
    /// collision events refer to the old sequence and must not be reused.
    pub fn set_configuration(&mut self, config: EngineConfig) {
        debug!(
            spheres = config.spheres.len(),
            planes = config.planes.len(),
            "replacing engine configuration"
        );
        self.spheres = config.spheres;
        self.planes = config.planes;
        self.world = config.world;
        self.algorithm = config.algorithm;
        self.iteration_count = config.iteration_count;
        self.use_real_elapsed_time = config.use_real_elapsed_time;
    }

    /// Current configuration as an independent value.
    pub fn configuration(&self) -> EngineConfig {
        EngineConfig {
            spheres: self.spheres.clone(),
            planes: self.planes.clone(),
            world: self.world,
            algorithm: self.algorithm,
            iteration_count: self.iteration_count,
            use_real_elapsed_time: self.use_real_elapsed_time,
        }
    }

    /// Read-only view of the current spheres, for rendering and inspection.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Read-only view of the static planes.
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn world(&self) -> World {
        self.world
    }

    pub fn algorithm(&self) -> IntegrationScheme {
        self.algorithm
    }

    /// Switch the integration scheme at runtime.
    pub fn set_algorithm(&mut self, algorithm: IntegrationScheme) {
        self.algorithm = algorithm;
    }

    /// How many `step` calls the driving loop should issue per frame.
    ///
    /// A cadence hint for the caller; the engine itself always performs
    /// exactly one pipeline pass per `step`.
    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    /// Whether the driving loop should feed real frame times into `step`
    /// or pin the elapsed time to a constant. Also a caller-side policy.
    pub fn uses_real_elapsed_time(&self) -> bool {
        self.use_real_elapsed_time
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Subscribe an observer; the returned id unsubscribes it again.
    pub fn add_observer(&mut self, observer: Box<dyn CollisionObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a previously subscribed observer. Unknown ids are ignored.
    pub fn remove_observer(&mut self, id: ObserverId) {
        self.observers.retain(|(oid, _)| *oid != id);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // -------------------------------------------------------------------------
    // Stepping
    // -------------------------------------------------------------------------

    /// Advance the simulation by the elapsed wall-clock time in seconds.
    ///
    /// Usually called once per rendered frame. The elapsed time is clamped
    /// to [`Self::MAX_DELTA_T`]; with `elapsed_seconds = 0` no motion
    /// occurs but overlapping bodies are still detected and resolved.
    pub fn step(&mut self, elapsed_seconds: f64) {
        let dt = elapsed_seconds.min(Self::MAX_DELTA_T);
        if dt < elapsed_seconds {
            trace!(elapsed_seconds, dt, "clamped oversized timestep");
        }

        self.integrate_spheres(dt);
        self.detect_and_resolve_sphere_pairs();
        self.detect_and_resolve_plane_contacts();
    }

    fn integrate_spheres(&mut self, dt: f64) {
        let (algorithm, world) = (self.algorithm, self.world);
        for sphere in &mut self.spheres {
            algorithm.advance(sphere, &world, dt);
        }
    }

    /// Test every unordered sphere pair `{i, j}`, `i < j`, exactly once.
    ///
    /// Observers see the pre-resolution states of both participants.
    fn detect_and_resolve_sphere_pairs(&mut self) {
        for i in 0..self.spheres.len() {
            for j in (i + 1)..self.spheres.len() {
                let (a, b) = (self.spheres[i], self.spheres[j]);
                if !detection::spheres_collide(&a, &b) {
                    continue;
                }

                let contact_point = detection::sphere_sphere_contact_point(&a, &b);
                self.notify_sphere_sphere(a, i, b, j, contact_point);

                let (mut a, mut b) = (a, b);
                resolution::resolve_sphere_sphere(&mut a, &mut b);
                self.spheres[i] = a;
                self.spheres[j] = b;
            }
        }
    }

    /// Test every sphere against every plane, ascending sphere index then
    /// ascending plane index. Runs after all sphere pairs are resolved.
    fn detect_and_resolve_plane_contacts(&mut self) {
        for i in 0..self.spheres.len() {
            for p in 0..self.planes.len() {
                let plane = self.planes[p];
                if !detection::sphere_collides_plane(&self.spheres[i], &plane) {
                    continue;
                }

                let mut sphere = self.spheres[i];
                let contact_point =
                    resolution::resolve_sphere_plane(&mut sphere, &plane, &self.world);
                self.spheres[i] = sphere;

                self.notify_sphere_plane(sphere, i, plane, p, contact_point);
            }
        }
    }

    fn notify_sphere_sphere(
        &mut self,
        sphere: Sphere,
        sphere_index: usize,
        other: Sphere,
        other_index: usize,
        contact_point: Vec3,
    ) {
        for (_, observer) in &mut self.observers {
            observer.sphere_sphere_collision(sphere, sphere_index, other, other_index, contact_point);
        }
    }

    fn notify_sphere_plane(
        &mut self,
        sphere: Sphere,
        sphere_index: usize,
        plane: Plane,
        plane_index: usize,
        contact_point: Vec3,
    ) {
        for (_, observer) in &mut self.observers {
            observer.sphere_plane_collision(sphere, sphere_index, plane, plane_index, contact_point);
        }
    }

    // -------------------------------------------------------------------------
    // Snapshotting
    // -------------------------------------------------------------------------

    /// Independent deep copy of the live engine for speculative stepping.
    ///
    /// The copy owns its own sphere and plane sequences; stepping it cannot
    /// perturb this engine. Observers are not carried over, so a speculative
    /// run is silent unless the caller subscribes new ones.
    pub fn snapshot(&self) -> PhysicsEngine {
        PhysicsEngine {
            world: self.world,
            algorithm: self.algorithm,
            spheres: self.spheres.clone(),
            planes: self.planes.clone(),
            iteration_count: self.iteration_count,
            use_real_elapsed_time: self.use_real_elapsed_time,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }
}

impl Default for PhysicsEngine {
    /// Engine under Earth gravity with no bodies.
    fn default() -> Self {
        Self::new(World::EARTH)
    }
}

impl std::fmt::Debug for PhysicsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhysicsEngine")
            .field("world", &self.world)
            .field("algorithm", &self.algorithm)
            .field("spheres", &self.spheres)
            .field("planes", &self.planes)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

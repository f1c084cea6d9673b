//! # Bounce Core
//!
//! An interactive rigid-body point-mass simulation: spheres moving under
//! gravity, colliding elastically with each other and with static planes.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, Sphere, Plane, World)
//! - `integrator`: Numerical integration (explicit Euler, semi-implicit midpoint)
//! - `collision`: Detection and resolution (elastic exchange, de-penetration)
//! - `engine`: Main orchestrator with collision events and snapshotting
//! - `config`: Scenario values, builder helpers, and named presets
//! - `scenario`: YAML-based scenario file loader
//!
//! Rendering, input, and UI live outside this crate; they drive the engine
//! through a configuration, a per-frame [`PhysicsEngine::step`] call, and
//! collision observers.
//!
//! ## Example
//!
//! ```
//! use bounce_core::{EngineConfig, PhysicsEngine};
//!
//! let mut engine = PhysicsEngine::from_config(EngineConfig::falling_sphere());
//! for _ in 0..60 {
//!     engine.step(1.0 / 60.0);
//! }
//! assert!(engine.spheres()[0].position.y >= engine.spheres()[0].radius - 1e-9);
//! ```

pub mod collision;
pub mod config;
pub mod engine;
pub mod integrator;
pub mod scenario;
pub mod types;

pub use config::EngineConfig;
pub use engine::{CollisionObserver, ObserverId, PhysicsEngine};
pub use integrator::IntegrationScheme;
pub use scenario::{ScenarioError, ScenarioLoader};
pub use types::{Plane, Sphere, Vec3, World};

//! Collision detection and resolution for the sphere simulation.
//!
//! This module handles:
//! - **Detection**: signed-distance overlap tests between sphere pairs and
//!   between spheres and static planes, plus contact-point computation
//! - **Resolution**: elastic impulse exchange for sphere pairs, reflection
//!   and de-penetration for sphere-plane contacts
//!
//! Detection is purely discrete: a test looks at the current positions only,
//! never at the path travelled during the step. A sphere fast enough to pass
//! entirely through a thin feature within one (clamped) timestep will not be
//! caught; this is an accepted limitation of the model.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;

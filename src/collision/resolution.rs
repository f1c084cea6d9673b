//! Collision response: velocity exchange and overlap removal.
//!
//! ## Sphere vs sphere
//!
//! The velocity of each body is split into the component along the line of
//! centers (`vn`, the normal component) and the orthogonal remainder (`ve`,
//! the tangential component). The classic one-dimensional elastic collision
//! formula is applied to the normal components using the derived masses;
//! the tangential components pass through untouched. Momentum and kinetic
//! energy are conserved exactly: the model has no restitution loss and no
//! friction.
//!
//! Overlap is then removed by pushing both bodies apart along the line of
//! centers, each by a share proportional to its normal speed. Two bodies
//! with zero normal speed are left overlapping: resting contact is not
//! fully resolved, a known limitation.
//!
//! ## Sphere vs plane
//!
//! The sphere is mirrored back across the plane by twice the penetration
//! depth and its velocity is reflected about the plane normal. A small
//! correction then repairs the gravity that was integrated between the
//! moment the surface was actually crossed and the moment the overlap was
//! detected, which noticeably reduces jitter on resting contact.

use crate::collision::detection;
use crate::types::{constants, Plane, Sphere, Vec3, World};

/// Resolve an elastic collision between two overlapping spheres.
///
/// Call only on pairs already known to collide. Mutates both velocities
/// (momentum-conserving exchange along the line of centers) and both
/// positions (de-penetration). Coincident centers degrade gracefully:
/// the full velocities are exchanged through the elastic formula and no
/// positional correction is applied.
pub fn resolve_sphere_sphere(a: &mut Sphere, b: &mut Sphere) {
    let nr = b.position - a.position;
    let nr_mag_sq = nr.magnitude_squared();

    // Normal/tangential split. With no usable separation axis the whole
    // velocity is treated as normal, so the bodies still exchange momentum.
    let (vn_a, ve_a, vn_b, ve_b) = if nr_mag_sq < constants::EPSILON {
        (a.velocity, Vec3::ZERO, b.velocity, Vec3::ZERO)
    } else {
        let vn_a = nr * (nr.dot(&a.velocity) / nr_mag_sq);
        let vn_b = nr * (nr.dot(&b.velocity) / nr_mag_sq);
        (vn_a, a.velocity - vn_a, vn_b, b.velocity - vn_b)
    };

    // 1-D elastic collision along the normal axis, mass-weighted.
    let mass_a = a.mass();
    let mass_b = b.mass();
    let mass_sum = mass_a + mass_b;

    let new_vn_a = (vn_b * (2.0 * mass_b) + vn_a * (mass_a - mass_b)) / mass_sum;
    let new_vn_b = (vn_a * (2.0 * mass_a) + vn_b * (mass_b - mass_a)) / mass_sum;

    a.velocity = new_vn_a + ve_a;
    b.velocity = new_vn_b + ve_b;

    if nr_mag_sq < constants::EPSILON {
        return;
    }

    // De-penetration: each body takes a share of the (negative) penetration
    // distance proportional to its own normal speed. Both shares vanish
    // when neither body was moving along the normal.
    let normal = nr.normalized();
    let combined_vn = vn_a.magnitude() + vn_b.magnitude();
    if combined_vn < constants::EPSILON {
        return;
    }
    let share_a = 2.0 * vn_a.magnitude() / combined_vn;
    let share_b = 2.0 * vn_b.magnitude() / combined_vn;

    // The second move uses the distance left after the first, so the two
    // corrections together close the full overlap without overshooting.
    let remaining = detection::sphere_sphere_distance(a, b);
    a.position += normal * (share_a * remaining);
    let remaining = detection::sphere_sphere_distance(a, b);
    b.position -= normal * (share_b * remaining);
}

/// Resolve a collision between a penetrating sphere and a static plane.
///
/// Repositions the sphere by mirroring it across the plane, reflects the
/// velocity about the plane normal, and compensates the gravity already
/// integrated since the surface was crossed. Returns the contact point of
/// the uncorrected sphere for event reporting.
pub fn resolve_sphere_plane(sphere: &mut Sphere, plane: &Plane, world: &World) -> Vec3 {
    let distance = detection::sphere_plane_distance(sphere, plane);
    let contact_point = detection::sphere_plane_contact_point(sphere, plane, distance);

    // Mirror across the plane: moving by twice the penetration puts the
    // surface gap at +|distance|.
    sphere.position -= plane.normal_vector * (distance * 2.0);
    sphere.velocity = sphere.velocity.reflect(&plane.normal_vector);

    // Gravity was applied for the whole step even though the sphere spent
    // the tail of it behind the plane. Estimate that tail from the
    // penetration depth and the rebound speed, then swap the wrongly
    // directed gravity contribution for the correct one.
    let vn = sphere.velocity.project_onto(&plane.normal_vector);
    let vn_mag = vn.magnitude();
    if vn_mag > constants::EPSILON {
        let time_since_crossing = (distance / vn_mag).abs();
        let gravity_change = world.gravity * time_since_crossing;
        sphere.velocity -= gravity_change.reflect(&plane.normal_vector);
        sphere.velocity += gravity_change;
    }

    contact_point
}

// =============================================================================
// Tests
// =============================================================================

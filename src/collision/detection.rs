//! Overlap tests between spheres and between spheres and planes.
//!
//! Everything here is expressed through signed distances: the gap between
//! two surfaces, negative when they overlap. Touching (distance exactly
//! zero) counts as colliding.

use crate::types::{Plane, Sphere, Vec3};

/// Signed surface distance between two spheres.
///
/// Euclidean distance between the centers minus the sum of the radii.
/// Negative when the spheres overlap.
pub fn sphere_sphere_distance(a: &Sphere, b: &Sphere) -> f64 {
    a.position.distance(&b.position) - a.radius - b.radius
}

/// Signed distance from a sphere's surface to a plane.
///
/// Distance of the center from the plane along the normal, minus the radius.
/// Negative when the sphere penetrates the plane.
pub fn sphere_plane_distance(sphere: &Sphere, plane: &Plane) -> f64 {
    (sphere.position - plane.support_vector).dot(&plane.normal_vector) - sphere.radius
}

/// True when the two spheres touch or overlap.
pub fn spheres_collide(a: &Sphere, b: &Sphere) -> bool {
    sphere_sphere_distance(a, b) <= 0.0
}

/// True when the sphere touches or penetrates the plane.
pub fn sphere_collides_plane(sphere: &Sphere, plane: &Plane) -> bool {
    sphere_plane_distance(sphere, plane) <= 0.0
}

/// Contact point on the surface of `a` facing `b`.
///
/// With coincident centers there is no direction to project along and the
/// center of `a` is returned instead.
pub fn sphere_sphere_contact_point(a: &Sphere, b: &Sphere) -> Vec3 {
    a.position + (b.position - a.position).normalized() * a.radius
}

/// Contact point of a penetrating sphere on a plane.
///
/// Projects the center onto the plane surface along the normal using the
/// current signed `distance`. Callers that want the contact of the
/// uncorrected state must compute this before any positional correction.
pub fn sphere_plane_contact_point(sphere: &Sphere, plane: &Plane, distance: f64) -> Vec3 {
    sphere.position - plane.normal_vector * (distance + sphere.radius)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at_x(x: f64, radius: f64) -> Sphere {
        Sphere::new(Vec3::new(x, 0.0, 0.0), Vec3::ZERO, radius)
    }

    #[test]
    fn test_separated_spheres_positive_distance() {
        let a = sphere_at_x(0.0, 0.5);
        let b = sphere_at_x(3.0, 0.5);
        assert!((sphere_sphere_distance(&a, &b) - 2.0).abs() < 1e-10);
        assert!(!spheres_collide(&a, &b));
    }

    #[test]
    fn test_touching_spheres_collide() {
        let a = sphere_at_x(0.0, 0.5);
        let b = sphere_at_x(1.0, 0.5);
        assert!(sphere_sphere_distance(&a, &b).abs() < 1e-10);
        assert!(spheres_collide(&a, &b));
    }

    #[test]
    fn test_overlapping_spheres_negative_distance() {
        let a = sphere_at_x(0.0, 0.5);
        let b = sphere_at_x(0.6, 0.5);
        assert!((sphere_sphere_distance(&a, &b) + 0.4).abs() < 1e-10);
        assert!(spheres_collide(&a, &b));
    }

    #[test]
    fn test_sphere_plane_distance() {
        let floor = Plane::floor(0.0);
        let above = Sphere::new(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, 0.5);
        let resting = Sphere::new(Vec3::new(0.0, 0.5, 0.0), Vec3::ZERO, 0.5);
        let sunk = Sphere::new(Vec3::new(0.0, 0.2, 0.0), Vec3::ZERO, 0.5);

        assert!((sphere_plane_distance(&above, &floor) - 1.5).abs() < 1e-10);
        assert!(sphere_plane_distance(&resting, &floor).abs() < 1e-10);
        assert!((sphere_plane_distance(&sunk, &floor) + 0.3).abs() < 1e-10);

        assert!(!sphere_collides_plane(&above, &floor));
        assert!(sphere_collides_plane(&resting, &floor));
        assert!(sphere_collides_plane(&sunk, &floor));
    }

    #[test]
    fn test_plane_distance_uses_support_point() {
        // Wall at x = 4 facing -X: a sphere at x = 2 with r = 0.5 has 1.5m
        // of clearance.
        let wall = Plane::new(Vec3::new(4.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let sphere = sphere_at_x(2.0, 0.5);
        assert!((sphere_plane_distance(&sphere, &wall) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_sphere_sphere_contact_point() {
        let a = sphere_at_x(0.0, 0.5);
        let b = sphere_at_x(1.0, 0.5);
        let point = sphere_sphere_contact_point(&a, &b);
        assert!((point - Vec3::new(0.5, 0.0, 0.0)).magnitude() < 1e-10);
    }

    #[test]
    fn test_contact_point_with_coincident_centers() {
        let a = sphere_at_x(0.0, 0.5);
        let b = sphere_at_x(0.0, 0.5);
        // No direction to project along: falls back to the center.
        assert_eq!(sphere_sphere_contact_point(&a, &b), a.position);
    }

    #[test]
    fn test_sphere_plane_contact_point() {
        let floor = Plane::floor(0.0);
        let sphere = Sphere::new(Vec3::new(1.0, 0.3, 2.0), Vec3::ZERO, 0.5);
        let distance = sphere_plane_distance(&sphere, &floor);
        let point = sphere_plane_contact_point(&sphere, &floor, distance);
        // Contact sits on the plane, directly below the center.
        assert!((point - Vec3::new(1.0, 0.0, 2.0)).magnitude() < 1e-10);
    }
}

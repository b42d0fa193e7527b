//! Ray construction and ray-geometry intersection for selection.

use crate::math::{Vector3, EPSILON};
use crate::mesh::{Mesh, Triangle};

/// A ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// True if the ray hits any triangle of the mesh. Linear in the
    /// triangle count; scenes here are small enough that no acceleration
    /// structure is warranted.
    pub fn intersects_mesh(&self, mesh: &Mesh) -> bool {
        mesh.triangles()
            .iter()
            .any(|triangle| self.intersects_triangle(triangle))
    }

    /// Möller–Trumbore ray-triangle intersection test.
    pub fn intersects_triangle(&self, triangle: &Triangle) -> bool {
        let edge1 = triangle.v1 - triangle.v0;
        let edge2 = triangle.v2 - triangle.v0;

        let h = self.direction.cross(edge2);
        let a = edge1.dot(h);

        // Determinant near zero: ray parallel to the triangle plane
        if a.abs() < EPSILON {
            return false;
        }

        let f = 1.0 / a;
        let s = self.origin - triangle.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return false;
        }

        let q = s.cross(edge1);
        let v = f * self.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return false;
        }

        // t > EPSILON rejects hits behind or at the origin
        let t = f * edge2.dot(q);
        t > EPSILON
    }

    /// Intersection point with a plane given by a point and a normal.
    /// None when the ray is parallel to the plane or the hit lies behind
    /// the origin.
    pub fn intersect_plane(&self, point: Vector3, normal: Vector3) -> Option<Vector3> {
        let denominator = normal.dot(self.direction);
        if denominator.abs() < EPSILON {
            return None;
        }

        let t = (point - self.origin).dot(normal) / denominator;
        if t < 0.0 {
            return None;
        }

        Some(self.origin + self.direction * t)
    }
}

/// Scan meshes for ray hits and keep the one whose position is nearest to
/// the camera. The scan keeps the first strict minimum, so exact distance
/// ties resolve to scene order.
pub fn pick_nearest<'a, I>(ray: &Ray, meshes: I, camera_position: Vector3) -> Option<usize>
where
    I: Iterator<Item = (usize, &'a Mesh)>,
{
    let mut best: Option<(usize, f32)> = None;

    for (index, mesh) in meshes {
        if !ray.intersects_mesh(mesh) {
            continue;
        }
        let distance = (mesh.position - camera_position).length();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneObject, SceneState};

    fn canonical_triangle() -> Triangle {
        Triangle {
            v0: Vector3::new(-1.0, -1.0, 0.0),
            v1: Vector3::new(1.0, -1.0, 0.0),
            v2: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    #[test]
    fn test_ray_hits_triangle() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(ray.intersects_triangle(&canonical_triangle()));
    }

    #[test]
    fn test_ray_misses_offset_triangle() {
        let ray = Ray::new(Vector3::new(10.0, 10.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(!ray.intersects_triangle(&canonical_triangle()));
    }

    #[test]
    fn test_parallel_ray_misses() {
        // Direction lies in the triangle's plane: parallel, never a hit
        let ray = Ray::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(!ray.intersects_triangle(&canonical_triangle()));

        let offset_ray = Ray::new(Vector3::new(0.0, -5.0, 1.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(!offset_ray.intersects_triangle(&canonical_triangle()));
    }

    #[test]
    fn test_hit_behind_origin_rejected() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(!ray.intersects_triangle(&canonical_triangle()));
    }

    #[test]
    fn test_intersects_mesh() {
        let cube = Mesh::cube("Cube", 1.0, Vector3::new(0.5, 0.5, 0.5));
        let hit = Ray::new(Vector3::new(10.0, 0.5, 0.5), Vector3::new(-1.0, 0.0, 0.0));
        assert!(hit.intersects_mesh(&cube));

        let miss = Ray::new(Vector3::new(10.0, 5.0, 5.0), Vector3::new(-1.0, 0.0, 0.0));
        assert!(!miss.intersects_mesh(&cube));
    }

    #[test]
    fn test_intersect_plane() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = ray
            .intersect_plane(Vector3::ZERO, Vector3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert!((hit - Vector3::ZERO).length() < 1e-5);

        // Parallel
        let parallel = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(parallel
            .intersect_plane(Vector3::ZERO, Vector3::new(0.0, 0.0, 1.0))
            .is_none());

        // Plane behind the ray
        let away = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(away
            .intersect_plane(Vector3::ZERO, Vector3::new(0.0, 0.0, 1.0))
            .is_none());
    }

    #[test]
    fn test_pick_nearest_prefers_closer_mesh() {
        let mut scene = SceneState::new();
        scene.add_object(SceneObject::Mesh(Mesh::cube(
            "far",
            1.0,
            Vector3::new(-9.0, 0.5, 0.5),
        )));
        scene.add_object(SceneObject::Mesh(Mesh::cube(
            "near",
            1.0,
            Vector3::new(0.5, 0.5, 0.5),
        )));

        let camera = Vector3::new(10.0, 0.0, 0.0);
        let ray = Ray::new(camera, (Vector3::new(0.5, 0.5, 0.5) - camera).normalize());
        let hit = pick_nearest(&ray, scene.meshes(), camera);
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_pick_nearest_tie_breaks_to_scene_order() {
        let mut scene = SceneState::new();
        scene.add_object(SceneObject::Mesh(Mesh::cube(
            "first",
            1.0,
            Vector3::new(0.5, 0.5, 0.5),
        )));
        scene.add_object(SceneObject::Mesh(Mesh::cube(
            "second",
            1.0,
            Vector3::new(0.5, 0.5, 0.5),
        )));

        let camera = Vector3::new(10.0, 0.0, 0.0);
        let ray = Ray::new(camera, (Vector3::new(0.5, 0.5, 0.5) - camera).normalize());
        let hit = pick_nearest(&ray, scene.meshes(), camera);
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn test_pick_nearest_none_on_miss() {
        let mut scene = SceneState::new();
        scene.add_object(SceneObject::Mesh(Mesh::cube(
            "cube",
            1.0,
            Vector3::new(0.5, 0.5, 0.5),
        )));

        let camera = Vector3::new(10.0, 0.0, 0.0);
        let ray = Ray::new(camera, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(pick_nearest(&ray, scene.meshes(), camera), None);
    }
}

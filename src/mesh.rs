//! Mesh model: vertex buffer, triangle/edge topology, and the derived
//! edge-to-face adjacency map.

use std::collections::HashMap;

use crate::math::Vector3;
use crate::mode::TransformMode;

/// A triangle view into a mesh's vertex buffer at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vector3,
    pub v1: Vector3,
    pub v2: Vector3,
}

/// Canonical edge key: vertex index pair with the smaller index first.
pub type EdgeKey = (u32, u32);

/// A mesh object: placement fields, a mutable vertex buffer, and per-mesh
/// immutable face/edge topology with derived adjacency.
///
/// Topology is set only at construction, which builds the edge-to-face map
/// in the same step, so the map can never be stale relative to the face
/// indices. Rigid transforms mutate vertices and placement in place and
/// leave the adjacency untouched.
pub struct Mesh {
    pub name: String,
    pub position: Vector3,
    pub scale: Vector3,
    pub rotation: Vector3,
    vertices: Vec<Vector3>,
    face_indices: Vec<u32>,
    edge_indices: Vec<u32>,
    edge_to_face: HashMap<EdgeKey, Vec<u32>>,
}

impl Mesh {
    /// Build a mesh from explicit buffers. `face_indices` holds vertex
    /// index triples, `edge_indices` wireframe vertex index pairs.
    pub fn new(
        name: impl Into<String>,
        position: Vector3,
        vertices: Vec<Vector3>,
        face_indices: Vec<u32>,
        edge_indices: Vec<u32>,
    ) -> Self {
        let edge_to_face = build_edge_to_face(&face_indices);
        Self {
            name: name.into(),
            position,
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::ZERO,
            vertices,
            face_indices,
            edge_indices,
            edge_to_face,
        }
    }

    /// Axis-aligned cube with side length `side` centered on `position`.
    /// Eight shared vertices, twelve triangles, twelve wireframe edges.
    pub fn cube(name: impl Into<String>, side: f32, position: Vector3) -> Self {
        let h = side / 2.0;
        let vertices = vec![
            // Front face (+Z)
            Vector3::new(-h + position.x, -h + position.y, h + position.z),
            Vector3::new(h + position.x, -h + position.y, h + position.z),
            Vector3::new(h + position.x, h + position.y, h + position.z),
            Vector3::new(-h + position.x, h + position.y, h + position.z),
            // Back face (-Z)
            Vector3::new(-h + position.x, -h + position.y, -h + position.z),
            Vector3::new(h + position.x, -h + position.y, -h + position.z),
            Vector3::new(h + position.x, h + position.y, -h + position.z),
            Vector3::new(-h + position.x, h + position.y, -h + position.z),
        ];
        let face_indices = vec![
            0, 1, 2, 2, 3, 0, // front
            1, 5, 6, 6, 2, 1, // right
            5, 4, 7, 7, 6, 5, // back
            4, 0, 3, 3, 7, 4, // left
            3, 2, 6, 6, 7, 3, // top
            4, 5, 1, 1, 0, 4, // bottom
        ];
        let edge_indices = vec![
            0, 1, 1, 2, 2, 3, 3, 0, // front loop
            4, 5, 5, 6, 6, 7, 7, 4, // back loop
            0, 4, 1, 5, 2, 6, 3, 7, // connecting edges
        ];
        Self::new(name, position, vertices, face_indices, edge_indices)
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    pub fn face_indices(&self) -> &[u32] {
        &self.face_indices
    }

    pub fn edge_indices(&self) -> &[u32] {
        &self.edge_indices
    }

    /// Derived adjacency: canonical edge -> indices of the faces sharing it.
    pub fn edge_to_face(&self) -> &HashMap<EdgeKey, Vec<u32>> {
        &self.edge_to_face
    }

    /// Snapshot of the mesh's triangles at the current vertex positions.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.face_indices
            .chunks_exact(3)
            .map(|face| Triangle {
                v0: self.vertices[face[0] as usize],
                v1: self.vertices[face[1] as usize],
                v2: self.vertices[face[2] as usize],
            })
            .collect()
    }

    /// Outward normal of a face: cross product of its two edge vectors
    /// from the first vertex, normalized.
    pub fn face_normal(&self, face_index: u32) -> Vector3 {
        let base = face_index as usize * 3;
        let v0 = self.vertices[self.face_indices[base] as usize];
        let v1 = self.vertices[self.face_indices[base + 1] as usize];
        let v2 = self.vertices[self.face_indices[base + 2] as usize];
        (v1 - v0).cross(v2 - v0).normalize()
    }

    /// Apply a transformation delta to the mesh.
    ///
    /// Grab/Scale/Rotate mutate every vertex plus the matching placement
    /// field; topology is untouched, so the adjacency map stays valid.
    /// The topology-editing modes are not implemented and panic; once they
    /// exist they must rebuild the adjacency map after mutating faces.
    pub fn apply_transformation(&mut self, mode: TransformMode, delta: Vector3) {
        match mode {
            TransformMode::None => {}
            TransformMode::Grab => {
                self.position = self.position + delta;
                for vertex in &mut self.vertices {
                    *vertex = *vertex + delta;
                }
            }
            TransformMode::Scale => {
                let old_scale = self.scale;
                self.scale = self.scale * delta;
                let factor = self.scale / old_scale;
                for vertex in &mut self.vertices {
                    *vertex = (*vertex - self.position) * factor + self.position;
                }
            }
            TransformMode::Rotate => {
                self.rotation = self.rotation + delta;

                let radians = delta * (std::f32::consts::PI / 180.0);
                let (sin_x, cos_x) = radians.x.sin_cos();
                let (sin_y, cos_y) = radians.y.sin_cos();
                let (sin_z, cos_z) = radians.z.sin_cos();

                // Axis order is fixed (X, then Y, then Z); rotations are
                // not commutative.
                for vertex in &mut self.vertices {
                    let mut p = *vertex - self.position;
                    p = Vector3::new(
                        p.x,
                        p.y * cos_x - p.z * sin_x,
                        p.y * sin_x + p.z * cos_x,
                    );
                    p = Vector3::new(
                        p.x * cos_y + p.z * sin_y,
                        p.y,
                        -p.x * sin_y + p.z * cos_y,
                    );
                    p = Vector3::new(
                        p.x * cos_z - p.y * sin_z,
                        p.x * sin_z + p.y * cos_z,
                        p.z,
                    );
                    *vertex = p + self.position;
                }
            }
            TransformMode::Extrude => unimplemented!("extrude is not implemented"),
            TransformMode::Fill => unimplemented!("fill is not implemented"),
            TransformMode::Merge => unimplemented!("merge is not implemented"),
        }
    }
}

fn build_edge_to_face(face_indices: &[u32]) -> HashMap<EdgeKey, Vec<u32>> {
    let mut map: HashMap<EdgeKey, Vec<u32>> = HashMap::new();
    for (face, tri) in face_indices.chunks_exact(3).enumerate() {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            map.entry(key).or_default().push(face as u32);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn vec3_close(a: Vector3, b: Vector3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_cube_buffers() {
        let cube = Mesh::cube("Cube", 1.0, Vector3::new(0.5, 0.5, 0.5));
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.face_indices().len(), 36);
        assert_eq!(cube.edge_indices().len(), 24);
        assert_eq!(cube.scale, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(cube.rotation, Vector3::ZERO);
    }

    #[test]
    fn test_cube_adjacency_is_closed() {
        // 12 triangles * 3 edge slots / 2 faces per edge = 18 distinct edges,
        // each shared by exactly two faces (cube edges and face diagonals).
        let cube = Mesh::cube("Cube", 1.0, Vector3::ZERO);
        assert_eq!(cube.edge_to_face().len(), 18);
        for (&(a, b), faces) in cube.edge_to_face() {
            assert!(a < b, "edge keys must be canonicalized");
            assert_eq!(faces.len(), 2, "cube is closed, edge ({a},{b})");
        }
    }

    #[test]
    fn test_grab_translates_vertices_and_position() {
        let mut cube = Mesh::cube("Cube", 1.0, Vector3::new(0.5, 0.5, 0.5));
        let before: Vec<Vector3> = cube.vertices().to_vec();
        let edges_before: Vec<EdgeKey> = {
            let mut keys: Vec<EdgeKey> = cube.edge_to_face().keys().copied().collect();
            keys.sort_unstable();
            keys
        };

        let delta = Vector3::new(1.0, 0.0, 0.0);
        cube.apply_transformation(TransformMode::Grab, delta);

        assert!(vec3_close(cube.position, Vector3::new(1.5, 0.5, 0.5)));
        for (old, new) in before.iter().zip(cube.vertices()) {
            assert!(vec3_close(*old + delta, *new));
        }
        assert_eq!(cube.scale, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(cube.rotation, Vector3::ZERO);

        let edges_after: Vec<EdgeKey> = {
            let mut keys: Vec<EdgeKey> = cube.edge_to_face().keys().copied().collect();
            keys.sort_unstable();
            keys
        };
        assert_eq!(edges_before, edges_after);
    }

    #[test]
    fn test_scale_about_own_position() {
        let mut cube = Mesh::cube("Cube", 1.0, Vector3::new(0.5, 0.5, 0.5));
        let before: Vec<Vector3> = cube.vertices().to_vec();

        cube.apply_transformation(TransformMode::Scale, Vector3::new(2.0, 2.0, 2.0));

        assert!(vec3_close(cube.position, Vector3::new(0.5, 0.5, 0.5)));
        assert!(vec3_close(cube.scale, Vector3::new(2.0, 2.0, 2.0)));
        for (old, new) in before.iter().zip(cube.vertices()) {
            let old_offset = *old - cube.position;
            let new_offset = *new - cube.position;
            assert!(vec3_close(old_offset * 2.0, new_offset));
        }
    }

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        let mut mesh = Mesh::new(
            "Tri",
            Vector3::ZERO,
            vec![
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ],
            vec![0, 1, 2],
            vec![0, 1, 1, 2, 2, 0],
        );

        mesh.apply_transformation(TransformMode::Rotate, Vector3::new(0.0, 0.0, 90.0));

        assert!(vec3_close(mesh.rotation, Vector3::new(0.0, 0.0, 90.0)));
        assert!(vec3_close(mesh.vertices()[0], Vector3::new(0.0, 1.0, 0.0)));
        assert!(vec3_close(mesh.vertices()[1], Vector3::new(-1.0, 0.0, 0.0)));
        assert!(vec3_close(mesh.vertices()[2], Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotate_applies_axes_in_x_y_z_order() {
        // 90 deg about X then 90 deg about Y moves +Y to +X; the reverse
        // order would move it elsewhere, so this pins the ordering.
        let mut mesh = Mesh::new(
            "Tri",
            Vector3::ZERO,
            vec![
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ],
            vec![0, 1, 2],
            vec![0, 1, 1, 2, 2, 0],
        );

        mesh.apply_transformation(TransformMode::Rotate, Vector3::new(90.0, 90.0, 0.0));

        // +Y -> (X rot) +Z -> (Y rot) +X
        assert!(vec3_close(mesh.vertices()[0], Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_about_own_position() {
        let mut cube = Mesh::cube("Cube", 2.0, Vector3::new(3.0, 0.0, 0.0));
        cube.apply_transformation(TransformMode::Rotate, Vector3::new(0.0, 0.0, 180.0));
        // Rotation is about the mesh position, so the center stays put and
        // corner offsets flip in x/y.
        assert!(vec3_close(cube.position, Vector3::new(3.0, 0.0, 0.0)));
        let v0 = cube.vertices()[0];
        assert!(vec3_close(v0, Vector3::new(4.0, 1.0, 1.0)));
    }

    #[test]
    fn test_face_normal_outward() {
        let cube = Mesh::cube("Cube", 1.0, Vector3::ZERO);
        // Face 0 is on the front (+Z) side.
        assert!(vec3_close(cube.face_normal(0), Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    #[should_panic(expected = "extrude is not implemented")]
    fn test_extrude_is_not_a_silent_noop() {
        let mut cube = Mesh::cube("Cube", 1.0, Vector3::ZERO);
        cube.apply_transformation(TransformMode::Extrude, Vector3::ZERO);
    }

    #[test]
    #[should_panic(expected = "fill is not implemented")]
    fn test_fill_is_not_a_silent_noop() {
        let mut cube = Mesh::cube("Cube", 1.0, Vector3::ZERO);
        cube.apply_transformation(TransformMode::Fill, Vector3::ZERO);
    }

    #[test]
    #[should_panic(expected = "merge is not implemented")]
    fn test_merge_is_not_a_silent_noop() {
        let mut cube = Mesh::cube("Cube", 1.0, Vector3::ZERO);
        cube.apply_transformation(TransformMode::Merge, Vector3::ZERO);
    }
}

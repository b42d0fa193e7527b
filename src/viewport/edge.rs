//! Silhouette-edge classification for outline rendering.

use crate::math::Vector3;
use crate::mesh::{EdgeKey, Mesh};

/// True if the edge shared by `faces` belongs to the mesh outline as seen
/// from `camera_position`.
///
/// An edge bordering a single face is a mesh boundary and always part of
/// the outline. An edge bordering two faces is an outline edge exactly
/// when one face is front-facing and the other back-facing relative to
/// the camera.
pub fn is_silhouette_edge(mesh: &Mesh, faces: &[u32], camera_position: Vector3) -> bool {
    if faces.len() == 1 {
        return true;
    }

    let normal1 = mesh.face_normal(faces[0]);
    let normal2 = mesh.face_normal(faces[1]);

    // Direction from a point on the first face to the camera
    let point_on_face = mesh.vertices()[mesh.face_indices()[faces[0] as usize * 3] as usize];
    let camera_direction = (point_on_face - camera_position).normalize();

    let dot1 = normal1.dot(camera_direction);
    let dot2 = normal2.dot(camera_direction);

    (dot1 > 0.0 && dot2 < 0.0) || (dot1 < 0.0 && dot2 > 0.0)
}

/// Collect the silhouette edges of a mesh for the given camera position.
pub fn silhouette_edges(mesh: &Mesh, camera_position: Vector3) -> Vec<EdgeKey> {
    mesh.edge_to_face()
        .iter()
        .filter(|(_, faces)| is_silhouette_edge(mesh, faces, camera_position))
        .map(|(edge, _)| *edge)
        .collect()
}

//! Factory functions for test data.
//!
//! Convenience constructors for meshes and scenes plus known screen
//! coordinates for the default harness viewport, used by the unit and
//! integration tests.

use crate::math::Vector3;
use crate::mesh::Mesh;
use crate::scene::{SceneObject, SceneState};

/// Unit cube (side 1) centered on `position`.
pub fn unit_cube(name: &str, position: Vector3) -> Mesh {
    Mesh::cube(name, 1.0, position)
}

/// Two cubes on the default camera's center-area pick ray: "far" sits
/// behind "near" along the same line of sight, and scene order is
/// far-then-near so nearest-hit logic has something to disagree with.
pub fn two_cube_scene() -> SceneState {
    let mut scene = SceneState::new();
    scene.add_object(SceneObject::Mesh(unit_cube(
        "far",
        Vector3::new(-9.0, 1.0, 1.0),
    )));
    scene.add_object(SceneObject::Mesh(unit_cube(
        "near",
        Vector3::new(0.5, 0.5, 0.5),
    )));
    scene
}

/// Screen coordinates that, in the default 800x600 harness viewport, send
/// the pick ray from the default camera through the default cube.
pub const CUBE_HIT_SCREEN: (f64, f64) = (438.0, 262.0);

/// Screen coordinates whose pick ray misses everything in the default
/// scene.
pub const MISS_SCREEN: (f64, f64) = (100.0, 100.0);

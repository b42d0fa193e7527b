//! Vector and matrix math for the viewport.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix4x4;
pub use vector::{Vector2, Vector3, Vector4};

/// Tolerance used for parallelism tests and singular-pivot detection.
pub const EPSILON: f32 = 1e-6;

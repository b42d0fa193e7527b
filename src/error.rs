//! Error types for the math core.

use thiserror::Error;

/// Errors from the vector/matrix layer.
///
/// Dimension mismatches between vector kinds cannot occur at runtime:
/// `Vector2`/`Vector3`/`Vector4` are distinct types, so mixing them in an
/// operation is a compile error. Component access by index panics when out
/// of range, like slice indexing.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Gauss-Jordan elimination found no usable pivot; the matrix has no
    /// inverse. Carries the elimination row and the rejected pivot value.
    #[error("singular matrix: pivot {pivot} at row {row} is below tolerance")]
    SingularMatrix { row: usize, pivot: f32 },
}

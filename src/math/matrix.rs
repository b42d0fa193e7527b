//! 4x4 matrix with Gauss-Jordan inversion.

use std::ops::{Index, Mul};

use super::vector::Vector4;
use super::EPSILON;
use crate::error::MathError;

/// 4x4 matrix stored as a flat array of 16 floats in OpenGL column-major
/// element order (the same layout `glMultMatrixf` consumes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    m: [f32; 16],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const fn new(m: [f32; 16]) -> Self {
        Self { m }
    }

    pub fn elements(&self) -> &[f32; 16] {
        &self.m
    }

    /// Matrix times column vector.
    pub fn mul_vec4(&self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }

    /// Invert via Gauss-Jordan elimination with partial pivoting.
    ///
    /// The flat array is augmented with the identity and eliminated in
    /// place; each step swaps in the row with the largest absolute value in
    /// the pivot column. Fails with [`MathError::SingularMatrix`] when the
    /// best available pivot magnitude falls below `EPSILON`.
    pub fn invert(&self) -> Result<Self, MathError> {
        let mut temp = self.m;
        let mut inv = Self::IDENTITY.m;

        for i in 0..4 {
            // Select the pivot row
            let mut max_row = i;
            let mut max_val = temp[i * 4 + i].abs();
            for k in i + 1..4 {
                let val = temp[k * 4 + i].abs();
                if val > max_val {
                    max_val = val;
                    max_row = k;
                }
            }

            if max_row != i {
                for j in 0..4 {
                    temp.swap(i * 4 + j, max_row * 4 + j);
                    inv.swap(i * 4 + j, max_row * 4 + j);
                }
            }

            let pivot = temp[i * 4 + i];
            if pivot.abs() < EPSILON {
                return Err(MathError::SingularMatrix { row: i, pivot });
            }

            // Normalize the pivot row
            for j in 0..4 {
                temp[i * 4 + j] /= pivot;
                inv[i * 4 + j] /= pivot;
            }

            // Eliminate the pivot column from the other rows
            for k in 0..4 {
                if k == i {
                    continue;
                }
                let factor = temp[k * 4 + i];
                for j in 0..4 {
                    temp[k * 4 + j] -= factor * temp[i * 4 + j];
                    inv[k * 4 + j] -= factor * inv[i * 4 + j];
                }
            }
        }

        Ok(Self::new(inv))
    }
}

/// Matrix product (column-major composition: `a * b` applies `b` first).
impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[k * 4 + row] * rhs.m[col * 4 + k];
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }
}

impl Index<usize> for Matrix4x4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.m[index]
    }
}

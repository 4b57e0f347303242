//! 3x3 color matrix.
//!
//! # Convention
//!
//! Coefficients are stored flat in **row-major** order, `m[3 * row + col]`,
//! and multiply **column vectors**:
//!
//! ```text
//! | m0 m1 m2 |   | r |   | r*m0 + g*m1 + b*m2 |
//! | m3 m4 m5 | * | g | = | r*m3 + g*m4 + b*m5 |
//! | m6 m7 m8 |   | b |   | r*m6 + g*m7 + b*m8 |
//! ```

use std::ops::{Index, Mul};

use olk_core::{Error, Result};

/// Number of coefficients in a [`ColorMatrix`].
pub const MATRIX_LEN: usize = 9;

/// A 3x3 linear RGB transform.
///
/// The length invariant is enforced at construction: a `ColorMatrix` always
/// holds exactly nine coefficients.
///
/// # Example
///
/// ```rust
/// use olk_math::ColorMatrix;
///
/// let m = ColorMatrix::IDENTITY;
/// assert_eq!(m.apply([0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ColorMatrix {
    m: [f32; MATRIX_LEN],
}

impl ColorMatrix {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Creates a matrix from nine row-major coefficients.
    #[inline]
    pub const fn new(m: [f32; MATRIX_LEN]) -> Self {
        Self { m }
    }

    /// Creates a matrix from row arrays.
    ///
    /// ```rust
    /// use olk_math::ColorMatrix;
    ///
    /// let m = ColorMatrix::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, ColorMatrix::IDENTITY);
    /// ```
    #[inline]
    #[rustfmt::skip]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self::new([
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        ])
    }

    /// Creates a matrix from a flat row-major slice.
    ///
    /// Fails with [`Error::ShapeMismatch`] unless the slice holds exactly
    /// nine values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let m: [f32; MATRIX_LEN] = values.try_into().map_err(|_| {
            Error::shape_mismatch(
                format!("{MATRIX_LEN} matrix coefficients"),
                format!("{} coefficients", values.len()),
            )
        })?;
        Ok(Self { m })
    }

    /// Returns the coefficients in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32; MATRIX_LEN] {
        &self.m
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> [f32; 3] {
        [self.m[3 * i], self.m[3 * i + 1], self.m[3 * i + 2]]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new([m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]])
    }

    /// Transforms one RGB triplet.
    ///
    /// Each output channel is accumulated left to right in `f32`, so the
    /// result does not depend on how a buffer was partitioned.
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let m = &self.m;
        let [r, g, b] = rgb;
        [
            r * m[0] + g * m[1] + b * m[2],
            r * m[3] + g * m[4] + b * m[5],
            r * m[6] + g * m[7] + b * m[8],
        ]
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<&[f32]> for ColorMatrix {
    type Error = Error;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

// ColorMatrix * [r, g, b]
impl Mul<[f32; 3]> for ColorMatrix {
    type Output = [f32; 3];

    #[inline]
    fn mul(self, rhs: [f32; 3]) -> [f32; 3] {
        self.apply(rhs)
    }
}

impl Index<(usize, usize)> for ColorMatrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[3 * row + col]
    }
}

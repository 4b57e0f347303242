//! Matrix transform over interleaved RGB triplets.

use tracing::debug;

use olk_core::{BufferView, Error, Result};
use olk_math::ColorMatrix;

use crate::{Kernel, rejected};

/// Samples per RGB triplet.
const RGB: usize = 3;

fn check_triplets(len: usize) -> Result<()> {
    if len % RGB != 0 {
        return Err(Error::shape_mismatch(
            "RGB buffer length divisible by 3",
            format!("length {len}"),
        ));
    }
    Ok(())
}

impl Kernel {
    /// Applies a 3x3 matrix to every RGB triplet.
    ///
    /// ```text
    /// r' = r*M0 + g*M1 + b*M2
    /// g' = r*M3 + g*M4 + b*M5
    /// b' = r*M6 + g*M7 + b*M8
    /// ```
    ///
    /// Fails with [`Error::ShapeMismatch`] if the input is not 1D or its
    /// length is not a multiple of 3.
    pub fn matrix_transform<'a>(
        &self,
        input: impl Into<BufferView<'a>>,
        matrix: &ColorMatrix,
    ) -> Result<Vec<f32>> {
        let input: BufferView<'a> = input.into();
        let samples = input
            .require_1d()
            .and_then(|s| check_triplets(s.len()).map(|_| s))
            .map_err(|e| rejected("matrix_transform", e))?;

        debug!(
            pixels = samples.len() / RGB,
            threads = self.threads(),
            "matrix_transform"
        );
        Ok(self.map_groups(samples, RGB, RGB, |inp, out| {
            out.copy_from_slice(&matrix.apply([inp[0], inp[1], inp[2]]));
        }))
    }

    /// [`matrix_transform`](Self::matrix_transform) with a flat row-major
    /// coefficient slice.
    ///
    /// A slice without exactly 9 values is a [`Error::ShapeMismatch`].
    ///
    /// ```rust
    /// use olk_kernel::Kernel;
    ///
    /// let swap_rg = [0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
    /// let out = Kernel::new().matrix_transform_raw(&[1.0f32, 0.0, 0.0], &swap_rg).unwrap();
    /// assert_eq!(out, vec![0.0, 1.0, 0.0]);
    /// ```
    pub fn matrix_transform_raw<'a>(
        &self,
        input: impl Into<BufferView<'a>>,
        matrix: &[f32],
    ) -> Result<Vec<f32>> {
        let matrix = ColorMatrix::from_slice(matrix).map_err(|e| rejected("matrix_transform", e))?;
        self.matrix_transform(input, &matrix)
    }
}

//! A common interface over every kernel.
//!
//! Hosts that build a list of color operations (a curve, then a matrix,
//! then a LUT) can hold them as `&dyn Transform` and run them through
//! [`Kernel::apply_chain`] without matching on their kind.
//!
//! ```rust
//! use olk_kernel::{Kernel, Transform};
//! use olk_math::ColorMatrix;
//! use olk_transfer::Curve;
//!
//! let chain: [&dyn Transform; 3] = [&Curve::SrgbInv, &ColorMatrix::IDENTITY, &Curve::Srgb];
//! let out = Kernel::new().apply_chain(&[0.5f32, 0.5, 0.5], &chain).unwrap();
//! assert!(out.iter().all(|v| (v - 0.5).abs() < 1e-5));
//! ```

use tracing::debug;

use olk_core::{BufferView, Result};
use olk_lut::Lut1D;
use olk_math::ColorMatrix;
use olk_transfer::{Curve, CurveFn};

use crate::Kernel;

/// An operation that maps a flat sample buffer to a new one.
pub trait Transform: Sync {
    /// Runs the transform on `kernel`.
    fn apply(&self, kernel: &Kernel, input: BufferView<'_>) -> Result<Vec<f32>>;
}

impl Transform for Curve {
    fn apply(&self, kernel: &Kernel, input: BufferView<'_>) -> Result<Vec<f32>> {
        kernel.pointwise_map(input, self)
    }
}

impl Transform for ColorMatrix {
    fn apply(&self, kernel: &Kernel, input: BufferView<'_>) -> Result<Vec<f32>> {
        kernel.matrix_transform(input, self)
    }
}

impl Transform for Lut1D {
    fn apply(&self, kernel: &Kernel, input: BufferView<'_>) -> Result<Vec<f32>> {
        kernel.lut_sample(input, self)
    }
}

/// Adapts any caller-supplied [`CurveFn`] into a [`Transform`].
///
/// ```rust
/// use olk_kernel::{CurveTransform, Kernel, Transform};
///
/// let gain = CurveTransform(|x: f32| x * 2.0);
/// let out = gain.apply(&Kernel::new(), (&[0.25f32]).into()).unwrap();
/// assert_eq!(out, vec![0.5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurveTransform<F>(pub F);

impl<F: CurveFn> Transform for CurveTransform<F> {
    fn apply(&self, kernel: &Kernel, input: BufferView<'_>) -> Result<Vec<f32>> {
        kernel.pointwise_map(input, &self.0)
    }
}

impl Kernel {
    /// Applies a single transform.
    pub fn apply<'a, T>(&self, transform: &T, input: impl Into<BufferView<'a>>) -> Result<Vec<f32>>
    where
        T: Transform + ?Sized,
    {
        transform.apply(self, input.into())
    }

    /// Applies transforms in order, feeding each output into the next.
    ///
    /// An empty chain returns a copy of the input. The first failing
    /// transform aborts the chain.
    pub fn apply_chain<'a>(
        &self,
        input: impl Into<BufferView<'a>>,
        transforms: &[&dyn Transform],
    ) -> Result<Vec<f32>> {
        let input: BufferView<'a> = input.into();
        let mut current = input.require_1d()?.to_vec();
        debug!(steps = transforms.len(), len = current.len(), "apply_chain");
        for transform in transforms {
            current = transform.apply(self, BufferView::flat(&current))?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_copies() {
        let out = Kernel::new().apply_chain(&[0.1f32, 0.2], &[]).unwrap();
        assert_eq!(out, vec![0.1, 0.2]);
    }

    #[test]
    fn test_chain_matches_manual_steps() {
        let kernel = Kernel::new();
        let input = [0.1f32, 0.4, 0.7, 0.9, 0.3, 0.2];
        let lut = Lut1D::identity(256).unwrap();
        let matrix = ColorMatrix::from_rows([[0.9, 0.1, 0.0], [0.0, 1.0, 0.0], [0.1, 0.0, 0.9]]);

        let chained = kernel.apply_chain(&input, &[&Curve::Srgb, &matrix, &lut]).unwrap();

        let step1 = kernel.pointwise_map(&input, &Curve::Srgb).unwrap();
        let step2 = kernel.matrix_transform(&step1, &matrix).unwrap();
        let step3 = kernel.lut_sample(&step2, &lut).unwrap();
        assert_eq!(chained, step3);
    }

    #[test]
    fn test_chain_stops_on_error() {
        // 4 samples cannot go through a matrix
        let err = Kernel::new()
            .apply_chain(&[0.1f32, 0.2, 0.3, 0.4], &[&Curve::Lin, &ColorMatrix::IDENTITY])
            .unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_apply_dyn() {
        let t: &dyn Transform = &CurveTransform(|x: f32| -x);
        assert_eq!(Kernel::new().apply(t, &[1.0f32]).unwrap(), vec![-1.0]);
    }
}

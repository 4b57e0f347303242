//! Pointwise mapper: `output[i] = f(input[i])`.

use tracing::debug;

use olk_core::{BufferView, Result};
use olk_transfer::CurveFn;

use crate::{Kernel, rejected};

impl Kernel {
    /// Applies a scalar curve to every sample.
    ///
    /// `curve` is any [`CurveFn`]: a built-in [`Curve`](olk_transfer::Curve)
    /// or a caller-supplied `Fn(f32) -> f32 + Sync`. The input must be
    /// one-dimensional; flatten shaped images first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use olk_kernel::Kernel;
    ///
    /// let kernel = Kernel::new();
    /// let halved = kernel.pointwise_map(&[1.0f32, 2.0], &|x: f32| x * 0.5).unwrap();
    /// assert_eq!(halved, vec![0.5, 1.0]);
    /// ```
    pub fn pointwise_map<'a, C>(&self, input: impl Into<BufferView<'a>>, curve: &C) -> Result<Vec<f32>>
    where
        C: CurveFn + ?Sized,
    {
        let input: BufferView<'a> = input.into();
        let samples = input
            .require_1d()
            .map_err(|e| rejected("pointwise_map", e))?;

        debug!(len = samples.len(), threads = self.threads(), "pointwise_map");
        Ok(self.map_samples(samples, |x| curve.eval(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olk_transfer::Curve;

    #[test]
    fn test_lin_is_identity() {
        let input: Vec<f32> = (0..1000).map(|i| i as f32 * 0.37 - 50.0).collect();
        let out = Kernel::new().pointwise_map(&input, &Curve::Lin).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_named_curve_matches_scalar() {
        let input = [0.0f32, 0.001, 0.18, 0.5, 1.0, 4.0];
        let out = Kernel::new().pointwise_map(&input, &Curve::Rec709).unwrap();
        for (o, &x) in out.iter().zip(input.iter()) {
            assert_eq!(*o, olk_transfer::rec709(x));
        }
    }

    #[test]
    fn test_dyn_curve() {
        let curve: Box<dyn CurveFn> = Box::new(|x: f32| x + 1.0);
        let out = Kernel::new().pointwise_map(&[1.0f32], curve.as_ref()).unwrap();
        assert_eq!(out, vec![2.0]);
    }

    #[test]
    fn test_rejects_shaped_input() {
        let data = vec![0.5f32; 12];
        let view = BufferView::new(&data, &[2, 2, 3]).unwrap();
        let err = Kernel::new().pointwise_map(view, &Curve::Srgb).unwrap_err();
        assert!(err.is_shape_error());

        // Flattened, the same data is accepted
        assert_eq!(Kernel::new().pointwise_map(view.flatten(), &Curve::Srgb).unwrap().len(), 12);
    }

    #[test]
    fn test_empty() {
        let out = Kernel::new().pointwise_map(&Vec::<f32>::new(), &Curve::SLog).unwrap();
        assert!(out.is_empty());
    }
}

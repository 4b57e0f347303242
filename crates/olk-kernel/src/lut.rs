//! LUT sampler and table construction.

use tracing::debug;

use olk_core::{BufferView, Result};
use olk_lut::{Lut1D, sample_table};
use olk_transfer::CurveFn;

use crate::{Kernel, rejected};

impl Kernel {
    /// Looks up every sample in a 1D LUT.
    ///
    /// Values at or below the low bound return the first entry, values at
    /// or above the high bound the last entry; in between the table is
    /// interpolated linearly at position `v * N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use olk_kernel::Kernel;
    /// use olk_lut::Lut1D;
    ///
    /// let lut = Lut1D::new(vec![0.0, 0.5, 1.0, 1.0], 0.0, 1.0).unwrap();
    /// let out = Kernel::new().lut_sample(&[-1.0f32, 0.375, 2.0], &lut).unwrap();
    /// assert_eq!(out, vec![0.0, 0.75, 1.0]);
    /// ```
    pub fn lut_sample<'a>(&self, input: impl Into<BufferView<'a>>, lut: &Lut1D) -> Result<Vec<f32>> {
        self.lut_sample_raw(input, lut.table(), lut.low_bound(), lut.high_bound())
    }

    /// [`lut_sample`](Self::lut_sample) with a raw table and bounds.
    ///
    /// The table needs at least 2 entries and `low_bound <= high_bound`,
    /// otherwise [`Error::InvalidParameter`](olk_core::Error::InvalidParameter)
    /// is returned.
    pub fn lut_sample_raw<'a>(
        &self,
        input: impl Into<BufferView<'a>>,
        table: &[f32],
        low_bound: f32,
        high_bound: f32,
    ) -> Result<Vec<f32>> {
        Lut1D::validate(table, low_bound, high_bound).map_err(|e| rejected("lut_sample", e))?;
        let input: BufferView<'a> = input.into();
        let samples = input
            .require_1d()
            .map_err(|e| rejected("lut_sample", e))?;

        debug!(
            len = samples.len(),
            lut_size = table.len(),
            low_bound,
            high_bound,
            threads = self.threads(),
            "lut_sample"
        );
        Ok(self.map_samples(samples, |v| sample_table(table, low_bound, high_bound, v)))
    }

    /// Bakes a curve into a LUT, evaluating the ramp in parallel.
    ///
    /// Produces the same table as [`Lut1D::from_curve`].
    pub fn lut_from_curve<C>(
        &self,
        curve: &C,
        size: usize,
        low_bound: f32,
        high_bound: f32,
    ) -> Result<Lut1D>
    where
        C: CurveFn + ?Sized,
    {
        let ramp = Lut1D::ramp(size, low_bound, high_bound)?;
        debug!(size, low_bound, high_bound, "lut_from_curve");
        let table = self.map_samples(&ramp, |x| curve.eval(x));
        Lut1D::new(table, low_bound, high_bound)
    }
}

//! 1-dimensional lookup table.
//!
//! A [`Lut1D`] stores N samples of a scalar function and two domain bounds.
//! The bounds only gate clamping: at or below `low_bound` the first entry is
//! returned, at or above `high_bound` the last one. Between them the table
//! position is `v * N`, taken directly from the input value rather than
//! normalized by the bounds span.

use olk_core::{Error, Result};
use olk_transfer::CurveFn;

/// Smallest table a [`Lut1D`] accepts.
pub const MIN_LUT_SIZE: usize = 2;

/// A 1-dimensional lookup table with linear interpolation.
///
/// # Example
///
/// ```rust
/// use olk_lut::Lut1D;
///
/// let lut = Lut1D::new(vec![0.0, 0.5, 1.0, 1.0], 0.0, 1.0).unwrap();
///
/// // pos = 0.25 * 4 = 1.0 lands exactly on entry 1
/// assert_eq!(lut.sample(0.25), 0.5);
/// // pos = 0.375 * 4 = 1.5, halfway between entries 1 and 2
/// assert_eq!(lut.sample(0.375), 0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1D {
    table: Vec<f32>,
    low_bound: f32,
    high_bound: f32,
}

impl Lut1D {
    /// Creates a LUT from raw samples and domain bounds.
    ///
    /// Fails with [`Error::InvalidParameter`] if the table has fewer than
    /// [`MIN_LUT_SIZE`] entries, a bound is NaN, or `low_bound > high_bound`.
    pub fn new(table: Vec<f32>, low_bound: f32, high_bound: f32) -> Result<Self> {
        Self::validate(&table, low_bound, high_bound)?;
        Ok(Self {
            table,
            low_bound,
            high_bound,
        })
    }

    /// Checks the table and bounds without taking ownership.
    pub fn validate(table: &[f32], low_bound: f32, high_bound: f32) -> Result<()> {
        if table.len() < MIN_LUT_SIZE {
            return Err(Error::invalid_parameter(format!(
                "LUT needs at least {MIN_LUT_SIZE} entries, got {}",
                table.len()
            )));
        }
        if low_bound.is_nan() || high_bound.is_nan() {
            return Err(Error::invalid_parameter("LUT bounds must not be NaN"));
        }
        if low_bound > high_bound {
            return Err(Error::invalid_parameter(format!(
                "LUT low bound {low_bound} exceeds high bound {high_bound}"
            )));
        }
        Ok(())
    }

    /// Creates an identity ramp `i / (size - 1)` over the domain `[0, 1]`.
    ///
    /// ```rust
    /// use olk_lut::Lut1D;
    ///
    /// let lut = Lut1D::identity(5).unwrap();
    /// assert_eq!(lut.table(), &[0.0f32, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn identity(size: usize) -> Result<Self> {
        Self::new(Self::ramp(size, 0.0, 1.0)?, 0.0, 1.0)
    }

    /// Bakes a curve into a table by sampling it on an evenly spaced ramp
    /// from `low_bound` to `high_bound`.
    pub fn from_curve<C>(curve: &C, size: usize, low_bound: f32, high_bound: f32) -> Result<Self>
    where
        C: CurveFn + ?Sized,
    {
        let table = Self::ramp(size, low_bound, high_bound)?
            .into_iter()
            .map(|x| curve.eval(x))
            .collect();
        Self::new(table, low_bound, high_bound)
    }

    /// Returns `size` evenly spaced values from `low` to `high` inclusive.
    ///
    /// Both ends are hit exactly. The bounds must be finite.
    pub fn ramp(size: usize, low: f32, high: f32) -> Result<Vec<f32>> {
        if size < MIN_LUT_SIZE {
            return Err(Error::invalid_parameter(format!(
                "LUT needs at least {MIN_LUT_SIZE} entries, got {size}"
            )));
        }
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::invalid_parameter(format!(
                "ramp bounds must be finite, got [{low}, {high}]"
            )));
        }

        let last = size - 1;
        let span = high - low;
        Ok((0..size)
            .map(|i| {
                if i == last {
                    high
                } else {
                    low + span * (i as f32 / last as f32)
                }
            })
            .collect())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Returns the table entries.
    #[inline]
    pub fn table(&self) -> &[f32] {
        &self.table
    }

    /// Consumes the LUT, returning its entries.
    #[inline]
    pub fn into_table(self) -> Vec<f32> {
        self.table
    }

    /// Input value at or below which the first entry is returned.
    #[inline]
    pub fn low_bound(&self) -> f32 {
        self.low_bound
    }

    /// Input value at or above which the last entry is returned.
    #[inline]
    pub fn high_bound(&self) -> f32 {
        self.high_bound
    }

    /// Looks up one value.
    #[inline]
    pub fn sample(&self, value: f32) -> f32 {
        sample_table(&self.table, self.low_bound, self.high_bound, value)
    }
}

/// Looks up `value` in a raw table with the [`Lut1D`] rules.
///
/// The table position is clamped to `[0, N - 1]`, so positions at or past
/// the last entry (reachable through float rounding just below
/// `high_bound`, with `high_bound > 1`, or when `v * N` overflows) return
/// the last entry, and negative positions return the first. A NaN input
/// yields NaN.
///
/// # Panics
///
/// Panics if `table` is empty. [`Lut1D::validate`] rules that out.
#[inline]
pub fn sample_table(table: &[f32], low_bound: f32, high_bound: f32, value: f32) -> f32 {
    let last = table.len() - 1;

    if value <= low_bound {
        return table[0];
    }
    if value >= high_bound {
        return table[last];
    }

    // v * N may overflow to +-inf for huge inputs under wide bounds;
    // clamping keeps the fraction finite. NaN passes through.
    let pos = (value * table.len() as f32).clamp(0.0, last as f32);

    // Float-to-int casts saturate: NaN becomes 0
    let x0 = pos.floor() as usize;
    let x1 = (pos.ceil() as usize).min(last);

    let y0 = table[x0];
    let y1 = table[x1];

    // x1 - x0 is 1, or 0 on an exact index where the fraction is 0 too
    y0 + (pos - x0 as f32) * (y1 - y0)
}

//! # olk-kernel
//!
//! Data-parallel color transform kernels over flat `f32` buffers.
//!
//! | Kernel | Input | Output |
//! |--------|-------|--------|
//! | [`pointwise_map`] | L samples + curve | L samples |
//! | [`matrix_transform`] | 3K samples (RGB) + 3x3 matrix | 3K samples |
//! | [`lut_sample`] | L samples + 1D LUT | L samples |
//! | [`expand_channels`] | L samples | 3L samples (RGB) |
//!
//! Every kernel validates its preconditions first and returns an
//! [`Error`](olk_core::Error) before any work is dispatched. Inputs are
//! never modified; each call returns a freshly allocated buffer.
//!
//! # Parallelism
//!
//! The free functions run on the global rayon pool. A [`Kernel`] built with
//! [`Kernel::builder`] pins the worker count (`threads(1)` runs on the
//! calling thread). Output is bit-identical for any worker count.
//!
//! # Usage
//!
//! ```rust
//! use olk_kernel::{expand_channels, matrix_transform, pointwise_map};
//! use olk_math::ColorMatrix;
//! use olk_transfer::Curve;
//!
//! let gray = [0.0f32, 0.18, 1.0];
//! let rgb = expand_channels(&gray).unwrap();
//! let linear = pointwise_map(&rgb, &Curve::SrgbInv).unwrap();
//! let out = matrix_transform(&linear, &ColorMatrix::IDENTITY).unwrap();
//! assert_eq!(out.len(), 9);
//! ```
//!
//! # Logging
//!
//! Kernels emit `tracing` events: `debug` per call, `trace` per dispatch,
//! `warn` when a call is rejected. Installing a subscriber is up to the host.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
mod executor;
mod expand;
mod lut;
mod matrix;
mod pointwise;
pub mod transform;

pub use config::{DEFAULT_MIN_CHUNK, KernelConfig};
pub use executor::{Kernel, KernelBuilder};
pub use transform::{CurveTransform, Transform};

pub use olk_core::{BufferView, Error, Result};
pub use olk_lut::Lut1D;
pub use olk_math::ColorMatrix;
pub use olk_transfer::{Curve, CurveFn};

use tracing::warn;

/// Logs a rejected call and passes the error through.
pub(crate) fn rejected(op: &str, err: Error) -> Error {
    warn!("{} rejected: {}", op, err);
    err
}

/// Applies a scalar curve to every sample. See [`Kernel::pointwise_map`].
pub fn pointwise_map<'a, C>(input: impl Into<BufferView<'a>>, curve: &C) -> Result<Vec<f32>>
where
    C: CurveFn + ?Sized,
{
    Kernel::new().pointwise_map(input, curve)
}

/// Applies a 3x3 matrix to every RGB triplet. See [`Kernel::matrix_transform`].
pub fn matrix_transform<'a>(input: impl Into<BufferView<'a>>, matrix: &ColorMatrix) -> Result<Vec<f32>> {
    Kernel::new().matrix_transform(input, matrix)
}

/// Flat-slice form of [`matrix_transform`]. See [`Kernel::matrix_transform_raw`].
pub fn matrix_transform_raw<'a>(input: impl Into<BufferView<'a>>, matrix: &[f32]) -> Result<Vec<f32>> {
    Kernel::new().matrix_transform_raw(input, matrix)
}

/// Looks up every sample in a 1D LUT. See [`Kernel::lut_sample`].
pub fn lut_sample<'a>(input: impl Into<BufferView<'a>>, lut: &Lut1D) -> Result<Vec<f32>> {
    Kernel::new().lut_sample(input, lut)
}

/// Raw-table form of [`lut_sample`]. See [`Kernel::lut_sample_raw`].
pub fn lut_sample_raw<'a>(
    input: impl Into<BufferView<'a>>,
    table: &[f32],
    low_bound: f32,
    high_bound: f32,
) -> Result<Vec<f32>> {
    Kernel::new().lut_sample_raw(input, table, low_bound, high_bound)
}

/// Replicates each sample into an RGB triplet. See [`Kernel::expand_channels`].
pub fn expand_channels<'a>(input: impl Into<BufferView<'a>>) -> Result<Vec<f32>> {
    Kernel::new().expand_channels(input)
}

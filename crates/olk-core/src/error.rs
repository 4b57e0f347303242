//! Error types for olk kernel operations.
//!
//! Every precondition a kernel checks is reported through [`Error`] before
//! any work is dispatched, so a failed call never produces a partially
//! written buffer.
//!
//! # Usage
//!
//! ```rust
//! use olk_core::{Error, Result};
//!
//! fn check_triplets(len: usize) -> Result<()> {
//!     if len % 3 != 0 {
//!         return Err(Error::shape_mismatch("length divisible by 3", format!("length {len}")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_triplets(7).unwrap_err().is_shape_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when invoking a kernel.
///
/// Clamping at LUT boundaries is normal operation and never shows up here.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer dimensionality or length does not satisfy the operation.
    ///
    /// Returned for non-1D views, RGB buffers whose length is not a multiple
    /// of 3, color matrices without exactly 9 coefficients, and shapes whose
    /// element count disagrees with the data length.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        /// What the operation required
        expected: String,
        /// What the caller supplied
        got: String,
    },

    /// A parameter value is outside its legal range.
    ///
    /// LUTs shorter than 2 entries, inverted or NaN domain bounds,
    /// and zero-valued executor settings end up here.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The dedicated worker pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl Error {
    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Creates an [`Error::ThreadPool`] error.
    #[inline]
    pub fn thread_pool(msg: impl Into<String>) -> Self {
        Self::ThreadPool(msg.into())
    }

    /// Returns `true` if this is a shape-related error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }

    /// Returns `true` if this is a parameter error.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

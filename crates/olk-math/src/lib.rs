//! # olk-math
//!
//! Linear-algebra value types for the olk kernels.
//!
//! - [`ColorMatrix`] - an already-resolved 3x3 RGB transform
//!
//! All matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * rgb
//! ```
//!
//! Composition and inversion are the caller's business; this crate only
//! carries the nine coefficients and applies them.
//!
//! # Usage
//!
//! ```rust
//! use olk_math::ColorMatrix;
//!
//! // Swap red and green
//! let swap = ColorMatrix::from_slice(&[
//!     0.0, 1.0, 0.0,
//!     1.0, 0.0, 0.0,
//!     0.0, 0.0, 1.0,
//! ]).unwrap();
//!
//! assert_eq!(swap.apply([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;

pub use matrix::*;

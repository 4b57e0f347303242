//! # olk-lut
//!
//! One-dimensional lookup tables for the olk kernels.
//!
//! - [`Lut1D`] - a validated table of at least two samples plus the input
//!   domain bounds that gate clamping
//!
//! # Usage
//!
//! ```rust
//! use olk_lut::Lut1D;
//! use olk_transfer::Curve;
//!
//! // Bake the sRGB curve into 4096 entries
//! let lut = Lut1D::from_curve(&Curve::Srgb, 4096, 0.0, 1.0).unwrap();
//!
//! // Outside the domain the edge entries are returned
//! assert_eq!(lut.sample(-1.0), lut.table()[0]);
//! assert_eq!(lut.sample(2.0), lut.table()[4095]);
//! ```
//!
//! # Used By
//!
//! - `olk-kernel` - parallel LUT sampling over buffers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod lut1d;

pub use lut1d::{Lut1D, MIN_LUT_SIZE, sample_table};

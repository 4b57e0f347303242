//! # olk-transfer
//!
//! Scalar transfer curves for the olk kernels.
//!
//! Each curve is a pure `f32 -> f32` function: no allocation, no state, safe
//! to call from any number of threads. Branches switch on a threshold and
//! never clamp, so values outside the photographic range keep following
//! the same formula.
//!
//! Arithmetic runs in `f64` and is rounded to `f32` once at the end.
//!
//! # Curves
//!
//! | Name | Function | Direction |
//! |------|----------|-----------|
//! | `lin` | [`lin`] | identity |
//! | `sRGB` | [`srgb()`] | linear -> display |
//! | `sRGBinv` | [`srgb_inv`] | display -> linear |
//! | `Rec709` | [`rec709()`] | linear -> Rec.709 |
//! | `ReinhardHDR` | [`reinhard_hdr`] | HDR -> [0, 1) |
//! | `sLog` | [`s_log()`] | linear -> S-Log |
//! | `sLog2` | [`s_log2`] | linear -> S-Log2 |
//! | `DanLog` | [`dan_log()`] | DanLog -> linear |
//!
//! # Usage
//!
//! ```rust
//! use olk_transfer::{Curve, CurveFn, srgb, srgb_inv};
//!
//! let encoded = srgb(0.18);
//! let linear = srgb_inv(encoded);
//! assert!((linear - 0.18).abs() < 1e-5);
//!
//! assert_eq!(Curve::Srgb.eval(0.18), encoded);
//! ```
//!
//! # Used By
//!
//! - `olk-kernel` - pointwise mapping over buffers
//! - `olk-lut` - building tables from curves

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
pub mod dan_log;
pub mod rec709;
pub mod reinhard;
pub mod s_log;
pub mod srgb;

pub use curve::{Curve, CurveFn};

pub use dan_log::decode as dan_log;
pub use rec709::encode as rec709;
pub use reinhard::tonemap as reinhard_hdr;
pub use s_log::{s_log, s_log2};
pub use srgb::{decode as srgb_inv, encode as srgb};

/// Identity curve.
#[inline]
pub fn lin(x: f32) -> f32 {
    x
}

//! Named curves and the scalar-function capability.
//!
//! [`CurveFn`] is what the pointwise kernel maps over a buffer. It is
//! implemented by [`Curve`] and by any `Fn(f32) -> f32 + Sync` closure, so
//! caller-supplied functions and built-in curves go through the same path.

use std::fmt;

use crate::{dan_log, rec709, reinhard, s_log, srgb};

/// A pure `f32 -> f32` mapping that may be evaluated from many threads.
///
/// Implementations must not rely on shared mutable state: the same input
/// must always produce the same output, whichever worker evaluates it.
pub trait CurveFn: Sync {
    /// Evaluates the curve at `x`.
    fn eval(&self, x: f32) -> f32;
}

impl<F> CurveFn for F
where
    F: Fn(f32) -> f32 + Sync,
{
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        self(x)
    }
}

/// The built-in transfer curves.
///
/// # Example
///
/// ```rust
/// use olk_transfer::{Curve, CurveFn};
///
/// assert_eq!(Curve::ReinhardHdr.eval(1.0), 0.5);
/// assert_eq!(Curve::Srgb.to_string(), "sRGB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Identity.
    Lin,
    /// Linear to sRGB.
    Srgb,
    /// sRGB to linear.
    SrgbInv,
    /// Linear to Rec.709.
    Rec709,
    /// Reinhard tone map.
    ReinhardHdr,
    /// Linear to S-Log.
    SLog,
    /// Linear to S-Log2.
    SLog2,
    /// DanLog to linear.
    DanLog,
}

impl Curve {
    /// Every built-in curve, in declaration order.
    pub const ALL: [Curve; 8] = [
        Curve::Lin,
        Curve::Srgb,
        Curve::SrgbInv,
        Curve::Rec709,
        Curve::ReinhardHdr,
        Curve::SLog,
        Curve::SLog2,
        Curve::DanLog,
    ];

    /// Canonical curve name.
    pub const fn name(self) -> &'static str {
        match self {
            Curve::Lin => "lin",
            Curve::Srgb => "sRGB",
            Curve::SrgbInv => "sRGBinv",
            Curve::Rec709 => "Rec709",
            Curve::ReinhardHdr => "ReinhardHDR",
            Curve::SLog => "sLog",
            Curve::SLog2 => "sLog2",
            Curve::DanLog => "DanLog",
        }
    }

    /// Returns the curve as a plain function pointer.
    pub fn as_fn(self) -> fn(f32) -> f32 {
        match self {
            Curve::Lin => crate::lin,
            Curve::Srgb => srgb::encode,
            Curve::SrgbInv => srgb::decode,
            Curve::Rec709 => rec709::encode,
            Curve::ReinhardHdr => reinhard::tonemap,
            Curve::SLog => s_log::s_log,
            Curve::SLog2 => s_log::s_log2,
            Curve::DanLog => dan_log::decode,
        }
    }
}

impl CurveFn for Curve {
    #[inline]
    fn eval(&self, x: f32) -> f32 {
        (self.as_fn())(x)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

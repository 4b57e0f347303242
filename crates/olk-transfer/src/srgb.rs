//! sRGB transfer function.
//!
//! A piecewise curve combining a linear segment near black with a power
//! curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Values outside keep following the branch they
//!   fall into; nothing is clamped.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Linear-side break point of the encoding.
pub const LINEAR_BREAK: f32 = 0.0031308;

/// Encoded-side break point of the decoding.
pub const ENCODED_BREAK: f32 = 0.04045;

/// Encodes linear light to sRGB (`sRGB`).
///
/// # Formula
///
/// ```text
/// if L > 0.0031308:
///     V = 1.055 * L^(1/2.4) - 0.055
/// else:
///     V = 12.92 * L
/// ```
///
/// # Example
///
/// ```rust
/// use olk_transfer::srgb::encode;
///
/// let encoded = encode(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(x: f32) -> f32 {
    let l = x as f64;
    let v = if l > 0.0031308 {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    } else {
        l * 12.92
    };
    v as f32
}

/// Decodes sRGB to linear light (`sRGBinv`).
///
/// # Formula
///
/// ```text
/// if V > 0.04045:
///     L = ((V + 0.055) / 1.055)^2.4
/// else:
///     L = V / 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use olk_transfer::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(x: f32) -> f32 {
    let v = x as f64;
    let l = if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    };
    l as f32
}

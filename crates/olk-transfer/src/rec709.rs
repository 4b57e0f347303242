//! Rec.709 (BT.709) OETF.
//!
//! Encodes scene-linear light for HDTV. Only the encoding direction is
//! provided.
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Rec.709 OETF: Encodes linear to Rec.709.
///
/// # Formula
///
/// ```text
/// if L >= 0.018:
///     V = 1.099 * L^0.45 - 0.099
/// else:
///     V = 4.5 * L
/// ```
#[inline]
pub fn encode(x: f32) -> f32 {
    let l = x as f64;
    let v = if l >= 0.018 {
        1.099 * l.powf(0.45) - 0.099
    } else {
        4.5 * l
    };
    v as f32
}

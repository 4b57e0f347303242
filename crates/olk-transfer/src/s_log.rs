//! Sony S-Log and S-Log2 encodings.
//!
//! Both curves share the same log section; S-Log2 first rescales the linear
//! input by 155/219 (the ratio between the S-Log2 and S-Log white points).
//! Neither curve has a linear toe, so inputs at or below `-0.037584`
//! (`-0.053103` for S-Log2) fall outside the log domain and produce
//! `NaN`/`-inf`.
//!
//! # Reference
//!
//! - Sony S-Log white paper
//! - Sony S-Log2 Technical Paper v1.0

/// Log section slope.
const LOG_SLOPE: f64 = 0.432699;

/// Log section offset.
const LOG_OFFSET: f64 = 0.616596;

/// Linear offset added before the log.
const LIN_OFFSET: f64 = 0.037584;

/// Code value offset.
const CODE_OFFSET: f64 = 0.03;

/// S-Log2 linear pre-scale.
const SLOG2_SCALE: f64 = 155.0 / 219.0;

#[inline]
fn log_section(l: f64) -> f32 {
    (LOG_SLOPE * (l + LIN_OFFSET).log10() + LOG_OFFSET + CODE_OFFSET) as f32
}

/// S-Log encode: Linear to S-Log.
///
/// # Formula
///
/// ```text
/// V = 0.432699 * log10(L + 0.037584) + 0.616596 + 0.03
/// ```
///
/// # Example
///
/// ```rust
/// use olk_transfer::s_log::s_log;
///
/// // 18% gray lands around 0.36
/// assert!((s_log(0.18) - 0.36).abs() < 0.005);
/// ```
#[inline]
pub fn s_log(x: f32) -> f32 {
    log_section(x as f64)
}

/// S-Log2 encode: Linear to S-Log2.
///
/// # Formula
///
/// ```text
/// V = 0.432699 * log10((155 / 219) * L + 0.037584) + 0.616596 + 0.03
/// ```
#[inline]
pub fn s_log2(x: f32) -> f32 {
    log_section(SLOG2_SCALE * x as f64)
}

//! DanLog decoding curve.
//!
//! A custom log curve mapping log-encoded code values back to scene-linear
//! light. The two segments meet near code value `0.1496582`; they are not
//! exactly continuous (about `6e-4` apart), which is kept as-is.

/// Code value separating the linear toe from the exponential section.
pub const CODE_BREAK: f32 = 0.1496582;

/// DanLog decode: code value to linear.
///
/// # Formula
///
/// ```text
/// if V > 0.1496582:
///     L = (10^((V - 0.385537) / 0.2471896) - 0.071272) / 3.555556
/// else:
///     L = (V - 0.092809) / 5.367655
/// ```
#[inline]
pub fn decode(x: f32) -> f32 {
    let v = x as f64;
    let l = if v > 0.1496582 {
        (10f64.powf((v - 0.385537) / 0.2471896) - 0.071272) / 3.555556
    } else {
        (v - 0.092809) / 5.367655
    };
    l as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_toe() {
        assert_abs_diff_eq!(decode(0.092809), 0.0, epsilon = 1e-7);
        assert!(decode(0.0) < 0.0);
    }

    #[test]
    fn test_exponential_section() {
        // 10^0 = 1 at V = 0.385537
        assert_abs_diff_eq!(decode(0.385537), (1.0 - 0.071272) / 3.555556, epsilon = 1e-6);
    }

    #[test]
    fn test_segments_meet_near_break() {
        let toe = decode(CODE_BREAK);
        let exp = decode(CODE_BREAK + 1e-6);
        assert!((toe - exp).abs() < 1e-3, "toe={toe}, exp={exp}");
    }
}

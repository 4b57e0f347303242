//! Reinhard global tone-mapping operator.

/// Compresses scene-linear HDR values into [0, 1): `x / (1 + x)`.
///
/// ```rust
/// assert_eq!(olk_transfer::reinhard::tonemap(1.0), 0.5);
/// ```
#[inline]
pub fn tonemap(x: f32) -> f32 {
    let l = x as f64;
    (l / (1.0 + l)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(tonemap(0.0), 0.0);
        assert_eq!(tonemap(1.0), 0.5);
        assert_eq!(tonemap(3.0), 0.75);
        assert!(tonemap(1.0e6) < 1.0);
    }
}

//! Decimal rounding and small numeric helpers
//!
//! Every velocity the simulation stores goes through [`round`] so repeated
//! accumulation never drifts into binary floating point noise
//! (`0.1 + 0.2` becomes exactly `0.3`).

use crate::error::{BallError, Result};

/// Highest supported number of decimal places
pub const MAX_DECIMALS: i32 = 14;

/// Default number of decimal places for velocities
pub const DEFAULT_DECIMALS: i32 = 2;

/// Round `value` to `decimals` places (0..=14) using a decimal intermediate.
///
/// The value is first written with 14 fractional digits and the rounding is
/// done on that decimal text, never on the binary fraction. Halves round
/// toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round(value: f64, decimals: i32) -> Result<f64> {
    if !(0..=MAX_DECIMALS).contains(&decimals) {
        return Err(BallError::InvalidDecimals(decimals));
    }
    if !value.is_finite() {
        return Err(BallError::NotFinite(value));
    }

    let fixed = format!("{value:.14}");
    let (negative, magnitude) = match fixed.strip_prefix('-') {
        Some(magnitude) => (true, magnitude),
        None => (false, fixed.as_str()),
    };
    let (int_part, frac_part) = magnitude.split_once('.').unwrap_or((magnitude, ""));

    let places = decimals as usize;
    let (kept, rest) = frac_part.split_at(places.min(frac_part.len()));

    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if rounds_up(rest.as_bytes(), negative) {
        increment(&mut digits);
    }

    let point = digits.len() - kept.len();
    let mut text = String::with_capacity(digits.len() + 2);
    if negative {
        text.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == point {
            text.push('.');
        }
        text.push(*digit as char);
    }

    let result: f64 = text.parse().map_err(|_| BallError::NotFinite(value))?;

    // Fold -0.0 into 0.0
    Ok(result + 0.0)
}

/// Whether the dropped digits push the magnitude up one unit
fn rounds_up(dropped: &[u8], negative: bool) -> bool {
    match dropped.split_first() {
        None => false,
        // Toward +inf: a negative exact half stays put
        Some((&first, tail)) if negative => {
            first > b'5' || (first == b'5' && tail.iter().any(|&d| d != b'0'))
        }
        Some((&first, _)) => first >= b'5',
    }
}

/// Add one to an ASCII digit string
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Round to [`DEFAULT_DECIMALS`] places
#[inline]
pub fn round2(value: f64) -> Result<f64> {
    round(value, DEFAULT_DECIMALS)
}

/// Clamp with optional bounds; a missing bound is unbounded
#[inline]
pub fn clamp_value(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    value
        .max(min.unwrap_or(f64::NEG_INFINITY))
        .min(max.unwrap_or(f64::INFINITY))
}

/// Linear interpolation from `start` toward `end`, rounded to 2 decimals
pub fn lerp(start: f64, end: f64, amount: f64) -> Result<f64> {
    round2(start + (end - start) * amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_removes_float_drift() {
        assert_eq!(round2(0.1 + 0.2).unwrap(), 0.3);
        assert_eq!(round2(1.005).unwrap(), 1.01);
        assert_eq!(round(3.0 / 1.5 * -1.0, 4).unwrap(), -2.0);
        assert_eq!(round(5.4 / 1.5 * -1.0, 4).unwrap(), -3.6);
    }

    #[test]
    fn test_round_half_goes_up() {
        assert_eq!(round(2.5, 0).unwrap(), 3.0);
        assert_eq!(round(-2.5, 0).unwrap(), -2.0);
        assert_eq!(round(0.125, 2).unwrap(), 0.13);
    }

    #[test]
    fn test_round_normalizes_negative_zero() {
        let r = round2(-0.001).unwrap();
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_round_huge_values() {
        assert_eq!(round(1e300, 14).unwrap(), 1e300);
        assert_eq!(round(-1e20, 2).unwrap(), -1e20);
    }

    #[test]
    fn test_round_cuts_long_fractions() {
        assert_eq!(round(45.123456789012344, 14).unwrap(), 45.12345678901234);
        assert_eq!(round(406429.77697224857, 10).unwrap(), 406429.7769722486);
        assert_eq!(round(9.999, 2).unwrap(), 10.0);
        assert_eq!(round(-9.995, 2).unwrap(), -9.99);
    }

    #[test]
    fn test_round_twice_at_large_scale() {
        for (value, decimals) in [
            (406429.77697224857, 10),
            (-381806.31836811913, 10),
            (-362423134.37767243, 7),
            (-441210854.73072743, 7),
        ] {
            let once = round(value, decimals).unwrap();
            assert_eq!(round(once, decimals).unwrap(), once);
        }
    }

    #[test]
    fn test_round_rejects_bad_decimals() {
        assert_eq!(round(1.0, -1), Err(BallError::InvalidDecimals(-1)));
        assert_eq!(round(1.0, 15), Err(BallError::InvalidDecimals(15)));
        assert!(round(1.0, 0).is_ok());
        assert!(round(1.0, 14).is_ok());
    }

    #[test]
    fn test_round_rejects_non_finite() {
        assert!(matches!(round2(f64::NAN), Err(BallError::NotFinite(_))));
        assert!(matches!(round2(f64::INFINITY), Err(BallError::NotFinite(_))));
        assert!(round2(f64::NEG_INFINITY).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_clamp_value_one_sided() {
        assert_eq!(clamp_value(7.0, None, Some(5.0)), 5.0);
        assert_eq!(clamp_value(-70.0, None, Some(5.0)), -70.0);
        assert_eq!(clamp_value(-7.0, Some(-5.0), None), -5.0);
        assert_eq!(clamp_value(3.0, None, None), 3.0);
    }

    #[test]
    fn test_lerp_quarter_step() {
        assert_eq!(lerp(0.0, 10.0, 0.25).unwrap(), 2.5);
        assert_eq!(lerp(4.0, 0.0, 0.25).unwrap(), 3.0);
        assert_eq!(lerp(1.0, 1.0, 0.25).unwrap(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_round_is_idempotent(value in -1.0e9f64..1.0e9, decimals in 0i32..=14) {
            let once = round(value, decimals).unwrap();
            let twice = round(once, decimals).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_round_stays_close(value in -1.0e6f64..1.0e6, decimals in 0i32..=6) {
            let rounded = round(value, decimals).unwrap();
            let step = 10f64.powi(-decimals);
            prop_assert!((rounded - value).abs() <= step / 2.0 + 1e-9);
        }
    }
}

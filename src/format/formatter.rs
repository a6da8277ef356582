//! Conversion of computed values to their display strings.

use crate::format::notation::NotationRule;

/// Digits after the decimal point in the fixed-point rendering.
const FIXED_PRECISION: usize = 10;

/// Digits after the decimal point in the scientific mantissa.
const SCIENTIFIC_PRECISION: usize = 2;

/// Formats results according to a fixed [`NotationRule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    rule: NotationRule,
}

impl Formatter {
    pub const fn new(rule: NotationRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> NotationRule {
        self.rule
    }

    /// Render `num` for display.
    ///
    /// - zero (either sign) is `"0"`
    /// - `NaN` is `"nan"`, infinities are `"inf"` / `"-inf"`
    /// - otherwise fixed-point with at most ten decimals and no trailing
    ///   zeros, or `d.dde±XX` when the notation rule asks for it
    pub fn format(&self, num: f64) -> String {
        if num.is_nan() {
            return "nan".to_string();
        }
        if num.is_infinite() {
            return if num > 0.0 { "inf" } else { "-inf" }.to_string();
        }
        if num == 0.0 {
            return "0".to_string();
        }

        let fixed = fixed_point(num);
        if self.rule.wants_scientific(num, &fixed) {
            scientific(num)
        } else {
            fixed
        }
    }

    /// Returns `true` when [`Formatter::format`] picks scientific notation.
    pub fn is_scientific(&self, num: f64) -> bool {
        num.is_finite() && num != 0.0 && self.rule.wants_scientific(num, &fixed_point(num))
    }
}

/// Format with the default magnitude rule.
pub fn format_number(num: f64) -> String {
    Formatter::default().format(num)
}

fn fixed_point(num: f64) -> String {
    let rendered = format!("{num:.FIXED_PRECISION$}");
    let stripped = rendered.trim_end_matches('0').trim_end_matches('.');
    // Tiny negatives round to "-0.0000000000".
    if stripped == "-0" {
        return "0".to_string();
    }
    stripped.to_string()
}

fn scientific(num: f64) -> String {
    // std renders "1.23e7" / "4.56e-7"; the display form wants "1.23e+07".
    let rendered = format!("{num:.SCIENTIFIC_PRECISION$e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return rendered;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn length() -> Formatter {
        Formatter::new(NotationRule::Length)
    }

    fn is_scientific_shape(s: &str) -> bool {
        let s = s.strip_prefix('-').unwrap_or(s);
        let Some((mantissa, exponent)) = s.split_once('e') else {
            return false;
        };
        let mantissa = mantissa.as_bytes();
        let exponent_ok = exponent.len() >= 3
            && matches!(exponent.as_bytes()[0], b'+' | b'-')
            && exponent[1..].bytes().all(|b| b.is_ascii_digit());
        mantissa.len() == 4
            && mantissa[0].is_ascii_digit()
            && mantissa[1] == b'.'
            && mantissa[2].is_ascii_digit()
            && mantissa[3].is_ascii_digit()
            && exponent_ok
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(length().format(-0.0), "0");
    }

    #[test]
    fn test_strips_trailing_zeros() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(-42.125), "-42.125");
        assert_eq!(format_number(5.5 - 3.2), "2.3");
        assert_eq!(format_number(1.5 + 2.5), "4");
    }

    #[test]
    fn test_rounds_to_ten_decimals() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn test_boundaries_stay_fixed() {
        assert_eq!(format_number(1e6), "1000000");
        assert_eq!(format_number(-1e6), "-1000000");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(-1e-6), "-0.000001");
    }

    #[test]
    fn test_scientific_outside_magnitude_window() {
        assert_eq!(format_number(123456789012.345 + 987654321098.765), "1.11e+12");
        assert_eq!(format_number(0.000000123 + 0.000000456), "5.79e-07");
        assert_eq!(format_number(1.5e7), "1.50e+07");
        assert_eq!(format_number(-4.56e-7), "-4.56e-07");
        assert_eq!(format_number(1_000_000.5), "1.00e+06");
    }

    #[test]
    fn test_exponent_padding() {
        assert_eq!(format_number(1e100), "1.00e+100");
        assert_eq!(format_number(2.5e-300), "2.50e-300");
    }

    #[test]
    fn test_tiny_value_does_not_collapse_under_magnitude_rule() {
        assert_eq!(format_number(0.00000000001), "1.00e-11");
    }

    #[test]
    fn test_length_rule() {
        let formatter = length();
        assert_eq!(formatter.format(12345.678), "12345.678");
        assert_eq!(formatter.format(1e9), "1000000000");
        assert_eq!(formatter.format(123456789.12345), "1.23e+08");
        // Collapses before the length check ever sees it.
        assert_eq!(formatter.format(0.00000000001), "0");
        assert_eq!(formatter.format(-0.00000000001), "0");
        assert_eq!(formatter.format(0.000000123), "0.000000123");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::MAX + f64::MAX), "inf");
    }

    #[test]
    fn test_is_scientific_matches_format() {
        let formatter = Formatter::default();
        assert!(formatter.is_scientific(2e7));
        assert!(!formatter.is_scientific(0.0));
        assert!(!formatter.is_scientific(f64::NAN));
        assert!(!formatter.is_scientific(12.5));
    }

    proptest! {
        #[test]
        fn prop_window_is_fixed(x in 1e-6f64..=1e6, negative in any::<bool>()) {
            let x = if negative { -x } else { x };
            let rendered = format_number(x);
            prop_assert!(!rendered.contains('e'), "{x} rendered as {rendered}");
        }

        #[test]
        fn prop_large_is_scientific(x in 1.000001e6f64..1e300, negative in any::<bool>()) {
            let x = if negative { -x } else { x };
            let rendered = format_number(x);
            prop_assert!(is_scientific_shape(&rendered), "{x} rendered as {rendered}");
        }

        #[test]
        fn prop_small_is_scientific(x in 1e-300f64..9.99999e-7, negative in any::<bool>()) {
            let x = if negative { -x } else { x };
            let rendered = format_number(x);
            prop_assert!(is_scientific_shape(&rendered), "{x} rendered as {rendered}");
        }

        #[test]
        fn prop_never_negative_zero(x in -1e-9f64..1e-9) {
            prop_assert_ne!(length().format(x), "-0");
            prop_assert_ne!(format_number(x), "-0");
        }
    }
}

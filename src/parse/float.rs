// ============================================================================
// Binary Float Assembler
// Correctly rounded decimal to binary32/binary64 conversion
// ============================================================================
//
// Two paths:
// - fast: mantissa and power of ten both exact in the target, one IEEE
//   multiply or divide rounds correctly
// - slow: exact shift-decimal arithmetic, ties to even

use crate::numeric::shift_decimal::{shift_for, MAX_SHIFT};
use crate::numeric::{NormalizedNumber, ShiftDecimal, SpecialValue};

/// IEEE 754 binary format parameters.
pub trait BinaryFloat: Copy + PartialEq + std::fmt::Debug {
    const MANTISSA_EXPLICIT_BITS: u32;
    const MINIMUM_EXPONENT: i32;
    const INFINITE_POWER: i32;
    /// Significant decimal digits that always round-trip
    const ROUND_TRIP_DIGITS: i32;
    /// Digits below which General switches to scientific at the same scale
    const GENERAL_PRECISION: i32;
    const MAX_EXPONENT_FAST_PATH: i64;
    const MAX_MANTISSA_FAST_PATH: u64;

    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn from_raw(bits: u64) -> Self;
    fn to_raw(self) -> u64;
    fn from_u64(v: u64) -> Self;
    fn pow10_fast_path(exponent: usize) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;

    /// Split into (mantissa, binary exponent) so the value is `m × 2^e`.
    fn decompose(self) -> (u64, i32) {
        let bits = self.to_raw();
        let fraction_mask = (1u64 << Self::MANTISSA_EXPLICIT_BITS) - 1;
        let fraction = bits & fraction_mask;
        let biased = ((bits >> Self::MANTISSA_EXPLICIT_BITS) as i32) & Self::INFINITE_POWER;
        let bias = -Self::MINIMUM_EXPONENT + Self::MANTISSA_EXPLICIT_BITS as i32;
        if biased == 0 {
            (fraction, 1 - bias)
        } else {
            (fraction | (1u64 << Self::MANTISSA_EXPLICIT_BITS), biased - bias)
        }
    }

    fn is_negative(self) -> bool {
        self.to_raw() >> (Self::MANTISSA_EXPLICIT_BITS + Self::exponent_bits()) != 0
    }

    fn exponent_bits() -> u32 {
        Self::INFINITE_POWER.count_ones()
    }
}

impl BinaryFloat for f64 {
    const MANTISSA_EXPLICIT_BITS: u32 = 52;
    const MINIMUM_EXPONENT: i32 = -1023;
    const INFINITE_POWER: i32 = 0x7FF;
    const ROUND_TRIP_DIGITS: i32 = 17;
    const GENERAL_PRECISION: i32 = 15;
    const MAX_EXPONENT_FAST_PATH: i64 = 22;
    const MAX_MANTISSA_FAST_PATH: u64 = 2 << 52;

    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        v as f64
    }

    #[inline]
    fn pow10_fast_path(exponent: usize) -> Self {
        const TABLE: [f64; 23] = [
            1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
            1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
        ];
        TABLE[exponent]
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self / rhs
    }
}

impl BinaryFloat for f32 {
    const MANTISSA_EXPLICIT_BITS: u32 = 23;
    const MINIMUM_EXPONENT: i32 = -127;
    const INFINITE_POWER: i32 = 0xFF;
    const ROUND_TRIP_DIGITS: i32 = 9;
    const GENERAL_PRECISION: i32 = 7;
    const MAX_EXPONENT_FAST_PATH: i64 = 10;
    const MAX_MANTISSA_FAST_PATH: u64 = 2 << 23;

    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        v as f32
    }

    #[inline]
    fn pow10_fast_path(exponent: usize) -> Self {
        const TABLE: [f32; 11] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];
        TABLE[exponent]
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self / rhs
    }
}

/// Nearest representable `F` to the scanned number.
///
/// Out-of-range magnitudes become signed zero or signed infinity; this path
/// never fails.
pub fn assemble_float<F: BinaryFloat>(number: &NormalizedNumber) -> F {
    let negative = number.negative;
    let magnitude = match number.special_value() {
        Some(SpecialValue::NaN) => return F::NAN,
        Some(SpecialValue::Infinity) => F::INFINITY,
        None if number.is_zero() => F::from_raw(0),
        None => try_fast_path::<F>(number).unwrap_or_else(|| F::from_raw(slow_path::<F>(number))),
    };
    if negative {
        let sign = 1u64 << (F::MANTISSA_EXPLICIT_BITS + F::exponent_bits());
        F::from_raw(magnitude.to_raw() | sign)
    } else {
        magnitude
    }
}

/// Clinger's fast path: exact mantissa, exact power of ten, one rounding.
fn try_fast_path<F: BinaryFloat>(number: &NormalizedNumber) -> Option<F> {
    if number.has_nonzero_tail() {
        return None;
    }
    let digits = number.significant_digits();
    if digits.len() > 19 {
        return None;
    }
    let mut mantissa = 0u64;
    for &d in digits {
        mantissa = mantissa * 10 + d as u64;
    }
    if mantissa > F::MAX_MANTISSA_FAST_PATH {
        return None;
    }
    let exponent = number.scale() as i64 - digits.len() as i64;

    if (-F::MAX_EXPONENT_FAST_PATH..=F::MAX_EXPONENT_FAST_PATH).contains(&exponent) {
        let value = F::from_u64(mantissa);
        return Some(if exponent < 0 {
            value.div(F::pow10_fast_path((-exponent) as usize))
        } else {
            value.mul(F::pow10_fast_path(exponent as usize))
        });
    }

    // Disguised fast path: move surplus power of ten into the mantissa
    // while it stays exactly representable.
    if exponent > F::MAX_EXPONENT_FAST_PATH {
        let mut shifted = mantissa;
        let mut e = exponent;
        while e > F::MAX_EXPONENT_FAST_PATH {
            shifted = shifted.checked_mul(10)?;
            if shifted > F::MAX_MANTISSA_FAST_PATH {
                return None;
            }
            e -= 1;
        }
        return Some(F::from_u64(shifted).mul(F::pow10_fast_path(e as usize)));
    }
    None
}

/// Exact conversion through `ShiftDecimal`; returns the magnitude bits.
fn slow_path<F: BinaryFloat>(number: &NormalizedNumber) -> u64 {
    let zero = 0u64;
    let infinity = (F::INFINITE_POWER as u64) << F::MANTISSA_EXPLICIT_BITS;

    let mut d = ShiftDecimal::from_normalized(number);
    if d.num_digits() == 0 || d.decimal_point() < -324 {
        return zero;
    }
    if d.decimal_point() >= 310 {
        return infinity;
    }

    let mut exp2 = 0i32;
    // Scale down into [1/2, 1)
    while d.decimal_point() > 0 {
        let shift = shift_for(d.decimal_point() as usize);
        d.right_shift(shift);
        if d.decimal_point() < -ShiftDecimal::DECIMAL_POINT_RANGE {
            return zero;
        }
        exp2 += shift as i32;
    }
    // Scale up into [1/2, 1]
    while d.decimal_point() <= 0 {
        let shift = if d.decimal_point() == 0 {
            match d.first_digit() {
                digit if digit >= 5 => break,
                0 | 1 => 2,
                _ => 1,
            }
        } else {
            shift_for((-d.decimal_point()) as usize)
        };
        d.left_shift(shift);
        if d.decimal_point() > ShiftDecimal::DECIMAL_POINT_RANGE {
            return infinity;
        }
        exp2 -= shift as i32;
    }

    // Binary significands live in [1, 2)
    exp2 -= 1;
    while F::MINIMUM_EXPONENT + 1 > exp2 {
        let n = ((F::MINIMUM_EXPONENT + 1 - exp2) as usize).min(MAX_SHIFT);
        d.right_shift(n);
        exp2 += n as i32;
    }
    if exp2 - F::MINIMUM_EXPONENT >= F::INFINITE_POWER {
        return infinity;
    }

    d.left_shift(F::MANTISSA_EXPLICIT_BITS as usize + 1);
    let mut mantissa = d.round();
    if mantissa >= 1u64 << (F::MANTISSA_EXPLICIT_BITS + 1) {
        // Rounding carried into a new bit
        d.right_shift(1);
        exp2 += 1;
        mantissa = d.round();
        if exp2 - F::MINIMUM_EXPONENT >= F::INFINITE_POWER {
            return infinity;
        }
    }

    let mut power2 = exp2 - F::MINIMUM_EXPONENT;
    if mantissa < 1u64 << F::MANTISSA_EXPLICIT_BITS {
        power2 -= 1;
    }
    mantissa &= (1u64 << F::MANTISSA_EXPLICIT_BITS) - 1;
    ((power2 as u64) << F::MANTISSA_EXPLICIT_BITS) | mantissa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_style, LocaleSymbols, StyleFlags, TargetCategory};
    use crate::parse::scanner::scan;

    fn parse<F: BinaryFloat>(input: &str) -> F {
        let style = validate_style(StyleFlags::FLOAT, TargetCategory::Floating).unwrap();
        let number = scan(input, style, &LocaleSymbols::invariant()).unwrap();
        assemble_float::<F>(&number)
    }

    #[test]
    fn test_simple_values() {
        assert_eq!(parse::<f64>("1"), 1.0);
        assert_eq!(parse::<f64>("-2.5"), -2.5);
        assert_eq!(parse::<f64>("0.1"), 0.1);
        assert_eq!(parse::<f64>("1e23"), 1e23);
        assert_eq!(parse::<f32>("3.1415927"), std::f32::consts::PI);
    }

    #[test]
    fn test_signed_zero() {
        assert_eq!(parse::<f64>("-0").to_bits(), (-0.0f64).to_bits());
        assert_eq!(parse::<f64>("0.000").to_bits(), 0);
        assert_eq!(parse::<f64>("-1e-400").to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_extremes() {
        assert_eq!(parse::<f64>("1.7976931348623157e308"), f64::MAX);
        assert_eq!(parse::<f64>("1.7976931348623159e308"), f64::INFINITY);
        assert_eq!(parse::<f64>("-1e309"), f64::NEG_INFINITY);
        assert_eq!(parse::<f64>("2.2250738585072014e-308"), f64::MIN_POSITIVE);
        assert_eq!(parse::<f64>("5e-324").to_bits(), 1);
        assert_eq!(parse::<f64>("2.4703282292062328e-324").to_bits(), 1);
        assert_eq!(parse::<f64>("2.4703282292062327e-324").to_bits(), 0);
        assert_eq!(parse::<f32>("3.4028235e38"), f32::MAX);
        assert_eq!(parse::<f32>("3.5e38"), f32::INFINITY);
        assert_eq!(parse::<f32>("1e-45").to_bits(), 1);
    }

    #[test]
    fn test_halfway_ties_to_even() {
        // 2^53 + 1 is exactly between 2^53 and 2^53 + 2
        assert_eq!(parse::<f64>("9007199254740993"), 9007199254740992.0);
        // 2^53 + 3 rounds up to the even neighbour
        assert_eq!(parse::<f64>("9007199254740995"), 9007199254740996.0);
        // A trailing non-zero digit far away breaks the tie upward
        let long = format!("9007199254740993{}1", "0".repeat(900));
        let long = format!("{}e-{}", long, 901);
        assert_eq!(parse::<f64>(&long), 9007199254740994.0);
    }

    #[test]
    fn test_matches_std() {
        let samples = [
            "1.2345678901234567890123",
            "123456789e-15",
            "0.30000000000000004",
            "4.9406564584124654e-324",
            "8.98846567431158e307",
            "1.00000005960464477550",
            "7.038531e-26",
            "1448997445238699",
        ];
        for s in samples {
            assert_eq!(parse::<f64>(s).to_bits(), s.parse::<f64>().unwrap().to_bits(), "{}", s);
            assert_eq!(parse::<f32>(s).to_bits(), s.parse::<f32>().unwrap().to_bits(), "{}", s);
        }
    }

    #[test]
    fn test_decompose() {
        assert_eq!(1.0f64.decompose(), (1 << 52, -52));
        assert_eq!(f64::from_bits(1).decompose(), (1, -1074));
        assert_eq!(f32::from_bits(1).decompose(), (1, -149));
        assert!((-1.0f32).is_negative());
    }
}

// ============================================================================
// Digit Extraction
// Exact and shortest round-trip decimal digits of typed values
// ============================================================================

use crate::domain::Value;
use crate::numeric::{NormalizedNumber, ShiftDecimal};
use crate::parse::float::{assemble_float, BinaryFloat};
use rust_decimal::Decimal;

/// Exact decimal expansion of a finite binary float.
pub fn exact_float<F: BinaryFloat>(value: F) -> NormalizedNumber {
    let (mantissa, exp2) = value.decompose();
    ShiftDecimal::from_binary(mantissa, exp2).to_normalized(value.is_negative())
}

/// Shortest digit run that parses back to exactly `value`.
///
/// Among candidates of the minimal length the one nearest the exact value
/// wins; the other neighbour is only tried when the nearest does not
/// round-trip (asymmetric gaps at powers of two).
pub fn shortest_float<F: BinaryFloat>(value: F) -> NormalizedNumber {
    let exact = exact_float(value);
    if exact.is_zero() {
        return exact;
    }

    let sign_bit = 1u64 << (F::MANTISSA_EXPLICIT_BITS + F::exponent_bits());
    let target = value.to_raw() & !sign_bit;
    let round_trips = |candidate: &NormalizedNumber| {
        let mut magnitude = candidate.clone();
        magnitude.negative = false;
        assemble_float::<F>(&magnitude).to_raw() == target
    };

    for keep in 1..=F::ROUND_TRIP_DIGITS as usize {
        if keep >= exact.digits().len() {
            return exact;
        }
        let nearest_is_up = exact.digits()[keep] >= 5;
        for up in [nearest_is_up, !nearest_is_up] {
            let mut candidate = exact.clone();
            if up {
                candidate.round_up_to(keep);
            } else {
                candidate.truncate_to(keep);
            }
            if round_trips(&candidate) {
                return candidate;
            }
        }
    }

    let mut fallback = exact;
    fallback.round_to(F::ROUND_TRIP_DIGITS);
    fallback
}

/// Digits of a decimal, trailing zeros included (`1.50` keeps three digits).
pub fn decimal_digits(value: &Decimal) -> NormalizedNumber {
    let magnitude = value.mantissa().unsigned_abs();
    let scale = value.scale() as i32;
    let whole = NormalizedNumber::from_u128(value.is_sign_negative(), magnitude);
    NormalizedNumber::from_digits(whole.negative, whole.digits(), whole.point() - scale)
}

/// Sign and magnitude of an integer value; `None` for floats and decimals.
pub fn integer_magnitude(value: &Value) -> Option<(bool, u128)> {
    let parts = match *value {
        Value::I8(v) => (v < 0, v.unsigned_abs() as u128),
        Value::U8(v) => (false, v as u128),
        Value::I16(v) => (v < 0, v.unsigned_abs() as u128),
        Value::U16(v) => (false, v as u128),
        Value::I32(v) => (v < 0, v.unsigned_abs() as u128),
        Value::U32(v) => (false, v as u128),
        Value::I64(v) => (v < 0, v.unsigned_abs() as u128),
        Value::U64(v) => (false, v as u128),
        Value::F32(_) | Value::F64(_) | Value::Decimal(_) => return None,
    };
    Some(parts)
}

/// Exact digits of any finite value.
pub fn exact_digits(value: &Value) -> NormalizedNumber {
    if let Some((negative, magnitude)) = integer_magnitude(value) {
        return NormalizedNumber::from_u128(negative, magnitude);
    }
    match value {
        Value::F32(v) => exact_float(*v),
        Value::F64(v) => exact_float(*v),
        Value::Decimal(v) => decimal_digits(v),
        _ => NormalizedNumber::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(n: &NormalizedNumber) -> (String, i32) {
        let s = n.digits().iter().map(|d| char::from(b'0' + d)).collect();
        (s, n.point())
    }

    #[test]
    fn test_shortest_f64() {
        assert_eq!(text(&shortest_float(0.1f64)), ("1".to_string(), 0));
        assert_eq!(text(&shortest_float(0.3f64)), ("3".to_string(), 0));
        assert_eq!(
            text(&shortest_float(0.1f64 + 0.2f64)),
            ("30000000000000004".to_string(), 0)
        );
        assert_eq!(text(&shortest_float(1e23f64)), ("1".to_string(), 24));
        assert_eq!(text(&shortest_float(123.456f64)), ("123456".to_string(), 3));
        assert_eq!(
            text(&shortest_float(f64::MAX)),
            ("17976931348623157".to_string(), 309)
        );
        assert_eq!(text(&shortest_float(5e-324f64)), ("5".to_string(), -323));
    }

    #[test]
    fn test_shortest_f32() {
        assert_eq!(
            text(&shortest_float(std::f32::consts::PI)),
            ("31415927".to_string(), 1)
        );
        assert_eq!(text(&shortest_float(0.1f32)), ("1".to_string(), 0));
        assert_eq!(text(&shortest_float(16777216.0f32)), ("16777216".to_string(), 8));
    }

    #[test]
    fn test_shortest_matches_std_display() {
        let samples = [1.0f64, 2.5, 1e-7, 9007199254740993.0, 4.35, 0.000123, 1e300, 2f64.powi(-1000)];
        for v in samples {
            let n = shortest_float(v);
            let digits: String = n.digits().iter().map(|d| char::from(b'0' + d)).collect();
            let std_text = format!("{:e}", v);
            let mantissa: String = std_text
                .split('e')
                .next()
                .unwrap()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            assert_eq!(digits, mantissa, "{}", v);
        }
    }

    #[test]
    fn test_exact_float() {
        let n = exact_float(0.5f64);
        assert_eq!(text(&n), ("5".to_string(), 0));
        let n = exact_float(-2.0f32);
        assert!(n.negative);
        assert_eq!(text(&n), ("2".to_string(), 1));
    }

    #[test]
    fn test_decimal_digits_keep_scale() {
        let v = Decimal::new(150, 2);
        assert_eq!(text(&decimal_digits(&v)), ("150".to_string(), 1));

        let v = Decimal::new(0, 2);
        let n = decimal_digits(&v);
        assert!(n.is_zero());
        assert_eq!(n.point(), -2);

        let v = Decimal::new(-5, 3);
        let n = decimal_digits(&v);
        assert!(n.negative);
        assert_eq!(text(&n), ("5".to_string(), -2));
    }

    #[test]
    fn test_integer_digits() {
        let n = exact_digits(&Value::I8(i8::MIN));
        assert!(n.negative);
        assert_eq!(text(&n), ("128".to_string(), 3));
        assert!(exact_digits(&Value::U32(0)).is_zero());
    }
}

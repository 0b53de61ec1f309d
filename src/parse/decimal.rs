// ============================================================================
// Decimal Assembler
// Digit run to 96-bit mantissa + scale (rust_decimal::Decimal)
// ============================================================================

use crate::domain::NumericKind;
use crate::numeric::{NormalizedNumber, ParseError, ParseResult};
use rust_decimal::Decimal;
use tracing::trace;

/// Largest scale a decimal can carry.
pub const MAX_SCALE: i64 = 28;

/// 2^96 - 1
const MAX_MANTISSA: u128 = (1u128 << 96) - 1;

/// Most integer digits a decimal can hold.
const MAX_INTEGER_DIGITS: i64 = 29;

fn overflow() -> ParseError {
    trace!("decimal overflow");
    ParseError::Overflow(NumericKind::Decimal)
}

fn build(mantissa: u128, negative: bool, scale: u32) -> Decimal {
    let lo = mantissa as u32;
    let mid = (mantissa >> 32) as u32;
    let hi = (mantissa >> 64) as u32;
    Decimal::from_parts(lo, mid, hi, negative && mantissa != 0, scale)
}

/// Assemble a scanned number into a decimal.
///
/// Trailing zeros are significant ("1.50" keeps scale 2). Digits beyond 28
/// fractional places or beyond the 96-bit mantissa are rounded half to even.
///
/// # Errors
/// `Overflow` when the integer part does not fit in 96 bits.
pub fn assemble_decimal(number: &NormalizedNumber) -> ParseResult<Decimal> {
    let digits = number.digits();
    let integer_digits = number.scale() as i64;

    if digits.is_empty() && !number.has_nonzero_tail() {
        // Zero keeps the written fractional width, capped at MAX_SCALE
        let scale = (-integer_digits).clamp(0, MAX_SCALE) as u32;
        return Ok(build(0, false, scale));
    }

    if integer_digits > MAX_INTEGER_DIGITS {
        return Err(overflow());
    }
    if integer_digits + MAX_SCALE < 0 {
        // First digit lies below the rounding position
        return Ok(build(0, false, MAX_SCALE as u32));
    }

    // Digits at index >= limit would need a scale above MAX_SCALE
    let limit = (integer_digits + MAX_SCALE).clamp(0, digits.len() as i64) as usize;

    let mut mantissa = 0u128;
    let mut count = 0usize;
    for &d in &digits[..limit] {
        let next = mantissa * 10 + d as u128;
        if next > MAX_MANTISSA {
            break;
        }
        mantissa = next;
        count += 1;
    }

    if (count as i64) < integer_digits {
        if count < digits.len() {
            // Integer digits did not fit
            return Err(overflow());
        }
        // Zeros implied by the exponent
        while (count as i64) < integer_digits {
            mantissa *= 10;
            if mantissa > MAX_MANTISSA {
                return Err(overflow());
            }
            count += 1;
        }
    }

    let mut scale = count as i64 - integer_digits;

    if count < digits.len() {
        let next = digits[count];
        let sticky =
            digits[count + 1..].iter().any(|&d| d != 0) || number.has_nonzero_tail();
        if next > 5 || (next == 5 && (sticky || mantissa & 1 == 1)) {
            mantissa += 1;
            if mantissa > MAX_MANTISSA {
                // Only reachable from 2^96 - 1, whose last digit is 5
                mantissa = (mantissa + 5) / 10;
                scale -= 1;
                if scale < 0 {
                    return Err(overflow());
                }
            }
        }
    }

    Ok(build(mantissa, number.negative, scale as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_style, LocaleSymbols, StyleFlags, TargetCategory};
    use crate::parse::scanner::scan;
    use std::str::FromStr;

    fn parse(input: &str) -> ParseResult<Decimal> {
        let flags = StyleFlags::NUMBER | StyleFlags::ALLOW_EXPONENT;
        let style = validate_style(flags, TargetCategory::Decimal)?;
        let number = scan(input, style, &LocaleSymbols::invariant())?;
        assemble_decimal(&number)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_scale_preserved() {
        let v = parse("1.50").unwrap();
        assert_eq!(v, dec("1.5"));
        assert_eq!(v.scale(), 2);

        let v = parse("0.00").unwrap();
        assert!(v.is_zero());
        assert_eq!(v.scale(), 2);

        let v = parse("-123.456").unwrap();
        assert_eq!(v, dec("-123.456"));
        assert_eq!(v.scale(), 3);
    }

    #[test]
    fn test_exponent_applied() {
        assert_eq!(parse("1.5e3").unwrap(), dec("1500"));
        assert_eq!(parse("1.5e3").unwrap().scale(), 0);
        assert_eq!(parse("15e-4").unwrap(), dec("0.0015"));
        assert_eq!(parse("15e-4").unwrap().scale(), 4);
    }

    #[test]
    fn test_negative_zero_drops_sign() {
        let v = parse("-0.0").unwrap();
        assert!(v.is_zero());
        assert!(!v.is_sign_negative());
    }

    #[test]
    fn test_bounds() {
        let max = "79228162514264337593543950335";
        assert_eq!(parse(max).unwrap(), Decimal::MAX);
        assert_eq!(
            parse("79228162514264337593543950336"),
            Err(ParseError::Overflow(NumericKind::Decimal))
        );
        assert_eq!(
            parse("1e29"),
            Err(ParseError::Overflow(NumericKind::Decimal))
        );
        assert_eq!(parse("1e28").unwrap().scale(), 0);
    }

    #[test]
    fn test_banker_rounding() {
        // 28 fractional digits max
        let v = parse("0.00000000000000000000000000025").unwrap();
        assert_eq!(v.scale(), 28);
        assert_eq!(v.mantissa(), 2);

        let v = parse("0.00000000000000000000000000035").unwrap();
        assert_eq!(v.mantissa(), 4);

        let v = parse("0.000000000000000000000000000251").unwrap();
        assert_eq!(v.mantissa(), 3);

        // 96-bit limit: 29 significant digits that do not fit drop to 28
        let v = parse("7.9228162514264337593543950336").unwrap();
        assert_eq!(v.to_string(), "7.922816251426433759354395034");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        let v = parse("1e-40").unwrap();
        assert!(v.is_zero());
        assert_eq!(v.scale(), 28);
    }
}

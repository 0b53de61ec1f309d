// ============================================================================
// Integer Assembler
// Digit run to fixed-width integer with per-step overflow checks
// ============================================================================

use crate::domain::NumericKind;
use crate::numeric::{NormalizedNumber, ParseError, ParseResult, SyntaxError};
use tracing::trace;

/// Unsigned accumulator of the target's own width.
pub trait Magnitude: Copy + PartialOrd {
    const ZERO: Self;

    /// `self * 10 + digit`, or `None` on overflow.
    fn checked_push_decimal(self, digit: u8) -> Option<Self>;

    /// `self << 4 | nibble`, or `None` when the top nibble is already occupied.
    fn checked_push_nibble(self, nibble: u8) -> Option<Self>;
}

/// Fixed-width integer the assembler can produce.
pub trait IntegerTarget: Copy {
    type Magnitude: Magnitude;
    const KIND: NumericKind;

    /// Apply the sign, honoring the asymmetric range of signed types.
    fn from_magnitude(magnitude: Self::Magnitude, negative: bool) -> Option<Self>;

    /// Reinterpret hex digits as two's complement bits of this width.
    fn from_raw_bits(magnitude: Self::Magnitude) -> Self;
}

macro_rules! impl_magnitude {
    ($($u:ty),*) => {$(
        impl Magnitude for $u {
            const ZERO: Self = 0;

            #[inline]
            fn checked_push_decimal(self, digit: u8) -> Option<Self> {
                self.checked_mul(10)?.checked_add(digit as $u)
            }

            #[inline]
            fn checked_push_nibble(self, nibble: u8) -> Option<Self> {
                if self >> (<$u>::BITS - 4) != 0 {
                    return None;
                }
                Some((self << 4) | nibble as $u)
            }
        }
    )*};
}

impl_magnitude!(u8, u16, u32, u64);

macro_rules! impl_signed_target {
    ($($i:ty => $u:ty, $kind:ident);*) => {$(
        impl IntegerTarget for $i {
            type Magnitude = $u;
            const KIND: NumericKind = NumericKind::$kind;

            #[inline]
            fn from_magnitude(magnitude: $u, negative: bool) -> Option<Self> {
                if negative {
                    // |MIN| is MAX + 1; wrapping_neg maps it back onto MIN
                    (magnitude <= <$i>::MAX as $u + 1).then(|| (magnitude as $i).wrapping_neg())
                } else {
                    (magnitude <= <$i>::MAX as $u).then_some(magnitude as $i)
                }
            }

            #[inline]
            fn from_raw_bits(magnitude: $u) -> Self {
                magnitude as $i
            }
        }
    )*};
}

macro_rules! impl_unsigned_target {
    ($($u:ty, $kind:ident);*) => {$(
        impl IntegerTarget for $u {
            type Magnitude = $u;
            const KIND: NumericKind = NumericKind::$kind;

            #[inline]
            fn from_magnitude(magnitude: $u, negative: bool) -> Option<Self> {
                (!negative || magnitude == 0).then_some(magnitude)
            }

            #[inline]
            fn from_raw_bits(magnitude: $u) -> Self {
                magnitude
            }
        }
    )*};
}

impl_signed_target!(i8 => u8, I8; i16 => u16, I16; i32 => u32, I32; i64 => u64, I64);
impl_unsigned_target!(u8, U8; u16, U16; u32, U32; u64, U64);

fn overflow<T: IntegerTarget>() -> ParseError {
    trace!(target_kind = %T::KIND, "integer overflow");
    ParseError::Overflow(T::KIND)
}

/// Assemble a scanned number into `T`.
///
/// # Errors
/// - `Overflow` when the magnitude leaves the range of `T`
/// - `Syntax(NonIntegral)` when non-zero digits follow the decimal point
pub fn assemble_integer<T: IntegerTarget>(number: &NormalizedNumber) -> ParseResult<T> {
    if number.is_hex() {
        if number.has_nonzero_tail() {
            return Err(overflow::<T>());
        }
        let mut magnitude = T::Magnitude::ZERO;
        for &nibble in number.digits() {
            magnitude = magnitude
                .checked_push_nibble(nibble)
                .ok_or_else(overflow::<T>)?;
        }
        return Ok(T::from_raw_bits(magnitude));
    }

    let digits = number.digits();
    let integer_len = number.scale().max(0) as usize;
    let (integer_digits, fraction_digits) = digits.split_at(integer_len.min(digits.len()));

    let mut magnitude = T::Magnitude::ZERO;
    for &digit in integer_digits {
        magnitude = magnitude
            .checked_push_decimal(digit)
            .ok_or_else(overflow::<T>)?;
    }
    // Zeros implied by an exponent (or dropped past capacity). The first
    // digit is non-zero, so this overflows within a few iterations.
    if !integer_digits.is_empty() {
        for _ in integer_digits.len()..integer_len {
            magnitude = magnitude
                .checked_push_decimal(0)
                .ok_or_else(overflow::<T>)?;
        }
    }

    let fraction_nonzero = fraction_digits.iter().any(|&d| d != 0)
        || (number.has_nonzero_tail() && integer_len <= digits.len());
    if fraction_nonzero {
        return Err(SyntaxError::NonIntegral.into());
    }

    T::from_magnitude(magnitude, number.negative).ok_or_else(overflow::<T>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_style, LocaleSymbols, StyleFlags, TargetCategory};
    use crate::parse::scanner::scan;

    fn assemble<T: IntegerTarget>(input: &str, flags: StyleFlags) -> ParseResult<T> {
        let style = validate_style(flags, TargetCategory::Integer)?;
        let number = scan(input, style, &LocaleSymbols::invariant())?;
        assemble_integer::<T>(&number)
    }

    #[test]
    fn test_type_bounds() {
        assert_eq!(assemble::<i8>("127", StyleFlags::INTEGER), Ok(127));
        assert_eq!(assemble::<i8>("-128", StyleFlags::INTEGER), Ok(-128));
        assert_eq!(
            assemble::<i8>("128", StyleFlags::INTEGER),
            Err(ParseError::Overflow(NumericKind::I8))
        );
        assert_eq!(
            assemble::<i8>("-129", StyleFlags::INTEGER),
            Err(ParseError::Overflow(NumericKind::I8))
        );
        assert_eq!(assemble::<u64>("18446744073709551615", StyleFlags::INTEGER), Ok(u64::MAX));
        assert_eq!(
            assemble::<u64>("18446744073709551616", StyleFlags::INTEGER),
            Err(ParseError::Overflow(NumericKind::U64))
        );
        assert_eq!(assemble::<i64>("-9223372036854775808", StyleFlags::INTEGER), Ok(i64::MIN));
    }

    #[test]
    fn test_leading_zeros_do_not_overflow() {
        let input = format!("{}255", "0".repeat(2000));
        assert_eq!(assemble::<u8>(&input, StyleFlags::INTEGER), Ok(255));
    }

    #[test]
    fn test_unsigned_negative() {
        assert_eq!(assemble::<u32>("-0", StyleFlags::INTEGER), Ok(0));
        assert_eq!(
            assemble::<u32>("-1", StyleFlags::INTEGER),
            Err(ParseError::Overflow(NumericKind::U32))
        );
    }

    #[test]
    fn test_fraction_handling() {
        let flags = StyleFlags::NUMBER | StyleFlags::ALLOW_EXPONENT;
        assert_eq!(assemble::<i32>("12.000", flags), Ok(12));
        assert_eq!(assemble::<i32>("1.5e1", flags), Ok(15));
        assert_eq!(assemble::<i32>("1,000", flags), Ok(1000));
        assert_eq!(
            assemble::<i32>("12.5", flags),
            Err(ParseError::Syntax(SyntaxError::NonIntegral))
        );
        assert_eq!(assemble::<i32>("0.0", flags), Ok(0));
        assert_eq!(
            assemble::<i32>("1e10", flags),
            Err(ParseError::Overflow(NumericKind::I32))
        );
        assert_eq!(assemble::<i32>("1e99999", flags), Err(ParseError::Overflow(NumericKind::I32)));
    }

    #[test]
    fn test_hex_twos_complement() {
        assert_eq!(assemble::<i8>("FF", StyleFlags::HEX_NUMBER), Ok(-1));
        assert_eq!(assemble::<i16>("8000", StyleFlags::HEX_NUMBER), Ok(i16::MIN));
        assert_eq!(assemble::<u32>("0000DEADbeef", StyleFlags::HEX_NUMBER), Ok(0xDEAD_BEEF));
        assert_eq!(
            assemble::<u8>("100", StyleFlags::HEX_NUMBER),
            Err(ParseError::Overflow(NumericKind::U8))
        );
    }
}

// ============================================================================
// Numeric Target Interface
// Binds Rust numeric types to the engine's closed set of targets
// ============================================================================

use crate::domain::{NumericKind, Value};
use crate::numeric::{NormalizedNumber, ParseResult};
use crate::parse::decimal::assemble_decimal;
use crate::parse::float::assemble_float;
use crate::parse::integer::assemble_integer;
use rust_decimal::Decimal;

/// A Rust type the engine can parse into and format from.
///
/// Implemented for `i8`..`u64`, `f32`, `f64` and [`Decimal`]; the set is
/// closed and matches [`NumericKind`] one-to-one.
pub trait NumericTarget: Copy + Send + Sync + 'static {
    /// The engine's tag for this type
    const KIND: NumericKind;

    /// Wrap in the tagged union
    fn into_value(self) -> Value;

    /// Unwrap from the tagged union; `None` if the tag differs
    fn from_value(value: Value) -> Option<Self>;

    /// Convert scanner output into this type
    fn assemble(number: &NormalizedNumber) -> ParseResult<Self>;
}

macro_rules! impl_integer_target {
    ($($t:ty => $kind:ident),*) => {$(
        impl NumericTarget for $t {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline]
            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            #[inline]
            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }

            #[inline]
            fn assemble(number: &NormalizedNumber) -> ParseResult<Self> {
                assemble_integer::<$t>(number)
            }
        }
    )*};
}

impl_integer_target!(
    i8 => I8, u8 => U8, i16 => I16, u16 => U16,
    i32 => I32, u32 => U32, i64 => I64, u64 => U64
);

macro_rules! impl_float_target {
    ($($t:ty => $kind:ident),*) => {$(
        impl NumericTarget for $t {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline]
            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            #[inline]
            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }

            #[inline]
            fn assemble(number: &NormalizedNumber) -> ParseResult<Self> {
                Ok(assemble_float::<$t>(number))
            }
        }
    )*};
}

impl_float_target!(f32 => F32, f64 => F64);

impl NumericTarget for Decimal {
    const KIND: NumericKind = NumericKind::Decimal;

    #[inline]
    fn into_value(self) -> Value {
        Value::Decimal(self)
    }

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Decimal(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn assemble(number: &NormalizedNumber) -> ParseResult<Self> {
        assemble_decimal(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<T: NumericTarget>() -> NumericKind {
        T::KIND
    }

    #[test]
    fn test_kinds_line_up() {
        assert_eq!(kind_of::<i8>(), NumericKind::I8);
        assert_eq!(kind_of::<u64>(), NumericKind::U64);
        assert_eq!(kind_of::<f32>(), NumericKind::F32);
        assert_eq!(kind_of::<Decimal>(), NumericKind::Decimal);
    }

    #[test]
    fn test_value_wrapping() {
        assert_eq!(42i16.into_value(), Value::I16(42));
        assert_eq!(i16::from_value(Value::I16(-3)), Some(-3));
        assert_eq!(i16::from_value(Value::U16(3)), None);
        assert_eq!(f64::from_value(2.5f64.into_value()), Some(2.5));
    }
}

// ============================================================================
// Numeric Values
// Closed set of fixed-width targets and a tagged union over their values
// ============================================================================

use super::style::TargetCategory;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed-width numeric types the engine parses into and formats from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// IEEE 754 binary32
    F32,
    /// IEEE 754 binary64
    F64,
    /// 96-bit mantissa with a decimal scale of 0..=28
    Decimal,
}

impl NumericKind {
    pub const ALL: [NumericKind; 11] = [
        NumericKind::I8,
        NumericKind::U8,
        NumericKind::I16,
        NumericKind::U16,
        NumericKind::I32,
        NumericKind::U32,
        NumericKind::I64,
        NumericKind::U64,
        NumericKind::F32,
        NumericKind::F64,
        NumericKind::Decimal,
    ];

    pub fn category(self) -> TargetCategory {
        match self {
            NumericKind::F32 | NumericKind::F64 => TargetCategory::Floating,
            NumericKind::Decimal => TargetCategory::Decimal,
            _ => TargetCategory::Integer,
        }
    }

    /// Storage width in bits.
    pub fn bits(self) -> u32 {
        match self {
            NumericKind::I8 | NumericKind::U8 => 8,
            NumericKind::I16 | NumericKind::U16 => 16,
            NumericKind::I32 | NumericKind::U32 | NumericKind::F32 => 32,
            NumericKind::I64 | NumericKind::U64 | NumericKind::F64 => 64,
            NumericKind::Decimal => 128,
        }
    }

    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericKind::U8 | NumericKind::U16 | NumericKind::U32 | NumericKind::U64
        )
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::I8 => "int8",
            NumericKind::U8 => "uint8",
            NumericKind::I16 => "int16",
            NumericKind::U16 => "uint16",
            NumericKind::I32 => "int32",
            NumericKind::U32 => "uint32",
            NumericKind::I64 => "int64",
            NumericKind::U64 => "uint64",
            NumericKind::F32 => "binary32",
            NumericKind::F64 => "binary64",
            NumericKind::Decimal => "decimal128",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Value
// ============================================================================

/// A value of one of the fixed-width targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
}

impl Value {
    pub fn kind(&self) -> NumericKind {
        match self {
            Value::I8(_) => NumericKind::I8,
            Value::U8(_) => NumericKind::U8,
            Value::I16(_) => NumericKind::I16,
            Value::U16(_) => NumericKind::U16,
            Value::I32(_) => NumericKind::I32,
            Value::U32(_) => NumericKind::U32,
            Value::I64(_) => NumericKind::I64,
            Value::U64(_) => NumericKind::U64,
            Value::F32(_) => NumericKind::F32,
            Value::F64(_) => NumericKind::F64,
            Value::Decimal(_) => NumericKind::Decimal,
        }
    }

    /// Raw storage bits, zero-extended to 128.
    ///
    /// Signed integers are reinterpreted as their unsigned counterpart first,
    /// floats use their IEEE 754 encoding, and decimals use the 16-byte
    /// little-endian serialization of `rust_decimal`.
    pub fn to_bits(&self) -> u128 {
        match *self {
            Value::I8(v) => v as u8 as u128,
            Value::U8(v) => v as u128,
            Value::I16(v) => v as u16 as u128,
            Value::U16(v) => v as u128,
            Value::I32(v) => v as u32 as u128,
            Value::U32(v) => v as u128,
            Value::I64(v) => v as u64 as u128,
            Value::U64(v) => v as u128,
            Value::F32(v) => v.to_bits() as u128,
            Value::F64(v) => v.to_bits() as u128,
            Value::Decimal(v) => u128::from_le_bytes(v.serialize()),
        }
    }

    /// Inverse of [`Value::to_bits`]; bits above the kind's width are ignored.
    pub fn from_bits(kind: NumericKind, bits: u128) -> Value {
        match kind {
            NumericKind::I8 => Value::I8(bits as u8 as i8),
            NumericKind::U8 => Value::U8(bits as u8),
            NumericKind::I16 => Value::I16(bits as u16 as i16),
            NumericKind::U16 => Value::U16(bits as u16),
            NumericKind::I32 => Value::I32(bits as u32 as i32),
            NumericKind::U32 => Value::U32(bits as u32),
            NumericKind::I64 => Value::I64(bits as u64 as i64),
            NumericKind::U64 => Value::U64(bits as u64),
            NumericKind::F32 => Value::F32(f32::from_bits(bits as u32)),
            NumericKind::F64 => Value::F64(f64::from_bits(bits as u64)),
            NumericKind::Decimal => Value::Decimal(Decimal::deserialize(bits.to_le_bytes())),
        }
    }

    pub fn is_nan(&self) -> bool {
        match *self {
            Value::F32(v) => v.is_nan(),
            Value::F64(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Exact equality on the encoded representation (distinguishes `-0.0`
    /// from `0.0` and `1.0` from `1.00` for decimals).
    pub fn bit_eq(&self, other: &Value) -> bool {
        self.kind() == other.kind() && self.to_bits() == other.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories() {
        assert_eq!(NumericKind::I8.category(), TargetCategory::Integer);
        assert_eq!(NumericKind::U64.category(), TargetCategory::Integer);
        assert_eq!(NumericKind::F32.category(), TargetCategory::Floating);
        assert_eq!(NumericKind::Decimal.category(), TargetCategory::Decimal);
        assert!(NumericKind::I16.is_signed());
        assert!(!NumericKind::U16.is_signed());
    }

    #[test]
    fn test_bits_round_trip() {
        let values = [
            Value::I8(-1),
            Value::U16(65535),
            Value::I32(i32::MIN),
            Value::U64(u64::MAX),
            Value::F32(-0.0),
            Value::F64(f64::MIN_POSITIVE),
            Value::Decimal(Decimal::new(-15, 1)),
        ];
        for v in values {
            let back = Value::from_bits(v.kind(), v.to_bits());
            assert!(v.bit_eq(&back), "{:?} -> {:?}", v, back);
        }
    }

    #[test]
    fn test_signed_bits_are_twos_complement() {
        assert_eq!(Value::I8(-1).to_bits(), 0xFF);
        assert_eq!(Value::I16(-2).to_bits(), 0xFFFE);
        assert_eq!(Value::F64(1.0).to_bits(), 0x3FF0_0000_0000_0000);
    }

    #[test]
    fn test_bit_eq_distinguishes_signed_zero() {
        assert_eq!(Value::F64(0.0), Value::F64(-0.0));
        assert!(!Value::F64(0.0).bit_eq(&Value::F64(-0.0)));
        assert!(Value::F32(f32::NAN).is_nan());
    }
}

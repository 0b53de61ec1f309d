// ============================================================================
// Parse Styles
// Style flag bitset and the validator that rejects inconsistent combinations
// ============================================================================

use crate::numeric::StyleError;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Style Flags
// ============================================================================

/// Bitset controlling which lexical forms the scanner accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct StyleFlags(u32);

impl StyleFlags {
    pub const NONE: Self = Self(0);
    pub const ALLOW_LEADING_WHITE: Self = Self(0x0001);
    pub const ALLOW_TRAILING_WHITE: Self = Self(0x0002);
    pub const ALLOW_LEADING_SIGN: Self = Self(0x0004);
    pub const ALLOW_TRAILING_SIGN: Self = Self(0x0008);
    pub const ALLOW_PARENTHESES: Self = Self(0x0010);
    pub const ALLOW_DECIMAL_POINT: Self = Self(0x0020);
    pub const ALLOW_THOUSANDS: Self = Self(0x0040);
    pub const ALLOW_EXPONENT: Self = Self(0x0080);
    pub const ALLOW_CURRENCY_SYMBOL: Self = Self(0x0100);
    pub const ALLOW_HEX_SPECIFIER: Self = Self(0x0200);

    // ========================================================================
    // Composite Styles
    // ========================================================================

    /// Whitespace and a leading sign
    pub const INTEGER: Self = Self(0x0007);
    /// Whitespace and hex digits
    pub const HEX_NUMBER: Self = Self(0x0203);
    /// Integer plus trailing sign, decimal point and thousands separators
    pub const NUMBER: Self = Self(0x006F);
    /// Integer plus decimal point and exponent
    pub const FLOAT: Self = Self(0x00A7);
    /// Everything except exponent and hex
    pub const CURRENCY: Self = Self(0x017F);
    /// Everything except hex
    pub const ANY: Self = Self(0x01FF);

    const DEFINED: u32 = 0x03FF;

    /// Wrap raw bits without checking them; [`validate_style`] rejects undefined bits.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for StyleFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for StyleFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for StyleFlags {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Not for StyleFlags {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0 & Self::DEFINED)
    }
}

const FLAG_NAMES: [(StyleFlags, &str); 10] = [
    (StyleFlags::ALLOW_LEADING_WHITE, "AllowLeadingWhite"),
    (StyleFlags::ALLOW_TRAILING_WHITE, "AllowTrailingWhite"),
    (StyleFlags::ALLOW_LEADING_SIGN, "AllowLeadingSign"),
    (StyleFlags::ALLOW_TRAILING_SIGN, "AllowTrailingSign"),
    (StyleFlags::ALLOW_PARENTHESES, "AllowParentheses"),
    (StyleFlags::ALLOW_DECIMAL_POINT, "AllowDecimalPoint"),
    (StyleFlags::ALLOW_THOUSANDS, "AllowThousands"),
    (StyleFlags::ALLOW_EXPONENT, "AllowExponent"),
    (StyleFlags::ALLOW_CURRENCY_SYMBOL, "AllowCurrencySymbol"),
    (StyleFlags::ALLOW_HEX_SPECIFIER, "AllowHexSpecifier"),
];

impl fmt::Debug for StyleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let mut first = true;
        for (flag, name) in FLAG_NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        let undefined = self.0 & !Self::DEFINED;
        if undefined != 0 {
            if !first {
                write!(f, " | ")?;
            }
            write!(f, "{:#x}", undefined)?;
        }
        Ok(())
    }
}

// ============================================================================
// Target Categories
// ============================================================================

/// Broad family of a parse target; style rules differ per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetCategory {
    Integer,
    Floating,
    Decimal,
}

impl fmt::Display for TargetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetCategory::Integer => write!(f, "integer"),
            TargetCategory::Floating => write!(f, "floating-point"),
            TargetCategory::Decimal => write!(f, "decimal"),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Style flags that passed [`validate_style`] for a specific target category.
///
/// The scanner only accepts this type, so an unchecked combination can never
/// reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedStyle {
    flags: StyleFlags,
    category: TargetCategory,
}

impl ValidatedStyle {
    #[inline]
    pub fn flags(self) -> StyleFlags {
        self.flags
    }

    #[inline]
    pub fn category(self) -> TargetCategory {
        self.category
    }

    #[inline]
    pub fn allows(self, flag: StyleFlags) -> bool {
        self.flags.contains(flag)
    }
}

/// Reject style combinations that are internally inconsistent for `category`.
///
/// # Errors
/// - `UndefinedBits` if any bit outside the ten defined flags is set
/// - `HexWithIncompatibleFlags` if an integer style mixes hex with anything
///   beyond leading/trailing whitespace
/// - `HexNotSupported` if hex is requested for a floating or decimal target
pub fn validate_style(
    style: StyleFlags,
    category: TargetCategory,
) -> Result<ValidatedStyle, StyleError> {
    let undefined = style.bits() & !StyleFlags::DEFINED;
    if undefined != 0 {
        return Err(StyleError::UndefinedBits(undefined));
    }

    if style.contains(StyleFlags::ALLOW_HEX_SPECIFIER) {
        match category {
            TargetCategory::Integer => {
                if style.intersects(!StyleFlags::HEX_NUMBER) {
                    return Err(StyleError::HexWithIncompatibleFlags(style));
                }
            },
            TargetCategory::Floating | TargetCategory::Decimal => {
                return Err(StyleError::HexNotSupported(category));
            },
        }
    }

    Ok(ValidatedStyle {
        flags: style,
        category,
    })
}

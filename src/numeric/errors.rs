// ============================================================================
// Conversion Errors
// Error types for parsing, formatting and Hebrew numeral operations
// ============================================================================

use crate::domain::{NumericKind, StyleFlags, TargetCategory};
use crate::domain::locale::{
    MAX_CURRENCY_NEGATIVE_PATTERN, MAX_PERCENT_NEGATIVE_PATTERN, MAX_POSITIVE_PATTERN,
    MAX_SYMBOL_LEN,
};
use crate::domain::{FormatKind, MAX_PRECISION};
use std::fmt;

// ============================================================================
// Style Errors
// ============================================================================

/// Reasons a [`StyleFlags`] value is rejected before any scanning begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleError {
    /// Bits outside the defined flag set are present
    UndefinedBits(u32),
    /// Hex specifier combined with a flag outside {leading white, trailing white}
    HexWithIncompatibleFlags(StyleFlags),
    /// Hex specifier requested for a floating or decimal target
    HexNotSupported(TargetCategory),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::UndefinedBits(bits) => {
                write!(f, "undefined style bits set: {:#x}", bits)
            },
            StyleError::HexWithIncompatibleFlags(style) => write!(
                f,
                "hex specifier cannot be combined with {:?}",
                *style & !StyleFlags::HEX_NUMBER
            ),
            StyleError::HexNotSupported(category) => {
                write!(f, "hex specifier is not supported for {} targets", category)
            },
        }
    }
}

impl std::error::Error for StyleError {}

// ============================================================================
// Locale Errors
// ============================================================================

/// Reasons a [`LocaleSymbols`](crate::domain::LocaleSymbols) descriptor is
/// unusable for parsing or formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleError {
    EmptyDecimalSeparator,
    /// Decimal and group separators are the same string
    SeparatorsCollide,
    EmptySign,
    /// Positive and negative signs are the same string
    SignsCollide,
    /// A separator, sign or symbol is longer than `MAX_SYMBOL_LEN` bytes
    SymbolTooLong,
    /// A group size is outside 1..=9, or 0 appears before the last entry
    InvalidGroupSizes,
    PositivePatternOutOfRange,
    CurrencyNegativePatternOutOfRange,
    PercentNegativePatternOutOfRange,
    /// A default precision is above `MAX_PRECISION`
    PrecisionOutOfRange,
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::EmptyDecimalSeparator => write!(f, "Decimal separator cannot be empty"),
            LocaleError::SeparatorsCollide => write!(f, "Decimal and group separators must differ"),
            LocaleError::EmptySign => write!(f, "Sign strings cannot be empty"),
            LocaleError::SignsCollide => write!(f, "Positive and negative signs must differ"),
            LocaleError::SymbolTooLong => {
                write!(f, "Symbols cannot exceed {} bytes", MAX_SYMBOL_LEN)
            },
            LocaleError::InvalidGroupSizes => {
                write!(f, "Group sizes must be 1..=9 (only the last may be 0)")
            },
            LocaleError::PositivePatternOutOfRange => write!(
                f,
                "Positive pattern index must be between 0 and {}",
                MAX_POSITIVE_PATTERN
            ),
            LocaleError::CurrencyNegativePatternOutOfRange => write!(
                f,
                "Currency negative pattern index must be between 0 and {}",
                MAX_CURRENCY_NEGATIVE_PATTERN
            ),
            LocaleError::PercentNegativePatternOutOfRange => write!(
                f,
                "Percent negative pattern index must be between 0 and {}",
                MAX_PERCENT_NEGATIVE_PATTERN
            ),
            LocaleError::PrecisionOutOfRange => {
                write!(f, "Default precisions cannot exceed {}", MAX_PRECISION)
            },
        }
    }
}

impl std::error::Error for LocaleError {}

// ============================================================================
// Parse Errors
// ============================================================================

/// Lexical failures: the input does not match the active style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxError {
    /// Input is empty or consists only of whitespace
    Empty,
    /// Valid characters were found, but none of them were digits
    NoDigits,
    /// A character not permitted by the style at this position
    UnexpectedCharacter { offset: usize },
    /// An opening parenthesis without its closing counterpart
    UnbalancedParentheses,
    /// Raw input bytes are not valid UTF-8
    InvalidUtf8 { offset: usize },
    /// Non-zero fractional digits for an integer target
    NonIntegral,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Empty => write!(f, "input is empty or whitespace only"),
            SyntaxError::NoDigits => write!(f, "no digits found"),
            SyntaxError::UnexpectedCharacter { offset } => {
                write!(f, "unexpected character at byte offset {}", offset)
            },
            SyntaxError::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            SyntaxError::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 sequence at byte offset {}", offset)
            },
            SyntaxError::NonIntegral => {
                write!(f, "fractional digits are not allowed for an integer target")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Errors that can occur while parsing a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The locale descriptor failed validation
    InvalidLocale(LocaleError),
    /// The style flags are malformed for the requested target
    InvalidStyle(StyleError),
    /// The input does not lexically match the active style
    Syntax(SyntaxError),
    /// The magnitude exceeds the range of the target type
    Overflow(NumericKind),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidLocale(e) => write!(f, "invalid locale: {}", e),
            ParseError::InvalidStyle(e) => write!(f, "invalid style: {}", e),
            ParseError::Syntax(e) => write!(f, "invalid input: {}", e),
            ParseError::Overflow(kind) => {
                write!(f, "value was either too large or too small for {}", kind)
            },
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LocaleError> for ParseError {
    fn from(e: LocaleError) -> Self {
        ParseError::InvalidLocale(e)
    }
}

impl From<StyleError> for ParseError {
    fn from(e: StyleError) -> Self {
        ParseError::InvalidStyle(e)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        ParseError::Syntax(e)
    }
}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

// ============================================================================
// Format Errors
// ============================================================================

/// Errors that can occur while formatting a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// The destination cannot hold the rendered text; retry with `required` bytes
    BufferTooSmall { required: usize },
    /// The specifier kind does not apply to the value's type (e.g. hex on a float)
    UnsupportedSpecifier { kind: FormatKind, target: NumericKind },
    /// The specifier string is not a recognised standard format
    InvalidSpecifier,
    /// Rendered text would exceed the internal render capacity
    CapacityExceeded,
    /// The locale descriptor failed validation
    InvalidLocale(LocaleError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BufferTooSmall { required } => {
                write!(f, "destination too small: {} bytes required", required)
            },
            FormatError::UnsupportedSpecifier { kind, target } => {
                write!(f, "format {:?} is not supported for {}", kind, target)
            },
            FormatError::InvalidSpecifier => write!(f, "invalid format specifier"),
            FormatError::CapacityExceeded => {
                write!(f, "rendered text exceeds the internal render capacity")
            },
            FormatError::InvalidLocale(e) => write!(f, "invalid locale: {}", e),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<LocaleError> for FormatError {
    fn from(e: LocaleError) -> Self {
        FormatError::InvalidLocale(e)
    }
}

/// Result type alias for format operations
pub type FormatResult<T> = Result<T, FormatError>;

// ============================================================================
// Hebrew Numeral Errors
// ============================================================================

/// Errors produced by the Hebrew numeral codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewError {
    /// Character is neither a numeral letter nor a quote mark
    NotARecognizedDigit(char),
    /// Letter sequence or quote placement is not a valid numeral
    InvalidHebrewNumber,
    /// Value cannot be rendered (valid range is 1..=999, or 5001..=5999)
    OutOfRange(i32),
    /// Destination cannot hold the encoded numeral
    BufferTooSmall { required: usize },
}

impl fmt::Display for HebrewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HebrewError::NotARecognizedDigit(ch) => {
                write!(f, "{:?} is not a Hebrew numeral character", ch)
            },
            HebrewError::InvalidHebrewNumber => write!(f, "invalid Hebrew number"),
            HebrewError::OutOfRange(n) => write!(f, "{} cannot be written as a Hebrew numeral", n),
            HebrewError::BufferTooSmall { required } => {
                write!(f, "destination too small: {} bytes required", required)
            },
        }
    }
}

impl std::error::Error for HebrewError {}

/// Result type for Hebrew numeral operations
pub type HebrewResult<T> = Result<T, HebrewError>;

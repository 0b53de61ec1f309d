// ============================================================================
// Numeric Conversion Library
// Culture-aware parsing and formatting of fixed-width numeric values
// ============================================================================

//! # numconv
//!
//! Bit-exact conversion between text and the fixed-width numeric types:
//! `i8`..`u64`, `f32`, `f64` and 128-bit [`rust_decimal::Decimal`].
//!
//! ## Features
//!
//! - **Style-gated parsing**: whitespace, signs, parentheses, thousands
//!   separators, decimal point, exponent, currency symbol and hex, each
//!   enabled by a [`StyleFlags`](domain::StyleFlags) bit
//! - **Correctly rounded floats**: decimal text converts to the nearest
//!   binary32/binary64, ties to even, across the whole range
//! - **Locale-driven formatting**: General, Fixed, Scientific, Number,
//!   Currency, Percent, Hex and Decimal specifiers with culture patterns
//! - **Calendar decomposition** of 100ns tick counts
//! - **Hebrew numerals**: encoder and state-machine decoder
//!
//! ## Example
//!
//! ```rust
//! use numconv::prelude::*;
//!
//! let locale = LocaleSymbols::en_us();
//!
//! // Parse with thousands separators and a decimal point
//! let value = parse("-1,234,567.89", StyleFlags::NUMBER, &locale, NumericKind::F64).unwrap();
//!
//! // Format as currency into a caller-owned buffer
//! let mut buf = [0u8; 64];
//! let len = format(value, FormatSpec::currency(), &locale, &mut buf).unwrap();
//! assert_eq!(&buf[..len], "-$1,234,567.89".as_bytes());
//! ```

pub mod calendar;
pub mod domain;
pub mod format;
pub mod hebrew;
pub mod interfaces;
pub mod numeric;
pub mod parse;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calendar::{
        decompose_date, decompose_time, decompose_time_precise, format_date_time, DateTimeFormat,
        Ticks,
    };
    pub use crate::domain::{
        FormatKind, FormatSpec, LetterCase, LocaleSymbols, NumericKind, StyleFlags,
        TargetCategory, Value,
    };
    pub use crate::format::{format, format_to_string, format_value, format_with};
    pub use crate::hebrew::{
        decode as hebrew_decode, encode as hebrew_encode, is_hebrew_digit, HebrewParsingContext,
        HebrewStep,
    };
    pub use crate::interfaces::NumericTarget;
    pub use crate::numeric::{
        FormatError, FormatResult, HebrewError, LocaleError, ParseError, ParseResult, StyleError,
        SyntaxError,
    };
    pub use crate::parse::{default_style, parse, parse_as, parse_bytes};
}

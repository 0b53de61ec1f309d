// ============================================================================
// Numeric Module
// Digit buffers and error types shared by the parse and format paths
// ============================================================================
//
// This module provides:
// - NormalizedNumber: sign + digit run + point/exponent, the scanner's output
// - ShiftDecimal: exact decimal digits under binary shifts
// - ParseError / FormatError / HebrewError / LocaleError: typed failures
//
// Design principles:
// - Fixed-capacity storage only (no heap growth while converting)
// - All failures are returned as Result (no panics)

mod errors;
pub mod number_buffer;
pub mod shift_decimal;

pub use errors::{
    FormatError, FormatResult, HebrewError, HebrewResult, LocaleError, ParseError, ParseResult,
    StyleError, SyntaxError,
};
pub use number_buffer::{NormalizedNumber, SpecialValue, DIGIT_CAPACITY, MAX_EXPONENT};
pub use shift_decimal::ShiftDecimal;

// ============================================================================
// Parse Module
// Style validation -> lexical scan -> integer / float / decimal assembly
// ============================================================================

pub mod decimal;
pub mod float;
pub mod integer;
pub mod scanner;

use crate::domain::{validate_style, LocaleSymbols, NumericKind, StyleFlags, Value};
use crate::interfaces::NumericTarget;
use crate::numeric::{ParseResult, SyntaxError};
use rust_decimal::Decimal;
use tracing::debug;

/// Parse `input` into the Rust type `T`.
///
/// # Example
/// ```
/// use numconv::prelude::*;
///
/// let locale = LocaleSymbols::invariant();
/// let v: i32 = parse_as("-1,234", StyleFlags::NUMBER, &locale).unwrap();
/// assert_eq!(v, -1234);
/// ```
pub fn parse_as<T: NumericTarget>(
    input: &str,
    style: StyleFlags,
    locale: &LocaleSymbols,
) -> ParseResult<T> {
    locale.check().map_err(|e| {
        debug!(locale = locale.name(), error = %e, "rejected parse locale");
        e
    })?;
    let validated = validate_style(style, T::KIND.category()).map_err(|e| {
        debug!(?style, target = %T::KIND, error = %e, "rejected parse style");
        e
    })?;
    let number = scanner::scan(input, validated, locale)?;
    T::assemble(&number)
}

/// Parse `input` into the target `kind`.
///
/// # Errors
/// - `InvalidLocale` when the locale fails [`LocaleSymbols::check`]
/// - `InvalidStyle` for inconsistent style flags
/// - `Syntax` when the text does not match the style
/// - `Overflow` when the value leaves the target's range
pub fn parse(
    input: &str,
    style: StyleFlags,
    locale: &LocaleSymbols,
    kind: NumericKind,
) -> ParseResult<Value> {
    match kind {
        NumericKind::I8 => parse_as::<i8>(input, style, locale).map(Value::I8),
        NumericKind::U8 => parse_as::<u8>(input, style, locale).map(Value::U8),
        NumericKind::I16 => parse_as::<i16>(input, style, locale).map(Value::I16),
        NumericKind::U16 => parse_as::<u16>(input, style, locale).map(Value::U16),
        NumericKind::I32 => parse_as::<i32>(input, style, locale).map(Value::I32),
        NumericKind::U32 => parse_as::<u32>(input, style, locale).map(Value::U32),
        NumericKind::I64 => parse_as::<i64>(input, style, locale).map(Value::I64),
        NumericKind::U64 => parse_as::<u64>(input, style, locale).map(Value::U64),
        NumericKind::F32 => parse_as::<f32>(input, style, locale).map(Value::F32),
        NumericKind::F64 => parse_as::<f64>(input, style, locale).map(Value::F64),
        NumericKind::Decimal => parse_as::<Decimal>(input, style, locale).map(Value::Decimal),
    }
}

/// Parse raw bytes, which must be UTF-8.
pub fn parse_bytes(
    input: &[u8],
    style: StyleFlags,
    locale: &LocaleSymbols,
    kind: NumericKind,
) -> ParseResult<Value> {
    let text = std::str::from_utf8(input).map_err(|e| SyntaxError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    parse(text, style, locale, kind)
}

/// Style a target category accepts by default: `INTEGER` for integers,
/// `FLOAT | ALLOW_THOUSANDS` for binary floats and `NUMBER` for decimals.
pub fn default_style(kind: NumericKind) -> StyleFlags {
    use crate::domain::TargetCategory;
    match kind.category() {
        TargetCategory::Integer => StyleFlags::INTEGER,
        TargetCategory::Floating => StyleFlags::FLOAT | StyleFlags::ALLOW_THOUSANDS,
        TargetCategory::Decimal => StyleFlags::NUMBER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{LocaleError, ParseError, StyleError};

    #[test]
    fn test_parse_dispatch() {
        let locale = LocaleSymbols::invariant();
        assert_eq!(
            parse("200", StyleFlags::INTEGER, &locale, NumericKind::U8),
            Ok(Value::U8(200))
        );
        assert_eq!(
            parse("200", StyleFlags::INTEGER, &locale, NumericKind::I8),
            Err(ParseError::Overflow(NumericKind::I8))
        );
        assert_eq!(
            parse("2.5", StyleFlags::FLOAT, &locale, NumericKind::F64),
            Ok(Value::F64(2.5))
        );
    }

    #[test]
    fn test_invalid_style_rejected_before_scanning() {
        let locale = LocaleSymbols::invariant();
        let style = StyleFlags::HEX_NUMBER | StyleFlags::ALLOW_DECIMAL_POINT;
        assert!(matches!(
            parse("", style, &locale, NumericKind::I32),
            Err(ParseError::InvalidStyle(StyleError::HexWithIncompatibleFlags(_)))
        ));
        assert!(matches!(
            parse("FF", StyleFlags::HEX_NUMBER, &locale, NumericKind::F64),
            Err(ParseError::InvalidStyle(StyleError::HexNotSupported(_)))
        ));
    }

    #[test]
    fn test_parse_bytes_rejects_bad_utf8() {
        let locale = LocaleSymbols::invariant();
        assert_eq!(
            parse_bytes(b"12\xff", StyleFlags::INTEGER, &locale, NumericKind::I32),
            Err(ParseError::Syntax(SyntaxError::InvalidUtf8 { offset: 2 }))
        );
        assert_eq!(
            parse_bytes(b" 12 ", StyleFlags::INTEGER, &locale, NumericKind::I32),
            Ok(Value::I32(12))
        );
    }

    #[test]
    fn test_default_styles() {
        assert_eq!(default_style(NumericKind::I64), StyleFlags::INTEGER);
        assert_eq!(default_style(NumericKind::Decimal), StyleFlags::NUMBER);
        assert!(default_style(NumericKind::F32).contains(StyleFlags::ALLOW_EXPONENT));
    }

    #[test]
    fn test_invalid_locale_rejected_at_entry() {
        let locale = LocaleSymbols::invariant().with_signs("+", "+");
        assert_eq!(
            parse("5", StyleFlags::INTEGER, &locale, NumericKind::I32),
            Err(ParseError::InvalidLocale(LocaleError::SignsCollide))
        );
        assert_eq!(
            parse_as::<f64>("5", StyleFlags::FLOAT, &locale),
            Err(ParseError::InvalidLocale(LocaleError::SignsCollide))
        );
    }
}

// ============================================================================
// Formatter Dispatch
// General / Fixed / Scientific / Number / Currency / Percent / Hex / Decimal
// ============================================================================

use super::digits::{decimal_digits, exact_digits, integer_magnitude, shortest_float};
use super::output::RenderBuffer;
use super::patterns::{currency_pattern, percent_pattern, render_pattern, NUMBER_NEGATIVE};
use crate::domain::{FormatKind, FormatSpec, LetterCase, LocaleSymbols, TargetCategory, Value};
use crate::numeric::{FormatError, FormatResult, NormalizedNumber};
use crate::parse::float::BinaryFloat;
use arrayvec::ArrayVec;

/// Default significant digits after the point for the Scientific format.
const DEFAULT_SCIENTIFIC_PRECISION: i32 = 6;

/// Upper bound on integer-part digits of any value (binary64 max × 100).
const MAX_GROUP_MARKS: usize = 400;

/// Render `value` into `out` according to `spec`.
pub fn render(
    out: &mut RenderBuffer,
    value: &Value,
    spec: &FormatSpec,
    locale: &LocaleSymbols,
) -> FormatResult<()> {
    let target = value.kind();
    if matches!(spec.kind, FormatKind::Hex | FormatKind::Decimal)
        && target.category() != TargetCategory::Integer
    {
        return Err(FormatError::UnsupportedSpecifier {
            kind: spec.kind,
            target,
        });
    }

    if let Some(symbol) = special_symbol(value, locale) {
        out.push_str(symbol);
        return Ok(());
    }

    match spec.kind {
        FormatKind::General => render_general(out, value, spec, locale),
        FormatKind::Scientific => render_scientific(out, value, spec, locale),
        FormatKind::Fixed
        | FormatKind::Number
        | FormatKind::Currency
        | FormatKind::Percent => render_fixed_point(out, value, spec, locale),
        FormatKind::Hex => render_hex(out, value, spec),
        FormatKind::Decimal => render_decimal_digits(out, value, spec, locale),
    }
    Ok(())
}

/// NaN and infinity render as the locale's literal under every format.
fn special_symbol<'a>(value: &Value, locale: &'a LocaleSymbols) -> Option<&'a str> {
    let (nan, infinite, negative) = match *value {
        Value::F32(v) => (v.is_nan(), v.is_infinite(), v.is_sign_negative()),
        Value::F64(v) => (v.is_nan(), v.is_infinite(), v.is_sign_negative()),
        _ => return None,
    };
    if nan {
        Some(locale.nan_symbol())
    } else if infinite && negative {
        Some(locale.negative_infinity_symbol())
    } else if infinite {
        Some(locale.positive_infinity_symbol())
    } else {
        None
    }
}

/// Whether a minus sign is shown for `number` after rounding.
fn shows_sign(number: &NormalizedNumber, value: &Value, locale: &LocaleSymbols) -> bool {
    if !number.negative {
        return false;
    }
    if number.digits().is_empty() {
        return matches!(value, Value::F32(_) | Value::F64(_)) && locale.signed_zero();
    }
    true
}

fn exponent_char(spec: &FormatSpec) -> char {
    match spec.case {
        LetterCase::Upper => 'E',
        LetterCase::Lower => 'e',
    }
}

// ============================================================================
// General
// ============================================================================

fn render_general(out: &mut RenderBuffer, value: &Value, spec: &FormatSpec, locale: &LocaleSymbols) {
    let precision = spec.precision.filter(|&p| p > 0).map(i32::from);

    let (mut number, max_digits, suppress_scientific) = match (value, precision) {
        (Value::F32(v), None) => shortest_with_threshold(*v),
        (Value::F64(v), None) => shortest_with_threshold(*v),
        (Value::Decimal(v), None) => (decimal_digits(v), 0, true),
        (_, None) => (exact_digits(value), 0, true),
        (_, Some(p)) => {
            let mut number = exact_digits(value);
            number.round_to(p);
            (number, p, false)
        },
    };

    if precision.is_none() && !matches!(value, Value::Decimal(_)) {
        // Trim zeros the exact integer expansion carries
        number.round_to(i32::MAX);
    }

    if shows_sign(&number, value, locale) {
        out.push_str(locale.negative_sign());
    }
    write_general(out, &number, max_digits, suppress_scientific, exponent_char(spec), locale);
}

fn shortest_with_threshold<F: BinaryFloat>(value: F) -> (NormalizedNumber, i32, bool) {
    let number = shortest_float(value);
    let threshold = (number.digits().len() as i32).max(F::GENERAL_PRECISION);
    (number, threshold, false)
}

fn write_general(
    out: &mut RenderBuffer,
    number: &NormalizedNumber,
    max_digits: i32,
    suppress_scientific: bool,
    exponent: char,
    locale: &LocaleSymbols,
) {
    let digits = number.digits();
    let mut position = number.point();
    let scientific = !suppress_scientific && (position > max_digits || position < -3);
    if scientific {
        position = 1;
    }

    let mut index = 0;
    if position > 0 {
        while position > 0 {
            out.push_digit(digits.get(index).copied().unwrap_or(0));
            index += 1;
            position -= 1;
        }
    } else {
        out.push('0');
    }

    if index < digits.len() || position < 0 {
        out.push_str(locale.decimal_separator());
        while position < 0 {
            out.push('0');
            position += 1;
        }
        for &d in digits.iter().skip(index) {
            out.push_digit(d);
        }
    }

    if scientific {
        write_exponent(out, number.point() - 1, exponent, 2, locale);
    }
}

fn write_exponent(
    out: &mut RenderBuffer,
    value: i32,
    marker: char,
    min_digits: usize,
    locale: &LocaleSymbols,
) {
    out.push(marker);
    if value < 0 {
        out.push_str(locale.negative_sign());
    } else {
        out.push_str(locale.positive_sign());
    }
    let magnitude = value.unsigned_abs();
    let mut scratch = [0u8; 10];
    let mut len = 0;
    let mut rest = magnitude;
    loop {
        scratch[len] = (rest % 10) as u8;
        rest /= 10;
        len += 1;
        if rest == 0 {
            break;
        }
    }
    out.push_zeros(min_digits.saturating_sub(len));
    for &d in scratch[..len].iter().rev() {
        out.push_digit(d);
    }
}

// ============================================================================
// Scientific
// ============================================================================

fn render_scientific(
    out: &mut RenderBuffer,
    value: &Value,
    spec: &FormatSpec,
    locale: &LocaleSymbols,
) {
    let precision = spec
        .precision
        .map(i32::from)
        .unwrap_or(DEFAULT_SCIENTIFIC_PRECISION);
    let significant = precision + 1;

    let mut number = exact_digits(value);
    number.round_to(significant);

    if shows_sign(&number, value, locale) {
        out.push_str(locale.negative_sign());
    }

    let digits = number.digits();
    out.push_digit(digits.first().copied().unwrap_or(0));
    if significant != 1 {
        out.push_str(locale.decimal_separator());
    }
    for i in 1..significant as usize {
        out.push_digit(digits.get(i).copied().unwrap_or(0));
    }

    let exponent = if digits.is_empty() { 0 } else { number.point() - 1 };
    write_exponent(out, exponent, exponent_char(spec), 3, locale);
}

// ============================================================================
// Fixed, Number, Currency, Percent
// ============================================================================

fn render_fixed_point(
    out: &mut RenderBuffer,
    value: &Value,
    spec: &FormatSpec,
    locale: &LocaleSymbols,
) {
    let default_precision = match spec.kind {
        FormatKind::Currency => locale.currency_decimal_digits(),
        FormatKind::Percent => locale.percent_decimal_digits(),
        _ => locale.number_decimal_digits(),
    };
    let precision = spec.precision.unwrap_or(default_precision) as usize;

    let mut number = exact_digits(value);
    if spec.kind == FormatKind::Percent {
        number.shift_point(2);
    }
    number.round_to(number.point().saturating_add(precision as i32));
    let negative = shows_sign(&number, value, locale);

    let amount = |out: &mut RenderBuffer, grouped: bool| {
        let groups = grouped.then(|| locale.group_sizes());
        write_fixed(out, &number, precision, groups, locale);
    };

    match spec.kind {
        FormatKind::Currency => {
            let pattern = currency_pattern(locale, negative);
            render_pattern(out, pattern, locale, |o| amount(o, true));
        },
        FormatKind::Percent => {
            let pattern = percent_pattern(locale, negative);
            render_pattern(out, pattern, locale, |o| amount(o, true));
        },
        FormatKind::Number => {
            let pattern = if negative { NUMBER_NEGATIVE } else { "#" };
            render_pattern(out, pattern, locale, |o| amount(o, true));
        },
        _ => {
            if negative {
                out.push_str(locale.negative_sign());
            }
            amount(out, false);
        },
    }
}

/// Distances from the right of the integer part where a separator goes,
/// in increasing order.
fn group_marks(integer_len: usize, sizes: &[u8]) -> ArrayVec<usize, MAX_GROUP_MARKS> {
    let mut marks = ArrayVec::new();
    let Some(&last) = sizes.last() else {
        return marks;
    };
    let mut total = 0usize;
    let mut index = 0usize;
    loop {
        let size = sizes.get(index).copied().unwrap_or(last) as usize;
        if size == 0 {
            break;
        }
        total += size;
        if total >= integer_len || marks.try_push(total).is_err() {
            break;
        }
        index += 1;
    }
    marks
}

fn write_fixed(
    out: &mut RenderBuffer,
    number: &NormalizedNumber,
    precision: usize,
    group_sizes: Option<&[u8]>,
    locale: &LocaleSymbols,
) {
    let digits = number.digits();
    let mut index = 0;
    let mut position = number.point();

    if position > 0 {
        let integer_len = position as usize;
        let marks = group_sizes
            .map(|sizes| group_marks(integer_len, sizes))
            .unwrap_or_default();
        let mut pending = marks.len();

        for i in 0..integer_len {
            let from_right = integer_len - i;
            if pending > 0 && marks[pending - 1] == from_right {
                out.push_str(locale.group_separator());
                pending -= 1;
            }
            out.push_digit(digits.get(index).copied().unwrap_or(0));
            index += 1;
        }
        position = 0;
    } else {
        out.push('0');
    }

    if precision > 0 {
        out.push_str(locale.decimal_separator());
        let mut remaining = precision;
        if position < 0 {
            let zeros = ((-position) as usize).min(remaining);
            out.push_zeros(zeros);
            remaining -= zeros;
        }
        for _ in 0..remaining {
            out.push_digit(digits.get(index).copied().unwrap_or(0));
            index += 1;
        }
    }
}

// ============================================================================
// Hex and Decimal (integers only)
// ============================================================================

fn render_hex(out: &mut RenderBuffer, value: &Value, spec: &FormatSpec) {
    let bits = value.to_bits();
    let nibbles = (value.kind().bits() / 4) as usize;
    let alphabet: &[u8; 16] = match spec.case {
        LetterCase::Upper => b"0123456789ABCDEF",
        LetterCase::Lower => b"0123456789abcdef",
    };

    let significant = (0..nibbles)
        .rev()
        .find(|&i| (bits >> (4 * i)) & 0xF != 0)
        .map_or(1, |i| i + 1);
    let min_digits = spec.precision.unwrap_or(0) as usize;
    out.push_zeros(min_digits.saturating_sub(significant));
    for i in (0..significant).rev() {
        let nibble = ((bits >> (4 * i)) & 0xF) as usize;
        out.push(char::from(alphabet[nibble]));
    }
}

fn render_decimal_digits(
    out: &mut RenderBuffer,
    value: &Value,
    spec: &FormatSpec,
    locale: &LocaleSymbols,
) {
    let Some((negative, magnitude)) = integer_magnitude(value) else {
        return;
    };
    let number = NormalizedNumber::from_u128(negative, magnitude);
    let digits = number.digits();
    if negative && magnitude != 0 {
        out.push_str(locale.negative_sign());
    }
    let min_digits = spec.precision.unwrap_or(0) as usize;
    let shown = digits.len().max(1);
    out.push_zeros(min_digits.saturating_sub(shown));
    if digits.is_empty() {
        out.push('0');
    }
    for &d in digits {
        out.push_digit(d);
    }
}

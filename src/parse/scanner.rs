// ============================================================================
// Lexical Scanner
// Single forward pass from text to NormalizedNumber
// ============================================================================

use crate::domain::{LocaleSymbols, StyleFlags, TargetCategory, ValidatedStyle};
use crate::numeric::{NormalizedNumber, SpecialValue, SyntaxError, MAX_EXPONENT};
use tracing::trace;

/// Whitespace accepted around a numeral: space and U+0009..=U+000D.
#[inline]
pub fn is_white(ch: char) -> bool {
    ch == ' ' || ('\t'..='\r').contains(&ch)
}

/// Forward-only view over the input with byte offsets.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume `symbol` if the remaining text starts with it.
    fn eat(&mut self, symbol: &str) -> bool {
        if !symbol.is_empty() && self.rest().starts_with(symbol) {
            self.pos += symbol.len();
            true
        } else {
            false
        }
    }

    /// Consume a sign: the locale's strings first, then ASCII `+`/`-`.
    /// Returns `Some(true)` for a negative sign.
    fn eat_sign(&mut self, locale: &LocaleSymbols) -> Option<bool> {
        // Locales with plain ASCII signs only need the single-char check
        if !locale.has_invariant_signs() {
            if self.eat(locale.positive_sign()) {
                return Some(false);
            }
            if self.eat(locale.negative_sign()) {
                return Some(true);
            }
        }
        match self.peek()? {
            '+' => {
                self.bump('+');
                Some(false)
            },
            '-' => {
                self.bump('-');
                Some(true)
            },
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct ScanState {
    sign: bool,
    parens: bool,
    digits: bool,
    decimal: bool,
    currency: bool,
}

/// Scan `input` under an already validated style.
///
/// # Errors
/// - `Empty` for empty or whitespace-only input
/// - `NoDigits` when every character was accepted but no digit appeared
/// - `UnexpectedCharacter` at the first byte no enabled rule accepts
/// - `UnbalancedParentheses` for an opening '(' that is never closed
pub fn scan(
    input: &str,
    style: ValidatedStyle,
    locale: &LocaleSymbols,
) -> Result<NormalizedNumber, SyntaxError> {
    if input.chars().all(is_white) {
        return Err(SyntaxError::Empty);
    }

    if style.allows(StyleFlags::ALLOW_HEX_SPECIFIER) {
        return scan_hex(input, style);
    }

    if style.category() == TargetCategory::Floating {
        if let Some(number) = match_special(input, style, locale) {
            trace!(input, "matched special floating-point literal");
            return Ok(number);
        }
    }

    let mut cursor = Cursor::new(input);
    let mut number = NormalizedNumber::new();
    let mut state = ScanState::default();
    let mut currency_pending =
        style.allows(StyleFlags::ALLOW_CURRENCY_SYMBOL) && !locale.currency_symbol().is_empty();

    // Leading: whitespace, sign or '(', currency symbol. Whitespace after a
    // sign is only accepted once a currency symbol has been seen ("-$ 5").
    while let Some(ch) = cursor.peek() {
        if is_white(ch)
            && style.allows(StyleFlags::ALLOW_LEADING_WHITE)
            && (!state.sign || state.currency)
        {
            cursor.bump(ch);
            continue;
        }
        if style.allows(StyleFlags::ALLOW_LEADING_SIGN) && !state.sign {
            if let Some(negative) = cursor.eat_sign(locale) {
                number.negative = negative;
                state.sign = true;
                continue;
            }
        }
        if ch == '(' && style.allows(StyleFlags::ALLOW_PARENTHESES) && !state.sign {
            cursor.bump(ch);
            number.negative = true;
            state.sign = true;
            state.parens = true;
            continue;
        }
        if currency_pending && cursor.eat(locale.currency_symbol()) {
            currency_pending = false;
            state.currency = true;
            continue;
        }
        break;
    }

    // Digits, one decimal separator, group separators inside the integer part.
    while let Some(ch) = cursor.peek() {
        if ch.is_ascii_digit() {
            let digit = ch as u8 - b'0';
            state.digits = true;
            if state.decimal {
                number.push_fraction_digit(digit);
            } else {
                number.push_integer_digit(digit);
            }
            cursor.bump(ch);
            continue;
        }
        if style.allows(StyleFlags::ALLOW_DECIMAL_POINT)
            && !state.decimal
            && cursor.eat(locale.decimal_separator())
        {
            state.decimal = true;
            number.mark_decimal_point();
            continue;
        }
        if style.allows(StyleFlags::ALLOW_THOUSANDS)
            && state.digits
            && !state.decimal
            && cursor.eat(locale.group_separator())
        {
            continue;
        }
        break;
    }

    if !state.digits {
        return Err(if cursor.at_end() {
            SyntaxError::NoDigits
        } else {
            SyntaxError::UnexpectedCharacter { offset: cursor.pos }
        });
    }

    if style.allows(StyleFlags::ALLOW_EXPONENT) {
        scan_exponent(&mut cursor, &mut number, locale);
    }

    // Trailing: whitespace, sign, ')', currency symbol.
    while let Some(ch) = cursor.peek() {
        if is_white(ch) && style.allows(StyleFlags::ALLOW_TRAILING_WHITE) {
            cursor.bump(ch);
            continue;
        }
        if style.allows(StyleFlags::ALLOW_TRAILING_SIGN) && !state.sign {
            if let Some(negative) = cursor.eat_sign(locale) {
                number.negative = negative;
                state.sign = true;
                continue;
            }
        }
        if ch == ')' && state.parens {
            cursor.bump(ch);
            state.parens = false;
            continue;
        }
        if currency_pending && cursor.eat(locale.currency_symbol()) {
            currency_pending = false;
            continue;
        }
        break;
    }

    if !cursor.at_end() {
        return Err(SyntaxError::UnexpectedCharacter { offset: cursor.pos });
    }
    if state.parens {
        return Err(SyntaxError::UnbalancedParentheses);
    }

    Ok(number)
}

/// `e`/`E`, optional sign, digits. Without digits the marker is left unread.
fn scan_exponent(cursor: &mut Cursor<'_>, number: &mut NormalizedNumber, locale: &LocaleSymbols) {
    let marker = match cursor.peek() {
        Some(ch @ ('e' | 'E')) => ch,
        _ => return,
    };
    let rewind = cursor.pos;
    cursor.bump(marker);

    let negative = cursor.eat_sign(locale).unwrap_or(false);

    let mut exponent: i64 = 0;
    let mut any = false;
    while let Some(ch) = cursor.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        any = true;
        exponent = (exponent * 10 + (ch as u8 - b'0') as i64).min(MAX_EXPONENT as i64 + 1);
        cursor.bump(ch);
    }

    if any {
        number.set_exponent(if negative { -exponent } else { exponent });
    } else {
        cursor.pos = rewind;
    }
}

/// Whitespace, hex digits, whitespace.
fn scan_hex(input: &str, style: ValidatedStyle) -> Result<NormalizedNumber, SyntaxError> {
    let mut cursor = Cursor::new(input);
    let mut number = NormalizedNumber::new();

    if style.allows(StyleFlags::ALLOW_LEADING_WHITE) {
        while let Some(ch) = cursor.peek().filter(|&c| is_white(c)) {
            cursor.bump(ch);
        }
    }

    let mut any = false;
    while let Some(ch) = cursor.peek() {
        match ch.to_digit(16) {
            Some(nibble) => {
                number.push_hex_digit(nibble as u8);
                any = true;
                cursor.bump(ch);
            },
            None => break,
        }
    }
    if !any {
        return Err(if cursor.at_end() {
            SyntaxError::NoDigits
        } else {
            SyntaxError::UnexpectedCharacter { offset: cursor.pos }
        });
    }

    if style.allows(StyleFlags::ALLOW_TRAILING_WHITE) {
        while let Some(ch) = cursor.peek().filter(|&c| is_white(c)) {
            cursor.bump(ch);
        }
    }

    if !cursor.at_end() {
        return Err(SyntaxError::UnexpectedCharacter { offset: cursor.pos });
    }
    Ok(number)
}

/// Case-insensitive comparison without allocating.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    !b.is_empty()
        && a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let mut end = 0;
    let mut chars = text.char_indices();
    for p in prefix.chars() {
        let (i, c) = chars.next()?;
        if !c.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
        end = i + c.len_utf8();
    }
    Some(&text[end..])
}

/// NaN and infinity literals of the locale, optionally preceded by a sign.
fn match_special(
    input: &str,
    style: ValidatedStyle,
    locale: &LocaleSymbols,
) -> Option<NormalizedNumber> {
    let mut text = input;
    if style.allows(StyleFlags::ALLOW_LEADING_WHITE) {
        text = text.trim_start_matches(is_white);
    }
    if style.allows(StyleFlags::ALLOW_TRAILING_WHITE) {
        text = text.trim_end_matches(is_white);
    }

    if eq_ignore_case(text, locale.positive_infinity_symbol()) {
        return Some(NormalizedNumber::special(SpecialValue::Infinity, false));
    }
    if eq_ignore_case(text, locale.negative_infinity_symbol()) {
        return Some(NormalizedNumber::special(SpecialValue::Infinity, true));
    }
    if eq_ignore_case(text, locale.nan_symbol()) {
        return Some(NormalizedNumber::special(SpecialValue::NaN, false));
    }

    if !style.allows(StyleFlags::ALLOW_LEADING_SIGN) {
        return None;
    }
    let (negative, rest) = if let Some(rest) = strip_prefix_ignore_case(text, locale.positive_sign())
    {
        (false, rest)
    } else if let Some(rest) = strip_prefix_ignore_case(text, locale.negative_sign()) {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        return None;
    };

    if eq_ignore_case(rest, locale.positive_infinity_symbol()) {
        Some(NormalizedNumber::special(SpecialValue::Infinity, negative))
    } else if eq_ignore_case(rest, locale.nan_symbol()) {
        Some(NormalizedNumber::special(SpecialValue::NaN, false))
    } else {
        None
    }
}

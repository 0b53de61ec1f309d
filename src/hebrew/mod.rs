// ============================================================================
// Hebrew Numeral Codec
// Letter-numeral encoding with geresh/gershayim quoting, FSM-driven decoding
// ============================================================================

pub mod fsm;

pub use fsm::{HebrewParsingContext, HebrewState, HebrewStep, HebrewToken};

use crate::numeric::{HebrewError, HebrewResult};
use arrayvec::{ArrayString, ArrayVec};
use tracing::trace;

/// Encoded numerals are at most five letters and one quote, in UTF-8 bytes.
pub const MAX_ENCODED_LEN: usize = 16;

/// Offset dropped from values above it (years written without the millennium).
pub const MILLENNIUM_OFFSET: i32 = 5000;

const TAV: char = '\u{05EA}';
const TET: char = '\u{05D8}';
const YOD: char = '\u{05D9}';
const HE: char = '\u{05D4}';
const VAV: char = '\u{05D5}';
const ZAYIN: char = '\u{05D6}';

const TENS: [Option<char>; 10] = [
    None,
    Some(YOD),
    Some('\u{05DB}'),
    Some('\u{05DC}'),
    Some('\u{05DE}'),
    Some('\u{05E0}'),
    Some('\u{05E1}'),
    Some('\u{05E2}'),
    Some('\u{05E4}'),
    Some('\u{05E6}'),
];

/// Render `number` as Hebrew letters.
///
/// Values above 5000 have 5000 removed first; the remainder must be in
/// `1..=999`. Fifteen and sixteen are written tet-vav and tet-zayin.
/// A single letter is followed by `'`, longer numerals carry `"` before
/// their last letter.
pub fn encode(number: i32) -> HebrewResult<ArrayString<MAX_ENCODED_LEN>> {
    let value = if number > MILLENNIUM_OFFSET {
        number - MILLENNIUM_OFFSET
    } else {
        number
    };
    if !(1..=999).contains(&value) {
        return Err(HebrewError::OutOfRange(number));
    }

    let mut letters: ArrayVec<char, 8> = ArrayVec::new();

    let hundreds = value / 100;
    for _ in 0..hundreds / 4 {
        letters.push(TAV);
    }
    let remains = (hundreds % 4) as u32;
    if remains > 0 {
        letters.extend(char::from_u32(0x05E6 + remains));
    }

    let mut tens = TENS[((value % 100) / 10) as usize];
    let units = value % 10;
    let mut unit = if units > 0 {
        char::from_u32(0x05D0 + units as u32 - 1)
    } else {
        None
    };
    if tens == Some(YOD) && unit == Some(HE) {
        tens = Some(TET);
        unit = Some(VAV);
    } else if tens == Some(YOD) && unit == Some(VAV) {
        tens = Some(TET);
        unit = Some(ZAYIN);
    }
    letters.extend(tens);
    letters.extend(unit);

    let mut text = ArrayString::new();
    let last = letters.len() - 1;
    for (i, &ch) in letters.iter().enumerate() {
        if i == last && last > 0 {
            text.push('"');
        }
        text.push(ch);
    }
    if last == 0 {
        text.push('\'');
    }
    Ok(text)
}

/// Encode into `destination`, returning the bytes written.
pub fn encode_into(number: i32, destination: &mut [u8]) -> HebrewResult<usize> {
    let text = encode(number)?;
    let bytes = text.as_bytes();
    if destination.len() < bytes.len() {
        return Err(HebrewError::BufferTooSmall {
            required: bytes.len(),
        });
    }
    destination[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}

/// Decode a complete Hebrew numeral; the text must end exactly where the
/// numeral does.
pub fn decode(text: &str) -> HebrewResult<i32> {
    let mut context = HebrewParsingContext::new();
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        match context.advance(ch) {
            HebrewStep::Continue => {},
            HebrewStep::Complete if chars.as_str().is_empty() => return Ok(context.result()),
            HebrewStep::Complete | HebrewStep::Invalid => {
                trace!(state = ?context.state(), "rejected Hebrew numeral");
                return Err(HebrewError::InvalidHebrewNumber);
            },
            HebrewStep::NotARecognizedDigit => return Err(HebrewError::NotARecognizedDigit(ch)),
        }
    }
    Err(HebrewError::InvalidHebrewNumber)
}

/// Whether `ch` can appear in a Hebrew numeral: a valued letter or a quote.
pub fn is_hebrew_digit(ch: char) -> bool {
    fsm::classify(ch).is_some()
}

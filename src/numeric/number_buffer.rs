// ============================================================================
// Normalized Number
// Sign, digit run, point position and exponent shared by parse and format
// ============================================================================

use arrayvec::ArrayVec;

/// Digits retained per number; anything beyond is folded into a sticky bit.
pub const DIGIT_CAPACITY: usize = 800;

/// Scanned exponents saturate at this magnitude.
pub const MAX_EXPONENT: i32 = 99_999;

/// Literal recognized instead of a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialValue {
    NaN,
    Infinity,
}

/// Scanner output and formatter input: the value `0.d1d2d3... × 10^scale()`.
///
/// Leading zeros are never stored, so a non-empty digit run always starts
/// with a non-zero digit. Trailing zeros are kept because the decimal target
/// derives its scale from them.
#[derive(Debug, Clone, Default)]
pub struct NormalizedNumber {
    pub negative: bool,
    digits: ArrayVec<u8, DIGIT_CAPACITY>,
    /// Count of integer-part digits, negative for leading fractional zeros
    point: i32,
    exponent: i32,
    /// A non-zero digit was dropped for lack of capacity
    nonzero_tail: bool,
    is_hex: bool,
    has_decimal_point: bool,
    special: Option<SpecialValue>,
}

impl NormalizedNumber {
    pub fn new() -> Self {
        Self::default()
    }

    /// NaN or infinity literal.
    pub fn special(value: SpecialValue, negative: bool) -> Self {
        Self {
            negative,
            special: Some(value),
            ..Self::default()
        }
    }

    /// Build from decimal digit values already stripped of leading zeros.
    ///
    /// `point` is the position of the decimal point relative to the first digit.
    pub fn from_digits(negative: bool, digits: &[u8], point: i32) -> Self {
        let mut number = Self {
            negative,
            point,
            ..Self::default()
        };
        let take = digits.len().min(DIGIT_CAPACITY);
        number.digits.extend(digits[..take].iter().copied());
        number.nonzero_tail = digits[take..].iter().any(|&d| d != 0);
        number
    }

    /// Exact decimal expansion of an unsigned magnitude.
    pub fn from_u128(negative: bool, mut magnitude: u128) -> Self {
        let mut scratch = [0u8; 39];
        let mut len = 0;
        while magnitude > 0 {
            scratch[len] = (magnitude % 10) as u8;
            magnitude /= 10;
            len += 1;
        }
        scratch[..len].reverse();
        Self::from_digits(negative, &scratch[..len], len as i32)
    }

    // ========================================================================
    // Scanner Accumulation
    // ========================================================================

    /// Append a digit seen before the decimal point.
    pub fn push_integer_digit(&mut self, digit: u8) {
        if self.digits.is_empty() && digit == 0 && !self.nonzero_tail {
            return;
        }
        self.store(digit);
        self.point = self.point.saturating_add(1);
    }

    /// Append a digit seen after the decimal point.
    pub fn push_fraction_digit(&mut self, digit: u8) {
        if self.digits.is_empty() && digit == 0 && !self.nonzero_tail {
            self.point = self.point.saturating_sub(1);
            return;
        }
        self.store(digit);
    }

    /// Append a hex nibble; leading zeros are dropped.
    pub fn push_hex_digit(&mut self, nibble: u8) {
        self.is_hex = true;
        if self.digits.is_empty() && nibble == 0 && !self.nonzero_tail {
            return;
        }
        self.store(nibble);
        self.point = self.point.saturating_add(1);
    }

    fn store(&mut self, digit: u8) {
        if self.digits.try_push(digit).is_err() && digit != 0 {
            self.nonzero_tail = true;
        }
    }

    pub fn mark_decimal_point(&mut self) {
        self.has_decimal_point = true;
    }

    /// Record the scanned exponent, saturating at `MAX_EXPONENT`.
    pub fn set_exponent(&mut self, exponent: i64) {
        self.exponent = exponent.clamp(-(MAX_EXPONENT as i64), MAX_EXPONENT as i64) as i32;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Digits with trailing zeros removed.
    pub fn significant_digits(&self) -> &[u8] {
        let end = self
            .digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1);
        &self.digits[..end]
    }

    #[inline]
    pub fn point(&self) -> i32 {
        self.point
    }

    #[inline]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Decimal exponent of the first digit: value is `0.digits × 10^scale`.
    #[inline]
    pub fn scale(&self) -> i32 {
        self.point.saturating_add(self.exponent)
    }

    #[inline]
    pub fn has_nonzero_tail(&self) -> bool {
        self.nonzero_tail
    }

    #[inline]
    pub fn is_hex(&self) -> bool {
        self.is_hex
    }

    #[inline]
    pub fn has_decimal_point(&self) -> bool {
        self.has_decimal_point
    }

    #[inline]
    pub fn special_value(&self) -> Option<SpecialValue> {
        self.special
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.special.is_none() && self.digits.is_empty() && !self.nonzero_tail
    }

    // ========================================================================
    // Formatting Support
    // ========================================================================

    /// Shift the decimal point (used by the percent format's ×100).
    pub fn shift_point(&mut self, by: i32) {
        if !self.digits.is_empty() {
            self.point = self.point.saturating_add(by);
        }
    }

    /// Keep the first `keep` digits, rounding half away from zero on the
    /// dropped remainder. Trailing zeros are trimmed and a value that rounds
    /// away entirely becomes zero.
    pub fn round_to(&mut self, keep: i32) {
        if keep < 0 {
            self.clear_digits();
            return;
        }
        let keep = (keep as usize).min(self.digits.len());
        let up = keep < self.digits.len() && self.digits[keep] >= 5;
        self.cut(keep, up);
    }

    /// Keep the first `keep` digits, rounding toward zero.
    pub fn truncate_to(&mut self, keep: usize) {
        if keep < self.digits.len() {
            self.cut(keep, false);
        }
    }

    /// Keep the first `keep` digits, rounding away from zero when anything
    /// non-zero is dropped.
    pub fn round_up_to(&mut self, keep: usize) {
        if keep < self.digits.len() {
            let up = self.nonzero_tail || self.digits[keep..].iter().any(|&d| d != 0);
            self.cut(keep, up);
        }
    }

    fn cut(&mut self, keep: usize, up: bool) {
        self.digits.truncate(keep);
        self.nonzero_tail = false;

        if up {
            while let Some(&9) = self.digits.last() {
                self.digits.pop();
            }
            match self.digits.last_mut() {
                Some(last) => *last += 1,
                None => {
                    self.digits.push(1);
                    self.point = self.point.saturating_add(1);
                },
            }
        } else {
            while let Some(&0) = self.digits.last() {
                self.digits.pop();
            }
            if self.digits.is_empty() {
                self.point = 0;
            }
        }
    }

    fn clear_digits(&mut self) {
        self.digits.clear();
        self.nonzero_tail = false;
        self.point = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(int_part: &str, frac_part: &str) -> NormalizedNumber {
        let mut n = NormalizedNumber::new();
        for b in int_part.bytes() {
            n.push_integer_digit(b - b'0');
        }
        if !frac_part.is_empty() {
            n.mark_decimal_point();
        }
        for b in frac_part.bytes() {
            n.push_fraction_digit(b - b'0');
        }
        n
    }

    #[test]
    fn test_leading_zeros_trimmed() {
        let n = scan("000123", "45");
        assert_eq!(n.digits(), &[1, 2, 3, 4, 5]);
        assert_eq!(n.point(), 3);

        let n = scan("0", "00123");
        assert_eq!(n.digits(), &[1, 2, 3]);
        assert_eq!(n.point(), -2);
    }

    #[test]
    fn test_trailing_zeros_kept() {
        let n = scan("1", "50");
        assert_eq!(n.digits(), &[1, 5, 0]);
        assert_eq!(n.significant_digits(), &[1, 5]);
    }

    #[test]
    fn test_zero_with_fraction() {
        let n = scan("0", "00");
        assert!(n.is_zero());
        assert_eq!(n.point(), -2);
    }

    #[test]
    fn test_exponent_saturates() {
        let mut n = scan("1", "");
        n.set_exponent(10_000_000);
        assert_eq!(n.exponent(), MAX_EXPONENT);
        assert_eq!(n.scale(), MAX_EXPONENT + 1);
    }

    #[test]
    fn test_capacity_sets_sticky_tail() {
        let mut n = NormalizedNumber::new();
        for _ in 0..DIGIT_CAPACITY {
            n.push_integer_digit(1);
        }
        assert!(!n.has_nonzero_tail());
        n.push_integer_digit(0);
        assert!(!n.has_nonzero_tail());
        n.push_integer_digit(7);
        assert!(n.has_nonzero_tail());
        assert_eq!(n.point(), DIGIT_CAPACITY as i32 + 2);
    }

    #[test]
    fn test_round_half_away() {
        let mut n = NormalizedNumber::from_digits(false, &[1, 2, 5], 1);
        n.round_to(2);
        assert_eq!(n.digits(), &[1, 3]);

        let mut n = NormalizedNumber::from_digits(false, &[9, 9, 5], 0);
        n.round_to(2);
        assert_eq!(n.digits(), &[1]);
        assert_eq!(n.point(), 1);

        let mut n = NormalizedNumber::from_digits(false, &[4, 9], -3);
        n.round_to(0);
        assert!(n.is_zero());

        let mut n = NormalizedNumber::from_digits(false, &[5], -3);
        n.round_to(0);
        assert_eq!(n.digits(), &[1]);
        assert_eq!(n.point(), -2);
    }

    #[test]
    fn test_from_u128() {
        let n = NormalizedNumber::from_u128(true, 1_234_500);
        assert_eq!(n.digits(), &[1, 2, 3, 4, 5, 0, 0]);
        assert_eq!(n.point(), 7);
        assert!(n.negative);
        assert!(NormalizedNumber::from_u128(false, 0).is_zero());
    }
}

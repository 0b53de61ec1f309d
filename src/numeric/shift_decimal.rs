// ============================================================================
// Shift Decimal
// Fixed-capacity decimal digit array with exact binary shifts
// ============================================================================
//
// Holds `0.d1d2...dn × 10^decimal_point` and multiplies or divides it by
// powers of two without loss (up to MAX_DIGITS). Used in both directions:
// - parse: long or hard-to-round digit runs to binary floats
// - format: the exact decimal expansion of a binary float

use super::number_buffer::NormalizedNumber;

/// Largest shift performed in one step; keeps intermediates inside u64.
pub const MAX_SHIFT: usize = 60;

/// Shift amounts that move the decimal point by roughly one digit per entry.
const POWERS: [u8; 19] = [0, 3, 6, 9, 13, 16, 19, 23, 26, 29, 33, 36, 39, 43, 46, 49, 53, 56, 59];

/// Shift that moves the value across about `n` decimal digits.
#[inline]
pub fn shift_for(n: usize) -> usize {
    POWERS.get(n).map_or(MAX_SHIFT, |&p| p as usize)
}

#[derive(Clone)]
pub struct ShiftDecimal {
    num_digits: usize,
    decimal_point: i32,
    truncated: bool,
    digits: [u8; Self::MAX_DIGITS],
}

impl Default for ShiftDecimal {
    fn default() -> Self {
        Self {
            num_digits: 0,
            decimal_point: 0,
            truncated: false,
            digits: [0; Self::MAX_DIGITS],
        }
    }
}

impl std::fmt::Debug for ShiftDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShiftDecimal")
            .field("digits", &&self.digits[..self.num_digits])
            .field("decimal_point", &self.decimal_point)
            .field("truncated", &self.truncated)
            .finish()
    }
}

impl ShiftDecimal {
    /// Enough for the exact expansion of any binary64 value (767 significant digits).
    pub const MAX_DIGITS: usize = 768;
    /// Decimal points beyond this are treated as zero or infinity.
    pub const DECIMAL_POINT_RANGE: i32 = 2047;

    /// Load the digit run of a scanned number.
    pub fn from_normalized(number: &NormalizedNumber) -> Self {
        let mut d = Self::default();
        let digits = number.significant_digits();
        let take = digits.len().min(Self::MAX_DIGITS);
        d.digits[..take].copy_from_slice(&digits[..take]);
        d.num_digits = take;
        d.truncated = number.has_nonzero_tail() || digits[take..].iter().any(|&x| x != 0);
        d.decimal_point = number
            .scale()
            .clamp(-Self::DECIMAL_POINT_RANGE - 1, Self::DECIMAL_POINT_RANGE + 1);
        d.trim();
        d
    }

    /// Exact decimal expansion of `mantissa × 2^exp2`.
    pub fn from_binary(mantissa: u64, exp2: i32) -> Self {
        let mut d = Self::default();
        if mantissa == 0 {
            return d;
        }

        let mut scratch = [0u8; 20];
        let mut len = 0;
        let mut m = mantissa;
        while m > 0 {
            scratch[len] = (m % 10) as u8;
            m /= 10;
            len += 1;
        }
        for i in 0..len {
            d.digits[i] = scratch[len - 1 - i];
        }
        d.num_digits = len;
        d.decimal_point = len as i32;
        d.trim();

        let mut remaining = exp2.unsigned_abs() as usize;
        while remaining > 0 {
            let step = remaining.min(MAX_SHIFT);
            if exp2 > 0 {
                d.left_shift(step);
            } else {
                d.right_shift(step);
            }
            remaining -= step;
        }
        d
    }

    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.num_digits]
    }

    #[inline]
    pub fn num_digits(&self) -> usize {
        self.num_digits
    }

    #[inline]
    pub fn decimal_point(&self) -> i32 {
        self.decimal_point
    }

    #[inline]
    pub fn first_digit(&self) -> u8 {
        if self.num_digits == 0 {
            0
        } else {
            self.digits[0]
        }
    }

    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Copy into a [`NormalizedNumber`] for rendering.
    pub fn to_normalized(&self, negative: bool) -> NormalizedNumber {
        NormalizedNumber::from_digits(negative, self.digits(), self.decimal_point)
    }

    fn trim(&mut self) {
        while self.num_digits > 0 && self.digits[self.num_digits - 1] == 0 {
            self.num_digits -= 1;
        }
        if self.num_digits == 0 {
            self.decimal_point = 0;
        }
    }

    fn clear(&mut self) {
        self.num_digits = 0;
        self.decimal_point = 0;
        self.truncated = false;
    }

    /// Integer part, rounded half to even (the truncated flag breaks ties upward).
    pub fn round(&self) -> u64 {
        if self.num_digits == 0 || self.decimal_point < 0 {
            return 0;
        } else if self.decimal_point > 18 {
            return u64::MAX;
        }
        let dp = self.decimal_point as usize;
        let mut n = 0u64;
        for i in 0..dp {
            n *= 10;
            if i < self.num_digits {
                n += self.digits[i] as u64;
            }
        }
        let mut round_up = false;
        if dp < self.num_digits {
            round_up = self.digits[dp] >= 5;
            if self.digits[dp] == 5 && dp + 1 == self.num_digits {
                round_up = self.truncated || (dp != 0 && self.digits[dp - 1] & 1 != 0);
            }
        }
        if round_up {
            n += 1;
        }
        n
    }

    /// Multiply by `2^shift` (`shift <= MAX_SHIFT`).
    pub fn left_shift(&mut self, shift: usize) {
        if self.num_digits == 0 {
            return;
        }
        const SCRATCH: usize = ShiftDecimal::MAX_DIGITS + 20;
        let mut scratch = [0u8; SCRATCH];
        let mut write = SCRATCH;
        let mut n = 0u64;

        for i in (0..self.num_digits).rev() {
            n += (self.digits[i] as u64) << shift;
            write -= 1;
            scratch[write] = (n % 10) as u8;
            n /= 10;
        }
        while n > 0 {
            write -= 1;
            scratch[write] = (n % 10) as u8;
            n /= 10;
        }

        let produced = SCRATCH - write;
        let grown = (produced - self.num_digits) as i32;
        let keep = produced.min(Self::MAX_DIGITS);
        self.digits[..keep].copy_from_slice(&scratch[write..write + keep]);
        if scratch[write + keep..].iter().any(|&d| d != 0) {
            self.truncated = true;
        }
        self.num_digits = keep;
        self.decimal_point += grown;
        if self.decimal_point > Self::DECIMAL_POINT_RANGE + 1 {
            self.decimal_point = Self::DECIMAL_POINT_RANGE + 1;
        }
        self.trim();
    }

    /// Divide by `2^shift` (`shift <= MAX_SHIFT`).
    pub fn right_shift(&mut self, shift: usize) {
        let mut read = 0;
        let mut write = 0;
        let mut n = 0u64;

        while (n >> shift) == 0 {
            if read < self.num_digits {
                n = 10 * n + self.digits[read] as u64;
                read += 1;
            } else if n == 0 {
                return;
            } else {
                while (n >> shift) == 0 {
                    n *= 10;
                    read += 1;
                }
                break;
            }
        }

        self.decimal_point -= read as i32 - 1;
        if self.decimal_point < -Self::DECIMAL_POINT_RANGE {
            self.clear();
            return;
        }

        let mask = (1u64 << shift) - 1;
        while read < self.num_digits {
            let digit = (n >> shift) as u8;
            n = 10 * (n & mask) + self.digits[read] as u64;
            read += 1;
            self.digits[write] = digit;
            write += 1;
        }
        while n > 0 {
            let digit = (n >> shift) as u8;
            n = 10 * (n & mask);
            if write < Self::MAX_DIGITS {
                self.digits[write] = digit;
                write += 1;
            } else if digit > 0 {
                self.truncated = true;
            }
        }
        self.num_digits = write;
        self.trim();
    }
}

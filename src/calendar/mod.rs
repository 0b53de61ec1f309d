// ============================================================================
// Calendar Decomposition
// Proleptic Gregorian date and time-of-day from 100ns tick counts
// ============================================================================

mod render;

pub use render::{format_date_time, DateTimeFormat};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Only the low 62 bits of a tick count carry the instant; the top two bits
/// are reserved for flags.
pub const TICKS_MASK: u64 = 0x3FFF_FFFF_FFFF_FFFF;

pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

pub const DAYS_PER_YEAR: i32 = 365;
pub const DAYS_PER_4_YEARS: i32 = DAYS_PER_YEAR * 4 + 1;
pub const DAYS_PER_100_YEARS: i32 = DAYS_PER_4_YEARS * 25 - 1;
pub const DAYS_PER_400_YEARS: i32 = DAYS_PER_100_YEARS * 4 + 1;

/// Ticks at 9999-12-31T23:59:59.9999999.
pub const MAX_TICKS: i64 = (DAYS_PER_400_YEARS as i64 * 25 - 366) * TICKS_PER_DAY - 1;

const DAYS_TO_MONTH_365: [i32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
const DAYS_TO_MONTH_366: [i32; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

// ============================================================================
// Ticks
// ============================================================================

/// 100-nanosecond intervals since 0001-01-01T00:00:00, flag bits removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ticks(i64);

impl Ticks {
    /// Wrap a raw tick word, discarding the two flag bits.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Ticks(((raw as u64) & TICKS_MASK) as i64)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Ticks of a calendar instant; `None` before year 1.
    pub fn from_date_time(value: &NaiveDateTime) -> Option<Self> {
        let days = i64::from(value.date().num_days_from_ce()) - 1;
        if days < 0 {
            return None;
        }
        let time = value.time();
        let seconds = i64::from(time.num_seconds_from_midnight());
        // Leap-second nanos (>= 1e9) fold into the last tick of the second
        let sub = i64::from(time.nanosecond().min(999_999_999)) / 100;
        Some(Ticks(days * TICKS_PER_DAY + seconds * TICKS_PER_SECOND + sub))
    }

    /// Calendar instant of these ticks; `None` beyond chrono's range.
    pub fn to_date_time(self) -> Option<NaiveDateTime> {
        let (year, month, day) = decompose_date(self.0);
        let (hour, minute, second, sub) = decompose_time_precise(self.0);
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_nano_opt(hour, minute, second, sub * 100)
    }

    pub fn date(self) -> (i32, u32, u32) {
        decompose_date(self.0)
    }

    pub fn time(self) -> (u32, u32, u32) {
        decompose_time(self.0)
    }
}

impl From<DateTime<Utc>> for Ticks {
    fn from(value: DateTime<Utc>) -> Self {
        Ticks::from_date_time(&value.naive_utc()).unwrap_or_default()
    }
}

// ============================================================================
// Decomposition
// ============================================================================

/// Year, month and day of a tick count.
///
/// Counts whole 400-, 100- and 4-year blocks from year 1, then single years.
/// The last 100-year block of a 400-year cycle and the last year of a 4-year
/// block each run one day long, so their indices clamp to 3.
pub fn decompose_date(ticks: i64) -> (i32, u32, u32) {
    let mut n = (Ticks::from_raw(ticks).get() / TICKS_PER_DAY) as i32;

    let y400 = n / DAYS_PER_400_YEARS;
    n -= y400 * DAYS_PER_400_YEARS;

    let y100 = (n / DAYS_PER_100_YEARS).min(3);
    n -= y100 * DAYS_PER_100_YEARS;

    let y4 = n / DAYS_PER_4_YEARS;
    n -= y4 * DAYS_PER_4_YEARS;

    let y1 = (n / DAYS_PER_YEAR).min(3);
    n -= y1 * DAYS_PER_YEAR;

    let year = y400 * 400 + y100 * 100 + y4 * 4 + y1 + 1;

    // Leap when this is the 4th year of its block, unless the block closes a
    // century that is not also the 4th century of its cycle
    let leap = y1 == 3 && (y4 != 24 || y100 == 3);
    let days = if leap { &DAYS_TO_MONTH_366 } else { &DAYS_TO_MONTH_365 };

    let mut month = (n >> 5) as usize + 1;
    while n >= days[month] {
        month += 1;
    }
    let day = n - days[month - 1] + 1;

    (year, month as u32, day as u32)
}

/// Hour, minute and second of a tick count (any whole days are ignored).
pub fn decompose_time(ticks: i64) -> (u32, u32, u32) {
    let (hour, minute, second, _) = decompose_time_precise(ticks);
    (hour, minute, second)
}

/// Hour, minute, second and the remaining sub-second ticks (0..10_000_000).
pub fn decompose_time_precise(ticks: i64) -> (u32, u32, u32, u32) {
    let ticks = Ticks::from_raw(ticks).get();
    let sub = (ticks % TICKS_PER_SECOND) as u32;
    let seconds = ticks / TICKS_PER_SECOND;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    (
        (hours % 24) as u32,
        (minutes % 60) as u32,
        (seconds % 60) as u32,
        sub,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> i64 {
        let dt = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap();
        Ticks::from_date_time(&dt).unwrap().get()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(decompose_date(0), (1, 1, 1));
        assert_eq!(decompose_time(0), (0, 0, 0));
    }

    #[test]
    fn test_leap_day_2000() {
        assert_eq!(decompose_date(ticks(2000, 2, 29, 0, 0, 0)), (2000, 2, 29));
        assert_eq!(decompose_date(ticks(2000, 12, 31, 0, 0, 0)), (2000, 12, 31));
    }

    #[test]
    fn test_1900_is_not_leap() {
        let feb28 = ticks(1900, 2, 28, 12, 0, 0);
        assert_eq!(decompose_date(feb28 + TICKS_PER_DAY), (1900, 3, 1));
        assert!(NaiveDate::from_ymd_opt(1900, 2, 29).is_none());
    }

    #[test]
    fn test_block_boundaries() {
        // Last day of a 400-year cycle and the first day of the next
        assert_eq!(decompose_date(ticks(2000, 12, 31, 23, 59, 59)), (2000, 12, 31));
        assert_eq!(decompose_date(ticks(2001, 1, 1, 0, 0, 0)), (2001, 1, 1));
        assert_eq!(decompose_date(ticks(1996, 12, 31, 0, 0, 0)), (1996, 12, 31));
        assert_eq!(decompose_date(MAX_TICKS), (9999, 12, 31));
    }

    #[test]
    fn test_time_of_day() {
        let t = ticks(2024, 7, 15, 13, 45, 30) + 1_234_567;
        assert_eq!(decompose_time(t), (13, 45, 30));
        assert_eq!(decompose_time_precise(t), (13, 45, 30, 1_234_567));
        assert_eq!(decompose_time(MAX_TICKS), (23, 59, 59));
    }

    #[test]
    fn test_flag_bits_masked() {
        let t = ticks(2024, 1, 2, 3, 4, 5);
        let flagged = ((t as u64) | (0b11 << 62)) as i64;
        assert!(flagged < 0);
        assert_eq!(decompose_date(flagged), (2024, 1, 2));
        assert_eq!(decompose_time(flagged), (3, 4, 5));
        assert_eq!(Ticks::from_raw(flagged).get(), t);
    }

    #[test]
    fn test_agrees_with_chrono_daily() {
        let start = NaiveDate::from_ymd_opt(1599, 12, 1).unwrap();
        for offset in 0..(366 * 110) {
            let date = start + chrono::Days::new(offset);
            let dt = date.and_hms_opt(0, 0, 0).unwrap();
            let t = Ticks::from_date_time(&dt).unwrap();
            assert_eq!(
                t.date(),
                (date.year(), date.month(), date.day()),
                "{}",
                date
            );
        }
    }

    #[test]
    fn test_chrono_round_trip() {
        let dt = NaiveDate::from_ymd_opt(1969, 7, 20)
            .unwrap()
            .and_hms_nano_opt(20, 17, 40, 123_456_700)
            .unwrap();
        let t = Ticks::from_date_time(&dt).unwrap();
        assert_eq!(t.to_date_time(), Some(dt));

        let utc: DateTime<Utc> = DateTime::from_naive_utc_and_offset(dt, Utc);
        assert_eq!(Ticks::from(utc), t);
    }
}

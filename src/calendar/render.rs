// ============================================================================
// Date/Time Rendering
// Round-trip ("O") and sortable ("s") layouts over decomposed ticks
// ============================================================================

use super::{decompose_date, decompose_time_precise, Ticks};
use crate::format::RenderBuffer;
use crate::numeric::FormatResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateTimeFormat {
    /// `yyyy-MM-ddTHH:mm:ss.fffffff`
    RoundTrip,
    /// `yyyy-MM-ddTHH:mm:ss`
    Sortable,
}

/// Render `ticks` into `destination`, returning the bytes written.
pub fn format_date_time(
    ticks: Ticks,
    format: DateTimeFormat,
    destination: &mut [u8],
) -> FormatResult<usize> {
    let (year, month, day) = decompose_date(ticks.get());
    let (hour, minute, second, sub) = decompose_time_precise(ticks.get());

    let mut out = RenderBuffer::new();
    push_padded(&mut out, year as u32, 4);
    out.push('-');
    push_padded(&mut out, month, 2);
    out.push('-');
    push_padded(&mut out, day, 2);
    out.push('T');
    push_padded(&mut out, hour, 2);
    out.push(':');
    push_padded(&mut out, minute, 2);
    out.push(':');
    push_padded(&mut out, second, 2);
    if format == DateTimeFormat::RoundTrip {
        out.push('.');
        push_padded(&mut out, sub, 7);
    }
    out.finish(destination)
}

fn push_padded(out: &mut RenderBuffer, value: u32, width: usize) {
    let mut scratch = [0u8; 10];
    let mut len = 0;
    let mut rest = value;
    loop {
        scratch[len] = (rest % 10) as u8;
        rest /= 10;
        len += 1;
        if rest == 0 {
            break;
        }
    }
    out.push_zeros(width.saturating_sub(len));
    for &d in scratch[..len].iter().rev() {
        out.push_digit(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::MAX_TICKS;
    use crate::numeric::FormatError;
    use chrono::NaiveDate;

    fn render(ticks: Ticks, format: DateTimeFormat) -> String {
        let mut buf = [0u8; 32];
        let n = format_date_time(ticks, format, &mut buf).unwrap();
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_round_trip_layout() {
        let dt = NaiveDate::from_ymd_opt(2009, 6, 15)
            .unwrap()
            .and_hms_nano_opt(13, 45, 30, 90_000)
            .unwrap();
        let ticks = Ticks::from_date_time(&dt).unwrap();
        assert_eq!(render(ticks, DateTimeFormat::RoundTrip), "2009-06-15T13:45:30.0000900");
        assert_eq!(render(ticks, DateTimeFormat::Sortable), "2009-06-15T13:45:30");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(render(Ticks::from_raw(0), DateTimeFormat::Sortable), "0001-01-01T00:00:00");
        assert_eq!(
            render(Ticks::from_raw(MAX_TICKS), DateTimeFormat::RoundTrip),
            "9999-12-31T23:59:59.9999999"
        );
    }

    #[test]
    fn test_matches_chrono_rendering() {
        let dt = NaiveDate::from_ymd_opt(1900, 3, 1)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        let ticks = Ticks::from_date_time(&dt).unwrap();
        assert_eq!(
            render(ticks, DateTimeFormat::Sortable),
            dt.format("%Y-%m-%dT%H:%M:%S").to_string()
        );
    }

    #[test]
    fn test_small_destination() {
        let mut buf = [0u8; 10];
        assert_eq!(
            format_date_time(Ticks::from_raw(0), DateTimeFormat::RoundTrip, &mut buf),
            Err(FormatError::BufferTooSmall { required: 27 })
        );
    }
}

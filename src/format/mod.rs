// ============================================================================
// Format Module
// Typed value -> digits -> specifier layout -> caller buffer
// ============================================================================

pub mod digits;
pub mod dispatch;
pub mod output;
pub mod patterns;

pub use output::{RenderBuffer, RENDER_CAPACITY};

use crate::domain::{FormatSpec, LocaleSymbols, Value};
use crate::interfaces::NumericTarget;
use crate::numeric::{FormatError, FormatResult};
use tracing::{debug, trace};

fn check_locale(locale: &LocaleSymbols) -> FormatResult<()> {
    locale.check().map_err(|e| {
        debug!(locale = locale.name(), error = %e, "rejected format locale");
        FormatError::InvalidLocale(e)
    })
}

/// Format `value` into `destination`, returning the number of bytes written.
///
/// The destination is left untouched on error.
///
/// # Errors
/// - `InvalidLocale` when the locale fails [`LocaleSymbols::check`]
/// - `UnsupportedSpecifier` for Hex or Decimal on a non-integer value
/// - `BufferTooSmall { required }` when `destination` cannot hold the text
///
/// # Example
/// ```
/// use numconv::prelude::*;
///
/// let mut buf = [0u8; 32];
/// let n = format(Value::I32(-1234), FormatSpec::number(0), &LocaleSymbols::en_us(), &mut buf).unwrap();
/// assert_eq!(&buf[..n], b"-1,234");
/// ```
pub fn format(
    value: Value,
    spec: FormatSpec,
    locale: &LocaleSymbols,
    destination: &mut [u8],
) -> FormatResult<usize> {
    check_locale(locale)?;
    let mut out = RenderBuffer::new();
    dispatch::render(&mut out, &value, &spec, locale)?;
    trace!(kind = %value.kind(), %spec, len = out.len(), "rendered value");
    out.finish(destination)
}

/// Format a Rust value directly.
pub fn format_value<T: NumericTarget>(
    value: T,
    spec: FormatSpec,
    locale: &LocaleSymbols,
    destination: &mut [u8],
) -> FormatResult<usize> {
    format(value.into_value(), spec, locale, destination)
}

/// Format into an owned string.
pub fn format_to_string(
    value: Value,
    spec: FormatSpec,
    locale: &LocaleSymbols,
) -> FormatResult<String> {
    check_locale(locale)?;
    let mut out = RenderBuffer::new();
    dispatch::render(&mut out, &value, &spec, locale)?;
    out.as_str().map(str::to_string)
}

/// Format with a textual specifier such as `"N2"` or `"x8"`.
pub fn format_with(
    value: Value,
    specifier: &str,
    locale: &LocaleSymbols,
    destination: &mut [u8],
) -> FormatResult<usize> {
    let spec = FormatSpec::parse(specifier).ok_or(FormatError::InvalidSpecifier)?;
    format(value, spec, locale, destination)
}

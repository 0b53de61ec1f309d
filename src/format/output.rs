// ============================================================================
// Render Buffer
// Bounded scratch output, copied to the caller only when it fits
// ============================================================================

use crate::numeric::{FormatError, FormatResult};
use arrayvec::ArrayString;
use tracing::debug;

/// Bytes of formatted text a single call can produce.
pub const RENDER_CAPACITY: usize = 4096;

/// Fixed-capacity text sink used by every renderer.
///
/// Writes past capacity are dropped and remembered, so renderers never need
/// to check each push; [`RenderBuffer::finish`] reports the failure.
pub struct RenderBuffer {
    text: ArrayString<RENDER_CAPACITY>,
    overflowed: bool,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            text: ArrayString::new(),
            overflowed: false,
        }
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        if self.text.try_push_str(s).is_err() {
            self.overflowed = true;
        }
    }

    #[inline]
    pub fn push(&mut self, ch: char) {
        if self.text.try_push(ch).is_err() {
            self.overflowed = true;
        }
    }

    /// Push a decimal digit value (0..=9).
    #[inline]
    pub fn push_digit(&mut self, digit: u8) {
        self.push(char::from(b'0' + digit));
    }

    pub fn push_zeros(&mut self, count: usize) {
        for _ in 0..count {
            self.push('0');
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> FormatResult<&str> {
        if self.overflowed {
            return Err(FormatError::CapacityExceeded);
        }
        Ok(self.text.as_str())
    }

    /// Copy the rendered text into `destination`, returning the bytes written.
    ///
    /// # Errors
    /// - `BufferTooSmall { required }` when `destination` is shorter than the
    ///   text; nothing is written, so the call can be retried
    /// - `CapacityExceeded` when rendering overran the internal buffer
    pub fn finish(&self, destination: &mut [u8]) -> FormatResult<usize> {
        let text = self.as_str()?;
        let required = text.len();
        if destination.len() < required {
            debug!(required, available = destination.len(), "format destination too small");
            return Err(FormatError::BufferTooSmall { required });
        }
        destination[..required].copy_from_slice(text.as_bytes());
        Ok(required)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_if_fits() {
        let mut out = RenderBuffer::new();
        out.push_str("-1");
        out.push_digit(5);
        out.push_zeros(2);

        let mut dst = [0u8; 8];
        assert_eq!(out.finish(&mut dst), Ok(5));
        assert_eq!(&dst[..5], b"-1500");
    }

    #[test]
    fn test_buffer_too_small_leaves_destination() {
        let mut out = RenderBuffer::new();
        out.push_str("12345");

        let mut dst = [b'x'; 4];
        assert_eq!(out.finish(&mut dst), Err(FormatError::BufferTooSmall { required: 5 }));
        assert_eq!(&dst, b"xxxx");
    }

    #[test]
    fn test_multibyte_counts_bytes() {
        let mut out = RenderBuffer::new();
        out.push_str("\u{20ac}");
        let mut dst = [0u8; 3];
        assert_eq!(out.finish(&mut dst), Ok(3));
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut out = RenderBuffer::new();
        out.push_zeros(RENDER_CAPACITY + 1);
        let mut dst = vec![0u8; RENDER_CAPACITY * 2];
        assert_eq!(out.finish(&mut dst), Err(FormatError::CapacityExceeded));
    }
}

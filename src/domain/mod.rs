// ============================================================================
// Domain Models Module
// Style flags, locale symbols, format specifiers and numeric values
// ============================================================================

pub mod format_spec;
pub mod locale;
pub mod style;
pub mod value;

pub use format_spec::{FormatKind, FormatSpec, LetterCase, MAX_PRECISION};
pub use locale::LocaleSymbols;
pub use style::{validate_style, StyleFlags, TargetCategory, ValidatedStyle};
pub use value::{NumericKind, Value};

// ============================================================================
// Locale Symbols
// Culture-specific separators, signs, symbols and pattern indices
// ============================================================================

use super::format_spec::MAX_PRECISION;
use crate::numeric::LocaleError;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest symbol string (in bytes) a locale may carry.
pub const MAX_SYMBOL_LEN: usize = 16;

/// Highest valid positive pattern index (currency and percent).
pub const MAX_POSITIVE_PATTERN: u8 = 3;

/// Highest valid negative currency pattern index.
pub const MAX_CURRENCY_NEGATIVE_PATTERN: u8 = 15;

/// Highest valid negative percent pattern index.
pub const MAX_PERCENT_NEGATIVE_PATTERN: u8 = 11;

// ============================================================================
// Locale Configuration
// ============================================================================

/// Culture-specific symbol set governing how numbers are read and written.
///
/// Built once, then only read. Derived properties are computed when the
/// descriptor is built or modified through a `with_*` method, never lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "wire::LocaleWire"))]
pub struct LocaleSymbols {
    /// Culture name (e.g. "en-US"); empty for the invariant culture
    name: String,

    /// Digit group lengths, least significant first; the last one repeats.
    /// A trailing 0 stops grouping after the preceding groups.
    group_sizes: SmallVec<[u8; 4]>,

    decimal_separator: String,
    group_separator: String,
    positive_sign: String,
    negative_sign: String,
    currency_symbol: String,
    percent_symbol: String,

    /// 0 "$n", 1 "n$", 2 "$ n", 3 "n $"
    currency_positive_pattern: u8,
    /// 0..=15, see `format::patterns`
    currency_negative_pattern: u8,
    /// 0 "n %", 1 "n%", 2 "%n", 3 "% n"
    percent_positive_pattern: u8,
    /// 0..=11, see `format::patterns`
    percent_negative_pattern: u8,

    nan_symbol: String,
    positive_infinity_symbol: String,
    negative_infinity_symbol: String,

    /// Default precision for the Fixed and Number formats
    number_decimal_digits: u8,
    /// Default precision for the Currency format
    currency_decimal_digits: u8,
    /// Default precision for the Percent format
    percent_decimal_digits: u8,

    /// Render negative zero (and negative values rounding to zero) with a sign
    signed_zero: bool,

    #[cfg_attr(feature = "serde", serde(skip))]
    invariant_signs: bool,
}

/// Deserialized locale data passes through here so derived fields are
/// recomputed instead of trusted.
#[cfg(feature = "serde")]
mod wire {
    use super::LocaleSymbols;
    use serde::Deserialize;
    use smallvec::SmallVec;

    #[derive(Deserialize)]
    pub(super) struct LocaleWire {
        name: String,
        group_sizes: SmallVec<[u8; 4]>,
        decimal_separator: String,
        group_separator: String,
        positive_sign: String,
        negative_sign: String,
        currency_symbol: String,
        percent_symbol: String,
        currency_positive_pattern: u8,
        currency_negative_pattern: u8,
        percent_positive_pattern: u8,
        percent_negative_pattern: u8,
        nan_symbol: String,
        positive_infinity_symbol: String,
        negative_infinity_symbol: String,
        number_decimal_digits: u8,
        currency_decimal_digits: u8,
        percent_decimal_digits: u8,
        signed_zero: bool,
    }

    impl From<LocaleWire> for LocaleSymbols {
        fn from(w: LocaleWire) -> Self {
            LocaleSymbols {
                name: w.name,
                group_sizes: w.group_sizes,
                decimal_separator: w.decimal_separator,
                group_separator: w.group_separator,
                positive_sign: w.positive_sign,
                negative_sign: w.negative_sign,
                currency_symbol: w.currency_symbol,
                percent_symbol: w.percent_symbol,
                currency_positive_pattern: w.currency_positive_pattern,
                currency_negative_pattern: w.currency_negative_pattern,
                percent_positive_pattern: w.percent_positive_pattern,
                percent_negative_pattern: w.percent_negative_pattern,
                nan_symbol: w.nan_symbol,
                positive_infinity_symbol: w.positive_infinity_symbol,
                negative_infinity_symbol: w.negative_infinity_symbol,
                number_decimal_digits: w.number_decimal_digits,
                currency_decimal_digits: w.currency_decimal_digits,
                percent_decimal_digits: w.percent_decimal_digits,
                signed_zero: w.signed_zero,
                invariant_signs: false,
            }
            .refresh_derived()
        }
    }
}

impl LocaleSymbols {
    /// Create a locale with the given separators; every other field takes
    /// its invariant value.
    pub fn new(name: impl Into<String>, decimal_separator: &str, group_separator: &str) -> Self {
        let mut locale = Self::invariant();
        locale.name = name.into();
        locale.decimal_separator = decimal_separator.to_string();
        locale.group_separator = group_separator.to_string();
        locale
    }

    fn refresh_derived(mut self) -> Self {
        self.invariant_signs = self.positive_sign == "+" && self.negative_sign == "-";
        self
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Builder method: Set decimal and group separators
    pub fn with_separators(mut self, decimal: &str, group: &str) -> Self {
        self.decimal_separator = decimal.to_string();
        self.group_separator = group.to_string();
        self
    }

    /// Builder method: Set digit group sizes (least significant group first)
    pub fn with_group_sizes(mut self, sizes: &[u8]) -> Self {
        self.group_sizes = SmallVec::from_slice(sizes);
        self
    }

    /// Builder method: Set positive and negative sign strings
    pub fn with_signs(mut self, positive: &str, negative: &str) -> Self {
        self.positive_sign = positive.to_string();
        self.negative_sign = negative.to_string();
        self.refresh_derived()
    }

    /// Builder method: Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: &str) -> Self {
        self.currency_symbol = symbol.to_string();
        self
    }

    /// Builder method: Set the percent symbol
    pub fn with_percent_symbol(mut self, symbol: &str) -> Self {
        self.percent_symbol = symbol.to_string();
        self
    }

    /// Builder method: Set currency positive/negative pattern indices
    pub fn with_currency_patterns(mut self, positive: u8, negative: u8) -> Self {
        self.currency_positive_pattern = positive;
        self.currency_negative_pattern = negative;
        self
    }

    /// Builder method: Set percent positive/negative pattern indices
    pub fn with_percent_patterns(mut self, positive: u8, negative: u8) -> Self {
        self.percent_positive_pattern = positive;
        self.percent_negative_pattern = negative;
        self
    }

    /// Builder method: Set NaN and infinity literals
    pub fn with_special_symbols(mut self, nan: &str, positive_inf: &str, negative_inf: &str) -> Self {
        self.nan_symbol = nan.to_string();
        self.positive_infinity_symbol = positive_inf.to_string();
        self.negative_infinity_symbol = negative_inf.to_string();
        self
    }

    /// Builder method: Set default precisions for number, currency and percent
    pub fn with_decimal_digits(mut self, number: u8, currency: u8, percent: u8) -> Self {
        self.number_decimal_digits = number;
        self.currency_decimal_digits = currency;
        self.percent_decimal_digits = percent;
        self
    }

    /// Builder method: Keep the sign on values that render as zero
    pub fn with_signed_zero(mut self, signed_zero: bool) -> Self {
        self.signed_zero = signed_zero;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_sizes(&self) -> &[u8] {
        &self.group_sizes
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    pub fn positive_sign(&self) -> &str {
        &self.positive_sign
    }

    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn percent_symbol(&self) -> &str {
        &self.percent_symbol
    }

    pub fn currency_positive_pattern(&self) -> u8 {
        self.currency_positive_pattern
    }

    pub fn currency_negative_pattern(&self) -> u8 {
        self.currency_negative_pattern
    }

    pub fn percent_positive_pattern(&self) -> u8 {
        self.percent_positive_pattern
    }

    pub fn percent_negative_pattern(&self) -> u8 {
        self.percent_negative_pattern
    }

    pub fn nan_symbol(&self) -> &str {
        &self.nan_symbol
    }

    pub fn positive_infinity_symbol(&self) -> &str {
        &self.positive_infinity_symbol
    }

    pub fn negative_infinity_symbol(&self) -> &str {
        &self.negative_infinity_symbol
    }

    pub fn number_decimal_digits(&self) -> u8 {
        self.number_decimal_digits
    }

    pub fn currency_decimal_digits(&self) -> u8 {
        self.currency_decimal_digits
    }

    pub fn percent_decimal_digits(&self) -> u8 {
        self.percent_decimal_digits
    }

    pub fn signed_zero(&self) -> bool {
        self.signed_zero
    }

    /// True when the signs are exactly ASCII "+" and "-".
    pub fn has_invariant_signs(&self) -> bool {
        self.invariant_signs
    }

    /// Validate the locale descriptor
    pub fn validate(&self) -> Result<(), String> {
        self.check().map_err(|e| e.to_string())
    }

    /// Typed form of [`validate`](Self::validate); run by every parse and
    /// format entry point before the locale is used.
    pub fn check(&self) -> Result<(), LocaleError> {
        if self.decimal_separator.is_empty() {
            return Err(LocaleError::EmptyDecimalSeparator);
        }
        if self.decimal_separator == self.group_separator {
            return Err(LocaleError::SeparatorsCollide);
        }
        if self.positive_sign.is_empty() || self.negative_sign.is_empty() {
            return Err(LocaleError::EmptySign);
        }
        if self.positive_sign == self.negative_sign {
            return Err(LocaleError::SignsCollide);
        }

        let symbols = [
            &self.decimal_separator,
            &self.group_separator,
            &self.positive_sign,
            &self.negative_sign,
            &self.currency_symbol,
            &self.percent_symbol,
            &self.nan_symbol,
            &self.positive_infinity_symbol,
            &self.negative_infinity_symbol,
        ];
        if symbols.iter().any(|s| s.len() > MAX_SYMBOL_LEN) {
            return Err(LocaleError::SymbolTooLong);
        }

        if let Some((last, rest)) = self.group_sizes.split_last() {
            if rest.iter().any(|&size| size == 0 || size > 9) || *last > 9 {
                return Err(LocaleError::InvalidGroupSizes);
            }
        }

        if self.currency_positive_pattern > MAX_POSITIVE_PATTERN
            || self.percent_positive_pattern > MAX_POSITIVE_PATTERN
        {
            return Err(LocaleError::PositivePatternOutOfRange);
        }
        if self.currency_negative_pattern > MAX_CURRENCY_NEGATIVE_PATTERN {
            return Err(LocaleError::CurrencyNegativePatternOutOfRange);
        }
        if self.percent_negative_pattern > MAX_PERCENT_NEGATIVE_PATTERN {
            return Err(LocaleError::PercentNegativePatternOutOfRange);
        }

        if self.number_decimal_digits > MAX_PRECISION
            || self.currency_decimal_digits > MAX_PRECISION
            || self.percent_decimal_digits > MAX_PRECISION
        {
            return Err(LocaleError::PrecisionOutOfRange);
        }

        Ok(())
    }
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        Self::invariant()
    }
}

// ============================================================================
// Preset Locales (Factory Methods)
// ============================================================================

impl LocaleSymbols {
    /// Culture-independent symbols
    /// - "." decimal, "," group, groups of 3
    /// - "¤" currency, negative currency as "(¤n)"
    /// - "Infinity" / "-Infinity" / "NaN"
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            group_sizes: SmallVec::from_slice(&[3]),
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            positive_sign: "+".to_string(),
            negative_sign: "-".to_string(),
            currency_symbol: "\u{a4}".to_string(),
            percent_symbol: "%".to_string(),
            currency_positive_pattern: 0,
            currency_negative_pattern: 0,
            percent_positive_pattern: 0,
            percent_negative_pattern: 0,
            nan_symbol: "NaN".to_string(),
            positive_infinity_symbol: "Infinity".to_string(),
            negative_infinity_symbol: "-Infinity".to_string(),
            number_decimal_digits: 2,
            currency_decimal_digits: 2,
            percent_decimal_digits: 2,
            signed_zero: false,
            invariant_signs: true,
        }
    }

    /// United States English
    /// - "$n" / "-$n" currency, "n%" / "-n%" percent
    pub fn en_us() -> Self {
        Self::new("en-US", ".", ",")
            .with_currency_symbol("$")
            .with_currency_patterns(0, 1)
            .with_percent_patterns(1, 1)
            .with_special_symbols("NaN", "\u{221e}", "-\u{221e}")
    }

    /// German (Germany)
    /// - "," decimal, "." group, "n €" / "-n €" currency
    pub fn de_de() -> Self {
        Self::new("de-DE", ",", ".")
            .with_currency_symbol("\u{20ac}")
            .with_currency_patterns(3, 8)
            .with_percent_patterns(0, 0)
            .with_special_symbols("NaN", "\u{221e}", "-\u{221e}")
    }

    /// French (France)
    /// - narrow no-break space as group separator
    pub fn fr_fr() -> Self {
        Self::new("fr-FR", ",", "\u{202f}")
            .with_currency_symbol("\u{20ac}")
            .with_currency_patterns(3, 8)
            .with_percent_patterns(0, 0)
            .with_special_symbols("NaN", "\u{221e}", "-\u{221e}")
    }

    /// Hindi (India)
    /// - Indian digit grouping: 3 then repeating 2 (12,34,56,789)
    pub fn hi_in() -> Self {
        Self::new("hi-IN", ".", ",")
            .with_group_sizes(&[3, 2])
            .with_currency_symbol("\u{20b9}")
            .with_currency_patterns(0, 1)
            .with_percent_patterns(1, 1)
            .with_special_symbols("NaN", "\u{221e}", "-\u{221e}")
    }

    /// Hebrew (Israel)
    pub fn he_il() -> Self {
        Self::new("he-IL", ".", ",")
            .with_currency_symbol("\u{20aa}")
            .with_currency_patterns(3, 8)
            .with_percent_patterns(1, 1)
            .with_special_symbols("NaN", "\u{221e}", "-\u{221e}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for locale in [
            LocaleSymbols::invariant(),
            LocaleSymbols::en_us(),
            LocaleSymbols::de_de(),
            LocaleSymbols::fr_fr(),
            LocaleSymbols::hi_in(),
            LocaleSymbols::he_il(),
        ] {
            assert!(locale.validate().is_ok(), "{}", locale.name());
        }
    }

    #[test]
    fn test_builder_pattern() {
        let locale = LocaleSymbols::new("x-test", ",", " ")
            .with_group_sizes(&[3, 2, 0])
            .with_signs("+", "\u{2212}")
            .with_currency_patterns(1, 5);

        assert_eq!(locale.decimal_separator(), ",");
        assert_eq!(locale.group_sizes(), &[3, 2, 0]);
        assert_eq!(locale.currency_positive_pattern(), 1);
        assert_eq!(locale.currency_negative_pattern(), 5);
        assert!(!locale.has_invariant_signs());
        assert!(locale.validate().is_ok());
    }

    #[test]
    fn test_derived_signs_recomputed() {
        let locale = LocaleSymbols::invariant();
        assert!(locale.has_invariant_signs());

        let locale = locale.with_signs("+", "\u{2212}").with_signs("+", "-");
        assert!(locale.has_invariant_signs());
    }

    #[test]
    fn test_validation() {
        let same_separators = LocaleSymbols::new("bad", ".", ".");
        assert!(same_separators.validate().is_err());

        let bad_pattern = LocaleSymbols::invariant().with_currency_patterns(4, 0);
        assert!(bad_pattern.validate().is_err());

        let bad_negative = LocaleSymbols::invariant().with_percent_patterns(0, 12);
        assert!(bad_negative.validate().is_err());

        let bad_groups = LocaleSymbols::invariant().with_group_sizes(&[0, 3]);
        assert!(bad_groups.validate().is_err());

        let long_symbol = LocaleSymbols::invariant().with_currency_symbol(&"X".repeat(17));
        assert!(long_symbol.validate().is_err());
    }

    #[test]
    fn test_check_reports_typed_reason() {
        assert_eq!(LocaleSymbols::en_us().check(), Ok(()));
        assert_eq!(
            LocaleSymbols::new("bad", ".", ".").check(),
            Err(LocaleError::SeparatorsCollide)
        );
        assert_eq!(
            LocaleSymbols::invariant().with_signs("-", "-").check(),
            Err(LocaleError::SignsCollide)
        );
        assert_eq!(
            LocaleSymbols::invariant().with_currency_symbol(&"X".repeat(5000)).check(),
            Err(LocaleError::SymbolTooLong)
        );
        assert_eq!(
            LocaleSymbols::invariant().with_decimal_digits(2, 100, 2).check(),
            Err(LocaleError::PrecisionOutOfRange)
        );
        assert_eq!(
            LocaleSymbols::invariant().with_group_sizes(&[0, 3]).validate(),
            Err("Group sizes must be 1..=9 (only the last may be 0)".to_string())
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip_recomputes_derived() {
        let locale = LocaleSymbols::hi_in();
        let json = serde_json::to_string(&locale).unwrap();
        assert!(!json.contains("invariant_signs"));

        let back: LocaleSymbols = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
        assert!(back.has_invariant_signs());
    }
}

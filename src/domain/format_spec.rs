// ============================================================================
// Format Specifiers
// Standard format kinds, precision and letter case
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest precision a specifier may carry.
pub const MAX_PRECISION: u8 = 99;

/// Standard numeric format kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatKind {
    /// Shortest round-trip representation ("G", "R")
    General,
    /// Fixed-point, no grouping ("F")
    Fixed,
    /// d.ddddE+ddd ("E")
    Scientific,
    /// Fixed-point with group separators ("N")
    Number,
    /// Locale currency pattern ("C")
    Currency,
    /// Value times 100 with the locale percent pattern ("P")
    Percent,
    /// Two's complement hex digits, integers only ("X")
    Hex,
    /// Zero-padded decimal digits, integers only ("D")
    Decimal,
}

/// Case of hex digits and of the exponent marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

/// A parsed standard format: kind, optional precision and letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatSpec {
    pub kind: FormatKind,
    /// Digits after the point (F, N, C, P, E), significant digits (G)
    /// or minimum digit count (X, D). `None` selects the kind's default.
    pub precision: Option<u8>,
    pub case: LetterCase,
}

impl FormatSpec {
    pub const fn new(kind: FormatKind) -> Self {
        Self {
            kind,
            precision: None,
            case: LetterCase::Upper,
        }
    }

    pub const fn general() -> Self {
        Self::new(FormatKind::General)
    }

    pub const fn fixed(precision: u8) -> Self {
        Self::new(FormatKind::Fixed).with_precision(precision)
    }

    pub const fn scientific(precision: u8) -> Self {
        Self::new(FormatKind::Scientific).with_precision(precision)
    }

    pub const fn number(precision: u8) -> Self {
        Self::new(FormatKind::Number).with_precision(precision)
    }

    pub const fn currency() -> Self {
        Self::new(FormatKind::Currency)
    }

    pub const fn percent() -> Self {
        Self::new(FormatKind::Percent)
    }

    pub const fn hex() -> Self {
        Self::new(FormatKind::Hex)
    }

    /// Builder method: Set precision (clamped to `MAX_PRECISION`)
    pub const fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(if precision > MAX_PRECISION {
            MAX_PRECISION
        } else {
            precision
        });
        self
    }

    /// Builder method: Set letter case
    pub const fn with_case(mut self, case: LetterCase) -> Self {
        self.case = case;
        self
    }

    /// Parse a standard format string such as `"N2"`, `"x8"` or `"G"`.
    ///
    /// An empty string is the general format. `R` is accepted as an alias
    /// for `G` and never takes a precision.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let letter = match chars.next() {
            Some(c) => c,
            None => return Some(Self::general()),
        };

        let kind = match letter.to_ascii_uppercase() {
            'G' | 'R' => FormatKind::General,
            'F' => FormatKind::Fixed,
            'E' => FormatKind::Scientific,
            'N' => FormatKind::Number,
            'C' => FormatKind::Currency,
            'P' => FormatKind::Percent,
            'X' => FormatKind::Hex,
            'D' => FormatKind::Decimal,
            _ => return None,
        };
        let case = if letter.is_ascii_lowercase() {
            LetterCase::Lower
        } else {
            LetterCase::Upper
        };

        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else {
            if rest.len() > 2 || !rest.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            if letter.eq_ignore_ascii_case(&'R') {
                return None;
            }
            rest.parse::<u8>().ok()
        };

        Some(Self {
            kind,
            precision,
            case,
        })
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::general()
    }
}

impl FromStr for FormatSpec {
    type Err = crate::numeric::FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(crate::numeric::FormatError::InvalidSpecifier)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = match self.kind {
            FormatKind::General => 'G',
            FormatKind::Fixed => 'F',
            FormatKind::Scientific => 'E',
            FormatKind::Number => 'N',
            FormatKind::Currency => 'C',
            FormatKind::Percent => 'P',
            FormatKind::Hex => 'X',
            FormatKind::Decimal => 'D',
        };
        let letter = match self.case {
            LetterCase::Upper => upper,
            LetterCase::Lower => upper.to_ascii_lowercase(),
        };
        write!(f, "{}", letter)?;
        if let Some(p) = self.precision {
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_formats() {
        assert_eq!(FormatSpec::parse("N2"), Some(FormatSpec::number(2)));
        assert_eq!(FormatSpec::parse("F7"), Some(FormatSpec::fixed(7)));
        assert_eq!(FormatSpec::parse(""), Some(FormatSpec::general()));
        assert_eq!(FormatSpec::parse("R"), Some(FormatSpec::general()));
        assert_eq!(
            FormatSpec::parse("x8"),
            Some(FormatSpec::hex().with_precision(8).with_case(LetterCase::Lower))
        );
        assert_eq!(FormatSpec::parse("C").map(|s| s.precision), Some(None));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(FormatSpec::parse("Q"), None);
        assert_eq!(FormatSpec::parse("N100"), None);
        assert_eq!(FormatSpec::parse("N-1"), None);
        assert_eq!(FormatSpec::parse("R2"), None);
        assert!("Z3".parse::<FormatSpec>().is_err());
    }

    #[test]
    fn test_precision_clamped() {
        assert_eq!(FormatSpec::fixed(200).precision, Some(MAX_PRECISION));
    }

    #[test]
    fn test_display_round_trips() {
        for s in ["N2", "e3", "X", "D10", "G"] {
            let spec: FormatSpec = s.parse().unwrap();
            assert_eq!(spec.to_string(), s);
        }
    }
}

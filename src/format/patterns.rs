// ============================================================================
// Sign and Symbol Patterns
// Culture-defined arrangements of amount, sign and currency/percent symbol
// ============================================================================
//
// Placeholders: '#' amount, '-' locale negative sign, '$' currency symbol,
// '%' percent symbol. Every other character is emitted literally.

use super::output::RenderBuffer;
use crate::domain::LocaleSymbols;

pub const CURRENCY_POSITIVE: [&str; 4] = ["$#", "#$", "$ #", "# $"];

pub const CURRENCY_NEGATIVE: [&str; 16] = [
    "($#)", "-$#", "$-#", "$#-", "(#$)", "-#$", "#-$", "#$-", "-# $", "-$ #", "# $-", "$ #-",
    "$ -#", "#- $", "($ #)", "(# $)",
];

pub const PERCENT_POSITIVE: [&str; 4] = ["# %", "#%", "%#", "% #"];

pub const PERCENT_NEGATIVE: [&str; 12] = [
    "-# %", "-#%", "-%#", "%-#", "%#-", "#-%", "#%-", "-% #", "# %-", "% #-", "% -#", "#- %",
];

/// Negative pattern of the Fixed, Number, General and Scientific formats.
pub const NUMBER_NEGATIVE: &str = "-#";

/// Currency pattern for the sign of the value. Indices are validated by
/// [`LocaleSymbols::validate`]; an out-of-range index falls back to 0.
pub fn currency_pattern(locale: &LocaleSymbols, negative: bool) -> &'static str {
    if negative {
        CURRENCY_NEGATIVE
            .get(locale.currency_negative_pattern() as usize)
            .copied()
            .unwrap_or(CURRENCY_NEGATIVE[0])
    } else {
        CURRENCY_POSITIVE
            .get(locale.currency_positive_pattern() as usize)
            .copied()
            .unwrap_or(CURRENCY_POSITIVE[0])
    }
}

/// Percent pattern for the sign of the value.
pub fn percent_pattern(locale: &LocaleSymbols, negative: bool) -> &'static str {
    if negative {
        PERCENT_NEGATIVE
            .get(locale.percent_negative_pattern() as usize)
            .copied()
            .unwrap_or(PERCENT_NEGATIVE[0])
    } else {
        PERCENT_POSITIVE
            .get(locale.percent_positive_pattern() as usize)
            .copied()
            .unwrap_or(PERCENT_POSITIVE[0])
    }
}

/// Expand `pattern`, calling `amount` where the '#' placeholder sits.
pub fn render_pattern<F>(
    out: &mut RenderBuffer,
    pattern: &str,
    locale: &LocaleSymbols,
    mut amount: F,
) where
    F: FnMut(&mut RenderBuffer),
{
    for ch in pattern.chars() {
        match ch {
            '#' => amount(out),
            '-' => out.push_str(locale.negative_sign()),
            '$' => out.push_str(locale.currency_symbol()),
            '%' => out.push_str(locale.percent_symbol()),
            literal => out.push(literal),
        }
    }
}

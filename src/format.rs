//! Formatting of monetary amounts for display.

use numfmt::{Formatter, Precision};

/// Format `amount` with thousands separators, two decimal places, and the
/// user's currency symbol, e.g. `$1,234.50`.
///
/// Negative amounts place the sign before the symbol, e.g. `-$12.30`.
pub fn format_money(amount: f64, currency: &str) -> String {
    if amount == 0.0 {
        return format!("{currency}0.00");
    }

    let prefix = if amount < 0.0 {
        format!("-{currency}")
    } else {
        currency.to_owned()
    };

    let formatter = match Formatter::currency(&prefix) {
        Ok(formatter) => formatter.precision(Precision::Decimals(2)),
        // The prefix can exceed the formatter's buffer for unusually long
        // currency symbols; fall back to an unseparated rendering.
        Err(_) => {
            return if amount < 0.0 {
                format!("-{currency}{:.2}", amount.abs())
            } else {
                format!("{currency}{amount:.2}")
            };
        }
    };

    let mut formatted_string = formatter.fmt_string(amount.abs());

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

//! French-locale money formatting.
//!
//! Amounts render the way `fr-FR` currency formatting does: narrow no-break
//! space between thousands, comma before the cents, no-break space before
//! the euro sign (`1 234,56 €`).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Thousands separator (U+202F NARROW NO-BREAK SPACE).
pub const THOUSANDS_SEPARATOR: char = '\u{202f}';
/// Space between amount and currency (U+00A0 NO-BREAK SPACE).
pub const CURRENCY_SPACE: char = '\u{a0}';

/// Format an amount in euros, two decimals, `-` for negatives.
///
/// Non-finite values render as `N/A`.
#[must_use]
pub fn format_eur(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{},{:02}{CURRENCY_SPACE}€", group_thousands(cents / 100), cents % 100)
}

/// Like [`format_eur`], with a `+` prefix on strictly positive amounts.
#[must_use]
pub fn format_signed_eur(value: f64) -> String {
    let formatted = format_eur(value);
    if value > 0.0 && formatted != format_eur(0.0) { format!("+{formatted}") } else { formatted }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

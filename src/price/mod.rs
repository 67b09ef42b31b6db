//! Price Text Normalizer: Brazilian-locale money text to a canonical amount.
//!
//! Accepts `R$ 1.234,56`, `99,90`, `R$ 5,00`, integer amounts with an explicit
//! currency symbol (`R$ 120`), and already-canonical dot-decimal strings
//! (`899.94`, as found in structured data). Rejects everything else: bare
//! integers (product codes, quantities), zero and negative values, and text
//! with no recognizable amount.

use std::sync::LazyLock;

use regex::Regex;

/// `R$` followed by an integer part (with optional `.` thousands groups) and
/// an optional `,dd` fraction.
static BRL_WITH_SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"R\$\s*(\d{1,3}(?:\.\d{3})+|\d+)(?:,(\d{2}))?").expect("static regex")
});

/// A bare `1.234,56` / `99,90` fragment. The comma + two digits is required;
/// that is what disambiguates an amount from an arbitrary number.
static BARE_COMMA_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3}(?:\.\d{3})+|\d+),(\d{2})\b").expect("static regex"));

/// An already-normalized dot-decimal string, full-match only (keeps the
/// normalizer idempotent and lets JSON-LD numeric strings pass through).
static CANONICAL_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d{1,2})\s*$").expect("static regex"));

/// Extract and normalize a monetary amount from `text`.
///
/// Returns `None` when no valid amount is present. Never returns zero or a
/// negative value. Idempotent: feeding a previous output back in (formatted
/// with two decimals) yields the same value.
pub fn normalize(text: &str) -> Option<f64> {
    if let Some(caps) = CANONICAL_AMOUNT.captures(text) {
        let int_part = caps.get(1)?.as_str();
        let frac = caps.get(2)?.as_str();
        return to_amount(int_part, Some(frac));
    }

    if let Some(caps) = BRL_WITH_SYMBOL.captures(text) {
        let int_part = caps.get(1)?.as_str();
        let frac = caps.get(2).map(|m| m.as_str());
        return to_amount(int_part, frac);
    }

    if let Some(caps) = BARE_COMMA_AMOUNT.captures(text) {
        let int_part = caps.get(1)?.as_str();
        let frac = caps.get(2)?.as_str();
        return to_amount(int_part, Some(frac));
    }

    None
}

/// Assemble the amount from its locale-free parts. Thousands separators are
/// stripped from the integer part; the fraction is cents (or tenths when a
/// canonical string carried a single decimal digit).
fn to_amount(int_part: &str, frac: Option<&str>) -> Option<f64> {
    let units: u64 = int_part.replace('.', "").parse().ok()?;
    let cents: u64 = match frac {
        Some(f) if f.len() == 1 => f.parse::<u64>().ok()? * 10,
        Some(f) => f.parse().ok()?,
        None => 0,
    };
    let value = units as f64 + cents as f64 / 100.0;
    if value > 0.0 { Some(value) } else { None }
}

//! Display formatting for amounts, percentages, counts and dates.
//!
//! Numbers follow Norwegian (nb-NO) conventions: a no-break space groups
//! thousands, a comma separates decimals and negative values use the Unicode
//! minus sign. The abbreviated currency tiers (`1.5B kr`, `420M kr`) keep a
//! dot as decimal separator.
//!
//! Rounding is half away from zero at the displayed precision, applied to the
//! binary value (`1.45` may therefore display as `1.4`).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const CURRENCY_LABEL: &str = "kr";
pub const NOT_APPLICABLE: &str = "N/A";

const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';
const MINUS_SIGN: char = '\u{2212}';
const MAX_FRACTION_DIGITS: u32 = 3;

/// Rounds half away from zero to `decimals` places.
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Tiered currency display with the default `kr` label.
pub fn format_currency(value: f64) -> String {
    format_currency_with(value, CURRENCY_LABEL)
}

/// Billions with one decimal, millions with none, otherwise grouped units.
pub fn format_currency_with(value: f64, label: &str) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1}B {label}", round_half_away(value / 1_000_000_000.0, 1))
    } else if value >= 1_000_000.0 {
        format!("{:.0}M {label}", round_half_away(value / 1_000_000.0, 0))
    } else {
        format!("{} {label}", format_number(value))
    }
}

/// Whole millions followed by `M kr`, as used on the turnover card.
pub fn format_millions(value: f64) -> String {
    format!(
        "{:.0} M {CURRENCY_LABEL}",
        round_half_away(value / 1_000_000.0, 0)
    )
}

/// Signed one-decimal percentage, or `N/A` when there is no baseline.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        None => NOT_APPLICABLE.to_string(),
        Some(v) => {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{:.1}%", round_half_away(v, 1))
        }
    }
}

/// Grouped integer count (population, visitors, traffic).
pub fn format_count(value: f64) -> String {
    format_number(round_half_away(value, 0))
}

/// nb-NO number with up to three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let millis = (value.abs() * 10f64.powi(MAX_FRACTION_DIGITS as i32)).round() as u64;
    let whole = millis / 1000;
    let fraction = millis % 1000;

    let mut out = String::new();
    if value < 0.0 && millis != 0 {
        out.push(MINUS_SIGN);
    }
    out.push_str(&group_digits(whole));

    if fraction != 0 {
        let digits = format!("{fraction:03}");
        out.push(DECIMAL_SEPARATOR);
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    out
}

/// Parses an ISO-8601 date or datetime.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `d.m.yyyy` for an ISO date; unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => date.format("%-d.%-m.%Y").to_string(),
        None => value.to_string(),
    }
}

//! Amount normalization for numeric fragments of unknown locale.
//!
//! A fragment such as `1.234,50` or `1,234.50` is reduced to a canonical
//! decimal string: no thousands separators, `.` as the decimal point, and
//! either zero or two fractional digits.
//!
//! Separator resolution:
//! - both `.` and `,` present: the one appearing last is the decimal point and
//!   every occurrence of the other is dropped;
//! - only `,` present: it is the decimal point;
//! - only `.` present, or neither: the fragment is taken as-is.
//!
//! Any character other than digits and separators is stripped first, which
//! also strips a leading `-`: amounts are always read as non-negative. A
//! fragment that opens with a separator (`.99`, `,50`) reads as a fraction of
//! one unit.
//!
//! Rendering rounds to cents before deciding whether a value is whole, so
//! `12,999` renders `13` and `0,001` renders `0` rather than `13.00` and
//! `0.00`. This departs from a literal "whole values get no decimals, all
//! others get two" reading and keeps every rendered amount stable when it is
//! normalized again.

use log::trace;

/// Normalizes a raw numeric fragment, or returns `None` if it is unparsable.
pub fn normalize_amount(fragment: &str) -> Option<String> {
    parse_amount(fragment).map(render_amount)
}

/// Parses a raw numeric fragment into a finite, non-negative value.
pub fn parse_amount(fragment: &str) -> Option<f64> {
    let stripped: String = fragment
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if stripped.is_empty() {
        return None;
    }

    let decimal = resolve_separators(&stripped);
    match decimal.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            trace!("Fragment {:?} resolved to unparsable {:?}", fragment, decimal);
            None
        }
    }
}

/// Renders a value with two fractional digits, or none if it is whole once
/// rounded to cents.
pub fn render_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let cents = (value * 100.0).round();
    if cents % 100.0 == 0.0 {
        format!("{:.0}", cents / 100.0)
    } else {
        format!("{:.2}", cents / 100.0)
    }
}

fn resolve_separators(digits: &str) -> String {
    match (digits.rfind('.'), digits.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => digits.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => digits.replace(',', ""),
        (None, Some(_)) => digits.replace(',', "."),
        _ => digits.to_string(),
    }
}

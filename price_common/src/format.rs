//! Display formatting and the fallback chain.
//!
//! [`normalize_price`] is the public entry point of the engine. It is total:
//! every input, including a missing one, maps to a display string. Which rule
//! produced the string is described by [`PriceClass`]; [`explain_price`]
//! returns it together with every candidate the scan found.

use log::debug;
use serde::Serialize;

use crate::amount::normalize_amount;
use crate::candidate::{PriceCandidate, candidates, select};
use crate::extractor::first_fragment;

/// Output for a missing price.
pub const MISSING_PRICE: &str = "€ --";
/// Output for an empty price.
pub const EMPTY_PRICE: &str = "—";
/// Explicit "not available" marker, passed through unchanged.
pub const NOT_AVAILABLE: &str = "N/A";

/// Which rule of the chain produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceClass {
    /// No input at all; output is [`MISSING_PRICE`].
    MissingInput,
    /// Empty or blank input; output is [`EMPTY_PRICE`].
    EmptyInput,
    /// Input was `N/A` in any case; output is [`NOT_AVAILABLE`].
    ExplicitNa,
    /// A currency-tagged candidate was selected.
    Tagged,
    /// No currency marker, but a bare number could be normalized.
    NoCurrencyButNumeric,
    /// Nothing could be normalized; output is the trimmed input.
    FullyUnparsable,
}

/// Full account of one normalization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceReport {
    /// The raw input, if any.
    pub input: Option<String>,
    /// Every currency-tagged candidate, in extraction order.
    pub candidates: Vec<PriceCandidate>,
    /// The candidate chosen by the disambiguator.
    pub selected: Option<PriceCandidate>,
    /// The display string, identical to what [`normalize_price`] returns.
    pub output: String,
    /// The rule that produced `output`.
    pub class: PriceClass,
}

/// Normalizes a raw price string into a single display token.
pub fn normalize_price(raw: Option<&str>) -> String {
    let (output, _) = resolve(raw, |text| select(candidates(text)));
    output
}

/// Shorthand for `normalize_price(Some(raw))`.
pub fn normalize_price_str(raw: &str) -> String {
    normalize_price(Some(raw))
}

/// Runs the same pipeline as [`normalize_price`] and reports how it decided.
pub fn explain_price(raw: Option<&str>) -> PriceReport {
    let mut found = Vec::new();
    let mut selected = None;
    let (output, class) = resolve(raw, |text| {
        found = candidates(text).collect();
        selected = select(found.iter().cloned());
        selected.clone()
    });

    PriceReport {
        input: raw.map(str::to_string),
        candidates: found,
        selected,
        output,
        class,
    }
}

fn resolve<F>(raw: Option<&str>, pick: F) -> (String, PriceClass)
where
    F: FnOnce(&str) -> Option<PriceCandidate>,
{
    let Some(raw) = raw else {
        return (MISSING_PRICE.to_string(), PriceClass::MissingInput);
    };
    let text = raw.trim();
    if text.is_empty() {
        return (EMPTY_PRICE.to_string(), PriceClass::EmptyInput);
    }
    if text.eq_ignore_ascii_case(NOT_AVAILABLE) {
        return (NOT_AVAILABLE.to_string(), PriceClass::ExplicitNa);
    }
    if let Some(best) = pick(text) {
        return (best.render(), PriceClass::Tagged);
    }

    match first_fragment(text).and_then(normalize_amount) {
        Some(amount) => {
            debug!("No currency marker in {:?}, using bare amount {}", text, amount);
            (amount, PriceClass::NoCurrencyButNumeric)
        }
        None => {
            debug!("Nothing to normalize in {:?}, passing it through", text);
            (text.to_string(), PriceClass::FullyUnparsable)
        }
    }
}

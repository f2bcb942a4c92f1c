//! Price candidates and the single-pass disambiguator.
//!
//! Every raw match with a parsable amount becomes a [`PriceCandidate`] carrying
//! a priority rank. A smaller rank is a stronger claim:
//!
//! | Marker                         | Rank |
//! |--------------------------------|------|
//! | `€` glyph or `EUR` code        | 2    |
//! | any other glyph                | 3    |
//! | any other ISO code             | 4    |
//!
//! [`select`] folds over the candidates in extraction order and replaces the
//! running best only with a strictly stronger one, so ties keep the first.

use std::ops::Range;

use log::debug;
use serde::Serialize;

use crate::amount::normalize_amount;
use crate::currency::Unit;
use crate::extractor::{self, Marker, Notation, RawMatch};

/// Rank of euro-tagged candidates.
pub const EURO_PRIORITY: u8 = 2;
/// Rank of candidates tagged with any other glyph.
pub const GLYPH_PRIORITY: u8 = 3;
/// Rank of candidates tagged with any other ISO code.
pub const CODE_PRIORITY: u8 = 4;

/// A currency-tagged price with a normalized amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceCandidate {
    /// Rendered currency marker.
    pub unit: Unit,
    /// Canonical decimal amount.
    pub amount: String,
    /// Notation rank; smaller is stronger.
    pub priority: u8,
    /// Notation that produced the candidate.
    pub notation: Notation,
    /// Byte range of the match within the scanned text.
    pub span: Range<usize>,
}

impl PriceCandidate {
    /// Builds a candidate from a raw match, or `None` if its amount is unparsable.
    pub fn from_match(raw: &RawMatch<'_>) -> Option<Self> {
        let Some(amount) = normalize_amount(raw.fragment) else {
            debug!("Discarding {:?} match with unparsable amount {:?}", raw.notation, raw.fragment);
            return None;
        };
        let (unit, priority) = match raw.marker {
            Marker::Glyph(glyph) => (Unit::Glyph(glyph), GLYPH_PRIORITY),
            Marker::Code(currency) => (currency.unit(), CODE_PRIORITY),
        };
        let priority = if unit.is_euro() { EURO_PRIORITY } else { priority };

        Some(PriceCandidate {
            unit,
            amount,
            priority,
            notation: raw.notation,
            span: raw.span.clone(),
        })
    }

    /// Whether this candidate should replace `other` as the running best.
    pub fn outranks(&self, other: &PriceCandidate) -> bool {
        self.priority < other.priority
    }

    /// Display form: `€12.50`, `$9.99`, `CHF 5`.
    pub fn render(&self) -> String {
        self.unit.render(&self.amount)
    }
}

/// All currency-tagged candidates of `text`, in extraction order.
pub fn candidates(text: &str) -> impl Iterator<Item = PriceCandidate> + '_ {
    extractor::extract(text).filter_map(|raw| PriceCandidate::from_match(&raw))
}

/// Picks the strongest candidate; the first one wins among equals.
pub fn select<I>(candidates: I) -> Option<PriceCandidate>
where
    I: IntoIterator<Item = PriceCandidate>,
{
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if !candidate.outranks(&current) => Some(current),
        _ => Some(candidate),
    })
}

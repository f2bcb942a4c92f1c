//! Currency table shared by the extractor and the formatter.
//!
//! `Currency` covers the ISO codes the extractor recognizes. Codes parse from
//! text case-insensitively through `FromStr`, and `Currency::unit` is the fixed
//! code-to-display mapping used when a code-tagged price is rendered.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::PriceError;

/// Currency glyphs recognized by the extractor, in table order.
pub const GLYPHS: [char; 5] = ['€', '$', '£', '¥', '₹'];

/// Length in bytes of every supported ISO code.
pub const CODE_LEN: usize = 3;

/// Returns `true` if `c` is one of the recognized currency glyphs.
pub fn is_glyph(c: char) -> bool {
    GLYPHS.contains(&c)
}

/// Supported ISO-4217 currency codes.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    EUR,
    USD,
    GBP,
    CHF,
    CAD,
    AUD,
    INR,
    JPY,
}

impl Currency {
    /// The three-letter code in upper case.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Display unit for this currency: its glyph, or the code itself when the
    /// currency has no single-glyph symbol of its own.
    pub fn unit(self) -> Unit {
        match self {
            Currency::EUR => Unit::Glyph('€'),
            Currency::USD => Unit::Glyph('$'),
            Currency::GBP => Unit::Glyph('£'),
            Currency::JPY => Unit::Glyph('¥'),
            Currency::INR => Unit::Glyph('₹'),
            Currency::CHF | Currency::CAD | Currency::AUD => Unit::Label(self.code()),
        }
    }

    /// Reads a code from the first three bytes of `text`, if they spell one.
    ///
    /// Only ASCII letters are considered, so the slice never splits a
    /// multi-byte character.
    pub fn from_code_prefix(text: &str) -> Option<Currency> {
        let bytes = text.as_bytes();
        if bytes.len() < CODE_LEN || !bytes[..CODE_LEN].iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        text[..CODE_LEN].parse().ok()
    }

    /// Looks up a user-supplied code, mapping failures into
    /// `PriceError::UnknownCurrency`.
    pub fn lookup(code: &str) -> Result<Currency, PriceError> {
        code.trim()
            .parse()
            .map_err(|_| PriceError::UnknownCurrency(code.trim().to_string()))
    }
}

/// Rendered currency marker of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A single-character symbol such as `€`. Rendered flush against the amount.
    Glyph(char),
    /// A multi-character label such as `CHF`. Rendered with a separating space.
    Label(&'static str),
}

impl Unit {
    /// Whether this unit denotes the euro, the preferred currency.
    pub fn is_euro(self) -> bool {
        self == Currency::EUR.unit()
    }

    /// Renders `amount` with this unit in front of it.
    pub fn render(self, amount: &str) -> String {
        match self {
            Unit::Glyph(glyph) => format!("{glyph}{amount}"),
            Unit::Label(label) => format!("{label} {amount}"),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Glyph(glyph) => write!(f, "{glyph}"),
            Unit::Label(label) => f.write_str(label),
        }
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

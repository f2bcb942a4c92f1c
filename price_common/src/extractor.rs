//! Candidate extraction: a hand-written scanner over the raw price text.
//!
//! [`extract`] returns a [`Matches`] iterator that walks the input left to
//! right and yields every non-overlapping price notation it finds. At each
//! position the four notations are tried in a fixed order (symbol-prefix,
//! symbol-suffix, code-prefix, code-suffix); the first one that fires wins and
//! scanning resumes right after it.
//!
//! The iterator borrows the input and owns nothing but its cursor, so any
//! number of scans can run at once, including over the same string.

use std::ops::Range;

use serde::Serialize;

use crate::currency::{self, CODE_LEN, Currency};

/// Which notation produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// Glyph before the amount, e.g. `€12,50`.
    SymbolPrefix,
    /// Glyph after the amount, e.g. `12.50€`.
    SymbolSuffix,
    /// ISO code before the amount, e.g. `USD 9.99`.
    CodePrefix,
    /// ISO code after the amount, e.g. `9.99 USD`.
    CodeSuffix,
}

/// The currency marker found next to a numeric fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// One of [`currency::GLYPHS`].
    Glyph(char),
    /// A recognized ISO code.
    Code(Currency),
}

/// A raw, not yet normalized price match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// Notation that fired.
    pub notation: Notation,
    /// Currency marker of the match.
    pub marker: Marker,
    /// Numeric fragment exactly as it appears in the input.
    pub fragment: &'a str,
    /// Byte range of the whole match within the input.
    pub span: Range<usize>,
}

/// Iterator over all non-overlapping price matches of a string.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    input: &'a str,
    pos: usize,
}

/// Starts a global left-to-right scan of `input`.
pub fn extract(input: &str) -> Matches<'_> {
    Matches { input, pos: 0 }
}

impl<'a> Iterator for Matches<'a> {
    type Item = RawMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let start = self.pos;
            if let Some(found) = self.match_at(start) {
                self.pos = found.span.end;
                return Some(found);
            }
            self.pos += char_len_at(self.input, start);
        }
        None
    }
}

impl<'a> Matches<'a> {
    fn match_at(&self, start: usize) -> Option<RawMatch<'a>> {
        self.symbol_prefix(start)
            .or_else(|| self.symbol_suffix(start))
            .or_else(|| self.code_prefix(start))
            .or_else(|| self.code_suffix(start))
    }

    fn symbol_prefix(&self, start: usize) -> Option<RawMatch<'a>> {
        let glyph = self.input[start..].chars().next().filter(|c| currency::is_glyph(*c))?;
        let digits = skip_whitespace(self.input, start + glyph.len_utf8());
        let end = fragment_end(self.input, digits)?;
        Some(self.raw(Notation::SymbolPrefix, Marker::Glyph(glyph), digits..end, start..end))
    }

    fn symbol_suffix(&self, start: usize) -> Option<RawMatch<'a>> {
        let digits_end = fragment_end(self.input, start)?;
        let at = skip_whitespace(self.input, digits_end);
        let glyph = self.input[at..].chars().next().filter(|c| currency::is_glyph(*c))?;
        let end = at + glyph.len_utf8();
        Some(self.raw(Notation::SymbolSuffix, Marker::Glyph(glyph), start..digits_end, start..end))
    }

    fn code_prefix(&self, start: usize) -> Option<RawMatch<'a>> {
        if ends_with_letter(&self.input[..start]) {
            return None;
        }
        let code = Currency::from_code_prefix(&self.input[start..])?;
        let digits = skip_whitespace(self.input, start + CODE_LEN);
        let end = fragment_end(self.input, digits)?;
        Some(self.raw(Notation::CodePrefix, Marker::Code(code), digits..end, start..end))
    }

    fn code_suffix(&self, start: usize) -> Option<RawMatch<'a>> {
        let digits_end = fragment_end(self.input, start)?;
        let at = skip_whitespace(self.input, digits_end);
        let code = Currency::from_code_prefix(&self.input[at..])?;
        let end = at + CODE_LEN;
        if starts_with_letter(&self.input[end..]) {
            return None;
        }
        Some(self.raw(Notation::CodeSuffix, Marker::Code(code), start..digits_end, start..end))
    }

    fn raw(
        &self,
        notation: Notation,
        marker: Marker,
        fragment: Range<usize>,
        span: Range<usize>,
    ) -> RawMatch<'a> {
        RawMatch {
            notation,
            marker,
            fragment: &self.input[fragment],
            span,
        }
    }
}

/// Returns the first bare numeric fragment of `input`, ignoring currency markers.
pub fn first_fragment(input: &str) -> Option<&str> {
    input
        .char_indices()
        .find_map(|(start, _)| fragment_end(input, start).map(|end| &input[start..end]))
}

/// End of the numeric fragment starting at `start`: a run of digits, `.` and
/// `,` that begins with a digit, or with a single separator directly followed
/// by a digit (`.99`, `,50`).
fn fragment_end(input: &str, start: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let opens = match bytes.get(start) {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'.' | b',') => bytes.get(start + 1).is_some_and(u8::is_ascii_digit),
        _ => false,
    };
    if !opens {
        return None;
    }
    let len = bytes[start..]
        .iter()
        .take_while(|b| is_fragment_byte(**b))
        .count();
    Some(start + len)
}

fn is_fragment_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.' || b == b','
}

fn skip_whitespace(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(input.len(), |(offset, _)| from + offset)
}

fn char_len_at(input: &str, at: usize) -> usize {
    input[at..].chars().next().map_or(1, char::len_utf8)
}

fn ends_with_letter(text: &str) -> bool {
    text.chars().next_back().is_some_and(|c| c.is_ascii_alphabetic())
}

fn starts_with_letter(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(input: &str) -> Vec<(Notation, &str)> {
        extract(input).map(|m| (m.notation, m.fragment)).collect()
    }

    #[test]
    fn recognizes_all_four_notations() {
        assert_eq!(summary("€12,50"), vec![(Notation::SymbolPrefix, "12,50")]);
        assert_eq!(summary("12.50€"), vec![(Notation::SymbolSuffix, "12.50")]);
        assert_eq!(summary("USD 9.99"), vec![(Notation::CodePrefix, "9.99")]);
        assert_eq!(summary("9.99 USD"), vec![(Notation::CodeSuffix, "9.99")]);
    }

    #[test]
    fn whitespace_between_marker_and_amount_is_optional() {
        assert_eq!(summary("£ 4"), vec![(Notation::SymbolPrefix, "4")]);
        assert_eq!(summary("4\t£"), vec![(Notation::SymbolSuffix, "4")]);
        assert_eq!(summary("chf7"), vec![(Notation::CodePrefix, "7")]);
        assert_eq!(summary("7jpy"), vec![(Notation::CodeSuffix, "7")]);
    }

    #[test]
    fn scan_is_global_and_non_overlapping() {
        let found: Vec<_> = extract("USD 5 and EUR 5, or 6€").collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].marker, Marker::Code(Currency::USD));
        assert_eq!(found[1].marker, Marker::Code(Currency::EUR));
        assert_eq!(found[2].marker, Marker::Glyph('€'));
        assert!(found.windows(2).all(|w| w[0].span.end <= w[1].span.start));
    }

    #[test]
    fn prefix_notation_wins_over_suffix_at_same_position() {
        // The glyph claims "5" before the trailing "5 USD" can be considered.
        assert_eq!(summary("$5 USD"), vec![(Notation::SymbolPrefix, "5")]);
    }

    #[test]
    fn fragment_is_greedy_over_separators() {
        assert_eq!(summary("€1.234.567,89"), vec![(Notation::SymbolPrefix, "1.234.567,89")]);
        assert_eq!(summary("€5, drinks"), vec![(Notation::SymbolPrefix, "5,")]);
    }

    #[test]
    fn codes_inside_words_are_ignored() {
        assert!(summary("EURO 5").is_empty());
        assert!(summary("5 EUROS").is_empty());
        assert!(summary("seur 5").is_empty());
        assert_eq!(summary("(EUR 5)"), vec![(Notation::CodePrefix, "5")]);
    }

    #[test]
    fn spans_cover_the_whole_match() {
        let input = "Menu: 12,50 € incl.";
        let found = extract(input).next().unwrap();
        assert_eq!(&input[found.span.clone()], "12,50 €");
    }

    #[test]
    fn markers_without_amounts_produce_nothing() {
        assert!(summary("€ --").is_empty());
        assert!(summary("USD").is_empty());
        assert!(summary("€.").is_empty());
        assert!(summary("$, 5").is_empty());
    }

    #[test]
    fn fragment_may_open_with_a_separator() {
        assert_eq!(summary("$.99"), vec![(Notation::SymbolPrefix, ".99")]);
        assert_eq!(summary("€,50"), vec![(Notation::SymbolPrefix, ",50")]);
        assert_eq!(summary(".75 USD"), vec![(Notation::CodeSuffix, ".75")]);
        assert_eq!(summary("only ,5€"), vec![(Notation::SymbolSuffix, ",5")]);
    }

    #[test]
    fn first_fragment_ignores_currency() {
        assert_eq!(first_fragment("about 12,5 or so"), Some("12,5"));
        assert_eq!(first_fragment("ask server"), None);
        assert_eq!(first_fragment("about .75 each"), Some(".75"));
        assert_eq!(first_fragment("no. 5"), Some("5"));
    }

    #[test]
    fn scanning_is_reentrant() {
        let input = "€1 $2";
        let mut a = extract(input);
        let mut b = extract(input);
        assert_eq!(a.next().unwrap().fragment, "1");
        assert_eq!(b.next().unwrap().fragment, "1");
        assert_eq!(a.next().unwrap().fragment, "2");
    }
}

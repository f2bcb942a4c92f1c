//! Reading raw prices from text sources.

use std::io::BufRead;

use price_common::PriceError;

/// One raw price read from a text source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLine {
    /// 1-based line number in the source.
    pub line: usize,
    /// The line with surrounding whitespace removed.
    pub raw: String,
}

/// Trait providing line-based parsing of raw prices.
pub trait PriceLineParser {
    /// Parses raw prices from a buffered reader.
    ///
    /// Each non-empty line is one raw price. Line numbers are kept so results
    /// can be traced back to the source.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<PriceLine>, PriceError>;
}

impl PriceLineParser for PriceLine {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, PriceError> {
        let mut prices = Vec::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(PriceError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }
            prices.push(PriceLine {
                line: index + 1,
                raw: trimmed_line.to_string(),
            });
        }
        Ok(prices)
    }
}

//!
//! Price normalization engine shared by every menu client.
//!
//! Turns an arbitrary, possibly malformed price string into one canonical
//! display token such as `€12.50`, `$9.99` or `CHF 5`.
//!
//! This crate aggregates:
//! - `currency` — supported ISO codes, glyphs and the code-to-unit table.
//! - `extractor` — global scan for symbol/code prefixed and suffixed prices.
//! - `amount` — locale-agnostic normalization of numeric fragments.
//! - `candidate` — candidate ranking and selection.
//! - `format` — display rendering and the fallback chain.
//! - `menu` — cleaning of backend menu payloads.
//! - `error` — unified error type `PriceError` used across the workspace.
//! - `result` — handy `Result<T, PriceError>` alias.
#![warn(missing_docs)]
pub mod amount;
pub mod candidate;
pub mod currency;
pub mod error;
pub mod extractor;
pub mod format;
pub mod menu;
pub mod result;

pub use amount::normalize_amount;
pub use candidate::{PriceCandidate, select};
pub use currency::{Currency, Unit};
pub use error::PriceError;
pub use extractor::extract;
pub use format::{PriceClass, PriceReport, explain_price, normalize_price, normalize_price_str};
pub use menu::{MenuCard, MenuItem, parse_menu, render_menu};
pub use result::Result;

//! Error types shared by the library and the command-line front end.
//!
//! The normalization core itself never fails: every input maps to some display
//! string. `PriceError` covers the surfaces around it that can fail, such as
//! reading price files, decoding menu payloads, or looking up a currency code.
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum PriceError {
    /// I/O error originating from the standard library (files, stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// UTF-8 conversion error when handling text content.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The backend menu payload decoded fine but carried no usable items.
    #[error("Menu extraction error: {0}")]
    MenuExtraction(String),

    /// A currency code outside the supported table was requested.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

//! Price CLI: a command-line front end for the price normalization engine.
//! It normalizes prices given as arguments or read from a text file, renders
//! backend menu payloads into display cards, and explains how a single price
//! was resolved.
//!
//! Usage example (CLI):
//! ```bash
//! price_cli normalize "12,50 €" "USD 9.99"
//! price_cli file --path ./prices.txt
//! price_cli menu --path ./menu.json --pretty
//! price_cli explain "mentioned USD 5 and EUR 5"
//! price_cli currencies --code chf
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); results go to stdout.
#![warn(missing_docs)]
mod args;
mod reader;

use crate::args::{Args, Command};
use crate::reader::{PriceLine, PriceLineParser};
use clap::Parser;
use log::{debug, error, info};
use price_common::{Currency, PriceError, Result};
use price_common::{explain_price, normalize_price_str, render_menu};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

fn main() -> Result<(), PriceError> {
    init_logger();
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = match args.command {
        Command::Normalize { prices } => normalize_args(&prices, &mut out),
        Command::File { path } => normalize_file(&normalize_path(&path), &mut out),
        Command::Menu { path, pretty } => render_menu_file(&normalize_path(&path), pretty, &mut out),
        Command::Explain { price, pretty } => explain(price.as_deref(), pretty, &mut out),
        Command::Currencies { code } => print_currencies(code.as_deref(), &mut out),
    };

    if let Err(e) = &outcome {
        error!("{}", e);
    }
    outcome
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn normalize_args<W: Write>(prices: &[String], out: &mut W) -> Result<()> {
    for raw in prices {
        writeln!(out, "{}", normalize_price_str(raw))?;
    }
    Ok(())
}

fn normalize_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    ensure_file(path)?;
    let file = File::open(path)?;
    let prices = PriceLine::parse_from_file(BufReader::new(file))?;
    info!("Read {} prices from {}", prices.len(), path.display());

    for price in &prices {
        let normalized = normalize_price_str(&price.raw);
        debug!("line {}: {:?} -> {:?}", price.line, price.raw, normalized);
        writeln!(out, "{} -> {}", price.raw, normalized)?;
    }
    Ok(())
}

fn render_menu_file<W: Write>(path: &Path, pretty: bool, out: &mut W) -> Result<()> {
    ensure_file(path)?;
    let json = String::from_utf8(fs::read(path)?)?;
    let cards = render_menu(&json)?;
    info!("Rendered {} menu cards from {}", cards.len(), path.display());
    write_json(&cards, pretty, out)
}

fn explain<W: Write>(price: Option<&str>, pretty: bool, out: &mut W) -> Result<()> {
    write_json(&explain_price(price), pretty, out)
}

fn print_currencies<W: Write>(code: Option<&str>, out: &mut W) -> Result<()> {
    let wanted = code.map(Currency::lookup).transpose()?;
    for currency in Currency::iter().filter(|c| wanted.is_none_or(|w| w == *c)) {
        writeln!(out, "{}\t{}", currency.code(), currency.unit())?;
    }
    Ok(())
}

fn write_json<T: Serialize, W: Write>(value: &T, pretty: bool, out: &mut W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Fails with a readable message unless `path` is an existing regular file.
fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PriceError::Format(format!("Not a file: {}", path.display())))
    }
}

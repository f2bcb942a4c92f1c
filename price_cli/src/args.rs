//! Command-line arguments for the price tool.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize each price given on the command line, one result per line.
    Normalize {
        /// Raw price strings, e.g. "12,50 €" or "USD 9.99".
        #[clap(required = true)]
        prices: Vec<String>,
    },

    /// Normalize every line of a text file.
    File {
        /// Path to a text file with one raw price per line.
        /// Blank lines are skipped.
        #[clap(long)]
        path: String,
    },

    /// Clean a backend menu payload and print the rendered cards as JSON.
    Menu {
        /// Path to a JSON file shaped like {"items": [{"name", "price", "description"}]}.
        #[clap(long)]
        path: String,

        /// Pretty-print the JSON output.
        #[clap(long)]
        pretty: bool,
    },

    /// Show every candidate found in a price and which one was chosen.
    Explain {
        /// Raw price string. Omit it to see how a missing price is handled.
        price: Option<String>,

        /// Pretty-print the JSON output.
        #[clap(long)]
        pretty: bool,
    },

    /// Print the currency table.
    Currencies {
        /// Only show this currency. Codes are matched case-insensitively.
        #[clap(long)]
        code: Option<String>,
    },
}

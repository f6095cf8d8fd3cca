//! Command-line arguments for the ticker card demo.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Provider API key. Falls back to the TICKER_API_KEY environment variable.
    #[clap(long)]
    pub api_key: Option<String>,

    /// Optional override for the logo URL.
    #[clap(long)]
    pub logo: Option<String>,

    /// Font size adjustment in percent (advisory range -50..=100).
    #[clap(long, default_value_t = 0)]
    pub font_adjust: i32,

    /// Container width in pixels, used to pick the responsive size tier.
    #[clap(long, default_value_t = 400.0)]
    pub width: f64,

    /// Print the card as HTML markup instead of plain text.
    #[clap(long, default_value_t = false)]
    pub html: bool,
}

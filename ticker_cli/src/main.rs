//! Ticker Card — a CLI host for the stock-ticker widget. It mounts the
//! widget, performs the single quote fetch, and prints the rendered card to
//! stdout, either as a plain-text summary or as HTML markup.
//!
//! Usage example (CLI):
//! ```bash
//! ticker_cli --api-key KEY --width 320 --font-adjust 10
//! TICKER_API_KEY=KEY ticker_cli --html
//! ```
//!
//! A failed fetch is a rendered state, not a process error: the card shows
//! the fixed error text and the process still exits with 0. The technical
//! failure detail appears in the log at error level.
#![warn(missing_docs)]
mod args;

use std::time::Duration;

use clap::Parser;
use log::{error, info};

use ticker_common::provider::API_KEY_ENV;
use ticker_common::{ProviderConfig, QuoteError, WidgetOptions};
use ticker_widget::{ContentBlock, HttpQuoteSource, RenderModel, TickerWidget, render_html};

use crate::args::Args;

/// How long the CLI waits for the one-shot fetch to settle.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(20);

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let provider = match args
        .api_key
        .clone()
        .map(ProviderConfig::new)
        .or_else(ProviderConfig::from_env)
    {
        Some(provider) => provider,
        None => {
            error!(
                "No API key supplied; pass --api-key or set {}",
                API_KEY_ENV
            );
            std::process::exit(2);
        }
    };

    let options = WidgetOptions {
        logo: args.logo.clone(),
        fontsizeadjustment: args.font_adjust,
    };

    let mut widget = TickerWidget::new(options);
    widget.mount(HttpQuoteSource::new(provider)?);
    info!("Widget mounted; waiting for the quote fetch to settle");

    if !widget.wait_settled(SETTLE_TIMEOUT) {
        error!("Quote fetch did not settle; rendering the loading state");
    }

    let model = widget.render(args.width);
    if args.html {
        print!("{}", render_html(&model));
    } else {
        print_card(&model);
    }

    Ok(())
}

/// Print a plain-text summary of the rendered card.
fn print_card(model: &RenderModel) {
    println!("{} — {}", model.symbol, model.company_name);
    println!(
        "logo: {} ({}px, {} tier)",
        model.logo_url, model.logo_px, model.tier
    );
    match &model.content {
        ContentBlock::Price {
            price_text,
            change_text,
        } => {
            println!("{} {}", price_text, change_text);
            println!("sentiment: {}", model.sentiment);
        }
        ContentBlock::Loading { text } => println!("{}", text),
        ContentBlock::Error { text } => println!("{}", text),
    }
    println!("classes: {}", model.container_classes.join(" "));
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

//! Pure computation of the values to render.
//!
//! `render_model` is a function of `(QuoteState, WidgetOptions, width)` with
//! no hidden inputs, so re-evaluating it with the same arguments yields an
//! identical model. The hosting layer re-runs it whenever the fetch settles
//! or the container is resized.
use ticker_common::WidgetOptions;
use ticker_common::provider::{COMPANY_NAME, SYMBOL};

use crate::layout::{FontScale, FontSizes, SizeTier};
use crate::sentiment::Sentiment;
use crate::state::{LOADING_TEXT, QuoteState};

/// Base style class of the container region.
pub const CONTAINER_CLASS: &str = "stock-ticker";
/// Container modifier present while the loading placeholder is shown.
pub const LOADING_CLASS: &str = "is-loading";
/// Container modifier present while the error text is shown.
pub const ERROR_CLASS: &str = "is-error";

/// Content branch of the card; exactly one is rendered at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Loading placeholder.
    Loading {
        /// Placeholder text.
        text: &'static str,
    },
    /// Fixed user-facing error text.
    Error {
        /// Error text as carried by the failed state.
        text: String,
    },
    /// Price block shown once the quote is loaded.
    Price {
        /// Formatted price, e.g. `$123.45`.
        price_text: String,
        /// Formatted change, e.g. `▼1.20 (-0.96%)`.
        change_text: String,
    },
}

/// Everything the hosting layer needs to draw the card.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    /// Container classes: base, tier modifier, sentiment, loading/error flags.
    pub container_classes: Vec<&'static str>,
    /// Selected responsive size tier.
    pub tier: SizeTier,
    /// Resolved logo source (override or fallback), used verbatim.
    pub logo_url: String,
    /// Pixel size of the square logo container.
    pub logo_px: u32,
    /// Ticker symbol label.
    pub symbol: &'static str,
    /// Company-name label.
    pub company_name: &'static str,
    /// Sentiment of the day change; defined in every state.
    pub sentiment: Sentiment,
    /// Effective font sizes in em.
    pub fonts: FontSizes,
    /// The single visible content branch.
    pub content: ContentBlock,
}

/// Compute the render model for the given state, options, and width.
pub fn render_model(state: &QuoteState, options: &WidgetOptions, width: f64) -> RenderModel {
    let tier = SizeTier::from_width(width);
    let sentiment = Sentiment::from_change(state.change_or_zero());
    let fonts = FontScale::new(options.fontsizeadjustment).sizes();

    let mut container_classes = vec![CONTAINER_CLASS];
    if let Some(modifier) = tier.modifier_class() {
        container_classes.push(modifier);
    }
    container_classes.push(sentiment.css_class());
    if state.is_loading() {
        container_classes.push(LOADING_CLASS);
    }
    if state.is_failed() {
        container_classes.push(ERROR_CLASS);
    }

    // Strict precedence: loading, then failed, then the loaded price block.
    let content = if state.is_loading() {
        ContentBlock::Loading { text: LOADING_TEXT }
    } else if let QuoteState::Failed { message } = state {
        ContentBlock::Error {
            text: message.clone(),
        }
    } else if let Some(quote) = state.quote() {
        ContentBlock::Price {
            price_text: format_price(quote.price),
            change_text: format_change(quote.change, quote.percent_change, sentiment),
        }
    } else {
        // Unreachable with the state machine as defined; fall back to the
        // loading placeholder rather than rendering an empty block.
        ContentBlock::Loading { text: LOADING_TEXT }
    };

    RenderModel {
        container_classes,
        tier,
        logo_url: options.logo_url().to_string(),
        logo_px: tier.logo_px(),
        symbol: SYMBOL,
        company_name: COMPANY_NAME,
        sentiment,
        fonts,
        content,
    }
}

/// Price with a currency prefix and exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Change magnitude plus percent change. The sign of the change is conveyed
/// by the arrow alone; the percent carries an explicit `+` when up.
pub fn format_change(change: f64, percent_change: f64, sentiment: Sentiment) -> String {
    format!(
        "{}{:.2} ({}{:.2}%)",
        sentiment.arrow(),
        change.abs(),
        sentiment.percent_sign(),
        percent_change
    )
}

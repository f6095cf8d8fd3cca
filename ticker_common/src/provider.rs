//! Fixed quote-provider constants and request URL construction.
//!
//! The widget tracks a single company on a fixed feed, so the endpoint,
//! exchange, and symbol are compile-time constants. The API key is the one
//! value deliberately *not* embedded here: it is injected through
//! [`ProviderConfig`] by the hosting environment.

/// Quote feed endpoint (HTTP GET).
pub const QUOTE_ENDPOINT: &str =
    "https://deere2017ir.q4web.com/feed/StockQuote.svc/GetStockQuoteList";

/// Exchange identifier sent with every request.
pub const EXCHANGE: &str = "NYSE";

/// Ticker symbol of the tracked company.
pub const SYMBOL: &str = "DE";

/// Display name of the tracked company.
pub const COMPANY_NAME: &str = "Deere & Company";

/// Number of quote records requested from the feed.
pub const PAGE_SIZE: u32 = 1;

/// Logo shown when no override is configured.
pub const LOGO_FALLBACK_URL: &str =
    "https://jdonline.staffbase.com/api/media/secure/external/v2/image/upload/680a642ac83d6e736cfc366c.png";

/// Environment variable consulted by [`ProviderConfig::from_env`].
pub const API_KEY_ENV: &str = "TICKER_API_KEY";

/// Provider access configuration. Holds the injected API key.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    api_key: String,
}

impl ProviderConfig {
    /// Create a configuration from an explicitly supplied API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        ProviderConfig {
            api_key: api_key.into(),
        }
    }

    /// Read the API key from the `TICKER_API_KEY` environment variable.
    /// Returns `None` when the variable is unset or empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(ProviderConfig::new)
    }

    /// Build the full quote request URL, query parameters in feed order.
    pub fn quote_url(&self) -> String {
        format!(
            "{}?apiKey={}&exchange={}&symbol={}&pageSize={}",
            QUOTE_ENDPOINT, self.api_key, EXCHANGE, SYMBOL, PAGE_SIZE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_url_keeps_feed_parameter_order() {
        let config = ProviderConfig::new("SECRET");
        assert_eq!(
            config.quote_url(),
            "https://deere2017ir.q4web.com/feed/StockQuote.svc/GetStockQuoteList\
             ?apiKey=SECRET&exchange=NYSE&symbol=DE&pageSize=1"
        );
    }
}

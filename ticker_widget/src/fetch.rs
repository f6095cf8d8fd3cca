//! One-shot quote fetching.
//!
//! `QuoteSource` is the capability interface of the network collaborator, so
//! tests can substitute fakes without standing up a host environment.
//! `HttpQuoteSource` is the real implementation: a single blocking GET
//! against the fixed provider endpoint, executed on a background thread by
//! `spawn_fetch`. Every failure kind collapses to the same outcome for the
//! widget; the distinguishing detail is written to the diagnostic log only.
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, bounded};
use log::{debug, error, info};
use reqwest::blocking::Client;

use ticker_common::quote::QuoteFeedResponse;
use ticker_common::result::Result;
use ticker_common::{ProviderConfig, Quote, QuoteError};

use crate::state::FetchOutcome;

/// Timeout of the single HTTP attempt. Transport-level only; the widget
/// itself applies no retry and no polling.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Capability interface of the network collaborator.
pub trait QuoteSource: Send + 'static {
    /// Fetch the current quote. Called exactly once per widget lifetime.
    fn fetch_quote(&self) -> Result<Quote>;
}

/// Quote source backed by a blocking HTTP client.
pub struct HttpQuoteSource {
    config: ProviderConfig,
    client: Client,
}

impl HttpQuoteSource {
    /// Build a source for the given provider configuration.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(HttpQuoteSource { config, client })
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch_quote(&self) -> Result<Quote> {
        let response = self.client.get(self.config.quote_url()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Http(status.as_u16()));
        }
        let body = response.text()?;
        let feed: QuoteFeedResponse = serde_json::from_str(&body)?;
        feed.into_first_record()?.into_quote()
    }
}

/// Spawn the one-shot fetch thread and return the outcome channel.
///
/// On failure the error detail is logged for operators; only the collapsed
/// [`FetchOutcome`] travels to the widget. If the widget was torn down before
/// the fetch settled, the outcome is discarded instead of being applied to a
/// stale render.
pub fn spawn_fetch(source: impl QuoteSource) -> Receiver<FetchOutcome> {
    let (tx, rx) = bounded::<FetchOutcome>(1);
    thread::spawn(move || {
        let outcome = source.fetch_quote();
        match &outcome {
            Ok(quote) => info!(
                "Quote fetch settled: price={:.2} change={:.2}",
                quote.price, quote.change
            ),
            Err(e) => error!("Quote fetch failed: {}", e),
        }
        if tx.send(outcome).is_err() {
            debug!("Widget torn down before the fetch settled; outcome discarded");
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource(Quote);

    impl QuoteSource for FixedSource {
        fn fetch_quote(&self) -> Result<Quote> {
            Ok(self.0)
        }
    }

    struct FailingSource;

    impl QuoteSource for FailingSource {
        fn fetch_quote(&self) -> Result<Quote> {
            Err(QuoteError::Http(500))
        }
    }

    struct CountingSource(Arc<AtomicUsize>);

    impl QuoteSource for CountingSource {
        fn fetch_quote(&self) -> Result<Quote> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Quote {
                price: 1.0,
                change: 0.0,
                percent_change: 0.0,
            })
        }
    }

    #[test]
    fn delivers_the_success_outcome() {
        let quote = Quote {
            price: 123.45,
            change: -1.20,
            percent_change: -0.96,
        };
        let rx = spawn_fetch(FixedSource(quote));
        let outcome = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(outcome.unwrap(), quote);
    }

    #[test]
    fn delivers_the_failure_outcome() {
        let rx = spawn_fetch(FailingSource);
        let outcome = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(outcome.unwrap_err(), QuoteError::Http(500)));
    }

    #[test]
    fn source_is_invoked_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rx = spawn_fetch(CountingSource(Arc::clone(&calls)));
        rx.recv_timeout(Duration::from_secs(1)).unwrap().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_receiver_discards_the_outcome() {
        let rx = spawn_fetch(FixedSource(Quote {
            price: 1.0,
            change: 0.0,
            percent_change: 0.0,
        }));
        drop(rx);
        // The send fails quietly on the fetch thread; give it time to run.
        thread::sleep(Duration::from_millis(50));
    }
}

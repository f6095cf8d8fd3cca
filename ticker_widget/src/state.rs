//! Quote state machine of the widget.
//!
//! `QuoteState` is the single mutable entity of the system. It is created as
//! `Idle` at mount, driven to `Loading` exactly once, and finalized by the
//! fetch outcome. Payload-per-variant encodes the data-xor-error invariant by
//! construction: a loaded quote and a failure message can never coexist.
use log::warn;

use ticker_common::Quote;

/// Text rendered while the fetch is in flight.
pub const LOADING_TEXT: &str = "Loading…";

/// Fixed user-facing text rendered when the fetch failed. The technical
/// detail never reaches this string; it goes to the diagnostic log only.
pub const FAILED_TEXT: &str = "Couldn’t load quote";

/// Outcome of the one-shot fetch, as delivered by the fetch thread.
pub type FetchOutcome = ticker_common::Result<Quote>;

/// Tri-state (plus initial) result of the quote fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteState {
    /// Created at mount, before the fetch is triggered.
    Idle,
    /// The one-shot fetch is in flight.
    Loading,
    /// The fetch settled successfully.
    Loaded(Quote),
    /// The fetch settled with a failure.
    Failed {
        /// Fixed user-facing message, never the technical detail.
        message: String,
    },
}

impl QuoteState {
    /// Enter `Loading`. Valid only from `Idle`; any other transition is
    /// ignored with a warning so a stray trigger cannot restart the fetch.
    /// Returns `true` when the transition happened.
    pub fn begin_loading(&mut self) -> bool {
        match self {
            QuoteState::Idle => {
                *self = QuoteState::Loading;
                true
            }
            other => {
                warn!("Ignoring begin_loading in state {:?}", other);
                false
            }
        }
    }

    /// Apply the fetch outcome. Valid only from `Loading`; an outcome
    /// arriving in any other state is discarded with a warning.
    /// Returns `true` when the transition happened.
    pub fn settle(&mut self, outcome: FetchOutcome) -> bool {
        if !matches!(self, QuoteState::Loading) {
            warn!("Ignoring fetch outcome in state {:?}", self);
            return false;
        }
        *self = match outcome {
            Ok(quote) => QuoteState::Loaded(quote),
            Err(_) => QuoteState::Failed {
                message: FAILED_TEXT.to_string(),
            },
        };
        true
    }

    /// `true` while the loading placeholder should be visible.
    pub fn is_loading(&self) -> bool {
        matches!(self, QuoteState::Idle | QuoteState::Loading)
    }

    /// `true` when the error branch should be visible.
    pub fn is_failed(&self) -> bool {
        matches!(self, QuoteState::Failed { .. })
    }

    /// Loaded quote, if the fetch settled successfully.
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            QuoteState::Loaded(quote) => Some(quote),
            _ => None,
        }
    }

    /// Day change used for sentiment. Defaults to `0.0` while not loaded, so
    /// the sentiment modifier is defined in every state.
    pub fn change_or_zero(&self) -> f64 {
        self.quote().map(|q| q.change).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticker_common::QuoteError;

    fn sample_quote() -> Quote {
        Quote {
            price: 123.45,
            change: -1.20,
            percent_change: -0.96,
        }
    }

    #[test]
    fn lifecycle_idle_loading_loaded() {
        let mut state = QuoteState::Idle;
        assert!(state.is_loading());
        assert!(state.begin_loading());
        assert_eq!(state, QuoteState::Loading);
        assert!(state.settle(Ok(sample_quote())));
        assert_eq!(state.quote(), Some(&sample_quote()));
        assert!(!state.is_loading());
        assert!(!state.is_failed());
    }

    #[test]
    fn failure_carries_only_the_fixed_message() {
        let mut state = QuoteState::Loading;
        assert!(state.settle(Err(QuoteError::Http(500))));
        assert_eq!(
            state,
            QuoteState::Failed {
                message: FAILED_TEXT.to_string()
            }
        );
    }

    #[test]
    fn loading_is_entered_at_most_once() {
        let mut state = QuoteState::Idle;
        assert!(state.begin_loading());
        assert!(!state.begin_loading());
        state.settle(Ok(sample_quote()));
        assert!(!state.begin_loading());
        assert_eq!(state.quote(), Some(&sample_quote()));
    }

    #[test]
    fn stray_outcomes_are_discarded() {
        let mut state = QuoteState::Idle;
        assert!(!state.settle(Ok(sample_quote())));
        assert_eq!(state, QuoteState::Idle);

        let mut loaded = QuoteState::Loaded(sample_quote());
        assert!(!loaded.settle(Err(QuoteError::EmptyResponse)));
        assert_eq!(loaded, QuoteState::Loaded(sample_quote()));
    }

    #[test]
    fn change_defaults_to_zero_while_unsettled() {
        assert_eq!(QuoteState::Idle.change_or_zero(), 0.0);
        assert_eq!(QuoteState::Loading.change_or_zero(), 0.0);
        let failed = QuoteState::Failed {
            message: FAILED_TEXT.to_string(),
        };
        assert_eq!(failed.change_or_zero(), 0.0);
        assert_eq!(
            QuoteState::Loaded(sample_quote()).change_or_zero(),
            -1.20
        );
    }
}

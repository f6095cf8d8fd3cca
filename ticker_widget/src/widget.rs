//! The ticker widget: one-shot fetch lifecycle plus rendering.
//!
//! `TickerWidget` owns the quote state machine. Mounting triggers the single
//! fetch of the widget's lifetime; the fetch outcome is picked up with
//! `poll` (non-blocking, for event-driven hosts) or `wait_settled` (for the
//! CLI). Container resizes only affect `render` and never the fetch path.
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::warn;

use ticker_common::WidgetOptions;

use crate::fetch::{QuoteSource, spawn_fetch};
use crate::render::{RenderModel, render_model};
use crate::state::{FetchOutcome, QuoteState};

/// A mounted stock-ticker card.
pub struct TickerWidget {
    options: WidgetOptions,
    state: QuoteState,
    outcome_rx: Option<Receiver<FetchOutcome>>,
}

impl TickerWidget {
    /// Create an unmounted widget in the `Idle` state.
    pub fn new(options: WidgetOptions) -> Self {
        TickerWidget {
            options,
            state: QuoteState::Idle,
            outcome_rx: None,
        }
    }

    /// Trigger the one-shot fetch through the given source.
    /// A repeated call is a logged no-op; the fetch fires exactly once.
    pub fn mount(&mut self, source: impl QuoteSource) {
        if !self.state.begin_loading() {
            return;
        }
        self.outcome_rx = Some(spawn_fetch(source));
    }

    /// Apply a settled fetch outcome if one has arrived. Non-blocking.
    /// Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.outcome_rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.outcome_rx = None;
                self.state.settle(outcome)
            }
            Err(_) => false,
        }
    }

    /// Block until the fetch settles or `timeout` elapses, then apply the
    /// outcome. Returns `true` when the state changed.
    pub fn wait_settled(&mut self, timeout: Duration) -> bool {
        let Some(rx) = &self.outcome_rx else {
            return false;
        };
        match rx.recv_timeout(timeout) {
            Ok(outcome) => {
                self.outcome_rx = None;
                self.state.settle(outcome)
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!("Quote fetch did not settle within {:?}", timeout);
                false
            }
            Err(RecvTimeoutError::Disconnected) => {
                self.outcome_rx = None;
                false
            }
        }
    }

    /// Current quote state, read-only.
    pub fn state(&self) -> &QuoteState {
        &self.state
    }

    /// Compute the render model for the current container width.
    pub fn render(&self, width: f64) -> RenderModel {
        render_model(&self.state, &self.options, width)
    }
}

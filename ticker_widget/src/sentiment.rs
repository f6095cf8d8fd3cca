//! Up/down classification of the day's price change.
//!
//! Sentiment drives the arrow glyph, the text color choice on the host side,
//! and the `is-up` / `is-down` container class. A change of exactly zero
//! counts as up.
use strum_macros::Display;

/// Direction of the day's price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    /// Non-negative change (zero inclusive).
    Up,
    /// Negative change.
    Down,
}

impl Sentiment {
    /// Classify a change value; `0.0` falls on the up side.
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Sentiment::Up
        } else {
            Sentiment::Down
        }
    }

    /// Arrow glyph conveying the direction.
    pub fn arrow(self) -> &'static str {
        match self {
            Sentiment::Up => "▲",
            Sentiment::Down => "▼",
        }
    }

    /// Style-class modifier for the container.
    pub fn css_class(self) -> &'static str {
        match self {
            Sentiment::Up => "is-up",
            Sentiment::Down => "is-down",
        }
    }

    /// Sign prefix placed before the percent change; the minus sign of a
    /// negative percentage comes from the number itself.
    pub fn percent_sign(self) -> &'static str {
        match self {
            Sentiment::Up => "+",
            Sentiment::Down => "",
        }
    }
}

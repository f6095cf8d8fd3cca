//! Provider wire types and the domain `Quote`.
//!
//! The quote feed answers with an object whose `GetStockQuoteListResult` field
//! holds an array of records. Field names are provider-specific and must be
//! preserved verbatim for compatibility. Numeric fields arrive as either JSON
//! numbers or numeric strings, so decoding coerces both forms.
use serde::Deserialize;

use crate::error::QuoteError;
use crate::result::Result;

/// Top-level response object of the quote feed.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteFeedResponse {
    /// Result array; an absent field decodes as an empty list.
    #[serde(rename = "GetStockQuoteListResult", default)]
    pub results: Vec<QuoteRecord>,
}

impl QuoteFeedResponse {
    /// Take the first record of the result array, or fail with
    /// [`QuoteError::EmptyResponse`] when the array is missing or empty.
    pub fn into_first_record(self) -> Result<QuoteRecord> {
        self.results
            .into_iter()
            .next()
            .ok_or(QuoteError::EmptyResponse)
    }
}

/// One quote record as sent by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    /// Last trade price.
    #[serde(rename = "TradePrice")]
    pub trade_price: RawNumber,
    /// Signed day change.
    #[serde(rename = "Change")]
    pub change: RawNumber,
    /// Signed day change in percent.
    #[serde(rename = "PercChange")]
    pub percent_change: RawNumber,
}

impl QuoteRecord {
    /// Convert the record into a domain [`Quote`], coercing each field to `f64`.
    pub fn into_quote(self) -> Result<Quote> {
        Ok(Quote {
            price: self.trade_price.as_f64("TradePrice")?,
            change: self.change.as_f64("Change")?,
            percent_change: self.percent_change.as_f64("PercChange")?,
        })
    }
}

/// A wire value that may be a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Plain JSON number.
    Number(f64),
    /// Number encoded as a string, e.g. `"123.45"`.
    Text(String),
}

impl RawNumber {
    /// Coerce to `f64`; `field` names the wire field for the error message.
    pub fn as_f64(&self, field: &'static str) -> Result<f64> {
        match self {
            RawNumber::Number(n) => Ok(*n),
            RawNumber::Text(s) => {
                s.trim()
                    .parse()
                    .map_err(|_| QuoteError::NonNumericField {
                        field,
                        value: s.clone(),
                    })
            }
        }
    }
}

/// A single reading of price, change, and percent change at fetch time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Last trade price.
    pub price: f64,
    /// Signed day change.
    pub change: f64,
    /// Signed day change in percent.
    pub percent_change: f64,
}

//!
//! Common types and utilities shared by the ticker widget and its CLI host.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — provider wire types and the domain `Quote`.
//! - `provider` — fixed provider constants and request URL construction.
//! - `options` — user-editable widget options and logo resolution.
//! - `schema` — configuration-dialog schema documents.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod quote;
pub mod provider;
pub mod options;
pub mod schema;

pub use error::QuoteError;
pub use result::Result;
pub use quote::Quote;
pub use options::WidgetOptions;
pub use provider::ProviderConfig;

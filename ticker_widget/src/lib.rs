//!
//! Stock-ticker display card: one-shot quote fetch plus pure rendering.
//!
//! The widget shows the tracked company's share price, day change, and
//! percent change. Mounting triggers the single fetch of the widget's
//! lifetime on a background thread; the card renders a loading placeholder
//! until the fetch settles, then either the price block or a fixed error
//! text. Container resizes only reselect the responsive size tier — they
//! never touch the fetch.
//!
//! Module map:
//! - `state` — quote state machine (`Idle → Loading → Loaded | Failed`).
//! - `fetch` — `QuoteSource` capability trait, HTTP implementation, and the
//!   one-shot fetch thread.
//! - `layout` — responsive size tiers and font scaling.
//! - `sentiment` — up/down classification of the day change.
//! - `render` — pure `(state, options, width) → RenderModel` formatter.
//! - `widget` — `TickerWidget`, tying lifecycle and rendering together.
//! - `html` — markup rendering with the stable class hooks.
#![warn(missing_docs)]
pub mod state;
pub mod fetch;
pub mod layout;
pub mod sentiment;
pub mod render;
pub mod widget;
pub mod html;

pub use fetch::{HttpQuoteSource, QuoteSource};
pub use html::render_html;
pub use render::{ContentBlock, RenderModel, render_model};
pub use state::QuoteState;
pub use widget::TickerWidget;

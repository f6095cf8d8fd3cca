//! Responsive size tiers and font scaling.
//!
//! The container width selects one of three discrete size tiers; the tier
//! fixes the logo-container pixel size and an optional compaction class.
//! Text sizes start from per-element bases in `em` and are scaled by the
//! user-supplied adjustment percentage.
use strum_macros::Display;

/// Widths below this are the small tier.
pub const SMALL_MAX_WIDTH: f64 = 295.0;
/// Widths below this (and at least [`SMALL_MAX_WIDTH`]) are the medium tier.
pub const MEDIUM_MAX_WIDTH: f64 = 350.0;

/// Base size of the symbol label, in em.
pub const FONT_BASE_SYMBOL: f64 = 1.1;
/// Base size of the company-name label, in em.
pub const FONT_BASE_COMPANY_NAME: f64 = 0.85;
/// Base size of the current-price element, in em.
pub const FONT_BASE_PRICE: f64 = 1.15;
/// Base size of the change/loading/error text, in em.
pub const FONT_BASE_DETAIL: f64 = 0.9;

/// Discrete responsive size class selected from the container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SizeTier {
    /// Width below 295 px.
    Small,
    /// Width in `[295, 350)` px.
    Medium,
    /// Width of 350 px and up.
    Normal,
}

impl SizeTier {
    /// Select the tier for a container width in pixels.
    pub fn from_width(width: f64) -> Self {
        if width < SMALL_MAX_WIDTH {
            SizeTier::Small
        } else if width < MEDIUM_MAX_WIDTH {
            SizeTier::Medium
        } else {
            SizeTier::Normal
        }
    }

    /// Pixel size of the square logo container for this tier.
    pub fn logo_px(self) -> u32 {
        match self {
            SizeTier::Small => 35,
            SizeTier::Medium => 40,
            SizeTier::Normal => 50,
        }
    }

    /// Style-class modifier for layout compaction. The normal tier has none.
    pub fn modifier_class(self) -> Option<&'static str> {
        match self {
            SizeTier::Small => Some("stock-ticker--sm"),
            SizeTier::Medium => Some("stock-ticker--md"),
            SizeTier::Normal => None,
        }
    }
}

/// Per-element font scaling derived from the user adjustment percentage.
///
/// The adjustment is applied as supplied; the advisory `[-50, 100]` range is
/// enforced only by the configuration dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    /// Percentage adjustment; 0 keeps the base sizes.
    pub adjustment_percent: i32,
}

impl FontScale {
    /// Wrap an adjustment percentage.
    pub fn new(adjustment_percent: i32) -> Self {
        FontScale { adjustment_percent }
    }

    /// Effective size for a base size in em:
    /// `base × (1 + adjustment / 100)`.
    pub fn scale(self, base_em: f64) -> f64 {
        base_em * (1.0 + f64::from(self.adjustment_percent) / 100.0)
    }

    /// Effective sizes for all four text elements of the card.
    pub fn sizes(self) -> FontSizes {
        FontSizes {
            symbol: self.scale(FONT_BASE_SYMBOL),
            company_name: self.scale(FONT_BASE_COMPANY_NAME),
            price: self.scale(FONT_BASE_PRICE),
            detail: self.scale(FONT_BASE_DETAIL),
        }
    }
}

/// Effective em sizes for every text element of the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Symbol label.
    pub symbol: f64,
    /// Company-name label.
    pub company_name: f64,
    /// Current-price element.
    pub price: f64,
    /// Change, loading, and error text.
    pub detail: f64,
}

/// Format a size as a CSS `em` length.
pub fn em(size: f64) -> String {
    format!("{}em", size)
}

//! User-editable widget options supplied by the configuration dialog.
//!
//! The hosting environment renders an options form (see `schema`) and passes
//! the validated values back as a `WidgetOptions`. The options are supplied
//! once per mount and never mutated by the widget itself.
use serde::Deserialize;

use crate::provider::LOGO_FALLBACK_URL;

/// Advisory lower bound of the font-size adjustment slider.
pub const FONT_ADJUST_MIN: i32 = -50;
/// Advisory upper bound of the font-size adjustment slider.
pub const FONT_ADJUST_MAX: i32 = 100;
/// Slider step granularity in the configuration dialog.
pub const FONT_ADJUST_STEP: i32 = 5;

/// The two user-editable options of the widget.
///
/// `fontsizeadjustment` is advisory-ranged only: any value the host supplies
/// is applied to the scaling formula without clamping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    /// Optional override for the logo URL.
    pub logo: Option<String>,
    /// Percentage to adjust font sizes; 0 keeps the base sizes.
    pub fontsizeadjustment: i32,
}

impl WidgetOptions {
    /// Resolve the logo source: the supplied value verbatim when non-empty,
    /// otherwise the fixed fallback image.
    pub fn logo_url(&self) -> &str {
        match self.logo.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => LOGO_FALLBACK_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_host_supplies_nothing() {
        let options: WidgetOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, WidgetOptions::default());
        assert_eq!(options.fontsizeadjustment, 0);
        assert_eq!(options.logo_url(), LOGO_FALLBACK_URL);
    }

    #[test]
    fn empty_logo_falls_back() {
        let options = WidgetOptions {
            logo: Some(String::new()),
            ..WidgetOptions::default()
        };
        assert_eq!(options.logo_url(), LOGO_FALLBACK_URL);
    }

    #[test]
    fn supplied_logo_is_used_verbatim() {
        let options: WidgetOptions = serde_json::from_str(
            r#"{ "logo": "https://example.com/logo.png", "fontsizeadjustment": 15 }"#,
        )
        .unwrap();
        assert_eq!(options.logo_url(), "https://example.com/logo.png");
        assert_eq!(options.fontsizeadjustment, 15);
    }
}

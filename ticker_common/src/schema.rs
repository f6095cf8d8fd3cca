//! Configuration-dialog schema for the widget options.
//!
//! The configuration-dialog collaborator renders an options form from these
//! documents and supplies the validated values back as
//! [`crate::options::WidgetOptions`]. The widget itself never renders the
//! dialog; it only publishes the schema.
use serde_json::{Value, json};

use crate::options::{FONT_ADJUST_MAX, FONT_ADJUST_MIN, FONT_ADJUST_STEP};
use crate::provider::LOGO_FALLBACK_URL;

/// JSON schema describing the two user-editable options.
pub fn configuration_schema() -> Value {
    json!({
        "properties": {
            "logo": {
                "type": "string",
                "title": "Custom logo URL",
                "default": LOGO_FALLBACK_URL,
            },
            "fontsizeadjustment": {
                "type": "integer",
                "title": "Font Size Adjustment (%)",
                "description": "Adjust overall font size. 0 for default, 10 for 10% larger, -10 for 10% smaller.",
                "default": 0,
                "minimum": FONT_ADJUST_MIN,
                "maximum": FONT_ADJUST_MAX,
            },
        },
    })
}

/// UI hints for the schema above: widget kinds, slider bounds, help texts.
pub fn ui_schema() -> Value {
    json!({
        "logo": {
            "ui:help": "Optional. Paste a direct image URL to replace the default logo.",
        },
        "fontsizeadjustment": {
            "ui:widget": "range",
            "ui:help": "Adjust font size from -50% to +100%. Default is 0%.",
            "ui:options": {
                "min": FONT_ADJUST_MIN,
                "max": FONT_ADJUST_MAX,
                "step": FONT_ADJUST_STEP,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_both_options_with_bounds() {
        let schema = configuration_schema();
        let font = &schema["properties"]["fontsizeadjustment"];
        assert_eq!(font["type"], "integer");
        assert_eq!(font["default"], 0);
        assert_eq!(font["minimum"], -50);
        assert_eq!(font["maximum"], 100);
        assert_eq!(
            schema["properties"]["logo"]["default"],
            LOGO_FALLBACK_URL
        );
    }

    #[test]
    fn ui_schema_uses_a_stepped_slider() {
        let ui = ui_schema();
        assert_eq!(ui["fontsizeadjustment"]["ui:widget"], "range");
        assert_eq!(ui["fontsizeadjustment"]["ui:options"]["step"], 5);
    }
}

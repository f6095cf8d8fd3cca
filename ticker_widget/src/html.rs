//! HTML rendering of the card.
//!
//! Produces the container markup exposing the stable class hooks an external
//! styling or testing layer keys on. Only values that affect computed output
//! are inlined (font sizes, logo container size); decorative styling is left
//! to the host's stylesheet.
use std::fmt::Write;

use crate::layout::em;
use crate::render::{ContentBlock, RenderModel};

/// Render the model as HTML markup.
pub fn render_html(model: &RenderModel) -> String {
    let mut html = String::with_capacity(1024);

    let _ = writeln!(
        html,
        "<div class=\"{}\">",
        model.container_classes.join(" ")
    );
    let _ = writeln!(
        html,
        "  <div class=\"stock-ticker__logo-wrapper\" style=\"width: {}px; height: {}px\">",
        model.logo_px, model.logo_px
    );
    let _ = writeln!(
        html,
        "    <img class=\"stock-ticker__logo-image\" src=\"{}\" alt=\"{} logo\" loading=\"lazy\">",
        model.logo_url, model.company_name
    );
    html.push_str("  </div>\n");

    html.push_str("  <div class=\"stock-ticker__company-info\">\n");
    let _ = writeln!(
        html,
        "    <h2 class=\"stock-ticker__symbol\" style=\"font-size: {}\">{}</h2>",
        em(model.fonts.symbol),
        model.symbol
    );
    let _ = writeln!(
        html,
        "    <p class=\"stock-ticker__name\" style=\"font-size: {}\">{}</p>",
        em(model.fonts.company_name),
        model.company_name
    );
    html.push_str("  </div>\n");

    html.push_str("  <div class=\"stock-ticker__price-info\">\n");
    match &model.content {
        ContentBlock::Loading { text } => {
            let _ = writeln!(
                html,
                "    <span class=\"stock-ticker__loading\" style=\"font-size: {}\">{}</span>",
                em(model.fonts.detail),
                text
            );
        }
        ContentBlock::Error { text } => {
            let _ = writeln!(
                html,
                "    <span class=\"stock-ticker__error\" style=\"font-size: {}\">{}</span>",
                em(model.fonts.detail),
                text
            );
        }
        ContentBlock::Price {
            price_text,
            change_text,
        } => {
            let _ = writeln!(
                html,
                "    <div class=\"stock-ticker__price-current\" style=\"font-size: {}\">{}</div>",
                em(model.fonts.price),
                price_text
            );
            let _ = writeln!(
                html,
                "    <div class=\"stock-ticker__price-change\" style=\"font-size: {}\">{}</div>",
                em(model.fonts.detail),
                change_text
            );
        }
    }
    html.push_str("  </div>\n");
    html.push_str("</div>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_model;
    use crate::state::{FAILED_TEXT, QuoteState};
    use ticker_common::{Quote, WidgetOptions};

    fn loaded_state() -> QuoteState {
        QuoteState::Loaded(Quote {
            price: 123.45,
            change: -1.20,
            percent_change: -0.96,
        })
    }

    #[test]
    fn loaded_markup_exposes_the_price_hooks() {
        let model = render_model(&loaded_state(), &WidgetOptions::default(), 400.0);
        let html = render_html(&model);
        assert!(html.contains("class=\"stock-ticker is-down\""));
        assert!(html.contains("stock-ticker__logo-image"));
        assert!(html.contains("stock-ticker__symbol"));
        assert!(html.contains("stock-ticker__name"));
        assert!(html.contains(">$123.45</div>"));
        assert!(html.contains(">▼1.20 (-0.96%)</div>"));
        assert!(!html.contains("stock-ticker__loading"));
        assert!(!html.contains("stock-ticker__error"));
    }

    #[test]
    fn loading_markup_shows_only_the_placeholder() {
        let model = render_model(&QuoteState::Loading, &WidgetOptions::default(), 400.0);
        let html = render_html(&model);
        assert!(html.contains("stock-ticker__loading"));
        assert!(!html.contains("stock-ticker__price-current"));
        assert!(!html.contains("stock-ticker__error"));
    }

    #[test]
    fn error_markup_shows_only_the_fixed_text() {
        let state = QuoteState::Failed {
            message: FAILED_TEXT.to_string(),
        };
        let model = render_model(&state, &WidgetOptions::default(), 400.0);
        let html = render_html(&model);
        assert!(html.contains("stock-ticker__error"));
        assert!(html.contains(FAILED_TEXT));
        assert!(!html.contains("stock-ticker__price-current"));
        assert!(!html.contains("stock-ticker__loading"));
    }

    #[test]
    fn logo_wrapper_is_sized_from_the_tier() {
        let model = render_model(&loaded_state(), &WidgetOptions::default(), 200.0);
        let html = render_html(&model);
        assert!(html.contains("width: 35px; height: 35px"));
    }

    #[test]
    fn font_sizes_are_inlined_in_em() {
        let options = WidgetOptions {
            logo: None,
            fontsizeadjustment: 0,
        };
        let model = render_model(&loaded_state(), &options, 400.0);
        let html = render_html(&model);
        assert!(html.contains("font-size: 1.1em"));
        assert!(html.contains("font-size: 0.85em"));
        assert!(html.contains("font-size: 1.15em"));
        assert!(html.contains("font-size: 0.9em"));
    }
}

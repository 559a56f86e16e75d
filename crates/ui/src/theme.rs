//! egui style for the calculator page.
//!
//! Accent colours come from the chart palette so focused fields, buttons and
//! the first pie slice read as one family.

use bevy_egui::{egui, EguiContexts};

use crate::config::{FIELD_FILL, PALETTE, PANEL_FILL};

/// Size of the section headings ("Activity Inputs", "Emissions Report").
const HEADING_SIZE: f32 = 18.0;
/// Body text, used by field labels and report lines.
const BODY_SIZE: f32 = 14.0;

/// Builds the calculator style on top of `base`.
pub fn calculator_style(base: &egui::Style) -> egui::Style {
    let mut style = base.clone();
    let accent = PALETTE[0];

    style.visuals.panel_fill = PANEL_FILL;
    style.visuals.extreme_bg_color = FIELD_FILL;

    // Focused text field and selected text
    style.visuals.selection.bg_fill = accent.gamma_multiply(0.5);
    style.visuals.selection.stroke = egui::Stroke::new(1.5, accent);
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, accent);

    let field_rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = field_rounding;
    style.visuals.widgets.hovered.corner_radius = field_rounding;
    style.visuals.widgets.active.corner_radius = field_rounding;

    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(HEADING_SIZE),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(BODY_SIZE),
    );

    // Roomier form rows
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    style
}

pub fn apply_calculator_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let style = calculator_style(&ctx.style());
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_uses_calculator_colours() {
        let style = calculator_style(&egui::Style::default());
        assert_eq!(style.visuals.panel_fill, PANEL_FILL);
        assert_eq!(style.visuals.extreme_bg_color, FIELD_FILL);
        assert_eq!(style.visuals.selection.stroke.color, PALETTE[0]);
        assert_eq!(style.visuals.widgets.active.bg_fill, PALETTE[0]);
    }

    #[test]
    fn test_style_sets_heading_and_body_sizes() {
        let style = calculator_style(&egui::Style::default());
        assert_eq!(
            style.text_styles.get(&egui::TextStyle::Heading),
            Some(&egui::FontId::proportional(HEADING_SIZE))
        );
        assert_eq!(
            style.text_styles.get(&egui::TextStyle::Body),
            Some(&egui::FontId::proportional(BODY_SIZE))
        );
    }
}

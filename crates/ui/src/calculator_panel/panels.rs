//! Individual UI section rendering functions for the calculator.

use bevy_egui::egui;
use emissions::category::EmissionCategory;
use emissions::report::{format_amount, EmissionReport};
use emissions::values::CategoryValues;

use super::types::{FieldEdit, FieldKind, FormBuffers, ResetRequest};
use crate::config::{EMISSIONS_UNIT, FIELD_WIDTH};
use crate::pie_chart::{self, slice_color};

// =============================================================================
// Colors
// =============================================================================

const COLOR_TOTAL: egui::Color32 = egui::Color32::from_rgb(100, 160, 220);
const COLOR_LABEL: egui::Color32 = egui::Color32::from_rgb(180, 190, 210);
const COLOR_MUTED: egui::Color32 = egui::Color32::from_gray(150);

// =============================================================================
// Numeric fields
// =============================================================================

/// Renders one labeled text field per category and collects the edits.
///
/// `stored` is the current resource state for this field group; unfocused
/// buffers are synced to it before drawing.
pub fn render_fields(
    ui: &mut egui::Ui,
    kind: FieldKind,
    stored: &CategoryValues,
    buffers: &mut FormBuffers,
    edits: &mut Vec<FieldEdit>,
) {
    ui.heading(kind.heading());
    egui::Grid::new(kind.grid_id())
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for category in EmissionCategory::ALL {
                if let Some(edit) =
                    render_field_row(ui, kind, category, stored.get(category), buffers)
                {
                    edits.push(edit);
                }
                ui.end_row();
            }
        });
}

/// One grid row: label plus text field. Syncs the buffer to `stored` while
/// the field is unfocused and returns the edit if the user changed the text.
pub fn render_field_row(
    ui: &mut egui::Ui,
    kind: FieldKind,
    category: EmissionCategory,
    stored: f64,
    buffers: &mut FormBuffers,
) -> Option<FieldEdit> {
    ui.colored_label(COLOR_LABEL, format!("{}:", category.label()));

    let id = ui.make_persistent_id((kind.grid_id(), category.identifier()));
    let focused = ui.memory(|mem| mem.has_focus(id));
    buffers.sync(kind, category, stored, focused);

    let response = ui.add(
        egui::TextEdit::singleline(buffers.buffer_mut(kind, category))
            .id(id)
            .desired_width(FIELD_WIDTH),
    );
    response.changed().then(|| FieldEdit {
        kind,
        category,
        text: buffers.text(kind, category).to_string(),
    })
}

// =============================================================================
// Reset buttons
// =============================================================================

/// Renders the reset buttons.
pub fn render_reset_buttons(ui: &mut egui::Ui, factors_at_default: bool) -> ResetRequest {
    let mut request = ResetRequest::default();
    ui.horizontal(|ui| {
        if ui.button("Reset inputs").clicked() {
            request.inputs = true;
        }
        if ui
            .add_enabled(!factors_at_default, egui::Button::new("Reset factors"))
            .clicked()
        {
            request.factors = true;
        }
    });
    request
}

// =============================================================================
// Report
// =============================================================================

/// Renders the report text and pie chart.
pub fn render_report(ui: &mut egui::Ui, report: &EmissionReport) {
    ui.heading("Emissions Report");
    ui.horizontal(|ui| {
        ui.label("Total Emissions:");
        ui.colored_label(
            COLOR_TOTAL,
            egui::RichText::new(format!(
                "{} {}",
                format_amount(report.total_emissions()),
                EMISSIONS_UNIT
            ))
            .strong(),
        );
    });

    ui.add_space(4.0);
    for (category, value) in report.iter() {
        render_category_line(ui, category, value);
    }

    ui.add_space(8.0);
    pie_chart::render_pie_chart(ui, report);
}

fn render_category_line(ui: &mut egui::Ui, category: EmissionCategory, value: f64) {
    ui.horizontal(|ui| {
        // Swatch matching the slice colour
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, 2.0, slice_color(category.index()));
        ui.label(format!("{}:", category.label()));
        ui.label(format!("{} {}", format_amount(value), EMISSIONS_UNIT));
    });
}

/// Placeholder shown until the first report exists.
pub fn render_report_pending(ui: &mut egui::Ui) {
    ui.colored_label(COLOR_MUTED, "Calculating...");
}

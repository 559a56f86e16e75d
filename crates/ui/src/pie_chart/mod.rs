//! Emission breakdown pie chart.
//!
//! One wedge per category with a non-zero emission, coloured from the fixed
//! palette by category index. Hovering a wedge shows its label, amount and
//! share of the total in a tooltip at the pointer.

pub mod geometry;

use bevy_egui::egui;
use emissions::report::{format_amount, EmissionReport};

use crate::config::{
    CHART_HEIGHT, CHART_WIDTH, EMISSIONS_UNIT, FIELD_FILL, PANEL_FILL, PIE_RADIUS_FRACTION,
};

pub use geometry::{pie_slices, slice_at, slice_color, PieSlice};

const COLOR_EMPTY_TEXT: egui::Color32 = egui::Color32::from_gray(150);

/// Renders the pie chart into a fixed `CHART_WIDTH` x `CHART_HEIGHT` area.
pub fn render_pie_chart(ui: &mut egui::Ui, report: &EmissionReport) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(CHART_WIDTH, CHART_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, FIELD_FILL);

    let slices = pie_slices(report);
    if slices.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No emissions to chart",
            egui::FontId::proportional(14.0),
            COLOR_EMPTY_TEXT,
        );
        return;
    }

    let center = rect.center();
    let radius = CHART_WIDTH.min(CHART_HEIGHT) * PIE_RADIUS_FRACTION;

    for slice in &slices {
        painter.add(egui::Shape::mesh(slice_mesh(center, radius, slice)));
    }

    // Wedge separators only make sense with more than one wedge.
    if slices.len() > 1 {
        let stroke = egui::Stroke::new(1.5, PANEL_FILL);
        for slice in &slices {
            let edge = geometry::point_on_circle(center, radius, slice.start);
            painter.line_segment([center, edge], stroke);
        }
    }

    if let Some(pointer) = response.hover_pos() {
        if let Some(slice) = slice_at(&slices, pointer - center, radius) {
            let text = tooltip_text(slice);
            response.on_hover_text_at_pointer(text);
        }
    }
}

/// Tooltip body for a hovered slice.
pub fn tooltip_text(slice: &PieSlice) -> String {
    format!(
        "{}: {} {} ({:.1}%)",
        slice.category.label(),
        format_amount(slice.value),
        EMISSIONS_UNIT,
        slice.share * 100.0
    )
}

/// Triangle fan covering one wedge.
fn slice_mesh(center: egui::Pos2, radius: f32, slice: &PieSlice) -> egui::Mesh {
    let color = slice.color();
    let rim = geometry::arc_points(center, radius, slice);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, color);
    for point in &rim {
        mesh.colored_vertex(*point, color);
    }
    for i in 1..rim.len() as u32 {
        mesh.add_triangle(0, i, i + 1);
    }
    mesh
}

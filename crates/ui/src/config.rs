use bevy_egui::egui;

/// Pie chart drawing area, in points.
pub const CHART_WIDTH: f32 = 400.0;
pub const CHART_HEIGHT: f32 = 300.0;

/// Pie radius as a fraction of the chart's shorter side.
pub const PIE_RADIUS_FRACTION: f32 = 0.4;

/// Slice colours, assigned by category index and cycling past the end.
pub const PALETTE: [egui::Color32; 5] = [
    egui::Color32::from_rgb(0x00, 0x88, 0xFE),
    egui::Color32::from_rgb(0x00, 0xC4, 0x9F),
    egui::Color32::from_rgb(0xFF, 0xBB, 0x28),
    egui::Color32::from_rgb(0xFF, 0x80, 0x42),
    egui::Color32::from_rgb(0x88, 0x84, 0xD8),
];

/// Width of each numeric text field.
pub const FIELD_WIDTH: f32 = 140.0;

/// Upper bound on the form column width.
pub const PANEL_MAX_WIDTH: f32 = 520.0;

/// Unit suffix shown after emission amounts.
pub const EMISSIONS_UNIT: &str = "tCO2e";

/// Page background behind the form.
pub const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(35, 37, 48);

/// Background of text fields and the chart area.
pub const FIELD_FILL: egui::Color32 = egui::Color32::from_rgb(30, 32, 40);

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod calculator_panel;
pub mod config;
pub mod pie_chart;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_plugins(calculator_panel::CalculatorPanelPlugin)
            .add_systems(Startup, theme::apply_calculator_theme);
    }
}

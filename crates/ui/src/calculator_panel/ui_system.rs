//! Main calculator UI system.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use emissions::factors::EmissionFactors;
use emissions::inputs::ActivityInputs;
use emissions::report::CurrentReport;

use super::panels;
use super::types::{FieldKind, FormBuffers, FormOutcome};
use crate::config::PANEL_MAX_WIDTH;

/// Writes one frame's worth of form interaction back into the calculator
/// state. Resources are only touched (and so only marked changed) when there
/// is something to write.
pub fn apply_outcome(
    outcome: &FormOutcome,
    inputs: &mut ResMut<ActivityInputs>,
    factors: &mut ResMut<EmissionFactors>,
) {
    if outcome.reset.inputs {
        debug!("Resetting activity inputs");
        inputs.reset();
    }
    if outcome.reset.factors {
        debug!("Resetting emission factors to presets");
        factors.reset();
    }
    for edit in &outcome.edits {
        match edit.kind {
            FieldKind::Activity => {
                inputs.apply_entry(edit.category, &edit.text);
            }
            FieldKind::Factor => {
                factors.apply_entry(edit.category, &edit.text);
            }
        }
    }
}

/// Draws the calculator page: both field groups, reset buttons and, once a
/// report exists, the report text and pie chart.
pub fn calculator_panel_ui(
    mut contexts: EguiContexts,
    mut inputs: ResMut<ActivityInputs>,
    mut factors: ResMut<EmissionFactors>,
    mut buffers: ResMut<FormBuffers>,
    current: Res<CurrentReport>,
) {
    let mut outcome = FormOutcome::default();

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.set_max_width(PANEL_MAX_WIDTH);
            ui.heading("Carbon Footprint Calculator");
            ui.small("Emissions = activity x emission factor, per category");
            ui.separator();

            panels::render_fields(
                ui,
                FieldKind::Activity,
                inputs.values(),
                &mut buffers,
                &mut outcome.edits,
            );

            ui.add_space(4.0);
            ui.separator();

            panels::render_fields(
                ui,
                FieldKind::Factor,
                factors.values(),
                &mut buffers,
                &mut outcome.edits,
            );

            ui.add_space(4.0);
            outcome.reset = panels::render_reset_buttons(ui, factors.is_default());

            ui.add_space(4.0);
            ui.separator();

            match current.get() {
                Some(report) => panels::render_report(ui, report),
                None => panels::render_report_pending(ui),
            }
        });
    });

    if !outcome.is_empty() {
        apply_outcome(&outcome, &mut inputs, &mut factors);
    }
}

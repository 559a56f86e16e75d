use bevy::prelude::*;

pub mod category;
pub mod config;
pub mod entry;
pub mod factors;
pub mod inputs;
pub mod report;
pub mod values;


use factors::EmissionFactors;
use inputs::ActivityInputs;
use report::{compute_report, CurrentReport};

// ---------------------------------------------------------------------------
// System ordering
// ---------------------------------------------------------------------------

/// Frame phases for the calculator. `Edit` (form systems that write inputs
/// and factors) always runs before `Derive` (report refresh).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmissionsSet {
    Edit,
    Derive,
}

// ---------------------------------------------------------------------------
// Derivation system
// ---------------------------------------------------------------------------

/// Re-derives [`CurrentReport`] whenever inputs or factors changed since the
/// last run. Also runs once at startup so the report exists from frame one.
pub fn refresh_report(
    inputs: Res<ActivityInputs>,
    factors: Res<EmissionFactors>,
    mut current: ResMut<CurrentReport>,
) {
    if current.is_present() && !inputs.is_changed() && !factors.is_changed() {
        return;
    }

    let report = compute_report(&inputs, &factors);
    if current.is_present() {
        debug!(
            "Emission report refreshed: total {:.2}",
            report.total_emissions()
        );
    } else {
        info!(
            "Initial emission report derived: total {:.2}",
            report.total_emissions()
        );
    }
    current.0 = Some(report);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct EmissionsPlugin;

impl Plugin for EmissionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActivityInputs>()
            .init_resource::<EmissionFactors>()
            .init_resource::<CurrentReport>()
            .configure_sets(Update, (EmissionsSet::Edit, EmissionsSet::Derive).chain())
            .add_systems(Startup, refresh_report)
            .add_systems(Update, refresh_report.in_set(EmissionsSet::Derive));

        info!(
            "Emissions plugin ready: {} categories",
            category::EmissionCategory::COUNT
        );
    }
}

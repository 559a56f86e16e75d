//! Calculator page.
//!
//! Displays:
//! - One labeled numeric field per activity category
//! - One labeled numeric field per emission factor, with reset buttons
//! - Total and per-category emissions (two decimal places)
//! - Pie chart of the per-category breakdown

mod panels;
pub mod types;
mod ui_system;

use bevy::prelude::*;
use emissions::EmissionsSet;

pub use types::{FieldEdit, FieldKind, FormBuffers, FormOutcome, ResetRequest};
pub use ui_system::{apply_outcome, calculator_panel_ui};

/// Plugin that registers the calculator page.
pub struct CalculatorPanelPlugin;

impl Plugin for CalculatorPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FormBuffers>()
            .add_systems(Update, calculator_panel_ui.in_set(EmissionsSet::Edit));
    }
}

//! Types for the calculator form.

use bevy::prelude::*;
use emissions::category::EmissionCategory;
use emissions::factors::EmissionFactors;
use emissions::inputs::ActivityInputs;

/// Which of the two field groups a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Activity,
    Factor,
}

impl FieldKind {
    pub fn heading(self) -> &'static str {
        match self {
            FieldKind::Activity => "Activity Inputs",
            FieldKind::Factor => "Emission Factors",
        }
    }

    /// egui id salt for the field grid.
    pub fn grid_id(self) -> &'static str {
        match self {
            FieldKind::Activity => "activity_inputs_grid",
            FieldKind::Factor => "emission_factors_grid",
        }
    }
}

/// A field whose text changed this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub kind: FieldKind,
    pub category: EmissionCategory,
    pub text: String,
}

/// Reset buttons pressed this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetRequest {
    pub inputs: bool,
    pub factors: bool,
}

/// Everything the form wants to change after one frame of interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOutcome {
    pub edits: Vec<FieldEdit>,
    pub reset: ResetRequest,
}

impl FormOutcome {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty() && !self.reset.inputs && !self.reset.factors
    }
}

/// Text buffers behind the ten numeric fields.
///
/// A focused field keeps whatever the user typed; an unfocused field always
/// shows the stored value, so a rejected entry like `-5` turns into `0` once
/// the user leaves the field.
#[derive(Resource, Debug, Clone)]
pub struct FormBuffers {
    activity: [String; EmissionCategory::COUNT],
    factors: [String; EmissionCategory::COUNT],
}

impl Default for FormBuffers {
    fn default() -> Self {
        Self::from_state(&ActivityInputs::default(), &EmissionFactors::default())
    }
}

impl FormBuffers {
    pub fn from_state(inputs: &ActivityInputs, factors: &EmissionFactors) -> Self {
        Self {
            activity: EmissionCategory::ALL.map(|c| format_field_value(inputs.get(c))),
            factors: EmissionCategory::ALL.map(|c| format_field_value(factors.get(c))),
        }
    }

    pub fn text(&self, kind: FieldKind, category: EmissionCategory) -> &str {
        match kind {
            FieldKind::Activity => &self.activity[category.index()],
            FieldKind::Factor => &self.factors[category.index()],
        }
    }

    pub fn buffer_mut(&mut self, kind: FieldKind, category: EmissionCategory) -> &mut String {
        match kind {
            FieldKind::Activity => &mut self.activity[category.index()],
            FieldKind::Factor => &mut self.factors[category.index()],
        }
    }

    /// Rewrites an unfocused buffer to show `stored`. Focused buffers are left
    /// alone. Returns true if the text changed.
    pub fn sync(
        &mut self,
        kind: FieldKind,
        category: EmissionCategory,
        stored: f64,
        focused: bool,
    ) -> bool {
        if focused {
            return false;
        }
        let canonical = format_field_value(stored);
        let buffer = self.buffer_mut(kind, category);
        if *buffer == canonical {
            return false;
        }
        *buffer = canonical;
        true
    }
}

/// Text shown in a field for a stored value (`0`, `1.2`, `12.5`).
pub fn format_field_value(value: f64) -> String {
    format!("{value}")
}

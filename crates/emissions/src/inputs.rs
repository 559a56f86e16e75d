//! Activity inputs: the raw quantities typed into the form.

use bevy::prelude::*;

use crate::category::EmissionCategory;
use crate::config::DEFAULT_ACTIVITY;
use crate::entry::{clamp_entry, clamp_value};
use crate::values::CategoryValues;

/// Activity level per category (e.g. tons of coal produced). Never negative.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActivityInputs {
    values: CategoryValues,
}

impl Default for ActivityInputs {
    fn default() -> Self {
        Self {
            values: CategoryValues::splat(DEFAULT_ACTIVITY),
        }
    }
}

impl ActivityInputs {
    /// Builds inputs from raw values, clamping each one.
    pub fn from_values(values: [f64; EmissionCategory::COUNT]) -> Self {
        let mut inputs = Self::default();
        for (category, value) in EmissionCategory::ALL.into_iter().zip(values) {
            inputs.set(category, value);
        }
        inputs
    }

    pub fn get(&self, category: EmissionCategory) -> f64 {
        self.values.get(category)
    }

    /// Stores `value` for `category`, clamped to a non-negative finite number.
    /// Returns the stored value.
    pub fn set(&mut self, category: EmissionCategory, value: f64) -> f64 {
        let stored = clamp_value(value);
        self.values.set(category, stored);
        stored
    }

    /// Applies a field edit: parses `text`, clamps it and stores the result.
    /// Returns the stored value.
    pub fn apply_entry(&mut self, category: EmissionCategory, text: &str) -> f64 {
        self.set(category, clamp_entry(text))
    }

    /// Puts every input back to its starting value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn values(&self) -> &CategoryValues {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_zero() {
        let inputs = ActivityInputs::default();
        for category in EmissionCategory::ALL {
            assert_eq!(inputs.get(category), 0.0);
        }
    }

    #[test]
    fn test_apply_entry_stores_parsed_value() {
        let mut inputs = ActivityInputs::default();
        let stored = inputs.apply_entry(EmissionCategory::CoalProduction, "10");
        assert_eq!(stored, 10.0);
        assert_eq!(inputs.get(EmissionCategory::CoalProduction), 10.0);
    }

    #[test]
    fn test_negative_entry_is_clamped() {
        let mut inputs = ActivityInputs::default();
        inputs.apply_entry(EmissionCategory::EnergyConsumption, "4");
        inputs.apply_entry(EmissionCategory::EnergyConsumption, "-5");
        assert_eq!(inputs.get(EmissionCategory::EnergyConsumption), 0.0);
    }

    #[test]
    fn test_set_clamps_negative_values() {
        let mut inputs = ActivityInputs::default();
        assert_eq!(inputs.set(EmissionCategory::EmployeeCommuting, -1.0), 0.0);
    }

    #[test]
    fn test_edit_leaves_other_categories_alone() {
        let mut inputs = ActivityInputs::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
        inputs.apply_entry(EmissionCategory::TransportationEmissions, "30");
        let values: Vec<f64> = inputs.values().iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.0, 2.0, 30.0, 4.0, 5.0]);
    }

    #[test]
    fn test_reset() {
        let mut inputs = ActivityInputs::from_values([1.0; 5]);
        inputs.reset();
        assert_eq!(inputs, ActivityInputs::default());
    }
}

//! Emission factors: tons CO2e emitted per unit of each activity.

use bevy::prelude::*;

use crate::category::EmissionCategory;
use crate::config::DEFAULT_FACTORS;
use crate::entry::{clamp_entry, clamp_value};
use crate::values::CategoryValues;

/// Per-category multiplier applied to [`crate::inputs::ActivityInputs`].
/// Starts at the preset table and is user-adjustable. Never negative.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    values: CategoryValues,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            values: CategoryValues::new(DEFAULT_FACTORS),
        }
    }
}

impl EmissionFactors {
    /// Builds factors from raw values, clamping each one.
    pub fn from_values(values: [f64; EmissionCategory::COUNT]) -> Self {
        let mut factors = Self::default();
        for (category, value) in EmissionCategory::ALL.into_iter().zip(values) {
            factors.set(category, value);
        }
        factors
    }

    pub fn get(&self, category: EmissionCategory) -> f64 {
        self.values.get(category)
    }

    /// Stores `value` for `category`, clamped to a non-negative finite number.
    pub fn set(&mut self, category: EmissionCategory, value: f64) -> f64 {
        let stored = clamp_value(value);
        self.values.set(category, stored);
        stored
    }

    /// Applies a field edit, same rules as activity inputs.
    pub fn apply_entry(&mut self, category: EmissionCategory, text: &str) -> f64 {
        self.set(category, clamp_entry(text))
    }

    /// Restores the preset factor table.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every factor still equals its preset.
    pub fn is_default(&self) -> bool {
        self.values.iter().all(|(c, v)| v == c.default_factor())
    }

    pub fn values(&self) -> &CategoryValues {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_presets() {
        let factors = EmissionFactors::default();
        assert_eq!(factors.get(EmissionCategory::CoalProduction), 1.2);
        assert_eq!(factors.get(EmissionCategory::EnergyConsumption), 0.8);
        assert_eq!(factors.get(EmissionCategory::TransportationEmissions), 1.5);
        assert_eq!(factors.get(EmissionCategory::EmployeeCommuting), 0.2);
        assert_eq!(factors.get(EmissionCategory::SupplyChainEmissions), 1.1);
        assert!(factors.is_default());
    }

    #[test]
    fn test_factor_entry_clamps_like_inputs() {
        let mut factors = EmissionFactors::default();
        assert_eq!(factors.apply_entry(EmissionCategory::CoalProduction, "-5"), 0.0);
        assert_eq!(factors.apply_entry(EmissionCategory::EnergyConsumption, "x"), 0.0);
        assert_eq!(factors.apply_entry(EmissionCategory::SupplyChainEmissions, "2.5"), 2.5);
        assert!(!factors.is_default());
        assert_eq!(factors.get(EmissionCategory::EmployeeCommuting), 0.2);
    }

    #[test]
    fn test_reset_restores_presets() {
        let mut factors = EmissionFactors::from_values([9.0; 5]);
        factors.reset();
        assert!(factors.is_default());
    }
}

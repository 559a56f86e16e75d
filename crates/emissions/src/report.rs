//! Derived emission report.
//!
//! `emission[c] = inputs[c] * factors[c]` and `total = Σ emission[c]`. The
//! total is accumulated from the per-category values in declared order, so it
//! is exactly the sum of what the breakdown shows.
//!
//! Entries are finite but unbounded, so a product or the total can overflow.
//! Both saturate at `f64::MAX`; a report never holds `inf` or `NaN`.

use bevy::prelude::*;

use crate::category::EmissionCategory;
use crate::factors::EmissionFactors;
use crate::inputs::ActivityInputs;
use crate::values::CategoryValues;

/// Total and per-category emissions for one (inputs, factors) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmissionReport {
    total_emissions: f64,
    emissions_by_category: CategoryValues,
}

impl EmissionReport {
    pub fn total_emissions(&self) -> f64 {
        self.total_emissions
    }

    pub fn emission(&self, category: EmissionCategory) -> f64 {
        self.emissions_by_category.get(category)
    }

    /// `(category, emission)` in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (EmissionCategory, f64)> + '_ {
        self.emissions_by_category.iter()
    }

    /// Fraction of the total contributed by `category`, or 0 when the total
    /// is zero.
    pub fn share(&self, category: EmissionCategory) -> f64 {
        if self.total_emissions <= 0.0 {
            return 0.0;
        }
        self.emission(category) / self.total_emissions
    }

    /// True when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.total_emissions <= 0.0
    }
}

/// Derives a report from the current inputs and factors.
pub fn compute_report(inputs: &ActivityInputs, factors: &EmissionFactors) -> EmissionReport {
    let mut emissions_by_category = CategoryValues::default();
    for category in EmissionCategory::ALL {
        let emission = saturate(inputs.get(category) * factors.get(category));
        emissions_by_category.set(category, emission);
    }
    EmissionReport {
        total_emissions: saturate(emissions_by_category.sum()),
        emissions_by_category,
    }
}

/// Caps an overflowed (infinite) amount at the largest finite value.
fn saturate(value: f64) -> f64 {
    value.min(f64::MAX)
}

/// Formats an emission amount with two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// The most recently derived report; `None` until the first derivation.
#[derive(Resource, Debug, Default)]
pub struct CurrentReport(pub Option<EmissionReport>);

impl CurrentReport {
    pub fn get(&self) -> Option<&EmissionReport> {
        self.0.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

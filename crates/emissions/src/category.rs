//! The five emission sources tracked by the calculator.
//!
//! | Category                | Identifier                | Default factor |
//! |-------------------------|---------------------------|----------------|
//! | Coal production         | `coalProduction`          | 1.2            |
//! | Energy consumption      | `energyConsumption`       | 0.8            |
//! | Transportation          | `transportationEmissions` | 1.5            |
//! | Employee commuting      | `employeeCommuting`       | 0.2            |
//! | Supply chain            | `supplyChainEmissions`    | 1.1            |
//!
//! Every loop over categories goes through [`EmissionCategory::ALL`] so that
//! form fields, report lines, chart slices and palette colours all share one
//! stable order.

use std::fmt;

use crate::config::DEFAULT_FACTORS;

/// A single emission source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmissionCategory {
    CoalProduction,
    EnergyConsumption,
    TransportationEmissions,
    EmployeeCommuting,
    SupplyChainEmissions,
}

impl EmissionCategory {
    /// Number of categories.
    pub const COUNT: usize = 5;

    /// All categories in declared order.
    pub const ALL: [EmissionCategory; Self::COUNT] = [
        EmissionCategory::CoalProduction,
        EmissionCategory::EnergyConsumption,
        EmissionCategory::TransportationEmissions,
        EmissionCategory::EmployeeCommuting,
        EmissionCategory::SupplyChainEmissions,
    ];

    /// Position of this category in [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            EmissionCategory::CoalProduction => 0,
            EmissionCategory::EnergyConsumption => 1,
            EmissionCategory::TransportationEmissions => 2,
            EmissionCategory::EmployeeCommuting => 3,
            EmissionCategory::SupplyChainEmissions => 4,
        }
    }

    /// camelCase identifier used as the key for this category.
    pub fn identifier(self) -> &'static str {
        match self {
            EmissionCategory::CoalProduction => "coalProduction",
            EmissionCategory::EnergyConsumption => "energyConsumption",
            EmissionCategory::TransportationEmissions => "transportationEmissions",
            EmissionCategory::EmployeeCommuting => "employeeCommuting",
            EmissionCategory::SupplyChainEmissions => "supplyChainEmissions",
        }
    }

    /// Preset emission factor for this category.
    pub fn default_factor(self) -> f64 {
        DEFAULT_FACTORS[self.index()]
    }

    /// Human-readable label, e.g. `"Supply Chain Emissions"`.
    pub fn label(self) -> String {
        let spaced = spaced_identifier(self.identifier());
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for EmissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Inserts a space before every upper-case letter:
/// `"supplyChainEmissions"` becomes `"supply Chain Emissions"`.
pub fn spaced_identifier(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for ch in identifier.chars() {
        if ch.is_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, category) in EmissionCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i, "{category:?} out of order");
        }
    }

    #[test]
    fn test_identifiers_are_distinct() {
        for (i, a) in EmissionCategory::ALL.iter().enumerate() {
            for b in &EmissionCategory::ALL[i + 1..] {
                assert_ne!(a.identifier(), b.identifier());
            }
        }
    }

    #[test]
    fn test_spaced_identifier_inserts_space_before_capitals() {
        assert_eq!(spaced_identifier("coalProduction"), "coal Production");
        assert_eq!(
            spaced_identifier("supplyChainEmissions"),
            "supply Chain Emissions"
        );
        assert_eq!(spaced_identifier("plain"), "plain");
        assert_eq!(spaced_identifier(""), "");
    }

    #[test]
    fn test_labels_are_capitalised() {
        assert_eq!(EmissionCategory::CoalProduction.label(), "Coal Production");
        assert_eq!(
            EmissionCategory::EmployeeCommuting.label(),
            "Employee Commuting"
        );
        assert_eq!(
            EmissionCategory::TransportationEmissions.label(),
            "Transportation Emissions"
        );
    }

    #[test]
    fn test_default_factors_match_presets() {
        let expected = [1.2, 0.8, 1.5, 0.2, 1.1];
        for (category, want) in EmissionCategory::ALL.into_iter().zip(expected) {
            assert_eq!(category.default_factor(), want, "{category}");
        }
    }
}

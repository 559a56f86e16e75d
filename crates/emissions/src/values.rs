//! Fixed-size per-category storage shared by inputs, factors and reports.

use crate::category::EmissionCategory;

/// One `f64` per [`EmissionCategory`], addressed by category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryValues([f64; EmissionCategory::COUNT]);

impl CategoryValues {
    pub const fn new(values: [f64; EmissionCategory::COUNT]) -> Self {
        Self(values)
    }

    /// Same value for every category.
    pub const fn splat(value: f64) -> Self {
        Self([value; EmissionCategory::COUNT])
    }

    pub fn get(&self, category: EmissionCategory) -> f64 {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: EmissionCategory, value: f64) {
        self.0[category.index()] = value;
    }

    /// `(category, value)` pairs in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (EmissionCategory, f64)> + '_ {
        EmissionCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Sum of all values, accumulated in declared category order.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let values = CategoryValues::default();
        assert!(values.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_set_touches_only_one_category() {
        let mut values = CategoryValues::splat(1.0);
        values.set(EmissionCategory::EmployeeCommuting, 9.0);
        for (category, v) in values.iter() {
            let want = if category == EmissionCategory::EmployeeCommuting {
                9.0
            } else {
                1.0
            };
            assert_eq!(v, want, "{category}");
        }
    }

    #[test]
    fn test_sum_adds_every_category() {
        let mut values = CategoryValues::default();
        values.set(EmissionCategory::SupplyChainEmissions, 2.5);
        assert_eq!(values.sum(), 2.5);
        values.set(EmissionCategory::CoalProduction, 1.0);
        assert_eq!(values.sum(), 3.5);
    }

    #[test]
    fn test_iter_follows_declared_order() {
        let values = CategoryValues::new([0.0, 1.0, 2.0, 3.0, 4.0]);
        let order: Vec<_> = values.iter().map(|(c, _)| c).collect();
        assert_eq!(order, EmissionCategory::ALL.to_vec());
    }
}

/// Starting value for every activity input.
pub const DEFAULT_ACTIVITY: f64 = 0.0;

/// Preset emission factors (tons CO2e per unit of activity), indexed by
/// `EmissionCategory::index`.
pub const DEFAULT_FACTORS: [f64; 5] = [1.2, 0.8, 1.5, 0.2, 1.1];

/// Value stored whenever an entry is rejected.
pub const REJECTED_ENTRY_VALUE: f64 = 0.0;

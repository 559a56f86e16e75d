// ---------------------------------------------------------------------------
// Numeric entry parsing: text from a form field to a non-negative amount
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::prelude::*;

use crate::config::REJECTED_ENTRY_VALUE;

/// Reasons a field entry cannot be stored as typed.
///
/// None of these reach the user: [`clamp_entry`] turns every one of them into
/// zero. The variants exist so callers and tests can tell the cases apart.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryError {
    /// The field is empty or whitespace only.
    Empty,
    /// The text is not a number.
    NotANumber(String),
    /// The text parsed to `NaN` or an infinity.
    NonFinite,
    /// The number is below zero (including `-0`).
    Negative(f64),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::Empty => write!(f, "entry is empty"),
            EntryError::NotANumber(text) => write!(f, "entry {text:?} is not a number"),
            EntryError::NonFinite => write!(f, "entry is not a finite number"),
            EntryError::Negative(value) => write!(f, "entry {value} is negative"),
        }
    }
}

impl std::error::Error for EntryError {}

/// Parses field text as a non-negative finite number.
pub fn parse_entry(text: &str) -> Result<f64, EntryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EntryError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| EntryError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(EntryError::NonFinite);
    }
    if value < 0.0 || (value == 0.0 && value.is_sign_negative()) {
        return Err(EntryError::Negative(value));
    }
    Ok(value)
}

/// Parses field text, falling back to zero for anything [`parse_entry`]
/// rejects.
pub fn clamp_entry(text: &str) -> f64 {
    match parse_entry(text) {
        Ok(value) => value,
        Err(err) => {
            debug!("Clamping field entry to {}: {}", REJECTED_ENTRY_VALUE, err);
            REJECTED_ENTRY_VALUE
        }
    }
}

/// Clamps an already-numeric value the same way [`clamp_entry`] clamps text.
pub fn clamp_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        REJECTED_ENTRY_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_entry("10"), Ok(10.0));
        assert_eq!(parse_entry("0.25"), Ok(0.25));
        assert_eq!(parse_entry("0"), Ok(0.0));
        assert_eq!(parse_entry("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(parse_entry("  42 \t"), Ok(42.0));
    }

    #[test]
    fn test_parse_empty_is_rejected() {
        assert_eq!(parse_entry(""), Err(EntryError::Empty));
        assert_eq!(parse_entry("   "), Err(EntryError::Empty));
    }

    #[test]
    fn test_parse_garbage_is_rejected() {
        assert_eq!(
            parse_entry("12abc"),
            Err(EntryError::NotANumber("12abc".to_string()))
        );
    }

    #[test]
    fn test_parse_non_finite_is_rejected() {
        assert_eq!(parse_entry("NaN"), Err(EntryError::NonFinite));
        assert_eq!(parse_entry("inf"), Err(EntryError::NonFinite));
    }

    #[test]
    fn test_parse_negative_is_rejected() {
        assert_eq!(parse_entry("-5"), Err(EntryError::Negative(-5.0)));
        assert!(matches!(parse_entry("-0"), Err(EntryError::Negative(_))));
    }

    #[test]
    fn test_clamp_entry_maps_rejections_to_zero() {
        for text in ["-5", "", "abc", "NaN", "-inf", "-0.0001"] {
            assert_eq!(clamp_entry(text), 0.0, "{text:?} should clamp to zero");
        }
        assert_eq!(clamp_entry("7.5"), 7.5);
    }

    #[test]
    fn test_clamp_value() {
        assert_eq!(clamp_value(3.0), 3.0);
        assert_eq!(clamp_value(-3.0), 0.0);
        assert_eq!(clamp_value(f64::NAN), 0.0);
        assert_eq!(clamp_value(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_entry_error_display() {
        assert_eq!(EntryError::Empty.to_string(), "entry is empty");
        assert_eq!(
            EntryError::Negative(-5.0).to_string(),
            "entry -5 is negative"
        );
    }
}

//! Weight unit conversion.
//!
//! Weights are always persisted in kilograms; kg/lbs toggling is a pure
//! display transform. Both directions round to one decimal place, which
//! keeps round trips within 0.1 of the original value across typical
//! dog-weight magnitudes.

use crate::error::{Result, TrackError};

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462262;

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.45359237;

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn validate_weight(value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrackError::InvalidWeight { value });
    }
    Ok(value)
}

/// Convert kilograms to pounds, rounded to one decimal place.
///
/// # Example
/// ```
/// use pawtrack_core::kg_to_lbs;
///
/// assert_eq!(kg_to_lbs(10.0).unwrap(), 22.0);
/// assert!(kg_to_lbs(-1.0).is_err());
/// ```
pub fn kg_to_lbs(kg: f64) -> Result<f64> {
    let kg = validate_weight(kg)?;
    Ok(round_one_decimal(kg * LBS_PER_KG))
}

/// Convert pounds to kilograms, rounded to one decimal place.
pub fn lbs_to_kg(lbs: f64) -> Result<f64> {
    let lbs = validate_weight(lbs)?;
    Ok(round_one_decimal(lbs * KG_PER_LB))
}

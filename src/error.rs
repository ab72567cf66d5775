//! Unified error handling for the pawtrack-core library.
//!
//! The error taxonomy is deliberately small: the only fallible operations are
//! coordinate validation in the walk tracker and weight-unit conversion.
//! Everything else in the crate is total by design, with documented fallback
//! behavior (empty buckets, zero-filled slots, default screen ids) instead of
//! error returns.

use std::fmt;

/// Unified error type for pawtrack-core operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackError {
    /// Latitude/longitude outside the valid range (or non-finite)
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// Negative or non-finite weight value
    InvalidWeight { value: f64 },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::InvalidCoordinate {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "Invalid coordinate: ({}, {}) is outside [-90, 90] x [-180, 180]",
                    latitude, longitude
                )
            }
            TrackError::InvalidWeight { value } => {
                write!(f, "Invalid weight: {} must be a non-negative number", value)
            }
        }
    }
}

impl std::error::Error for TrackError {}

/// Result type alias for pawtrack-core operations.
pub type Result<T> = std::result::Result<T, TrackError>;

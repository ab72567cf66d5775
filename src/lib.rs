//! # Pawtrack Core
//!
//! Computation layer for a dog-care tracking app.
//!
//! This library provides:
//! - Incremental GPS walk-distance tracking (haversine accumulation)
//! - Activity history grouping by calendar date
//! - Trailing-week day-slot aggregation for charts
//! - Activity-type to screen routing
//! - kg/lbs weight conversion
//!
//! All functions are pure and synchronous: the app layer fetches rows from
//! the backend, calls in here, and renders the result. Nothing in this crate
//! performs I/O or holds shared mutable state, so it is safe to call from any
//! UI or concurrency model.
//!
//! ## Quick Start
//!
//! ```rust
//! use pawtrack_core::{GeoPoint, WalkPath};
//!
//! // Feed location updates into an in-progress walk
//! let mut path = WalkPath::new();
//! path.add_point(GeoPoint::new(51.5074, -0.1278)).unwrap();
//! let delta = path.add_point(GeoPoint::new(51.5080, -0.1290)).unwrap();
//!
//! assert!(delta > 0.0);
//! assert_eq!(path.total_distance(), delta);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, TrackError};

// Incremental walk-distance tracking
pub mod walk;
pub use walk::{haversine_distance, path_distance, WalkPath};

// Activity history grouping by calendar date
pub mod grouping;
pub use grouping::{group_by_date, DayBucket};

// Trailing-week aggregation for charts
pub mod weekly;
pub use weekly::{
    aggregate_prior_week, aggregate_trailing_week, DaySlot, WeekSummary, AVERAGE_WALK_SPEED_KPH,
};

// Activity-type screen routing
pub mod routing;
pub use routing::{resolve_screen, ScreenKind};

// Weight unit conversion
pub mod units;
pub use units::{kg_to_lbs, lbs_to_kg, KG_PER_LB, LBS_PER_KG};

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude.
///
/// Transient: points are produced by the location stream and consumed by the
/// walk tracker; only the accumulated distance is ever persisted.
///
/// # Example
/// ```
/// use pawtrack_core::GeoPoint;
/// let point = GeoPoint::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// The kind of logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Walk,
    Pee,
    Poop,
    Feeding,
    Medication,
    Play,
    Vet,
    Grooming,
    Water,
    Vomit,
    Training,
    Custom,
}

impl ActivityType {
    /// Parse a type tag case-insensitively. Unknown tags yield `None`;
    /// callers fall back to default behavior rather than erroring.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "walk" => Some(Self::Walk),
            "pee" => Some(Self::Pee),
            "poop" => Some(Self::Poop),
            "feeding" => Some(Self::Feeding),
            "medication" => Some(Self::Medication),
            "play" => Some(Self::Play),
            "vet" => Some(Self::Vet),
            "grooming" => Some(Self::Grooming),
            "water" => Some(Self::Water),
            "vomit" => Some(Self::Vomit),
            "training" => Some(Self::Training),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// The canonical lowercase tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Pee => "pee",
            Self::Poop => "poop",
            Self::Feeding => "feeding",
            Self::Medication => "medication",
            Self::Play => "play",
            Self::Vet => "vet",
            Self::Grooming => "grooming",
            Self::Water => "water",
            Self::Vomit => "vomit",
            Self::Training => "training",
            Self::Custom => "custom",
        }
    }
}

/// One logged activity, as supplied by the backend client.
///
/// Timestamps are naive: they carry the record's local/display timezone,
/// which is also the timezone all grouping and aggregation operate in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique identifier
    pub id: String,
    /// Activity type tag
    pub activity_type: ActivityType,
    /// Start timestamp; records without one are skipped by grouping
    pub start: Option<NaiveDateTime>,
    /// End timestamp (optional)
    pub end: Option<NaiveDateTime>,
    /// Duration in minutes (optional)
    pub duration_min: Option<u32>,
    /// Distance in meters (optional, walks only)
    pub distance_m: Option<f64>,
    /// Free-text notes (optional)
    pub notes: Option<String>,
    /// Owning dog
    pub dog_id: String,
}

impl ActivityRecord {
    /// Create a minimal record; optional fields start out unset.
    pub fn new(
        id: &str,
        activity_type: ActivityType,
        dog_id: &str,
        start: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: id.to_string(),
            activity_type,
            start,
            end: None,
            duration_min: None,
            distance_m: None,
            notes: None,
            dog_id: dog_id.to_string(),
        }
    }
}

/// A dog profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text breed descriptor ("Labrador" or "Poodle x Beagle")
    pub breed: String,
    /// Birthday as a calendar date
    pub birthday: NaiveDate,
    /// Photo reference in object storage (optional)
    pub photo: Option<String>,
}

/// One weight measurement for a dog.
///
/// The canonical stored unit is kilograms, always; display-unit toggling is
/// a presentation transform (see [`kg_to_lbs`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: String,
    /// Owning dog
    pub dog_id: String,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// When the weight was recorded
    pub recorded_at: NaiveDateTime,
    /// Free-text note (optional)
    pub note: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

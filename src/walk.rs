//! Incremental GPS walk-distance tracking.
//!
//! This module accumulates great-circle distance over an in-progress walk as
//! location updates arrive from the platform's location provider:
//! - Incremental haversine deltas per appended point
//! - Running total that is non-negative and monotonically non-decreasing
//! - Coordinate range validation before any point enters the path
//!
//! The tracker performs no I/O; the app layer owns persistence of the final
//! total onto the walk's activity record.

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};
use crate::GeoPoint;

/// Great-circle distance between two points in meters (haversine).
///
/// Accurate to well within normal consumer GPS error for walk-length paths.
///
/// # Example
/// ```
/// use pawtrack_core::{walk::haversine_distance, GeoPoint};
///
/// let a = GeoPoint::new(51.5074, -0.1278);
/// let b = GeoPoint::new(51.5080, -0.1290);
/// assert!(haversine_distance(&a, &b) > 0.0);
/// ```
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    Haversine::distance(
        Point::new(a.longitude, a.latitude),
        Point::new(b.longitude, b.latitude),
    )
}

/// Total distance of a path in meters, summed over consecutive pairs.
pub fn path_distance(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

/// An in-progress walk path with its running total distance.
///
/// Location updates arrive serially and in order from the location provider;
/// each is applied with [`WalkPath::add_point`]. Stopping a walk simply stops
/// feeding points in.
///
/// # Example
/// ```
/// use pawtrack_core::{GeoPoint, WalkPath};
///
/// let mut path = WalkPath::new();
/// path.add_point(GeoPoint::new(51.5074, -0.1278)).unwrap();
/// let delta = path.add_point(GeoPoint::new(51.5080, -0.1290)).unwrap();
/// assert!(delta > 0.0);
/// assert_eq!(path.total_distance(), delta);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkPath {
    points: Vec<GeoPoint>,
    total_distance: f64,
}

impl WalkPath {
    /// Create an empty walk path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location update and return the incremental distance in meters.
    ///
    /// The delta is 0.0 for the first point of a walk. Returns
    /// [`TrackError::InvalidCoordinate`] if the point is outside valid
    /// latitude/longitude ranges; the path is left unchanged in that case.
    pub fn add_point(&mut self, point: GeoPoint) -> Result<f64> {
        if !point.is_valid() {
            return Err(TrackError::InvalidCoordinate {
                latitude: point.latitude,
                longitude: point.longitude,
            });
        }

        let delta = match self.points.last() {
            Some(prev) => haversine_distance(prev, &point),
            None => 0.0,
        };

        self.points.push(point);
        self.total_distance += delta;
        Ok(delta)
    }

    /// Running total distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// The points recorded so far, in arrival order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points recorded so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no location update has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

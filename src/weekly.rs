//! Trailing-week activity aggregation for chart display.
//!
//! This module buckets activity records into the 7 fixed calendar-day slots
//! used by the weekly charts:
//! - [`aggregate_trailing_week`] covers the 7 days ending on the reference
//!   date (today is the last slot)
//! - [`aggregate_prior_week`] covers the 7 days ending yesterday and adds
//!   per-activity-type daily averages for "daily average excluding today"
//!   summaries
//!
//! Walks contribute duration and distance to their slot; when a walk has no
//! recorded GPS distance, distance is estimated from duration at an assumed
//! average walking speed. That fallback conflates "no data" with "average
//! pace" on purpose, matching the product behavior.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{ActivityRecord, ActivityType};

/// Assumed average dog-walking speed, used to estimate distance for walks
/// that have a duration but no recorded GPS distance.
pub const AVERAGE_WALK_SPEED_KPH: f64 = 3.5;

/// One of the 7 fixed calendar-day slots of a weekly chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySlot {
    /// The calendar day this slot covers
    pub date: NaiveDate,
    /// Number of activities on this day (all types)
    pub count: u32,
    /// Total walk duration in minutes
    pub walk_minutes: u32,
    /// Total walk distance in meters (recorded, or estimated from duration)
    pub walk_distance_m: f64,
}

impl DaySlot {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            count: 0,
            walk_minutes: 0,
            walk_distance_m: 0.0,
        }
    }
}

/// Aggregation over the 7 days ending yesterday, with per-type averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// The 7 day slots in ascending date order (today excluded)
    pub slots: [DaySlot; 7],
    /// Number of distinct days in the window with at least one activity
    pub active_days: u32,
    /// Per-type count divided by `max(1, active_days)`
    pub daily_averages: HashMap<ActivityType, f64>,
}

/// Walk distance for one record: recorded GPS distance when present,
/// otherwise estimated from duration at [`AVERAGE_WALK_SPEED_KPH`].
fn walk_distance_m(record: &ActivityRecord) -> f64 {
    match record.distance_m {
        Some(d) => d,
        None => {
            let minutes = record.duration_min.unwrap_or(0) as f64;
            minutes / 60.0 * AVERAGE_WALK_SPEED_KPH * 1000.0
        }
    }
}

/// Build 7 zero-filled slots for the days `start ..= start + 6`.
fn empty_week(start: NaiveDate) -> [DaySlot; 7] {
    std::array::from_fn(|i| DaySlot::empty(start + Duration::days(i as i64)))
}

/// Fold records into the 7-day window starting at `start`.
///
/// Records outside the window, or without a start timestamp, are ignored.
fn fill_week(records: &[ActivityRecord], start: NaiveDate) -> [DaySlot; 7] {
    let mut slots = empty_week(start);

    for record in records {
        let date = match record.start {
            Some(ts) => ts.date(),
            None => continue,
        };

        let offset = (date - start).num_days();
        if !(0..7).contains(&offset) {
            continue;
        }

        let slot = &mut slots[offset as usize];
        slot.count += 1;

        if record.activity_type == ActivityType::Walk {
            slot.walk_minutes += record.duration_min.unwrap_or(0);
            slot.walk_distance_m += walk_distance_m(record);
        }
    }

    slots
}

/// Aggregate records over the 7 calendar days ending on `reference`.
///
/// Always returns exactly 7 slots in ascending date order (oldest first);
/// zero-filled when no records fall in the window.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use pawtrack_core::{aggregate_trailing_week, ActivityRecord, ActivityType};
///
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let mut walk = ActivityRecord::new(
///     "a1",
///     ActivityType::Walk,
///     "dog-1",
///     reference.and_hms_opt(8, 0, 0),
/// );
/// walk.duration_min = Some(30);
///
/// let slots = aggregate_trailing_week(&[walk], reference);
/// assert_eq!(slots[6].count, 1);
/// assert_eq!(slots[6].walk_minutes, 30);
/// // 30 minutes at 3.5 km/h is estimated as 1.75 km
/// assert!((slots[6].walk_distance_m - 1750.0).abs() < 1e-9);
/// ```
pub fn aggregate_trailing_week(records: &[ActivityRecord], reference: NaiveDate) -> [DaySlot; 7] {
    let start = reference - Duration::days(6);
    let slots = fill_week(records, start);

    debug!(
        "[Weekly] Aggregated {} records into week ending {}",
        records.len(),
        reference
    );

    slots
}

/// Aggregate records over the 7 calendar days ending the day before
/// `reference`, excluding the current day entirely.
///
/// In addition to the 7 slots, computes per-activity-type daily averages:
/// `count(type) / max(1, active_days)` where `active_days` is the number of
/// distinct days in the window with at least one activity of any type.
pub fn aggregate_prior_week(records: &[ActivityRecord], reference: NaiveDate) -> WeekSummary {
    let start = reference - Duration::days(7);
    let slots = fill_week(records, start);

    let active_days = slots.iter().filter(|s| s.count > 0).count() as u32;
    let divisor = active_days.max(1) as f64;

    let mut type_counts: HashMap<ActivityType, u32> = HashMap::new();
    for record in records {
        let date = match record.start {
            Some(ts) => ts.date(),
            None => continue,
        };
        if (0..7).contains(&(date - start).num_days()) {
            *type_counts.entry(record.activity_type).or_insert(0) += 1;
        }
    }

    let daily_averages = type_counts
        .into_iter()
        .map(|(activity_type, count)| (activity_type, count as f64 / divisor))
        .collect();

    WeekSummary {
        slots,
        active_days,
        daily_averages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, activity_type: ActivityType, y: i32, m: u32, d: u32) -> ActivityRecord {
        ActivityRecord::new(
            id,
            activity_type,
            "dog-1",
            date(y, m, d).and_hms_opt(8, 0, 0),
        )
    }

    #[test]
    fn test_empty_input_yields_seven_zero_slots() {
        let reference = date(2024, 1, 7);
        let slots = aggregate_trailing_week(&[], reference);

        assert_eq!(slots.len(), 7);
        assert_eq!(slots[0].date, date(2024, 1, 1));
        assert_eq!(slots[6].date, reference);
        for slot in &slots {
            assert_eq!(slot.count, 0);
            assert_eq!(slot.walk_minutes, 0);
            assert_eq!(slot.walk_distance_m, 0.0);
        }
    }

    #[test]
    fn test_slots_are_ascending_by_date() {
        let slots = aggregate_trailing_week(&[], date(2024, 3, 15));
        for pair in slots.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_walk_distance_estimated_from_duration() {
        let reference = date(2024, 1, 1);
        let mut walk = record("a1", ActivityType::Walk, 2024, 1, 1);
        walk.duration_min = Some(30);

        let slots = aggregate_trailing_week(&[walk], reference);
        let today = &slots[6];
        assert_eq!(today.count, 1);
        assert_eq!(today.walk_minutes, 30);
        // 30 min at 3.5 km/h ~ 1.75 km
        assert!((today.walk_distance_m - 1750.0).abs() < 1e-9);
    }

    #[test]
    fn test_recorded_distance_wins_over_estimate() {
        let reference = date(2024, 1, 1);
        let mut walk = record("a1", ActivityType::Walk, 2024, 1, 1);
        walk.duration_min = Some(30);
        walk.distance_m = Some(2400.0);

        let slots = aggregate_trailing_week(&[walk], reference);
        assert_eq!(slots[6].walk_distance_m, 2400.0);
    }

    #[test]
    fn test_non_walks_count_but_add_no_distance() {
        let reference = date(2024, 1, 1);
        let feeding = record("a1", ActivityType::Feeding, 2024, 1, 1);

        let slots = aggregate_trailing_week(&[feeding], reference);
        assert_eq!(slots[6].count, 1);
        assert_eq!(slots[6].walk_minutes, 0);
        assert_eq!(slots[6].walk_distance_m, 0.0);
    }

    #[test]
    fn test_records_outside_window_are_ignored() {
        let reference = date(2024, 1, 7);
        let records = vec![
            record("in-first", ActivityType::Pee, 2024, 1, 1),
            record("too-old", ActivityType::Pee, 2023, 12, 31),
            record("future", ActivityType::Pee, 2024, 1, 8),
        ];

        let slots = aggregate_trailing_week(&records, reference);
        let total: u32 = slots.iter().map(|s| s.count).sum();
        assert_eq!(total, 1);
        assert_eq!(slots[0].count, 1);
    }

    #[test]
    fn test_records_without_start_are_ignored() {
        let mut no_start = record("a1", ActivityType::Walk, 2024, 1, 1);
        no_start.start = None;

        let slots = aggregate_trailing_week(&[no_start], date(2024, 1, 1));
        assert!(slots.iter().all(|s| s.count == 0));
    }

    #[test]
    fn test_prior_week_excludes_today() {
        let reference = date(2024, 1, 8);
        let records = vec![
            record("today", ActivityType::Walk, 2024, 1, 8),
            record("yesterday", ActivityType::Walk, 2024, 1, 7),
        ];

        let summary = aggregate_prior_week(&records, reference);
        assert_eq!(summary.slots[0].date, date(2024, 1, 1));
        assert_eq!(summary.slots[6].date, date(2024, 1, 7));

        let total: u32 = summary.slots.iter().map(|s| s.count).sum();
        assert_eq!(total, 1);
        assert_eq!(summary.slots[6].count, 1);
    }

    #[test]
    fn test_prior_week_daily_averages() {
        let reference = date(2024, 1, 8);
        let records = vec![
            record("w1", ActivityType::Walk, 2024, 1, 5),
            record("w2", ActivityType::Walk, 2024, 1, 6),
            record("w3", ActivityType::Walk, 2024, 1, 6),
            record("f1", ActivityType::Feeding, 2024, 1, 6),
        ];

        let summary = aggregate_prior_week(&records, reference);
        // Two distinct days with any activity
        assert_eq!(summary.active_days, 2);
        assert_eq!(summary.daily_averages[&ActivityType::Walk], 1.5);
        assert_eq!(summary.daily_averages[&ActivityType::Feeding], 0.5);
    }

    #[test]
    fn test_prior_week_empty_uses_divisor_of_one() {
        let summary = aggregate_prior_week(&[], date(2024, 1, 8));
        assert_eq!(summary.active_days, 0);
        assert!(summary.daily_averages.is_empty());
        assert!(summary.slots.iter().all(|s| s.count == 0));
    }
}

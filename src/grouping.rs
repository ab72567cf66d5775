//! Activity grouping by calendar date.
//!
//! This module partitions a flat list of activity records into date-labeled
//! buckets for the history list view. Records are keyed by the calendar date
//! of their start timestamp (in the record's local/display timezone); buckets
//! come back newest-first while each bucket preserves the relative order of
//! the input.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ActivityRecord;

/// One calendar day of activity history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    /// The calendar date all records in this bucket share
    pub date: NaiveDate,
    /// Human-readable label, e.g. "Monday, January 1"
    pub label: String,
    /// Records for this date, in input order
    pub records: Vec<ActivityRecord>,
}

/// Group activity records into per-date buckets, newest date first.
///
/// Records without a start timestamp are silently skipped; upstream data
/// integrity is the backend's responsibility. Within a bucket the relative
/// order of the input is preserved (callers typically pre-sort by timestamp
/// descending). An empty input yields an empty result.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use pawtrack_core::{group_by_date, ActivityRecord, ActivityType};
///
/// let records = vec![ActivityRecord::new(
///     "a1",
///     ActivityType::Walk,
///     "dog-1",
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0),
/// )];
///
/// let buckets = group_by_date(&records);
/// assert_eq!(buckets.len(), 1);
/// assert_eq!(buckets[0].records.len(), 1);
/// ```
pub fn group_by_date(records: &[ActivityRecord]) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for record in records {
        let date = match record.start {
            Some(start) => start.date(),
            None => continue,
        };

        match index.get(&date) {
            Some(&i) => buckets[i].records.push(record.clone()),
            None => {
                index.insert(date, buckets.len());
                buckets.push(DayBucket {
                    date,
                    label: format_bucket_label(date),
                    records: vec![record.clone()],
                });
            }
        }
    }

    // Newest date first
    buckets.sort_by(|a, b| b.date.cmp(&a.date));

    debug!(
        "[Grouping] Grouped {} records into {} day buckets",
        records.len(),
        buckets.len()
    );

    buckets
}

/// Weekday + month + day label for a bucket, e.g. "Monday, January 1".
///
/// Presentation only; the partitioning and ordering above are the contract.
fn format_bucket_label(date: NaiveDate) -> String {
    format!("{}, {} {}", date.format("%A"), date.format("%B"), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActivityType;
    use chrono::NaiveDate;

    fn record(id: &str, y: i32, m: u32, d: u32, hour: u32) -> ActivityRecord {
        ActivityRecord::new(
            id,
            ActivityType::Walk,
            "dog-1",
            NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(hour, 0, 0),
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_date(&[]).is_empty());
    }

    #[test]
    fn test_records_without_start_are_skipped() {
        let mut no_start = record("a1", 2024, 1, 1, 8);
        no_start.start = None;
        assert!(group_by_date(&[no_start]).is_empty());
    }

    #[test]
    fn test_same_date_lands_in_same_bucket() {
        let records = vec![
            record("a1", 2024, 1, 2, 18),
            record("a2", 2024, 1, 2, 8),
            record("a3", 2024, 1, 1, 9),
        ];

        let buckets = group_by_date(&records);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].records.len(), 2);
        assert_eq!(buckets[0].records[0].id, "a1");
        assert_eq!(buckets[0].records[1].id, "a2");
        assert_eq!(buckets[1].records[0].id, "a3");
    }

    #[test]
    fn test_buckets_are_date_descending() {
        let records = vec![
            record("a1", 2024, 1, 1, 8),
            record("a2", 2024, 1, 3, 8),
            record("a3", 2024, 1, 2, 8),
        ];

        let buckets = group_by_date(&records);
        let dates: Vec<NaiveDate> = buckets.iter().map(|b| b.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_partitioning_is_input_order_independent() {
        let mut records = vec![
            record("a1", 2024, 1, 1, 8),
            record("a2", 2024, 1, 2, 8),
            record("a3", 2024, 1, 1, 18),
        ];

        let buckets = group_by_date(&records);
        records.reverse();
        let reversed = group_by_date(&records);

        // Same partitioning and same bucket order either way
        assert_eq!(buckets.len(), reversed.len());
        for (a, b) in buckets.iter().zip(reversed.iter()) {
            assert_eq!(a.date, b.date);
            let mut ids_a: Vec<&str> = a.records.iter().map(|r| r.id.as_str()).collect();
            let mut ids_b: Vec<&str> = b.records.iter().map(|r| r.id.as_str()).collect();
            ids_a.sort();
            ids_b.sort();
            assert_eq!(ids_a, ids_b);
        }
    }

    #[test]
    fn test_regrouping_flattened_output_is_identity() {
        let records = vec![
            record("a1", 2024, 1, 3, 8),
            record("a2", 2024, 1, 3, 7),
            record("a3", 2024, 1, 1, 9),
            record("a4", 2024, 1, 2, 10),
        ];

        let buckets = group_by_date(&records);
        let flattened: Vec<ActivityRecord> = buckets
            .iter()
            .flat_map(|b| b.records.iter().cloned())
            .collect();

        assert_eq!(group_by_date(&flattened), buckets);
    }

    #[test]
    fn test_bucket_label_format() {
        // 2024-01-01 was a Monday
        let label = format_bucket_label(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(label, "Monday, January 1");
    }
}

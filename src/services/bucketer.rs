//! Calendar partitioning for report axes
//!
//! Weekly reports slice the requested range into Sunday-bounded buckets;
//! monthly reports only need each month's label and day count, because
//! monthly input arrives pre-aggregated per calendar month.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::{Bucket, CostrepError, Result, DATE_LAYOUT, MONTH_LAYOUT};

/// Date partitioning for the report engine
pub struct DateBucketer;

impl DateBucketer {
    /// Partition `[start, end]` (inclusive) into chronological week buckets.
    ///
    /// Walks the range day by day. A bucket opens at the first uncovered
    /// day and closes on the first Sunday that is not its own start day;
    /// whatever is still open when the walk passes `end` closes there.
    /// The first and last bucket may therefore span fewer than seven days.
    pub fn partition_by_week(start: NaiveDate, end: NaiveDate) -> Result<Vec<Bucket>> {
        if start > end {
            return Err(CostrepError::InvalidRange {
                start: start.format(DATE_LAYOUT).to_string(),
                end: end.format(DATE_LAYOUT).to_string(),
            });
        }

        let mut buckets = Vec::new();
        let mut open: Option<NaiveDate> = None;

        let mut day = start;
        while day <= end {
            let bucket_start = *open.get_or_insert(day);

            if day.weekday() == Weekday::Sun && day != bucket_start {
                buckets.push(Bucket {
                    start: bucket_start,
                    end: day,
                });
                open = None;
            }

            match day.succ_opt() {
                Some(next) => day = next,
                None => break, // NaiveDate::MAX; nothing left to walk
            }
        }

        if let Some(bucket_start) = open {
            buckets.push(Bucket {
                start: bucket_start,
                end,
            });
        }

        Ok(buckets)
    }

    /// Resolve a date's calendar month: "YYYY-MM" label and day count
    pub fn month_of(date: NaiveDate) -> (String, u32) {
        (
            date.format(MONTH_LAYOUT).to_string(),
            Self::days_in_month(date.year(), date.month()),
        )
    }

    /// Canonical day count of a calendar month, leap-aware
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("first of month is always valid")
            .pred_opt()
            .expect("first of month always has a predecessor")
            .day()
    }
}

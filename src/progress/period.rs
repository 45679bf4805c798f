//! Calendar period calculation.
//!
//! A period is one concrete instance of a goal cadence: the calendar day,
//! week, or month containing a reference date, as a half-open date
//! interval `[start, end)`. Periods are derived on demand and never
//! persisted. Weeks follow the ISO-8601 convention and start on Monday.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::goals::Cadence;

/// A half-open calendar date interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First date inside the period
    pub start: NaiveDate,
    /// First date after the period
    pub end: NaiveDate,
}

impl Period {
    /// Compute the period of the given cadence containing `date`.
    ///
    /// - Daily: `[date, date + 1 day)`
    /// - Weekly: the ISO week, `[Monday, next Monday)`
    /// - Monthly: `[first of month, first of next month)`, handling
    ///   variable month lengths and year rollover
    pub fn containing(date: NaiveDate, cadence: Cadence) -> Self {
        match cadence {
            Cadence::Daily => Self {
                start: date,
                end: date + Duration::days(1),
            },
            Cadence::Weekly => {
                let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
                Self {
                    start,
                    end: start + Duration::days(7),
                }
            }
            Cadence::Monthly => {
                // with_day(1) cannot fail for a date that already exists
                let start = date.with_day(1).unwrap_or(date);
                Self {
                    start,
                    end: start + Months::new(1),
                }
            }
        }
    }

    /// The period of the same cadence immediately before this one.
    ///
    /// Recomputed from the day before `start`, so the result tiles with
    /// `self` (its `end` equals our `start`) and its `start` is strictly
    /// earlier.
    pub fn previous(&self, cadence: Cadence) -> Self {
        Self::containing(self.start - Duration::days(1), cadence)
    }

    /// Whether a date falls inside the period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Whether a UTC timestamp falls inside the period, by its calendar
    /// date.
    pub fn contains_datetime(&self, ts: DateTime<Utc>) -> bool {
        self.contains(ts.date_naive())
    }

    /// Number of days covered.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Enumerate periods backward from the one containing `now` through the
/// one containing `goal_start`, inclusive.
///
/// Returns an empty iterator when `goal_start` is after `now`. The
/// sequence is lazy, finite, and restartable (the iterator is `Clone`).
pub fn periods_between(
    goal_start: NaiveDate,
    now: NaiveDate,
    cadence: Cadence,
) -> PeriodsBetween {
    let next = if goal_start > now {
        None
    } else {
        Some(Period::containing(now, cadence))
    };
    PeriodsBetween {
        next,
        floor: Period::containing(goal_start, cadence).start,
        cadence,
    }
}

/// Backward iterator over the periods of one cadence, newest first.
#[derive(Debug, Clone)]
pub struct PeriodsBetween {
    next: Option<Period>,
    floor: NaiveDate,
    cadence: Cadence,
}

impl Iterator for PeriodsBetween {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let current = self.next?;
        if current.start < self.floor {
            self.next = None;
            return None;
        }
        let previous = current.previous(self.cadence);
        // Termination invariant: stepping back must strictly decrease start
        debug_assert!(previous.start < current.start);
        self.next = Some(previous);
        Some(current)
    }
}

impl std::iter::FusedIterator for PeriodsBetween {}

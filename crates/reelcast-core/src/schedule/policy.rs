//! Placement policy: decides where the next slots land.

use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Slot placement policy for newly scheduled posts.
///
/// Pure data + pure math; the scheduler consumes it so tests (and
/// deployments with a different cadence) can swap values without touching
/// the placement algorithm.
///
/// Slots are computed in UTC: the anchor is advanced by whole days and then
/// normalized to `post_time`. A deployment wanting a local-zone cadence
/// expresses it by shifting `post_time`.
#[derive(Debug, Clone)]
pub struct SchedulePolicy {
    /// Time-of-day every slot is normalized to.
    pub post_time: NaiveTime,

    /// Days between consecutive slots.
    pub spacing_days: i64,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            // One post per day at 10:00 UTC.
            post_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            spacing_days: 1,
        }
    }
}

impl SchedulePolicy {
    /// The slot `steps` placements after `anchor`: advance by
    /// `spacing_days * steps` days, then normalize to `post_time`.
    ///
    /// `steps` is 1-indexed; the first new post after an anchor goes to
    /// `slot(anchor, 1)`.
    pub fn slot(&self, anchor: DateTime<Utc>, steps: i64) -> DateTime<Utc> {
        let date = (anchor + Duration::days(self.spacing_days * steps)).date_naive();
        date.and_time(self.post_time).and_utc()
    }
}

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One leave period, inclusive of both `start` and `end`.
///
/// The index is 1-based and matches the order in which the generator emits
/// spans. An end date after the discharge date is valid: the last leave is
/// not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
pub struct LeaveSpan {
    start: NaiveDate,
    end:   NaiveDate,
    index: NonZeroU32,
}

impl LeaveSpan {
    pub(crate) const fn new(start: NaiveDate, end: NaiveDate, index: NonZeroU32) -> Self {
        Self { start, end, index }
    }

    /// First day of the leave
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the leave (inclusive)
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// 1-based position in the schedule
    pub const fn index(&self) -> u32 {
        self.index.get()
    }

    /// `end - start` in days, i.e. the number of nights away.
    pub fn duration_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    /// Number of calendar days covered, counting both ends.
    pub fn calendar_days(&self) -> i64 {
        self.duration_days() + 1
    }

    /// Checks whether `date` falls inside the leave, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks whether the leave runs past `discharge`.
    pub fn ends_after(&self, discharge: NaiveDate) -> bool {
        self.end > discharge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, index};

    fn span(start: NaiveDate, end: NaiveDate, idx: u32) -> LeaveSpan {
        LeaveSpan::new(start, end, index(idx))
    }

    #[test]
    fn test_accessors() {
        let leave = span(date(2024, 2, 8), date(2024, 2, 10), 1);

        assert_eq!(leave.start(), date(2024, 2, 8));
        assert_eq!(leave.end(), date(2024, 2, 10));
        assert_eq!(leave.index(), 1);
        assert_eq!(leave.duration_days(), 2);
        assert_eq!(leave.calendar_days(), 3);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let leave = span(date(2024, 2, 28), date(2024, 3, 2), 3);

        assert!(!leave.contains(date(2024, 2, 27)));
        assert!(leave.contains(date(2024, 2, 28)));
        assert!(leave.contains(date(2024, 2, 29)));
        assert!(leave.contains(date(2024, 3, 2)));
        assert!(!leave.contains(date(2024, 3, 3)));
    }

    #[test]
    fn test_ends_after() {
        let leave = span(date(2024, 2, 12), date(2024, 2, 15), 2);

        assert!(leave.ends_after(date(2024, 2, 13)));
        assert!(!leave.ends_after(date(2024, 2, 15)));
    }

    #[test]
    fn test_display_iso_interval() {
        let leave = span(date(2024, 9, 27), date(2024, 9, 30), 2);
        assert_eq!(leave.to_string(), "2024-09-27/2024-09-30");
    }

    #[test]
    fn test_serde_fields() {
        let leave = span(date(2024, 9, 27), date(2024, 9, 30), 2);
        let json = serde_json::to_string(&leave).expect("serialize span");
        assert_eq!(json, r#"{"start":"2024-09-27","end":"2024-09-30","index":2}"#);

        let parsed: LeaveSpan = serde_json::from_str(&json).expect("deserialize span");
        assert_eq!(parsed, leave);
    }
}

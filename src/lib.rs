//! Leave (furlough) schedules for conscript cohorts.
//!
//! Leaves are anchored on the graduation date and repeat every 6 or 8 weeks
//! until discharge:
//!
//! ```
//! use chrono::NaiveDate;
//! use furlough::{CycleLength, generate};
//!
//! let graduation = NaiveDate::from_ymd_opt(2024, 8, 2).unwrap();
//! let discharge = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
//! let spans = generate(graduation, discharge, CycleLength::Eight);
//!
//! assert_eq!(spans[1].to_string(), "2024-09-27/2024-09-30");
//! ```

mod calendar;
mod cohort;
mod consts;
mod cycle;
mod generate;
mod prelude;
mod span;
#[cfg(test)]
mod test_utils;

pub use calendar::{DayCell, Marker, MonthGrid, Schedule, months_between};
pub use cohort::{AnchorDates, Cohort, DEFAULT_COHORT, cohort, cohorts};
pub use consts::*;
pub use cycle::CycleLength;
pub use generate::{LeaveSpans, estimate_graduation, generate, generate_for_weeks};
pub use span::LeaveSpan;

/// Errors raised when building schedules from raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Week count other than 6 or 8.
    #[error("Unsupported cycle: {0} weeks (must be 6 or 8)")]
    UnsupportedCycle(u8),

    /// Cycle text that is not a number of weeks.
    #[error("Invalid cycle: {0:?}")]
    InvalidCycle(String),

    /// Date text that is not `YYYY-MM-DD`.
    #[error("Invalid date {input:?}")]
    InvalidDate {
        input:  String,
        #[source]
        source: chrono::ParseError,
    },

    /// Cohort id missing from the table.
    #[error("Unknown cohort: {0}")]
    UnknownCohort(u16),

    /// Date arithmetic left the representable calendar range.
    #[error("Date out of range")]
    DateOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScheduleError::UnsupportedCycle(7).to_string(),
            "Unsupported cycle: 7 weeks (must be 6 or 8)"
        );
        assert_eq!(ScheduleError::UnknownCohort(900).to_string(), "Unknown cohort: 900");
        assert_eq!(
            ScheduleError::InvalidCycle("six".to_owned()).to_string(),
            r#"Invalid cycle: "six""#
        );
    }

    #[test]
    fn test_invalid_date_keeps_source() {
        let err = "2024-02-30"
            .parse::<chrono::NaiveDate>()
            .map_err(|source| ScheduleError::InvalidDate {
                input: "2024-02-30".to_owned(),
                source,
            })
            .expect_err("February 30th does not exist");

        assert_eq!(err.to_string(), r#"Invalid date "2024-02-30""#);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_public_api_end_to_end() {
        let anchors = cohort(DEFAULT_COHORT).expect("default cohort is listed");
        let schedule = Schedule::new(anchors, CycleLength::default()).expect("in range");

        assert_eq!(schedule.cycle(), CycleLength::Six);
        assert_eq!(schedule.spans(), anchors.leave_spans(CycleLength::Six).expect("in range"));
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    DAYS_PER_WEEK, FINAL_LEAVE_BONUS_DAYS, LONG_CYCLE_LEAVE_DAYS, LONG_CYCLE_WEEKS,
    SHORT_CYCLE_LEAVE_DAYS, SHORT_CYCLE_WEEKS, ScheduleError, prelude::*,
};

/// Interval between the starts of consecutive leaves.
///
/// Only the two cycles in use are representable; any other week count is
/// rejected at conversion time rather than mapped onto one of them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum CycleLength {
    /// Six weeks: 2-night leaves, 3 nights on the last one
    #[default]
    #[display(fmt = "6 weeks")]
    Six,
    /// Eight weeks: 3-night leaves, 4 nights on the last one
    #[display(fmt = "8 weeks")]
    Eight,
}

impl CycleLength {
    /// Converts a raw week count.
    ///
    /// # Errors
    /// Returns `ScheduleError::UnsupportedCycle` for anything but 6 or 8.
    pub fn from_weeks(weeks: u8) -> Result<Self, ScheduleError> {
        match weeks {
            SHORT_CYCLE_WEEKS => Ok(Self::Six),
            LONG_CYCLE_WEEKS => Ok(Self::Eight),
            other => Err(ScheduleError::UnsupportedCycle(other)),
        }
    }

    /// Week count of the cycle
    #[inline]
    pub const fn weeks(self) -> u8 {
        match self {
            Self::Six => SHORT_CYCLE_WEEKS,
            Self::Eight => LONG_CYCLE_WEEKS,
        }
    }

    /// Length of the cycle in days
    #[inline]
    pub const fn days(self) -> u64 {
        self.weeks() as u64 * DAYS_PER_WEEK
    }

    /// `end - start` of a leave that is neither the first nor the last
    #[inline]
    pub const fn regular_leave_days(self) -> u64 {
        match self {
            Self::Six => SHORT_CYCLE_LEAVE_DAYS,
            Self::Eight => LONG_CYCLE_LEAVE_DAYS,
        }
    }

    /// `end - start` of the last leave before discharge
    #[inline]
    pub const fn final_leave_days(self) -> u64 {
        self.regular_leave_days() + FINAL_LEAVE_BONUS_DAYS
    }

    /// All supported cycles, shortest first
    pub const ALL: [Self; 2] = [Self::Six, Self::Eight];
}

impl TryFrom<u8> for CycleLength {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_weeks(value)
    }
}

impl From<CycleLength> for u8 {
    fn from(cycle: CycleLength) -> Self {
        cycle.weeks()
    }
}

impl FromStr for CycleLength {
    type Err = ScheduleError;

    /// Accepts `6`, `8`, and the suffixed forms `6w` / `8w`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix(['w', 'W']).unwrap_or(trimmed);
        let weeks = digits
            .parse::<u8>()
            .map_err(|_| ScheduleError::InvalidCycle(s.to_owned()))?;
        Self::from_weeks(weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_weeks() {
        assert_eq!(CycleLength::from_weeks(6), Ok(CycleLength::Six));
        assert_eq!(CycleLength::from_weeks(8), Ok(CycleLength::Eight));

        for weeks in [0, 1, 4, 7, 9, 12, u8::MAX] {
            assert_eq!(
                CycleLength::from_weeks(weeks),
                Err(ScheduleError::UnsupportedCycle(weeks)),
                "week count {weeks} must be rejected"
            );
        }
    }

    #[test]
    fn test_leave_lengths() {
        assert_eq!(CycleLength::Six.regular_leave_days(), 2);
        assert_eq!(CycleLength::Six.final_leave_days(), 3);
        assert_eq!(CycleLength::Eight.regular_leave_days(), 3);
        assert_eq!(CycleLength::Eight.final_leave_days(), 4);
        assert_eq!(CycleLength::Six.days(), 42);
        assert_eq!(CycleLength::Eight.days(), 56);
    }

    #[test]
    fn test_parse() {
        assert_eq!("6".parse::<CycleLength>(), Ok(CycleLength::Six));
        assert_eq!(" 8w ".parse::<CycleLength>(), Ok(CycleLength::Eight));
        assert_eq!("8W".parse::<CycleLength>(), Ok(CycleLength::Eight));
        assert_eq!(
            "7".parse::<CycleLength>(),
            Err(ScheduleError::UnsupportedCycle(7))
        );
        assert!(matches!(
            "six".parse::<CycleLength>(),
            Err(ScheduleError::InvalidCycle(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(CycleLength::Six.to_string(), "6 weeks");
        assert_eq!(CycleLength::Eight.to_string(), "8 weeks");
    }

    #[test]
    fn test_serde_as_week_count() {
        let json = serde_json::to_string(&CycleLength::Eight).expect("serialize cycle");
        assert_eq!(json, "8");

        let parsed: CycleLength = serde_json::from_str("6").expect("deserialize cycle");
        assert_eq!(parsed, CycleLength::Six);

        assert!(serde_json::from_str::<CycleLength>("7").is_err());
    }
}

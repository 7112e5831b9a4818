//! Leave-span generation.
//!
//! Every leave start is an exact multiple of the cycle after graduation:
//! leave `i` starts `cycle * (i - 1)` weeks after the graduation date. The
//! first leave is always 2 nights. Later leaves last the cycle's regular
//! length, except the one whose successor would start after discharge,
//! which gets one extra day. Only the next start is checked against the
//! discharge date, so the last leave may end after it.

use std::iter::FusedIterator;
use std::num::NonZeroU32;

use crate::{
    CycleLength, FIRST_LEAVE_DAYS, GRADUATION_FALLBACK_DAYS, LeaveSpan, ScheduleError, prelude::*,
};

/// Generates the full leave schedule.
///
/// The first span is emitted unconditionally, even when `graduation` is on
/// or after `discharge`.
pub fn generate(graduation: NaiveDate, discharge: NaiveDate, cycle: CycleLength) -> Vec<LeaveSpan> {
    LeaveSpans::new(graduation, discharge, cycle).collect()
}

/// Same as [`generate`], taking the cycle as a raw week count.
///
/// # Errors
/// Returns `ScheduleError::UnsupportedCycle` unless `weeks` is 6 or 8.
pub fn generate_for_weeks(
    graduation: NaiveDate,
    discharge: NaiveDate,
    weeks: u8,
) -> Result<Vec<LeaveSpan>, ScheduleError> {
    let cycle = CycleLength::from_weeks(weeks)?;
    Ok(generate(graduation, discharge, cycle))
}

/// Graduation date assumed when a cohort has no official one.
///
/// Returns `None` only if the result is outside chrono's date range.
pub fn estimate_graduation(enlistment: NaiveDate) -> Option<NaiveDate> {
    enlistment.checked_add_days(Days::new(GRADUATION_FALLBACK_DAYS))
}

/// Lazy iterator over the leave spans of one schedule.
#[derive(Debug, Clone)]
pub struct LeaveSpans {
    graduation: NaiveDate,
    discharge:  NaiveDate,
    cycle:      CycleLength,
    next_index: u32,
    done:       bool,
}

impl LeaveSpans {
    pub const fn new(graduation: NaiveDate, discharge: NaiveDate, cycle: CycleLength) -> Self {
        Self {
            graduation,
            discharge,
            cycle,
            next_index: 1,
            done: false,
        }
    }

    /// Start of the leave at 1-based `index`, or `None` past chrono's range.
    fn start_of(&self, index: u32) -> Option<NaiveDate> {
        let cycles = u64::from(index.checked_sub(1)?);
        let offset = cycles.checked_mul(self.cycle.days())?;
        self.graduation.checked_add_days(Days::new(offset))
    }

    /// A start beyond chrono's range is necessarily after discharge.
    fn is_after_discharge(&self, start: Option<NaiveDate>) -> bool {
        start.is_none_or(|start| start > self.discharge)
    }
}

fn shift(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

impl Iterator for LeaveSpans {
    type Item = LeaveSpan;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let index = NonZeroU32::new(self.next_index)?;

        if index.get() == 1 {
            self.next_index = 2;
            let start = self.graduation;
            return Some(LeaveSpan::new(start, shift(start, FIRST_LEAVE_DAYS), index));
        }

        let start = match self.start_of(index.get()) {
            Some(start) if start <= self.discharge => start,
            _ => {
                self.done = true;
                return None;
            }
        };

        let next_start = index.get().checked_add(1).and_then(|next| self.start_of(next));
        let length = if self.is_after_discharge(next_start) {
            self.done = true;
            self.cycle.final_leave_days()
        } else {
            self.cycle.regular_leave_days()
        };

        match self.next_index.checked_add(1) {
            Some(next) => self.next_index = next,
            None => self.done = true,
        }
        Some(LeaveSpan::new(start, shift(start, length), index))
    }
}

impl FusedIterator for LeaveSpans {}

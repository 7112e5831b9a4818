//! Month-grid view of a leave schedule.
//!
//! A [`Schedule`] bundles resolved anchor dates, the selected cycle and the
//! generated spans. It answers per-day questions (on leave? anchor day?) and
//! lays out Sunday-first month grids covering enlistment through discharge.
//! Changing cohort or cycle means building a new `Schedule`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    AnchorDates, CycleLength, DAYS_IN_WEEK_ROW, LeaveSpan, MONTH_HEADING_FORMAT, SUMMARY_DATE_FORMAT,
    ScheduleError, WEEKDAY_HEADER, generate, prelude::*,
};

/// Anchor day shown on a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[display(fmt = "Enlistment")]
    Enlistment,
    #[display(fmt = "Graduation")]
    Graduation,
    #[display(fmt = "Discharge")]
    Discharge,
}

impl Marker {
    /// Single-letter tag used in text grids
    pub const fn tag(self) -> char {
        match self {
            Self::Enlistment => 'E',
            Self::Graduation => 'G',
            Self::Discharge => 'D',
        }
    }
}

/// A computed schedule with its resolved anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    enlistment:           NaiveDate,
    graduation:           NaiveDate,
    graduation_estimated: bool,
    discharge:            NaiveDate,
    cycle:                CycleLength,
    spans:                Vec<LeaveSpan>,
}

impl Schedule {
    /// Resolves the graduation date and generates the spans.
    ///
    /// # Errors
    /// Returns `ScheduleError::DateOutOfRange` if the graduation estimate overflows.
    pub fn new(anchors: AnchorDates, cycle: CycleLength) -> Result<Self, ScheduleError> {
        let graduation = anchors.resolved_graduation()?;
        let spans = generate(graduation, anchors.discharge, cycle);
        tracing::debug!(
            %graduation,
            discharge = %anchors.discharge,
            %cycle,
            spans = spans.len(),
            "generated leave schedule"
        );

        Ok(Self {
            enlistment: anchors.enlistment,
            graduation,
            graduation_estimated: anchors.is_graduation_estimated(),
            discharge: anchors.discharge,
            cycle,
            spans,
        })
    }

    pub const fn enlistment(&self) -> NaiveDate {
        self.enlistment
    }

    pub const fn graduation(&self) -> NaiveDate {
        self.graduation
    }

    /// True when the graduation date came from the enlistment + 35 days fallback
    pub const fn is_graduation_estimated(&self) -> bool {
        self.graduation_estimated
    }

    pub const fn discharge(&self) -> NaiveDate {
        self.discharge
    }

    pub const fn cycle(&self) -> CycleLength {
        self.cycle
    }

    pub fn spans(&self) -> &[LeaveSpan] {
        &self.spans
    }

    /// The span covering `date`, endpoints included.
    pub fn span_containing(&self, date: NaiveDate) -> Option<&LeaveSpan> {
        self.spans.iter().find(|span| span.contains(date))
    }

    pub fn is_on_leave(&self, date: NaiveDate) -> bool {
        self.span_containing(date).is_some()
    }

    /// Anchor marker for `date`. Enlistment wins over graduation, which wins over discharge.
    pub fn marker(&self, date: NaiveDate) -> Option<Marker> {
        if date == self.enlistment {
            Some(Marker::Enlistment)
        } else if date == self.graduation {
            Some(Marker::Graduation)
        } else if date == self.discharge {
            Some(Marker::Discharge)
        } else {
            None
        }
    }

    /// One grid per month from the enlistment month through the discharge month.
    ///
    /// # Errors
    /// Returns `ScheduleError::DateOutOfRange` if a grid boundary leaves chrono's range.
    pub fn months(&self) -> Result<Vec<MonthGrid>, ScheduleError> {
        months_between(self.enlistment, self.discharge)?
            .into_iter()
            .map(|month| MonthGrid::new(month, self))
            .collect()
    }

    /// Human-readable anchor summary, one line per anchor.
    pub fn summary(&self) -> String {
        let estimated = if self.graduation_estimated { " (estimated)" } else { "" };
        format!(
            "Enlistment: {}\nGraduation: {}{estimated}\nDischarge:  {}\nCycle:      {}",
            self.enlistment.format(SUMMARY_DATE_FORMAT),
            self.graduation.format(SUMMARY_DATE_FORMAT),
            self.discharge.format(SUMMARY_DATE_FORMAT),
            self.cycle,
        )
    }
}

/// First day of every month from `from`'s month through `to`'s month.
///
/// Empty when `to` falls in an earlier month than `from`.
///
/// # Errors
/// Returns `ScheduleError::DateOutOfRange` if stepping a month overflows.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, ScheduleError> {
    let last = first_of_month(to)?;
    let mut current = first_of_month(from)?;
    let mut months = Vec::new();

    while current <= last {
        months.push(current);
        if current == last {
            break;
        }
        current = current
            .checked_add_months(Months::new(1))
            .ok_or(ScheduleError::DateOutOfRange)?;
    }
    Ok(months)
}

fn first_of_month(date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    date.with_day(1).ok_or(ScheduleError::DateOutOfRange)
}

fn last_of_month(date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    first_of_month(date)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(ScheduleError::DateOutOfRange)
}

fn start_of_week(date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back))
        .ok_or(ScheduleError::DateOutOfRange)
}

fn end_of_week(date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let forward = 6 - u64::from(date.weekday().num_days_from_sunday());
    date.checked_add_days(Days::new(forward))
        .ok_or(ScheduleError::DateOutOfRange)
}

/// One day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date:     NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_month: bool,
    pub on_leave: bool,
    pub marker:   Option<Marker>,
}

/// A Sunday-first month calendar, padded to whole weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    month: NaiveDate,
    days:  Vec<DayCell>,
}

impl MonthGrid {
    /// Lays out the month containing `month` against `schedule`.
    ///
    /// # Errors
    /// Returns `ScheduleError::DateOutOfRange` at the edges of chrono's range.
    pub fn new(month: NaiveDate, schedule: &Schedule) -> Result<Self, ScheduleError> {
        let month = first_of_month(month)?;
        let first = start_of_week(month)?;
        let last = end_of_week(last_of_month(month)?)?;

        let days = first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| DayCell {
                date,
                in_month: date.month() == month.month(),
                on_leave: schedule.is_on_leave(date),
                marker: schedule.marker(date),
            })
            .collect();

        Ok(Self { month, days })
    }

    /// First day of the month shown
    pub const fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn days(&self) -> &[DayCell] {
        &self.days
    }

    /// Rows of exactly seven cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.days.chunks(DAYS_IN_WEEK_ROW)
    }

    /// Number of in-month days that are on leave
    pub fn leave_days(&self) -> usize {
        self.days
            .iter()
            .filter(|cell| cell.in_month && cell.on_leave)
            .count()
    }
}

impl fmt::Display for MonthGrid {
    /// Text grid: `*` marks leave days, `E`/`G`/`D` mark anchor days, and
    /// days outside the month are shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.month.format(MONTH_HEADING_FORMAT))?;
        let header: Vec<String> = WEEKDAY_HEADER.iter().map(|name| format!("{name:>4} ")).collect();
        writeln!(f, "{}", header.concat().trim_end())?;

        for week in self.weeks() {
            let mut row = String::new();
            for cell in week {
                if cell.in_month {
                    let tag = cell.marker.map_or(' ', Marker::tag);
                    let leave = if cell.on_leave { '*' } else { ' ' };
                    row.push_str(&format!("{:>3}{tag}{leave}", cell.date.day()));
                } else {
                    row.push_str("   . ");
                }
            }
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

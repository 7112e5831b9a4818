use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{CycleLength, LeaveSpan, ScheduleError, estimate_graduation, generate, prelude::*};

/// The three anchor dates of a conscript's service.
///
/// Ordering (`enlistment <= graduation <= discharge`) is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorDates {
    pub enlistment: NaiveDate,
    /// Official end of basic training, when published
    pub graduation: Option<NaiveDate>,
    pub discharge:  NaiveDate,
}

impl AnchorDates {
    pub const fn new(enlistment: NaiveDate, graduation: Option<NaiveDate>, discharge: NaiveDate) -> Self {
        Self {
            enlistment,
            graduation,
            discharge,
        }
    }

    /// Builds anchors from ISO `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDate` naming the first string that does not parse.
    pub fn parse(enlistment: &str, graduation: Option<&str>, discharge: &str) -> Result<Self, ScheduleError> {
        Ok(Self {
            enlistment: parse_date(enlistment)?,
            graduation: graduation.map(parse_date).transpose()?,
            discharge:  parse_date(discharge)?,
        })
    }

    /// The official graduation date, or enlistment + 35 days when unknown.
    ///
    /// # Errors
    /// Returns `ScheduleError::DateOutOfRange` if the estimate overflows.
    pub fn resolved_graduation(&self) -> Result<NaiveDate, ScheduleError> {
        match self.graduation {
            Some(graduation) => Ok(graduation),
            None => estimate_graduation(self.enlistment).ok_or(ScheduleError::DateOutOfRange),
        }
    }

    /// Whether the graduation date is estimated rather than official
    pub const fn is_graduation_estimated(&self) -> bool {
        self.graduation.is_none()
    }

    /// Leave spans for these anchors.
    ///
    /// # Errors
    /// Propagates `resolved_graduation` failures.
    pub fn leave_spans(&self, cycle: CycleLength) -> Result<Vec<LeaveSpan>, ScheduleError> {
        Ok(generate(self.resolved_graduation()?, self.discharge, cycle))
    }
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, ScheduleError> {
    s.trim()
        .parse::<NaiveDate>()
        .map_err(|source| ScheduleError::InvalidDate {
            input: s.to_owned(),
            source,
        })
}

/// A numbered intake group and its anchor dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cohort {
    pub id:      u16,
    #[serde(flatten)]
    pub anchors: AnchorDates,
}

/// (id, enlistment, graduation, discharge)
type CohortRow = (u16, &'static str, Option<&'static str>, &'static str);

const COHORT_ROWS: [CohortRow; 22] = [
    (853, "2023-12-04", None, "2025-09-03"),
    (854, "2024-01-08", Some("2024-02-08"), "2025-10-07"),
    (855, "2024-02-13", Some("2024-03-15"), "2025-11-12"),
    (856, "2024-03-18", Some("2024-04-19"), "2025-12-17"),
    (857, "2024-04-22", Some("2024-05-24"), "2026-01-21"),
    (858, "2024-05-27", Some("2024-06-28"), "2026-02-26"),
    (859, "2024-07-01", Some("2024-08-02"), "2026-03-31"),
    (860, "2024-08-05", Some("2024-09-06"), "2026-05-04"),
    (861, "2024-09-09", Some("2024-10-11"), "2026-06-08"),
    (862, "2024-10-14", Some("2024-11-15"), "2026-07-13"),
    (863, "2024-11-18", Some("2024-12-20"), "2026-08-17"),
    (864, "2024-12-23", Some("2025-01-23"), "2026-09-22"),
    (865, "2025-02-03", Some("2025-03-07"), "2026-11-02"),
    (866, "2025-03-10", Some("2025-04-11"), "2026-12-09"),
    (867, "2025-04-14", Some("2025-05-16"), "2027-01-13"),
    (868, "2025-05-19", Some("2025-06-20"), "2027-02-18"),
    (869, "2025-06-23", Some("2025-07-25"), "2027-03-22"),
    (870, "2025-07-28", Some("2025-08-29"), "2027-04-27"),
    (871, "2025-09-01", Some("2025-10-02"), "2027-05-31"),
    (872, "2025-10-13", Some("2025-11-14"), "2027-07-12"),
    (873, "2025-11-17", Some("2025-12-19"), "2027-08-16"),
    (874, "2025-12-22", Some("2026-01-23"), "2027-09-21"),
];

/// Cohort used when none is selected
pub const DEFAULT_COHORT: u16 = 859;

static COHORTS: LazyLock<BTreeMap<u16, AnchorDates>> = LazyLock::new(|| {
    COHORT_ROWS
        .iter()
        .filter_map(|&(id, enlistment, graduation, discharge)| {
            match AnchorDates::parse(enlistment, graduation, discharge) {
                Ok(anchors) => Some((id, anchors)),
                Err(err) => {
                    tracing::warn!(cohort = id, error = %err, "skipping malformed cohort row");
                    None
                }
            }
        })
        .collect()
});

/// Looks up a cohort's anchor dates.
///
/// # Errors
/// Returns `ScheduleError::UnknownCohort` if the id is not in the table.
pub fn cohort(id: u16) -> Result<AnchorDates, ScheduleError> {
    COHORTS
        .get(&id)
        .copied()
        .ok_or(ScheduleError::UnknownCohort(id))
}

/// All known cohorts in ascending id order.
pub fn cohorts() -> impl Iterator<Item = Cohort> {
    COHORTS
        .iter()
        .map(|(&id, &anchors)| Cohort { id, anchors })
}

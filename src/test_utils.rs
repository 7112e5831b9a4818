//! Shared constructors for unit tests.

use std::num::NonZeroU32;

use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year:04}-{month:02}-{day:02}"))
}

pub fn index(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or_else(|| panic!("span index must be non-zero"))
}

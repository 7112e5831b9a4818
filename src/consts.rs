/// Days from enlistment to the estimated graduation when no official date exists
pub const GRADUATION_FALLBACK_DAYS: u64 = 35;

/// Days added to the graduation date for the first leave (a 2-night/3-day leave)
pub const FIRST_LEAVE_DAYS: u64 = 2;

/// Extra day granted on the last leave before discharge
pub const FINAL_LEAVE_BONUS_DAYS: u64 = 1;

/// Days in one week
pub const DAYS_PER_WEEK: u64 = 7;

/// Week count of the short cycle
pub const SHORT_CYCLE_WEEKS: u8 = 6;
/// Week count of the long cycle
pub const LONG_CYCLE_WEEKS: u8 = 8;

/// Regular leave length (end - start) in the short cycle
pub const SHORT_CYCLE_LEAVE_DAYS: u64 = 2;
/// Regular leave length (end - start) in the long cycle
pub const LONG_CYCLE_LEAVE_DAYS: u64 = 3;

/// Columns in a calendar week row
pub const DAYS_IN_WEEK_ROW: usize = 7;

/// Month heading format for calendar grids
pub const MONTH_HEADING_FORMAT: &str = "%Y.%m";

/// Long date format used in schedule summaries
pub const SUMMARY_DATE_FORMAT: &str = "%Y.%m.%d (%a)";

/// Weekday header for Sunday-first grids
pub const WEEKDAY_HEADER: [&str; DAYS_IN_WEEK_ROW] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

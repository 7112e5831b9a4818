//! Prelude module for the furlough crate.
//!
//! Re-exports the derive macros and chrono types shared across modules.

#[allow(unused_imports)]
pub use chrono::{Datelike, Days, Months, NaiveDate};
#[allow(unused_imports)]
pub use derive_more::Display;

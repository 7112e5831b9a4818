use std::fmt::Write as _;

use anyhow::Result;
use furlough::{Cohort, LeaveSpan, Schedule};
use serde::Serialize;

use crate::cli::{Format, RenderArgs};

const LIST_DATE_FORMAT: &str = "%Y.%m.%d";

/// Renders the cohort table.
pub fn cohorts(table: &[Cohort], format: Format) -> Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(table)? + "\n");
    }

    let mut out = String::from("Cohort  Enlistment  Graduation   Discharge\n");
    for entry in table {
        let anchors = entry.anchors;
        let graduation = anchors.graduation.map_or_else(
            || "(estimated)".to_owned(),
            |date| date.format(LIST_DATE_FORMAT).to_string(),
        );
        writeln!(
            out,
            "{:<6}  {}  {graduation:<11}  {}",
            entry.id,
            anchors.enlistment.format(LIST_DATE_FORMAT),
            anchors.discharge.format(LIST_DATE_FORMAT),
        )?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct ScheduleReport<'a> {
    #[serde(flatten)]
    schedule: &'a Schedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    months:   Option<Vec<furlough::MonthGrid>>,
}

/// Renders a schedule with its spans and, unless disabled, its month grids.
pub fn schedule(schedule: &Schedule, args: &RenderArgs) -> Result<String> {
    let months = if args.no_grid { None } else { Some(schedule.months()?) };

    if args.format == Format::Json {
        let report = ScheduleReport { schedule, months };
        return Ok(serde_json::to_string_pretty(&report)? + "\n");
    }

    let mut out = schedule.summary();
    out.push_str("\n\n");
    for span in schedule.spans() {
        writeln!(out, "{}", span_line(span, schedule))?;
    }

    for grid in months.iter().flatten() {
        writeln!(out)?;
        write!(out, "{grid}")?;
    }
    Ok(out)
}

fn span_line(span: &LeaveSpan, schedule: &Schedule) -> String {
    let nights = span.duration_days();
    let mut line = format!(
        "#{:<3} {} - {}  {nights} nights / {} days",
        span.index(),
        span.start().format(LIST_DATE_FORMAT),
        span.end().format(LIST_DATE_FORMAT),
        span.calendar_days(),
    );
    if span.ends_after(schedule.discharge()) {
        line.push_str("  (ends after discharge)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use furlough::{CycleLength, cohort};

    fn render_args(format: Format, no_grid: bool) -> RenderArgs {
        RenderArgs {
            cycle: CycleLength::Six,
            format,
            no_grid,
        }
    }

    fn schedule_859() -> Schedule {
        let anchors = cohort(859).expect("859 is listed");
        Schedule::new(anchors, CycleLength::Six).expect("schedule in range")
    }

    #[test]
    fn test_text_report_lists_spans() {
        let text = schedule(&schedule_859(), &render_args(Format::Text, true)).expect("render");

        assert!(text.starts_with("Enlistment: 2024.07.01 (Mon)"));
        assert!(text.contains("#1   2024.08.02 - 2024.08.04  2 nights / 3 days"));
        assert!(text.contains("#15  2026.03.13 - 2026.03.16  3 nights / 4 days"));
        assert!(!text.contains("2024.08\n"));
    }

    #[test]
    fn test_text_report_with_grids() {
        let text = schedule(&schedule_859(), &render_args(Format::Text, false)).expect("render");

        assert!(text.contains("\n2024.07\n"));
        assert!(text.contains("\n2026.03\n"));
    }

    #[test]
    fn test_json_report() {
        let json = schedule(&schedule_859(), &render_args(Format::Json, true)).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["graduation"], "2024-08-02");
        assert_eq!(value["cycle"], 6);
        assert_eq!(value["spans"][1]["start"], "2024-09-13");
        assert!(value.get("months").is_none());
    }

    #[test]
    fn test_span_after_discharge_is_flagged() {
        let anchors = furlough::AnchorDates::parse("2023-11-27", Some("2024-01-01"), "2024-02-13")
            .expect("valid dates");
        let schedule = Schedule::new(anchors, CycleLength::Six).expect("in range");
        let text = self::schedule(&schedule, &render_args(Format::Text, true)).expect("render");

        assert!(text.contains("#2   2024.02.12 - 2024.02.15  3 nights / 4 days  (ends after discharge)"));
    }

    #[test]
    fn test_cohort_table() {
        let table: Vec<_> = furlough::cohorts().collect();
        let text = cohorts(&table, Format::Text).expect("render");

        assert!(text.contains("853     2023.12.04  (estimated)  2025.09.03"));
        assert!(text.contains("874     2025.12.22  2026.01.23   2027.09.21"));
    }
}

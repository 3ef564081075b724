use crate::errors::CalendarError;
use crate::level::LevelThresholds;
use crate::models::{Day, Grid, RawDay, Week};
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

/// Arranges a contiguous, strictly increasing day series into weeks that
/// start on `week_start`. Days outside the series are left out rather than
/// zero-filled, so only the first and last week can be short.
pub fn build_grid(
    days: &[RawDay],
    week_start: Weekday,
    thresholds: &LevelThresholds,
) -> Result<Grid, CalendarError> {
    let mut weeks: Vec<Week> = Vec::new();
    let mut current: Vec<Day> = Vec::with_capacity(7);
    let mut previous: Option<NaiveDate> = None;

    for raw in days {
        if let Some(previous) = previous {
            if previous.succ_opt() != Some(raw.date) {
                return Err(CalendarError::MalformedInput {
                    previous,
                    next: raw.date,
                });
            }
        }
        previous = Some(raw.date);

        let (count, level) = thresholds.quantize(raw.date, raw.count)?;

        if raw.date.weekday() == week_start && !current.is_empty() {
            weeks.push(Week {
                days: std::mem::take(&mut current),
            });
        }
        current.push(Day {
            date: raw.date,
            count,
            level,
        });
    }

    if !current.is_empty() {
        weeks.push(Week { days: current });
    }

    debug!(days = days.len(), weeks = weeks.len(), "built calendar grid");
    Ok(Grid { weeks })
}

//! Trailing-window selection and month labels for the calendar axis.
//!
//! Both operations are stateless: every range change re-runs them over the
//! full grid, and labels are always computed on the already-filtered weeks
//! so their indices point into the window, not the original grid.

use crate::config::RangeSettings;
use crate::models::{DisplayRange, DisplayWindow, Grid, MonthLabel, Week};
use chrono::{Datelike, Days, NaiveDate};

/// Keeps the weeks whose last day is no more than `days` before `today`.
/// `None` returns every week, as does a window reaching past the earliest
/// representable date.
pub fn filter_weeks(weeks: &[Week], days: Option<u32>, today: NaiveDate) -> Vec<Week> {
    let Some(cutoff) = days.and_then(|days| today.checked_sub_days(Days::new(u64::from(days))))
    else {
        return weeks.to_vec();
    };

    weeks
        .iter()
        .filter(|week| week.last_day().is_some_and(|day| day.date >= cutoff))
        .cloned()
        .collect()
}

pub fn month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month = None;

    for (week_index, week) in weeks.iter().enumerate() {
        let Some(first) = week.first_day() else {
            continue;
        };
        let month = first.date.month();
        if last_month != Some(month) {
            labels.push(MonthLabel {
                label: first.date.format("%b").to_string(),
                week_index,
            });
            last_month = Some(month);
        }
    }

    labels
}

pub fn display_window(
    grid: &Grid,
    range: DisplayRange,
    ranges: &RangeSettings,
    today: NaiveDate,
) -> DisplayWindow {
    let spec = ranges.spec(range);
    let weeks = filter_weeks(&grid.weeks, spec.days, today);
    let labels = month_labels(&weeks);

    DisplayWindow {
        range,
        weeks,
        labels,
        cell_size: spec.cell_size,
    }
}

use crate::errors::CalendarError;
use crate::models::{BestDay, Day, Grid, StatsSummary};
use crate::streaks::detect_streaks;
use chrono::NaiveDate;

pub fn build_stats(grid: &Grid, today: NaiveDate) -> StatsSummary {
    let days: Vec<Day> = grid.days().copied().collect();
    let (current_streak, longest_streak) = detect_streaks(&days, today);
    let total_count = total_count(&days);

    StatsSummary {
        total_count,
        best_day: best_day(&days),
        average_per_day: average_per_day(total_count, days.len()),
        current_streak,
        longest_streak,
    }
}

pub fn total_count(days: &[Day]) -> u64 {
    days.iter().map(|day| u64::from(day.count)).sum()
}

/// Highest-count day, earliest first on ties. An empty slice yields the
/// `{date: None, count: 0}` sentinel.
pub fn best_day(days: &[Day]) -> BestDay {
    best_day_strict(days).unwrap_or_default()
}

pub fn best_day_strict(days: &[Day]) -> Result<BestDay, CalendarError> {
    let mut iter = days.iter();
    let first = iter.next().ok_or(CalendarError::EmptyGrid)?;
    let best = iter.fold(first, |best, day| if day.count > best.count { day } else { best });
    Ok(BestDay {
        date: Some(best.date),
        count: best.count,
    })
}

pub fn average_per_day(total: u64, day_count: usize) -> f64 {
    if day_count == 0 {
        0.0
    } else {
        total as f64 / day_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_grid;
    use crate::level::LevelThresholds;
    use crate::models::{RawDay, Streak};
    use chrono::{Duration, Weekday};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn grid(counts: &[i64]) -> Grid {
        let raw: Vec<RawDay> = counts
            .iter()
            .enumerate()
            .map(|(offset, &count)| RawDay::new(start() + Duration::days(offset as i64), count))
            .collect();
        build_grid(&raw, Weekday::Sun, &LevelThresholds::default()).unwrap()
    }

    #[test]
    fn summary_for_mixed_activity() {
        let grid = grid(&[0, 1, 0, 3, 4, 5, 0, 2, 6, 9]);
        let today = start() + Duration::days(9);
        let stats = build_stats(&grid, today);

        assert_eq!(stats.total_count, 30);
        assert_eq!(stats.average_per_day, 3.0);
        assert_eq!(
            stats.best_day,
            BestDay {
                date: Some(today),
                count: 9
            }
        );
        assert_eq!(
            stats.current_streak,
            Streak::spanning(start() + Duration::days(7), today, 3)
        );
        assert_eq!(stats.longest_streak.count, 3);
        assert!(stats.longest_streak.count >= stats.current_streak.count);
    }

    #[test]
    fn summary_for_idle_week() {
        let grid = grid(&[0; 7]);
        let stats = build_stats(&grid, start() + Duration::days(3));

        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.best_day.count, 0);
        assert_eq!(stats.current_streak, Streak::empty());
        assert_eq!(stats.longest_streak, Streak::empty());
        assert_eq!(stats.average_per_day, 0.0);
    }

    #[test]
    fn total_matches_sum_of_days() {
        let grid = grid(&[5, 10, 0, 7, 1, 1, 0, 0, 3, 2, 40]);
        let stats = build_stats(&grid, start());
        let sum: u64 = grid.days().map(|d| u64::from(d.count)).sum();
        assert_eq!(stats.total_count, sum);
    }

    #[test]
    fn best_day_prefers_earliest_on_tie() {
        let grid = grid(&[2, 8, 1, 8, 3]);
        let days: Vec<Day> = grid.days().copied().collect();
        assert_eq!(
            best_day(&days),
            BestDay {
                date: Some(start() + Duration::days(1)),
                count: 8
            }
        );
    }

    #[test]
    fn empty_grid_uses_sentinel() {
        let stats = build_stats(&Grid::default(), start());
        assert_eq!(stats.best_day, BestDay::default());
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.average_per_day, 0.0);
        assert_eq!(best_day_strict(&[]), Err(CalendarError::EmptyGrid));
    }
}

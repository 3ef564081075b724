use crate::models::{Day, Streak};
use chrono::NaiveDate;
use tracing::debug;

/// Returns `(current, longest)` for a date-ordered, gap-free day sequence.
pub fn detect_streaks(days: &[Day], today: NaiveDate) -> (Streak, Streak) {
    let current = current_streak(days, today);
    let longest = longest_streak(days);
    debug!(current = current.count, longest = longest.count, %today, "detected streaks");
    (current, longest)
}

/// The run of active days ending on `today`, or on the day before when
/// today has no activity yet.
pub fn current_streak(days: &[Day], today: NaiveDate) -> Streak {
    let anchor = position_of(days, today)
        .filter(|&index| days[index].is_active())
        .or_else(|| {
            today
                .pred_opt()
                .and_then(|yesterday| position_of(days, yesterday))
                .filter(|&index| days[index].is_active())
        });

    let Some(end) = anchor else {
        return Streak::empty();
    };

    let start = days[..=end]
        .iter()
        .rposition(|day| !day.is_active())
        .map_or(0, |inactive| inactive + 1);

    Streak::spanning(days[start].date, days[end].date, (end - start + 1) as u32)
}

/// Longest run anywhere in the sequence; the earliest run wins a tie.
pub fn longest_streak(days: &[Day]) -> Streak {
    let mut longest = Streak::empty();
    let mut run_start: Option<usize> = None;

    for (index, day) in days.iter().enumerate() {
        if day.is_active() {
            let start = *run_start.get_or_insert(index);
            let length = (index - start + 1) as u32;
            if length > longest.count {
                longest = Streak::spanning(days[start].date, day.date, length);
            }
        } else {
            run_start = None;
        }
    }

    longest
}

fn position_of(days: &[Day], date: NaiveDate) -> Option<usize> {
    let first = days.first()?.date;
    let offset = usize::try_from((date - first).num_days()).ok()?;
    days.get(offset).filter(|day| day.date == date).map(|_| offset)
}

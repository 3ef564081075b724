use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One `(date, count)` pair as handed over by whatever acquired the data.
/// Counts arrive signed so that negative values can be rejected rather than
/// silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDay {
    pub date: NaiveDate,
    pub count: i64,
}

impl RawDay {
    pub fn new(date: NaiveDate, count: i64) -> Self {
        Self { date, count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

impl Day {
    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// A run of 1 to 7 consecutive days; index 0 falls on the configured
/// start-of-week unless this is the first week of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub days: Vec<Day>,
}

impl Week {
    pub fn first_day(&self) -> Option<&Day> {
        self.days.first()
    }

    pub fn last_day(&self) -> Option<&Day> {
        self.days.last()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    pub weeks: Vec<Week>,
}

impl Grid {
    /// Flat, date-ordered view over every day in the grid.
    pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|week| week.days.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.day_count() == 0
    }

    pub fn get(&self, week_index: usize, day_index: usize) -> Option<&Day> {
        self.weeks.get(week_index)?.days.get(day_index)
    }
}

/// A maximal run of active days. `count == 0` means "no streak" and both
/// dates are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub count: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Streak {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn spanning(start: NaiveDate, end: NaiveDate, count: u32) -> Self {
        Self {
            count,
            start_date: Some(start),
            end_date: Some(end),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestDay {
    pub date: Option<NaiveDate>,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_count: u64,
    pub best_day: BestDay,
    pub average_per_day: f64,
    pub current_streak: Streak,
    pub longest_streak: Streak,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayRange {
    Recent,
    Medium,
    #[default]
    Full,
}

impl DisplayRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Medium => "medium",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLabel {
    pub label: String,
    pub week_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayWindow {
    pub range: DisplayRange,
    pub weeks: Vec<Week>,
    pub labels: Vec<MonthLabel>,
    pub cell_size: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    pub avatar_url: String,
}

/// Everything built from one delivery of activity data. Replaced wholesale
/// on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionData {
    pub user: UserInfo,
    pub weeks: Grid,
    pub stats: StatsSummary,
    pub last_updated: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestRequest {
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub days: Vec<RawDay>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodayQuery {
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    #[serde(default)]
    pub range: DisplayRange,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

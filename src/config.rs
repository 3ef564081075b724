use crate::level::LevelThresholds;
use crate::models::DisplayRange;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

fn default_week_start() -> Weekday {
    Weekday::Sun
}

/// Trailing window for a named range. `days == None` keeps every week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSpec {
    pub days: Option<u32>,
    pub cell_size: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSettings {
    pub recent: RangeSpec,
    pub medium: RangeSpec,
    pub full: RangeSpec,
}

impl RangeSettings {
    pub fn spec(&self, range: DisplayRange) -> RangeSpec {
        match range {
            DisplayRange::Recent => self.recent,
            DisplayRange::Medium => self.medium,
            DisplayRange::Full => self.full,
        }
    }
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            recent: RangeSpec {
                days: Some(30),
                cell_size: 14,
            },
            medium: RangeSpec {
                days: Some(84),
                cell_size: 11,
            },
            full: RangeSpec {
                days: None,
                cell_size: 8,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
    #[serde(default)]
    pub thresholds: LevelThresholds,
    #[serde(default)]
    pub ranges: RangeSettings,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            thresholds: LevelThresholds::default(),
            ranges: RangeSettings::default(),
        }
    }
}

pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("CALENDAR_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("config/calendar.json")
}

pub async fn load_config(path: &Path) -> CalendarConfig {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(config) => {
                info!("loaded calendar config from {}", path.display());
                config
            }
            Err(err) => {
                error!("failed to parse config file: {err}");
                CalendarConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => CalendarConfig::default(),
        Err(err) => {
            error!("failed to read config file: {err}");
            CalendarConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("streak_calendar_{}_{name}.json", std::process::id()));
        path
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{ "weekStart": "Mon", "ranges": { "recent": { "days": 14, "cellSize": 20 } } }"#)
                .unwrap();
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.thresholds, LevelThresholds::default());
        assert_eq!(config.ranges.recent.days, Some(14));
        assert_eq!(config.ranges.medium, RangeSettings::default().medium);
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let config = load_config(&temp_path("missing")).await;
        assert_eq!(config, CalendarConfig::default());
    }

    #[tokio::test]
    async fn invalid_thresholds_fall_back_to_defaults() {
        let path = temp_path("bad_thresholds");
        fs::write(&path, r#"{ "thresholds": [3, 2, 1, 0] }"#).await.unwrap();
        let config = load_config(&path).await;
        let _ = fs::remove_file(&path).await;
        assert_eq!(config.thresholds, LevelThresholds::default());
    }

    #[tokio::test]
    async fn custom_thresholds_are_loaded() {
        let path = temp_path("custom");
        fs::write(&path, r#"{ "thresholds": [1, 2, 3, 4], "weekStart": "Monday" }"#)
            .await
            .unwrap();
        let config = load_config(&path).await;
        let _ = fs::remove_file(&path).await;
        assert_eq!(config.thresholds.bounds(), [1, 2, 3, 4]);
        assert_eq!(config.week_start, Weekday::Mon);
    }
}

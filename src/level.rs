use crate::errors::{CalendarError, ThresholdError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: u8 = 4;

/// Lower bounds (inclusive) for levels 1 through 4. A count below the first
/// bound is level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 4]", into = "[u32; 4]")]
pub struct LevelThresholds {
    bounds: [u32; 4],
}

impl LevelThresholds {
    pub fn new(bounds: [u32; 4]) -> Result<Self, ThresholdError> {
        if bounds[0] == 0 {
            return Err(ThresholdError("level 1 must start above zero".to_string()));
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ThresholdError(format!(
                "bounds must be strictly increasing, got {bounds:?}"
            )));
        }
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> [u32; 4] {
        self.bounds
    }

    pub fn level_for(&self, count: u32) -> u8 {
        self.bounds.iter().filter(|&&bound| count >= bound).count() as u8
    }

    /// Validates a signed count and quantizes it in one step.
    pub fn quantize(&self, date: NaiveDate, count: i64) -> Result<(u32, u8), CalendarError> {
        let count = u32::try_from(count).map_err(|_| CalendarError::InvalidCount { date, count })?;
        Ok((count, self.level_for(count)))
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            bounds: [1, 4, 7, 10],
        }
    }
}

impl TryFrom<[u32; 4]> for LevelThresholds {
    type Error = ThresholdError;

    fn try_from(bounds: [u32; 4]) -> Result<Self, Self::Error> {
        Self::new(bounds)
    }
}

impl From<LevelThresholds> for [u32; 4] {
    fn from(thresholds: LevelThresholds) -> Self {
        thresholds.bounds
    }
}

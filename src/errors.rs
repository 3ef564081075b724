use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised by the calendar core. All are local to the call that
/// produced them and carry enough context to show the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid count {count} on {date}: counts must be non-negative and fit in 32 bits")]
    InvalidCount { date: NaiveDate, count: i64 },

    #[error("malformed input: {next} does not directly follow {previous}")]
    MalformedInput { previous: NaiveDate, next: NaiveDate },

    #[error("grid has no days")]
    EmptyGrid,
}

/// Rejected level thresholds. Only raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid level thresholds: {0}")]
pub struct ThresholdError(pub String);

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        let status = match err {
            CalendarError::InvalidCount { .. } | CalendarError::MalformedInput { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CalendarError::EmptyGrid => StatusCode::NOT_FOUND,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

use crate::calendar::build_grid;
use crate::errors::AppError;
use crate::models::{
    BestDay, ContributionData, Day, DisplayWindow, IngestRequest, StatsSummary, TodayQuery,
    UserInfo, WindowQuery,
};
use crate::state::AppState;
use crate::stats::{best_day_strict, build_stats};
use crate::window::display_window;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, info, warn};

pub async fn get_contributions(State(state): State<AppState>) -> Json<Option<ContributionData>> {
    let snapshot = state.current().await;
    Json(snapshot.map(|data| data.as_ref().clone()))
}

pub async fn put_contributions(
    State(state): State<AppState>,
    Json(payload): Json<IngestRequest>,
) -> Result<Json<ContributionData>, AppError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(AppError::bad_request("username must not be empty"));
    }

    let config = &state.config;
    let grid = build_grid(&payload.days, config.week_start, &config.thresholds).map_err(|err| {
        warn!("rejected contribution data for {username}: {err}");
        AppError::from(err)
    })?;
    let stats = build_stats(&grid, resolve_today(payload.today));

    let avatar_url = payload
        .avatar_url
        .clone()
        .unwrap_or_else(|| format!("https://github.com/{username}.png?size=80"));
    let data = ContributionData {
        user: UserInfo {
            username: username.to_string(),
            avatar_url,
        },
        weeks: grid,
        stats,
        last_updated: Utc::now().to_rfc3339(),
    };
    let previous = state.replace(data.clone()).await;
    info!(
        username,
        days = payload.days.len(),
        replaced = previous.is_some(),
        "stored contribution snapshot"
    );

    Ok(Json(data))
}

pub async fn delete_contributions(State(state): State<AppState>) -> StatusCode {
    if state.clear().await.is_some() {
        info!("cleared contribution snapshot");
    }
    StatusCode::NO_CONTENT
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<StatsSummary>, AppError> {
    let data = require_snapshot(&state).await?;
    Ok(Json(build_stats(&data.weeks, resolve_today(query.today))))
}

pub async fn get_best_day(State(state): State<AppState>) -> Result<Json<BestDay>, AppError> {
    let data = require_snapshot(&state).await?;
    let days: Vec<Day> = data.weeks.days().copied().collect();
    Ok(Json(best_day_strict(&days)?))
}

pub async fn get_window(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<DisplayWindow>, AppError> {
    let data = require_snapshot(&state).await?;
    let window = display_window(
        &data.weeks,
        query.range,
        &state.config.ranges,
        resolve_today(query.today),
    );
    debug!(
        range = query.range.as_str(),
        weeks = window.weeks.len(),
        labels = window.labels.len(),
        "built display window"
    );
    Ok(Json(window))
}

async fn require_snapshot(
    state: &AppState,
) -> Result<std::sync::Arc<ContributionData>, AppError> {
    state
        .current()
        .await
        .ok_or_else(|| AppError::not_found("no contribution data available"))
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

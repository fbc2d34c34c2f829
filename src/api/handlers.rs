//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use tracing::{info, warn};

use crate::{error::AppError, state::AppState};
use super::responses::{CoinsResponse, HealthResponse, SettingsRequest, TimerStatusResponse};

/// Handle GET /Timer/GetStatus - Remaining time and phase
pub async fn timer_status_handler(State(state): State<Arc<AppState>>) -> Json<TimerStatusResponse> {
    Json(state.timer_snapshot().into())
}

/// Handle POST /Timer/Start - Start or resume the countdown
pub async fn timer_start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerStatusResponse>, AppError> {
    let snapshot = state.start_timer()?;
    info!("Timer started at {}", snapshot.display());
    Ok(Json(snapshot.into()))
}

/// Handle POST /Timer/Pause - Stop the countdown, keeping remaining time
pub async fn timer_pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerStatusResponse>, AppError> {
    let snapshot = state.pause_timer()?;
    info!("Timer paused at {}", snapshot.display());
    Ok(Json(snapshot.into()))
}

/// Handle POST /Timer/Restart - Refill the current phase and run
pub async fn timer_restart_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerStatusResponse>, AppError> {
    let snapshot = state.restart_timer()?;
    info!("Timer restarted in {} phase", snapshot.phase.as_str());
    Ok(Json(snapshot.into()))
}

/// Handle POST /Timer/UpdateSettings - Change study and break durations
pub async fn timer_settings_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SettingsRequest>, JsonRejection>,
) -> Result<Json<TimerStatusResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected settings body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;
    let snapshot = state.update_timer_settings(request.study_time, request.break_time)?;
    Ok(Json(snapshot.into()))
}

/// Handle GET /Todo/GetTasks
pub async fn get_tasks_handler(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.tasks().await)
}

/// Handle POST /Todo/AddTask
pub async fn add_task_handler(
    State(state): State<Arc<AppState>>,
    Json(task): Json<String>,
) -> Result<Json<&'static str>, AppError> {
    state.add_task(task).await?;
    Ok(Json("Task added."))
}

/// Handle POST /Todo/DeleteTask
pub async fn delete_task_handler(
    State(state): State<Arc<AppState>>,
    Json(task): Json<String>,
) -> Result<Json<&'static str>, AppError> {
    if !state.delete_task(&task).await? {
        info!("Delete requested for unknown task: {}", task);
    }
    Ok(Json("Task removed."))
}

/// Handle POST /Todo/ReorderTasks
pub async fn reorder_tasks_handler(
    State(state): State<Arc<AppState>>,
    Json(new_order): Json<Vec<String>>,
) -> Result<Json<&'static str>, AppError> {
    state.reorder_tasks(new_order).await?;
    Ok(Json("Tasks reordered."))
}

/// Handle GET /coins - Current coin balance
pub async fn coins_handler(State(state): State<Arc<AppState>>) -> Json<CoinsResponse> {
    Json(CoinsResponse {
        coin_amount: state.coin_amount(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}

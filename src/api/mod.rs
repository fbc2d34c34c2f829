//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/Timer/GetStatus", get(timer_status_handler))
        .route("/Timer/Start", post(timer_start_handler))
        .route("/Timer/Pause", post(timer_pause_handler))
        .route("/Timer/Restart", post(timer_restart_handler))
        .route("/Timer/UpdateSettings", post(timer_settings_handler))
        .route("/Todo/GetTasks", get(get_tasks_handler))
        .route("/Todo/AddTask", post(add_task_handler))
        .route("/Todo/DeleteTask", post(delete_task_handler))
        .route("/Todo/ReorderTasks", post(reorder_tasks_handler))
        .route("/coins", get(coins_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSnapshot;

/// Timer status as shown by the page: remaining time and current phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatusResponse {
    pub time: String,
    pub is_study_timer: bool,
}

impl From<TimerSnapshot> for TimerStatusResponse {
    fn from(snapshot: TimerSnapshot) -> Self {
        Self {
            time: snapshot.display(),
            is_study_timer: snapshot.is_study_timer(),
        }
    }
}

/// Body of `POST /Timer/UpdateSettings`
///
/// Kept signed so non-positive values reach validation instead of failing
/// to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRequest {
    pub study_time: i64,
    pub break_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinsResponse {
    pub coin_amount: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}

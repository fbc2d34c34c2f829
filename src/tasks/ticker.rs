//! One-second ticker driving the study/break countdown

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::state::{AppState, TickOutcome};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that advances the shared timer once per second
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting timer ticker task");

    let mut interval = interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        match state.tick_timer() {
            Ok(TickOutcome::PhaseFinished { completed, next }) => {
                info!(
                    "{} phase finished, switching to {}",
                    completed.as_str(),
                    next.as_str()
                );
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to advance timer: {}", e);
            }
        }
    }
}

//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use tokio::sync::{watch, Mutex as AsyncMutex};
use tracing::{debug, info, warn};

use super::{Phase, PomodoroTimer, TickOutcome, TimerSettings, TimerSnapshot, TodoList};
use crate::error::AppError;

/// Shared state handed to the HTTP handlers and the ticker task
#[derive(Debug)]
pub struct AppState {
    /// The single authoritative timer; every mutation goes through this lock
    timer: Arc<Mutex<PomodoroTimer>>,
    /// Latest timer snapshot, published while the timer lock is held
    timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _timer_update_rx: watch::Receiver<TimerSnapshot>,
    /// Saved to disk on every change, so held across awaits
    todo_list: AsyncMutex<TodoList>,
    coin_amount: i64,
    pub start_time: Instant,
}

impl AppState {
    /// Create the state with a paused study timer using `settings`
    pub fn new(settings: TimerSettings, coin_amount: i64, todo_list: TodoList) -> Self {
        let timer = PomodoroTimer::with_settings(Phase::Study, settings);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.snapshot());

        Self {
            timer: Arc::new(Mutex::new(timer)),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
            todo_list: AsyncMutex::new(todo_list),
            coin_amount,
            start_time: Instant::now(),
        }
    }

    fn lock_timer(&self) -> Result<MutexGuard<'_, PomodoroTimer>, AppError> {
        self.timer
            .lock()
            .map_err(|e| AppError::StatePoisoned(format!("timer state: {}", e)))
    }

    /// Apply `updater` to the timer and publish the resulting snapshot
    fn update_timer<T, F>(&self, action: &str, updater: F) -> Result<(TimerSnapshot, T), AppError>
    where
        F: FnOnce(&mut PomodoroTimer) -> Result<T, AppError>,
    {
        let mut timer = self.lock_timer()?;
        let output = updater(&mut timer)?;
        let snapshot = timer.snapshot();

        // send_replace never fails, even with no receivers left
        self.timer_update_tx.send_replace(snapshot);
        drop(timer);

        debug!(
            "Timer {}: {} {} running={}",
            action,
            snapshot.phase.as_str(),
            snapshot.display(),
            snapshot.running
        );
        Ok((snapshot, output))
    }

    /// Start counting. A timer that completed its phase is swapped for a
    /// fresh study timer with the same settings first.
    pub fn start_timer(&self) -> Result<TimerSnapshot, AppError> {
        let (snapshot, _) = self.update_timer("start", |timer| {
            if timer.is_finished() {
                info!("Timer finished, replacing it with a fresh study timer");
                *timer = PomodoroTimer::with_settings(Phase::Study, timer.settings());
            }
            timer.start();
            Ok(())
        })?;
        Ok(snapshot)
    }

    pub fn pause_timer(&self) -> Result<TimerSnapshot, AppError> {
        let (snapshot, _) = self.update_timer("pause", |timer| {
            timer.pause();
            Ok(())
        })?;
        Ok(snapshot)
    }

    pub fn restart_timer(&self) -> Result<TimerSnapshot, AppError> {
        let (snapshot, _) = self.update_timer("restart", |timer| {
            timer.restart();
            Ok(())
        })?;
        Ok(snapshot)
    }

    pub fn update_timer_settings(
        &self,
        study_minutes: i64,
        break_minutes: i64,
    ) -> Result<TimerSnapshot, AppError> {
        let result = self.update_timer("update-settings", |timer| {
            timer
                .update_settings(study_minutes, break_minutes)
                .map_err(AppError::from)
        });

        match result {
            Ok((snapshot, _)) => {
                info!(
                    "Timer settings updated: study={}min break={}min",
                    study_minutes, break_minutes
                );
                Ok(snapshot)
            }
            Err(e) => {
                warn!("Rejected timer settings: {}", e);
                Err(e)
            }
        }
    }

    /// Advance the timer by one second; called by the ticker task only
    pub fn tick_timer(&self) -> Result<TickOutcome, AppError> {
        let mut timer = self.lock_timer()?;
        let outcome = timer.tick();
        if outcome != TickOutcome::Idle {
            self.timer_update_tx.send_replace(timer.snapshot());
        }
        Ok(outcome)
    }

    /// Latest published snapshot; never waits on the timer lock
    pub fn timer_snapshot(&self) -> TimerSnapshot {
        *self.timer_update_tx.borrow()
    }

    pub fn subscribe_timer(&self) -> watch::Receiver<TimerSnapshot> {
        self.timer_update_tx.subscribe()
    }

    pub async fn tasks(&self) -> Vec<String> {
        self.todo_list.lock().await.tasks().to_vec()
    }

    pub async fn add_task(&self, task: String) -> Result<(), AppError> {
        self.todo_list.lock().await.add(task).await
    }

    pub async fn delete_task(&self, task: &str) -> Result<bool, AppError> {
        self.todo_list.lock().await.remove(task).await
    }

    pub async fn reorder_tasks(&self, new_order: Vec<String>) -> Result<(), AppError> {
        self.todo_list.lock().await.reorder(new_order).await
    }

    pub fn coin_amount(&self) -> i64 {
        self.coin_amount
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    #[cfg(test)]
    fn with_timer<F: FnOnce(&mut PomodoroTimer)>(&self, f: F) {
        let mut timer = self.lock_timer().unwrap();
        f(&mut timer);
        self.timer_update_tx.send_replace(timer.snapshot());
    }
}

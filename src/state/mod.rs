//! State management module
//!
//! This module contains the timer state machine, the to-do list and the
//! shared application state that owns both.

pub mod app_state;
pub mod pomodoro;
pub mod todo_list;

// Re-export main types
pub use app_state::AppState;
pub use pomodoro::{Phase, PomodoroTimer, TickOutcome, TimerSettings, TimerSnapshot};
pub use todo_list::TodoList;

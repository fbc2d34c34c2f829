//! Fishodoro - A study/break timer server with a persisted to-do list
//!
//! The library exposes the countdown state machine, the shared application
//! state, the background ticker and the HTTP router so the binary and the
//! integration tests can wire them together.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ValidationError};
pub use state::{AppState, PomodoroTimer};
pub use api::create_router;
pub use utils::signals::shutdown_signal;

//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

use crate::{error::ValidationError, state::TimerSettings};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "fishodoro")]
#[command(about = "A study/break timer server with a persisted to-do list")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "5071")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Study phase length in minutes
    #[arg(short, long, default_value = "25", allow_negative_numbers = true)]
    pub study: i64,

    /// Break phase length in minutes
    #[arg(short, long = "break-minutes", default_value = "5", allow_negative_numbers = true)]
    pub break_minutes: i64,

    /// JSON file holding the to-do list
    #[arg(long, default_value = "tasks.json")]
    pub tasks_file: PathBuf,

    /// Starting coin balance
    #[arg(long, default_value = "100")]
    pub coins: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Startup durations, checked the same way as runtime updates
    pub fn timer_settings(&self) -> Result<TimerSettings, ValidationError> {
        TimerSettings::new(self.study, self.break_minutes)
    }
}

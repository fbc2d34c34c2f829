//! Fishodoro - A study/break timer server with a persisted to-do list
//!
//! This is the main entry point for the fishodoro server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use fishodoro::{
    api::create_router,
    config::Config,
    state::{AppState, TodoList},
    tasks::ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("fishodoro={},tower_http=info", config.log_level()))
        .init();

    info!("Starting fishodoro server v{}", env!("CARGO_PKG_VERSION"));

    let settings = config.timer_settings()?;
    info!(
        "Configuration: host={}, port={}, study={}min, break={}min, tasks={}",
        config.host,
        config.port,
        settings.study_minutes(),
        settings.break_minutes(),
        config.tasks_file.display()
    );

    let todo_list = TodoList::load(&config.tasks_file).await?;
    info!("Loaded {} tasks", todo_list.tasks().len());

    // Create application state
    let state = Arc::new(AppState::new(settings, config.coins, todo_list));

    // Start the countdown ticker
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /Timer/GetStatus      - Remaining time and phase");
    info!("  POST /Timer/Start          - Start the countdown");
    info!("  POST /Timer/Pause          - Pause the countdown");
    info!("  POST /Timer/Restart        - Refill the current phase");
    info!("  POST /Timer/UpdateSettings - Change study/break minutes");
    info!("  GET  /Todo/GetTasks        - List tasks");
    info!("  POST /Todo/AddTask         - Add a task");
    info!("  POST /Todo/DeleteTask      - Remove a task");
    info!("  POST /Todo/ReorderTasks    - Replace task order");
    info!("  GET  /coins                - Coin balance");
    info!("  GET  /health               - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

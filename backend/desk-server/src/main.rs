use desk_config::Config;
use desk_db::PoolOptions;
use desk_server::{AppState, ServerError, build_router, logger};

use std::error::Error;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Ignoring unreadable .env file: {e}");
    }

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent).map_err(ServerError::from)?;
    }

    // Before any other logging
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting desk-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = desk_db::connect(
        &database_path,
        PoolOptions {
            max_connections: config.database.max_connections,
            busy_timeout: config.database.busy_timeout(),
        },
    )
    .await
    .map_err(ServerError::from)?;
    info!("Database ready, migrations applied");

    let state = AppState::new(
        pool.clone(),
        config.paging.clone(),
        config.validation.clone(),
    );
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}

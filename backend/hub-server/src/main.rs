use hub_server::{AppState, ServerErrorResult, build_router, logger};

use hub_config::Config;
use hub_db::{Database, DatabaseOptions};

use std::process::ExitCode;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    // HUB_* overrides may live in a .env file next to the binary
    dotenvy::dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet
            eprintln!("hub-server: {e}");
            error!("Exiting: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerErrorResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("hub-server v{} starting", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database {}", database_path.display());
    let pool = Database::connect(&DatabaseOptions::new(database_path)).await?;

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(AppState::new(pool, &config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received, draining connections"),
        Err(e) => error!("Cannot listen for Ctrl+C: {e}"),
    }
}

use std::sync::Arc;

use academy::adapters::http::{api_router, with_http_layers, CohortAppState};
use academy::adapters::postgres::{
    PostgresCohortRepository, PostgresCohortSessionReader, PostgresCohortSessionRepository,
    PostgresEnrollmentReader,
};
use academy::config::AppConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "Server exited with error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.server.init_tracing();
    config.validate()?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let scheduler = config.scheduling.scheduler()?;
    let state = CohortAppState {
        cohort_repository: Arc::new(PostgresCohortRepository::new(pool.clone())),
        session_repository: Arc::new(PostgresCohortSessionRepository::new(pool.clone())),
        session_reader: Arc::new(PostgresCohortSessionReader::new(pool.clone())),
        enrollment_reader: Arc::new(PostgresEnrollmentReader::new(pool.clone())),
        scheduler,
    };

    let app = with_http_layers(api_router(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        sessions_per_week = scheduler.cadence().sessions_per_week(),
        "Academy API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

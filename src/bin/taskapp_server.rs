//! Task workflow web server.
//!
//! Serves the dashboard and task routes over HTTP, storing tasks in
//! `PostgreSQL` when `DATABASE_URL` is set and in memory otherwise.

use std::sync::Arc;

use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use taskapp::{
    config::ServerConfig,
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, apply_schema, build_pool},
        },
        ports::TaskRepository,
        services::TaskWorkflowService,
    },
    telemetry::init_tracing,
    web::{AppState, router},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    config.validate()?;
    init_tracing(config.log_format)?;

    let repository = tokio::task::spawn_blocking({
        let store_config = config.clone();
        move || build_repository(&store_config)
    })
    .await
    .wrap_err("repository set-up task failed")??;

    let workflow = Arc::new(TaskWorkflowService::new(repository, Arc::new(DefaultClock)));
    let state = AppState::new(workflow).wrap_err("failed to compile dashboard template")?;

    let listener = TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    info!(address = %config.bind, "task server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server terminated with an error")?;
    info!("task server stopped");
    Ok(())
}

fn build_repository(config: &ServerConfig) -> eyre::Result<Arc<dyn TaskRepository>> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("no database configured, tasks are kept in memory");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let pool = build_pool(database_url, config.pool_size)
        .wrap_err("failed to connect to PostgreSQL")?;
    if config.apply_schema {
        apply_schema(&pool).wrap_err("failed to apply task schema")?;
        info!("task schema applied");
    }
    info!(pool_size = config.pool_size, "using PostgreSQL task store");
    Ok(Arc::new(PostgresTaskRepository::new(pool)))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

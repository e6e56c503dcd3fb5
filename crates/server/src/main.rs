//! `flatstore` server binary.

use std::sync::Arc;

use anyhow::Context;
use flatstore_executor::{Executor, FileStore};
use flatstore_server::{cli, router, ServerConfig};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches();
    if cli::print_default_config(&matches) {
        print!("{}", ServerConfig::default_toml());
        return Ok(());
    }

    let config = ServerConfig::resolve(
        cli::config_path(&matches).as_deref(),
        &cli::overrides(&matches),
    )?;

    if cli::print_config(&matches) {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let level: Level = config
        .log_level
        .parse()
        .with_context(|| format!("invalid log level '{}'", config.log_level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let store = FileStore::open(&config.store)?;
    info!(
        target: "flatstore::server",
        data_dir = %config.store.data_dir.display(),
        "Opened data directory"
    );
    let app = router(Executor::new(Arc::new(store)), &config.prefix);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(target: "flatstore::server", "Server running on port {}", config.port);
    info!(
        target: "flatstore::server",
        "API available at http://localhost:{}{}",
        config.port,
        flatstore_server::routes::normalize_prefix(&config.prefix)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!(target: "flatstore::server", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(target: "flatstore::server", error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(target: "flatstore::server", "Shutting down");
}

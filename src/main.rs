use std::sync::Arc;

use statico::config::ServerConfig;
use statico::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Arc::new(ServerConfig::load()?);

    // Bootstrap: both directories must exist before the first connection.
    std::fs::create_dir_all(&cfg.document_root)?;
    std::fs::create_dir_all(&cfg.log_directory)?;

    tokio::select! {
        res = server::listener::run(cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

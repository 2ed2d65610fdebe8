use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::http::connection::Connection;

/// Binds the configured port on all interfaces and serves until the process
/// terminates. A bind failure is the one unrecoverable fault: it propagates
/// out and takes the process down.
pub async fn run(config: Arc<ServerConfig>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("Listening on {}", config.listen_addr());

    serve(listener, config).await
}

/// Sequential accept loop dispatching one task per connection, with no
/// connection cap and no backpressure. Split from `run` so tests can bind
/// an ephemeral port themselves.
pub async fn serve(listener: TcpListener, config: Arc<ServerConfig>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let config = config.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, peer, config);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::resolver;
use crate::server::table::ConnectionTable;

/// Largest number of clients allowed to wait in the accept queue.
pub const MAX_PENDING_CONNECTIONS: u32 = 10_000;

#[derive(Debug)]
pub enum BindError {
    NoUsableAddress,
    Listen(std::io::Error),
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::NoUsableAddress => {
                write!(f, "no candidate address could be bound")
            }
            BindError::Listen(e) => write!(f, "listen failed: {}", e),
        }
    }
}

impl std::error::Error for BindError {}

/// Tries the candidates in order and listens on the first one that binds.
/// A socket created for a candidate that fails to bind is closed before
/// the next attempt.
pub fn bind_and_listen(candidates: &[SocketAddr]) -> Result<TcpListener, BindError> {
    for &addr in candidates {
        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        };

        let Ok(socket) = socket else { continue };

        if socket.bind(addr).is_err() {
            continue;
        }

        return socket
            .listen(MAX_PENDING_CONNECTIONS)
            .map_err(BindError::Listen);
    }

    Err(BindError::NoUsableAddress)
}

pub async fn run(cfg: Config) -> anyhow::Result<()> {
    info!(
        "Server being spun up for directory '{}' on port '{}'",
        cfg.document_root, cfg.port
    );

    let candidates = resolver::resolve(cfg.host.as_deref(), &cfg.port).await?;
    let listener = bind_and_listen(&candidates)?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg).await
}

/// The accept loop. Its only job is accept-and-dispatch: each accepted
/// stream moves into its own task and the loop never reads or writes it.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    let cfg = Arc::new(cfg);
    let table = Arc::new(ConnectionTable::new());

    loop {
        // An accept failure ends the loop; it is returned, not retried.
        let (socket, peer) = listener.accept().await?;
        let ticket = table.register();
        info!("Accepted connection {} from {}", ticket.id(), peer);

        let cfg = cfg.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, cfg);
            if let Err(e) = conn.serve().await {
                error!("Connection {} from {}: {}", ticket.id(), peer, e);
            }
        });
    }
}

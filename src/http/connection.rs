use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::Config;
use crate::http::parser::parse_request_line;
use crate::http::request::RequestLine;
use crate::http::response::StatusLine;
use crate::serve;

/// Capacity of the receive buffer; one read is all a request gets.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// Failures local to one connection. Logged by the owning task; none of
/// them reach the accept loop or other connections, and none of them
/// produce wire output — the 400 rejection is not an error path.
#[derive(Debug)]
pub enum ServeError {
    PeerDisconnected,
    Receive(std::io::Error),
    InvalidMethod(String),
    OpenFile {
        path: String,
        source: std::io::Error,
    },
    Script {
        path: String,
        source: std::io::Error,
    },
    Write(std::io::Error),
}

impl std::fmt::Display for ServeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServeError::PeerDisconnected => {
                write!(f, "client disconnected before sending a request")
            }
            ServeError::Receive(e) => write!(f, "receive failed: {}", e),
            ServeError::InvalidMethod(m) => {
                write!(f, "only GET requests allowed, got '{}'", m)
            }
            ServeError::OpenFile { path, source } => {
                write!(f, "could not open '{}': {}", path, source)
            }
            ServeError::Script { path, source } => {
                write!(f, "could not run interpreter for '{}': {}", path, source)
            }
            ServeError::Write(e) => write!(f, "write to client failed: {}", e),
        }
    }
}

impl std::error::Error for ServeError {}

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    config: Arc<Config>,
    state: ConnectionState,
}

enum ConnectionState {
    Receiving,
    Dispatching(RequestLine),
    Rejecting,
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(MAX_REQUEST_BYTES),
            config,
            state: ConnectionState::Receiving,
        }
    }

    /// Serves exactly one request/response cycle, then shuts the stream
    /// down in both directions regardless of the outcome.
    pub async fn serve(&mut self) -> Result<(), ServeError> {
        let result = self.run().await;
        let _ = self.stream.shutdown().await;
        result
    }

    async fn run(&mut self) -> Result<(), ServeError> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Receiving => {
                    let raw = self.read_request().await?;

                    self.state = match parse_request_line(&raw) {
                        Ok(line) if line.protocol().is_some() => {
                            ConnectionState::Dispatching(line)
                        }
                        // An absent or unrecognized protocol token is the
                        // one failure the client hears about.
                        Ok(_) | Err(_) => ConnectionState::Rejecting,
                    };
                }

                ConnectionState::Rejecting => {
                    self.stream
                        .write_all(StatusLine::BadRequest.as_bytes())
                        .await
                        .map_err(ServeError::Write)?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Dispatching(line) => {
                    if line.method().is_none() {
                        return Err(ServeError::InvalidMethod(line.method));
                    }

                    serve::respond(&mut self.stream, &self.config, &line.target).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> Result<BytesMut, ServeError> {
        let n = self
            .stream
            .read_buf(&mut self.buffer)
            .await
            .map_err(ServeError::Receive)?;

        if n == 0 {
            return Err(ServeError::PeerDisconnected);
        }

        debug!("Client message received ({} bytes)", n);
        Ok(self.buffer.split())
    }
}

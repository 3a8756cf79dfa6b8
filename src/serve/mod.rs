//! Response production.
//!
//! This module resolves a validated request target against the document
//! root and streams back either a static file or the output of an
//! interpreter subprocess, framed by the fixed status line.

pub mod path;
pub mod script;
pub mod static_files;

use tokio::net::TcpStream;
use tracing::info;

use crate::config::Config;
use crate::http::connection::ServeError;

/// Dispatches a request target: `.php` targets run through the configured
/// interpreter, everything else is read from disk.
pub async fn respond(
    stream: &mut TcpStream,
    config: &Config,
    target: &str,
) -> Result<(), ServeError> {
    let resolved = path::resolve(&config.document_root, target);
    info!("The file '{}' was requested", resolved);

    if path::is_script(target) {
        script::respond(stream, &config.interpreter, &resolved).await
    } else {
        static_files::respond(stream, &resolved).await
    }
}

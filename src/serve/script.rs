//! Dynamic content via an interpreter subprocess.

use std::process::Stdio;

use tokio::net::TcpStream;
use tokio::process::Command;

use crate::http::connection::ServeError;
use crate::http::response::StatusLine;
use crate::http::writer::ResponseWriter;

/// Runs the configured interpreter on the resolved path and streams its
/// stdout to the client after the success status line.
///
/// The child's exit status and stderr are not inspected: a failing
/// interpreter yields an empty or truncated body and nothing else.
pub async fn respond(
    stream: &mut TcpStream,
    interpreter: &str,
    path: &str,
) -> Result<(), ServeError> {
    let mut child = Command::new(interpreter)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| ServeError::Script {
            path: path.to_string(),
            source: e,
        })?;

    let Some(mut stdout) = child.stdout.take() else {
        return Err(ServeError::Script {
            path: path.to_string(),
            source: std::io::Error::other("child stdout was not captured"),
        });
    };

    let mut writer = ResponseWriter::new(stream);
    writer
        .send_status(StatusLine::Ok)
        .await
        .map_err(ServeError::Write)?;
    writer
        .stream_body(&mut stdout)
        .await
        .map_err(ServeError::Write)?;

    // Reap the child; its status is discarded.
    let _ = child.wait().await;

    Ok(())
}

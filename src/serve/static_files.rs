//! Static file responses.

use tokio::fs::File;
use tokio::net::TcpStream;

use crate::http::connection::ServeError;
use crate::http::response::StatusLine;
use crate::http::writer::ResponseWriter;

/// Opens the resolved path and streams its bytes after the success status
/// line. A file that cannot be opened closes the connection with nothing
/// sent.
pub async fn respond(stream: &mut TcpStream, path: &str) -> Result<(), ServeError> {
    let mut file = File::open(path).await.map_err(|e| ServeError::OpenFile {
        path: path.to_string(),
        source: e,
    })?;

    let mut writer = ResponseWriter::new(stream);
    writer
        .send_status(StatusLine::Ok)
        .await
        .map_err(ServeError::Write)?;
    writer.stream_body(&mut file).await.map_err(ServeError::Write)
}

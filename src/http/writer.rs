use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::StatusLine;

const CHUNK_SIZE: usize = 1024;

/// Writes the fixed status framing and copies body bytes to the client in
/// fixed-size chunks.
pub struct ResponseWriter<'a> {
    stream: &'a mut TcpStream,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(stream: &'a mut TcpStream) -> Self {
        Self { stream }
    }

    pub async fn send_status(&mut self, status: StatusLine) -> std::io::Result<()> {
        self.stream.write_all(status.as_bytes()).await
    }

    /// Streams the reader's contents until EOF. A read error ends the body
    /// the same way EOF does; the client cannot tell the difference.
    pub async fn stream_body<R>(&mut self, reader: &mut R) -> std::io::Result<()>
    where
        R: AsyncRead + Unpin,
    {
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            let n = match reader.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };

            self.stream.write_all(&chunk[..n]).await?;
        }

        Ok(())
    }
}

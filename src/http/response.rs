/// The two status lines the server ever puts on the wire.
///
/// Framing is fixed: success is the 200 line with its blank-line
/// terminator, followed by raw body bytes with no headers; rejection is
/// the bare 400 line with nothing after it. No other status code is
/// produced — every failure that is not a protocol error closes the
/// connection without a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
}

impl StatusLine {
    /// Returns the exact bytes written for this status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::response::StatusLine;
    /// assert_eq!(StatusLine::Ok.as_bytes(), b"HTTP/1.0 200 OK\n\n");
    /// assert_eq!(StatusLine::BadRequest.as_bytes(), b"HTTP/1.0 400 Bad Request\n");
    /// ```
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            StatusLine::Ok => b"HTTP/1.0 200 OK\n\n",
            StatusLine::BadRequest => b"HTTP/1.0 400 Bad Request\n",
        }
    }

    /// Returns the numeric HTTP status code, for log lines.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::response::StatusLine;
    /// assert_eq!(StatusLine::Ok.as_u16(), 200);
    /// assert_eq!(StatusLine::BadRequest.as_u16(), 400);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusLine::Ok => 200,
            StatusLine::BadRequest => 400,
        }
    }
}

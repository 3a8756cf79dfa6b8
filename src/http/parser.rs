use crate::http::request::RequestLine;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingTokens,
    InvalidEncoding,
}

pub fn parse_request_line(buf: &[u8]) -> Result<RequestLine, ParseError> {
    // Only the first line is consumed; headers and any body are ignored.
    let line_end = buf.iter().position(|&b| b == b'\n').unwrap_or(buf.len());
    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidEncoding)?
        .trim_end_matches('\r');

    // Runs of whitespace collapse into a single token boundary.
    let mut tokens = line.split_whitespace();

    let method = tokens.next().ok_or(ParseError::MissingTokens)?;
    let target = tokens.next().ok_or(ParseError::MissingTokens)?;
    let version = tokens.next().ok_or(ParseError::MissingTokens)?;

    Ok(RequestLine {
        method: method.to_string(),
        target: target.to_string(),
        version: version.to_string(),
    })
}

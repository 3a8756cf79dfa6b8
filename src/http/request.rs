/// HTTP request methods the server will serve.
///
/// Only GET is supported. Any other token is rejected during dispatch and
/// the connection is closed without a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// Matching is exact and case-sensitive; nothing beyond the token
    /// boundary is accepted.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("get"), None);
    /// assert_eq!(Method::from_token("POST"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            _ => None,
        }
    }
}

/// HTTP protocol versions the server will answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// HTTP/1.0
    Http10,
    /// HTTP/1.1
    Http11,
}

impl Protocol {
    /// Parses a protocol token. Only the exact literals `HTTP/1.0` and
    /// `HTTP/1.1` are recognized.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::request::Protocol;
    /// assert_eq!(Protocol::from_token("HTTP/1.0"), Some(Protocol::Http10));
    /// assert_eq!(Protocol::from_token("HTTP/1.1"), Some(Protocol::Http11));
    /// assert_eq!(Protocol::from_token("HTTP/2"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "HTTP/1.0" => Some(Protocol::Http10),
            "HTTP/1.1" => Some(Protocol::Http11),
            _ => None,
        }
    }
}

/// The parsed first line of a request.
///
/// All three fields are owned copies of the raw tokens; nothing aliases
/// the receive buffer they came from.
#[derive(Debug, Clone)]
pub struct RequestLine {
    /// The raw method token (e.g. "GET")
    pub method: String,
    /// The request target (e.g. "/index.html")
    pub target: String,
    /// The raw protocol token (e.g. "HTTP/1.0")
    pub version: String,
}

impl RequestLine {
    /// The validated method, if the token is one the server serves.
    pub fn method(&self) -> Option<Method> {
        Method::from_token(&self.method)
    }

    /// The validated protocol, if the token is one the server answers.
    pub fn protocol(&self) -> Option<Protocol> {
        Protocol::from_token(&self.version)
    }
}

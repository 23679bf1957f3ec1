/// The first line of an HTTP request.
///
/// Only the target is ever interpreted. Method and version are kept as the
/// client sent them and are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The request method token (e.g. "GET")
    pub method: String,
    /// The raw, undecoded request target (e.g. "/docs/a%20b.txt?x=1")
    pub target: String,
    /// HTTP version token, if the client sent one
    pub version: Option<String>,
}

impl RequestLine {
    /// Splits a request line into its whitespace-delimited tokens.
    ///
    /// Returns `None` when there is no second token to use as the target.
    /// Tokens past the third are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::request::RequestLine;
    /// let line = RequestLine::from_line("GET /index.html HTTP/1.1").unwrap();
    /// assert_eq!(line.target, "/index.html");
    /// assert!(RequestLine::from_line("GET").is_none());
    /// ```
    pub fn from_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let method = parts.next()?;
        let target = parts.next()?;
        let version = parts.next();

        Some(Self {
            method: method.to_string(),
            target: target.to_string(),
            version: version.map(str::to_string),
        })
    }
}

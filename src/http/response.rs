/// Status line sent with every response, including "not found" messages.
pub const STATUS_LINE: &str = "HTTP/1.1 200 OK";

/// Body sent when the requested file does not exist.
pub const NOT_FOUND_MESSAGE: &[u8] = b"File not found\n";

/// Content type of the "not found" message.
pub const MESSAGE_CONTENT_TYPE: &str = "text/plain";

/// Header block of a response.
///
/// Serialization order and wording are fixed: status line, `Content-Type`,
/// `Content-Length`, `Connection: close`, then the blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub content_type: String,
    pub content_length: u64,
}

impl ResponseHead {
    pub fn new(content_type: impl Into<String>, content_length: u64) -> Self {
        Self {
            content_type: content_type.into(),
            content_length,
        }
    }

    /// Head for the plain-text "not found" message.
    pub fn not_found() -> Self {
        Self::new(MESSAGE_CONTENT_TYPE, NOT_FOUND_MESSAGE.len() as u64)
    }

    /// Wire bytes of the head, blank line included.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::response::ResponseHead;
    /// let head = ResponseHead::new("text/css", 12).to_bytes();
    /// assert_eq!(
    ///     head,
    ///     b"HTTP/1.1 200 OK\r\nContent-Type: text/css\r\nContent-Length: 12\r\nConnection: close\r\n\r\n"
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            STATUS_LINE, self.content_type, self.content_length
        )
        .into_bytes()
    }
}

use std::fmt;

/// Longest request line accepted, terminator included.
pub const MAX_REQUEST_LINE: usize = 8192;

/// Framing failures while looking for the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No line terminator yet; more bytes are needed.
    Incomplete,
    /// No terminator within `MAX_REQUEST_LINE` bytes.
    TooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Incomplete => f.write_str("incomplete request line"),
            ParseError::TooLong => write!(f, "request line exceeds {MAX_REQUEST_LINE} bytes"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Splits the request line off the start of `buf`.
///
/// On success returns the line text and the number of bytes it occupied,
/// terminator included. Anything after the first `\n` is left untouched.
/// The line's tokens are not checked here.
pub fn split_request_line(buf: &[u8]) -> Result<(String, usize), ParseError> {
    let Some(end) = find_line_end(buf) else {
        if buf.len() >= MAX_REQUEST_LINE {
            return Err(ParseError::TooLong);
        }
        return Err(ParseError::Incomplete);
    };

    let consumed = end + 1;
    if consumed > MAX_REQUEST_LINE {
        return Err(ParseError::TooLong);
    }

    Ok((line_text(&buf[..end]), consumed))
}

/// Text of a single line without its `\n`. A trailing `\r` is dropped.
///
/// Bytes that are not UTF-8 are replaced rather than rejected; the target is
/// untrusted either way and is sanitized later.
pub fn line_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}

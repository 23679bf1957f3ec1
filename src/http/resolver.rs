//! Request target to filesystem path resolution.
//!
//! The target is decoded, split into segments and folded onto a stack that
//! only ever holds sub-segments of the document root. `..` pops from that
//! stack and is a no-op once it is empty, so no target can name a path above
//! the root.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::http::parser::ParseError;
use crate::http::request::RequestLine;

/// File served when the target names a directory.
pub const INDEX_FILE: &str = "index.html";

/// Outcome of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    /// A regular file inside the document root
    Exists(PathBuf),
    /// Nothing servable at this path
    Missing(PathBuf),
}

impl ResolvedPath {
    pub fn path(&self) -> &Path {
        match self {
            ResolvedPath::Exists(path) | ResolvedPath::Missing(path) => path,
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self, ResolvedPath::Exists(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The request line has no URI token.
    MalformedRequest,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MalformedRequest => f.write_str("malformed request line"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// A line that cannot be framed has no usable target either.
impl From<ParseError> for ResolveError {
    fn from(_: ParseError) -> Self {
        ResolveError::MalformedRequest
    }
}

/// Resolves request targets against a fixed document root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the target of a raw request line.
    ///
    /// Fails only when the line carries no target. Every other input
    /// resolves to a path inside the root, which may be missing.
    pub async fn resolve(&self, request_line: &str) -> Result<ResolvedPath, ResolveError> {
        let line = RequestLine::from_line(request_line).ok_or(ResolveError::MalformedRequest)?;
        Ok(self.resolve_target(&line.target).await)
    }

    /// Resolves an already extracted request target.
    pub async fn resolve_target(&self, target: &str) -> ResolvedPath {
        let candidate = self.candidate_path(target);

        let candidate = match fs::metadata(&candidate).await {
            Ok(meta) if meta.is_dir() => candidate.join(INDEX_FILE),
            _ => candidate,
        };

        // Any metadata failure (permissions, NUL bytes, dangling links) is
        // reported as missing rather than as an error.
        match fs::metadata(&candidate).await {
            Ok(meta) if meta.is_file() => ResolvedPath::Exists(candidate),
            _ => ResolvedPath::Missing(candidate),
        }
    }

    /// The root joined with the sanitized segments of `target`, before any
    /// filesystem lookup.
    pub fn candidate_path(&self, target: &str) -> PathBuf {
        let decoded = decode_path(&target_path(target));

        let mut path = self.root.clone();
        path.extend(sanitize_segments(&decoded));
        path
    }
}

/// Path component of a request target, without query or fragment.
///
/// Absolute-form targets (`http://host/a/b`) are parsed as URLs and only
/// their path is kept.
pub fn target_path(target: &str) -> Cow<'_, str> {
    if !target.starts_with('/') && target.contains("://") {
        if let Ok(url) = url::Url::parse(target) {
            return Cow::Owned(url.path().to_string());
        }
    }

    Cow::Borrowed(target.split(['?', '#']).next().unwrap_or_default())
}

/// Percent-decodes a path.
///
/// Malformed escapes such as `%zz` or a trailing `%` are kept literally, and
/// decoded bytes that are not UTF-8 are replaced with U+FFFD.
pub fn decode_path(path: &str) -> String {
    let bytes = urlencoding::decode_binary(path.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Folds a decoded path into the segments that remain below the root.
///
/// # Example
///
/// ```
/// # use tinyweb::http::resolver::sanitize_segments;
/// assert_eq!(sanitize_segments("/a/./b/../c//d"), vec!["a", "c", "d"]);
/// assert!(sanitize_segments("/../../etc/..").is_empty());
/// ```
pub fn sanitize_segments(path: &str) -> Vec<&str> {
    let mut stack = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    stack
}

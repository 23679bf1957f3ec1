//! Content-Type inference from file extensions.

use std::collections::HashMap;
use std::path::Path;

/// Type used when the extension is missing or unmapped.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const BUILTIN: [(&str, &str); 6] = [
    ("css", "text/css"),
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("txt", "text/plain"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
];

/// Maps lowercase extensions (without the dot) to MIME types.
#[derive(Debug, Clone)]
pub struct ContentTypeTable {
    entries: HashMap<String, String>,
}

impl ContentTypeTable {
    /// Table with only the built-in entries.
    pub fn new() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
            .collect();
        Self { entries }
    }

    /// Built-in table extended with `overrides`. Keys are lowercased and any
    /// leading dot is dropped, so ".SVG" and "svg" name the same entry.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::new();
        for (ext, mime) in overrides {
            table.insert(ext, mime);
        }
        table
    }

    pub fn insert(&mut self, ext: &str, mime: &str) {
        let key = ext.trim_start_matches('.').to_ascii_lowercase();
        self.entries.insert(key, mime.to_string());
    }

    /// Looks up an extension. Matching is case-insensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::mime::ContentTypeTable;
    /// let table = ContentTypeTable::new();
    /// assert_eq!(table.get(Some("CSS")), "text/css");
    /// assert_eq!(table.get(Some("exe")), "application/octet-stream");
    /// assert_eq!(table.get(None), "application/octet-stream");
    /// ```
    pub fn get(&self, extension: Option<&str>) -> &str {
        extension
            .and_then(|ext| self.entries.get(&ext.to_ascii_lowercase()))
            .map(String::as_str)
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Content type for a file path, by its final extension.
    pub fn for_path(&self, path: &Path) -> &str {
        self.get(path.extension().and_then(|ext| ext.to_str()))
    }
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_types() {
        let table = ContentTypeTable::new();
        assert_eq!(table.get(Some("css")), "text/css");
        assert_eq!(table.get(Some("html")), "text/html");
        assert_eq!(table.get(Some("js")), "text/javascript");
        assert_eq!(table.get(Some("txt")), "text/plain");
        assert_eq!(table.get(Some("png")), "image/png");
        assert_eq!(table.get(Some("jpg")), "image/jpeg");
    }

    #[test]
    fn test_path_extension() {
        let table = ContentTypeTable::new();
        assert_eq!(table.for_path(Path::new("public/app.min.JS")), "text/javascript");
        assert_eq!(table.for_path(Path::new("public/Makefile")), DEFAULT_CONTENT_TYPE);
        assert_eq!(table.for_path(Path::new("public/.css")), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_overrides() {
        let mut extra = HashMap::new();
        extra.insert(".SVG".to_string(), "image/svg+xml".to_string());
        extra.insert("txt".to_string(), "text/plain; charset=utf-8".to_string());

        let table = ContentTypeTable::with_overrides(&extra);
        assert_eq!(table.get(Some("svg")), "image/svg+xml");
        assert_eq!(table.get(Some("txt")), "text/plain; charset=utf-8");
        assert_eq!(table.get(Some("css")), "text/css");
    }
}

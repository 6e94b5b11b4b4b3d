//! File operations for tagdown
//!
//! UTF-8 plain-text reads and writes for Markdown sources and HTML output.
//! Failures carry the path and the underlying I/O cause so they can be
//! reported to the user; callers leave in-memory state unchanged on error.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Read a Markdown source file as UTF-8 text.
pub fn read_markdown(path: &Path) -> Result<String> {
    debug!("Reading markdown from: {}", path.display());
    fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write Markdown text to a file as UTF-8.
pub fn write_markdown(path: &Path, content: &str) -> Result<()> {
    debug!("Writing markdown to: {}", path.display());
    fs::write(path, content).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write HTML output to a file as UTF-8.
///
/// The content is exactly the post-processor's output for the current
/// document and mapping; no framing is added.
pub fn write_html(path: &Path, html: &str) -> Result<()> {
    debug!("Writing HTML to: {}", path.display());
    fs::write(path, html).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_markdown_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");

        write_markdown(&path, "# Tittel\n\nMed æøå.").unwrap();
        assert_eq!(read_markdown(&path).unwrap(), "# Tittel\n\nMed æøå.");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let err = read_markdown(&path).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert!(format!("{}", err).contains("missing.md"));
    }

    #[test]
    fn test_write_html() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.html");

        write_html(&path, "<h1>T</h1>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>T</h1>");
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        // Parent directory does not exist.
        let path = dir.path().join("nope").join("out.html");

        let err = write_html(&path, "<p>x</p>").unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}

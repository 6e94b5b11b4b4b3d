//! Document state for the editing session
//!
//! A document is raw Markdown text plus an optional backing file path. The
//! display name is derived from the file name, or "Untitled" for documents
//! that have never been saved.

use std::path::{Path, PathBuf};

/// Display name for documents without a backing file.
const UNTITLED_NAME: &str = "Untitled";

/// Default output name for HTML saved from an unsaved document.
const UNTITLED_HTML_NAME: &str = "untitled.html";

/// The Markdown document owned by an editing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Raw Markdown text
    pub content: String,
    /// Backing file, if the document has been opened or saved
    path: Option<PathBuf>,
    /// Whether the content has changed since the last save
    modified: bool,
}

impl Document {
    /// Create an empty, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from text loaded from a file.
    pub fn from_file(content: String, path: PathBuf) -> Self {
        Self {
            content,
            path: Some(path),
            modified: false,
        }
    }

    /// The backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Display name: the backing file name, or "Untitled".
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_NAME.to_string())
    }

    /// Default file name for HTML output: the backing file stem with an
    /// `.html` extension, or `untitled.html`.
    pub fn default_html_file_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_stem())
            .map(|stem| format!("{}.html", stem.to_string_lossy()))
            .unwrap_or_else(|| UNTITLED_HTML_NAME.to_string())
    }

    /// Replace the document text, marking it modified.
    pub fn set_content(&mut self, content: String) {
        if content != self.content {
            self.content = content;
            self.modified = true;
        }
    }

    /// Record that the document was saved to `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.modified = false;
    }

    /// Whether there are unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

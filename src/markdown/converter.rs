//! Markdown to HTML conversion using comrak
//!
//! This module wraps comrak's `markdown_to_html` with the extension set the
//! editor relies on, plus the clipboard normalization applied to document
//! text before it reaches the converter.

use comrak::{markdown_to_html, Options};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion Options
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration options for Markdown conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Enable GitHub Flavored Markdown tables
    pub tables: bool,
    /// Enable strikethrough syntax (~~text~~)
    pub strikethrough: bool,
    /// Enable autolink URLs and emails
    pub autolink: bool,
    /// Enable footnotes
    pub footnotes: bool,
    /// Enable description lists
    pub description_lists: bool,
    /// Render soft line breaks as `<br />` (trailing-newline-to-break)
    pub hardbreaks: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            footnotes: true,
            description_lists: true,
            hardbreaks: true,
        }
    }
}

impl ConvertOptions {
    /// Convert to comrak Options.
    fn to_comrak_options(&self) -> Options {
        let mut options = Options::default();

        // Extension options
        options.extension.table = self.tables;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.footnotes = self.footnotes;
        options.extension.description_lists = self.description_lists;

        // Render options
        options.render.hardbreaks = self.hardbreaks;

        options
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert Markdown text to an HTML fragment.
///
/// Infallible: comrak accepts arbitrary UTF-8 input, so there is no error
/// path here. The output carries the converter's standard tags; the tag
/// mapping is applied afterwards by [`crate::markdown::process`].
pub fn to_html(markdown: &str, options: &ConvertOptions) -> String {
    markdown_to_html(markdown, &options.to_comrak_options())
}

/// Normalize tab-indented block quote markers from clipboard pastes.
///
/// A literal tab immediately followed by `>` confuses the converter's block
/// quote detection; it becomes four spaces here, at the editor/converter
/// boundary. Document text and the post-processor input are unaffected.
pub fn normalize_block_quote_tabs(markdown: &str) -> String {
    markdown.replace("\t>", "    >")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

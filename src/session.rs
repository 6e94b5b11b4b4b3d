//! The editing session
//!
//! One session owns the mutable state of the application: the settings
//! (including the tag mapping), the current document, and the most recent
//! preview. Conversion itself stays pure; the session wires the pipeline
//! together and is the only place the mapping is mutated.

use crate::config::{self, Construct, Settings};
use crate::document::Document;
use crate::error::Result;
use crate::files;
use crate::markdown::{self, ConvertOptions};
use log::info;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Settings Form
// ─────────────────────────────────────────────────────────────────────────────

/// Raw field values from a settings-save action.
///
/// Tag fields follow the blank-means-no-change rule: an empty or whitespace
/// entry leaves the stored mapping untouched rather than resetting it. The
/// font size field is the asymmetric exception: it always overwrites when it
/// parses as a positive integer and is rejected otherwise.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub bold: String,
    pub italic: String,
    pub code: String,
    pub br: String,
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub h4: String,
    pub h5: String,
    pub h6: String,
    pub p: String,
    pub blockquote: String,
    pub font_size: String,
}

impl SettingsForm {
    /// Prefill the form with the current settings, the way the settings tab
    /// populates its entry fields.
    pub fn from_settings(settings: &Settings) -> Self {
        let m = &settings.style_mapping;
        Self {
            bold: m.bold.clone(),
            italic: m.italic.clone(),
            code: m.code.clone(),
            br: m.br.clone(),
            h1: m.h1.clone(),
            h2: m.h2.clone(),
            h3: m.h3.clone(),
            h4: m.h4.clone(),
            h5: m.h5.clone(),
            h6: m.h6.clone(),
            p: m.p.clone(),
            blockquote: m.blockquote.clone(),
            font_size: settings.font_size.to_string(),
        }
    }

    /// The raw entry value for a construct's tag field.
    pub fn tag_field(&self, construct: Construct) -> &str {
        match construct {
            Construct::Bold => &self.bold,
            Construct::Italic => &self.italic,
            Construct::Code => &self.code,
            Construct::Br => &self.br,
            Construct::H1 => &self.h1,
            Construct::H2 => &self.h2,
            Construct::H3 => &self.h3,
            Construct::H4 => &self.h4,
            Construct::H5 => &self.h5,
            Construct::H6 => &self.h6,
            Construct::Paragraph => &self.p,
            Construct::BlockQuote => &self.blockquote,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Session
// ─────────────────────────────────────────────────────────────────────────────

/// The single editing session per process.
pub struct EditorSession {
    /// User settings, including the tag mapping
    pub settings: Settings,
    /// The document being edited
    pub document: Document,
    /// Conversion options for the Markdown converter
    pub options: ConvertOptions,
    /// Most recent post-processed HTML
    preview: String,
    /// Explicit config file path; `None` uses the platform default location
    config_path: Option<PathBuf>,
}

impl EditorSession {
    /// Start a session with the given settings and an empty document.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            document: Document::new(),
            options: ConvertOptions::default(),
            preview: String::new(),
            config_path: None,
        }
    }

    /// Start a session backed by a configuration file at an explicit path.
    ///
    /// The file is created with defaults if missing; a corrupted file
    /// surfaces the parse error to the caller.
    pub fn with_config_path(path: PathBuf) -> Result<Self> {
        let settings = config::load_settings(&path)?;
        let mut session = Self::new(settings);
        session.config_path = Some(path);
        Ok(session)
    }

    /// The current preview HTML (output of the last [`render`](Self::render)).
    pub fn preview(&self) -> &str {
        &self.preview
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion Pipeline
    // ─────────────────────────────────────────────────────────────────────────

    /// Convert the current document and refresh the preview.
    ///
    /// Pipeline: block-quote tab normalization, Markdown conversion, tag
    /// rewriting per the mapping. Runs to completion on the calling thread.
    pub fn render(&mut self) -> &str {
        let normalized = markdown::normalize_block_quote_tabs(&self.document.content);
        let html = markdown::to_html(&normalized, &self.options);
        self.preview = markdown::process(&html, &self.settings.style_mapping);
        &self.preview
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Save
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a settings-save action and persist the configuration.
    ///
    /// Field-level granularity: every non-blank tag field is applied first,
    /// and stays applied even when the font size is rejected. A font size
    /// rejection aborts before persisting, so the configuration on disk is
    /// only rewritten when the whole form was accepted.
    pub fn apply_settings_form(&mut self, form: &SettingsForm) -> Result<()> {
        for construct in Construct::ALL {
            self.settings
                .style_mapping
                .update(construct, form.tag_field(construct));
        }

        self.settings.set_font_size_from_input(&form.font_size)?;

        match &self.config_path {
            Some(path) => config::save_settings(path, &self.settings)?,
            None => config::save_config(&self.settings)?,
        }
        info!("Settings updated and saved");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // File Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Open a Markdown file, replacing the current document, and refresh the
    /// preview. On failure the current document is left unchanged.
    pub fn open_markdown(&mut self, path: &Path) -> Result<()> {
        let content = files::read_markdown(path)?;
        self.document = Document::from_file(content, path.to_path_buf());
        info!("Opened {}", self.document.display_name());
        self.render();
        Ok(())
    }

    /// Save the current document's Markdown text to `path`.
    pub fn save_markdown(&mut self, path: &Path) -> Result<()> {
        files::write_markdown(path, &self.document.content)?;
        self.document.mark_saved(path.to_path_buf());
        info!("Saved {}", self.document.display_name());
        Ok(())
    }

    /// Convert the current document and write the post-processed HTML to
    /// `path`. The file content is exactly the processor's output.
    pub fn save_html(&mut self, path: &Path) -> Result<()> {
        self.render();
        files::write_html(path, &self.preview)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

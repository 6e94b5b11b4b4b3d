//! Tag mapping between Markdown constructs and output HTML tags
//!
//! This module defines the closed set of Markdown constructs whose output
//! tags can be customized, and the `TagMapping` table that translates each
//! construct to its replacement tag. A mapping value is a tag name optionally
//! followed by attribute text, e.g. `div class="note"`.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Construct Keys
// ─────────────────────────────────────────────────────────────────────────────

/// A semantic Markdown construct with a customizable output tag.
///
/// The set is closed: these are exactly the constructs the post-processor
/// rewrites. Every construct always resolves to some mapping value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Bold,
    Italic,
    Code,
    Br,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Paragraph,
    BlockQuote,
}

impl Construct {
    /// All constructs, in the order they appear in the configuration file.
    pub const ALL: [Construct; 12] = [
        Construct::Bold,
        Construct::Italic,
        Construct::Code,
        Construct::Br,
        Construct::H1,
        Construct::H2,
        Construct::H3,
        Construct::H4,
        Construct::H5,
        Construct::H6,
        Construct::Paragraph,
        Construct::BlockQuote,
    ];

    /// The configuration key for this construct.
    pub fn key(&self) -> &'static str {
        match self {
            Construct::Bold => "bold",
            Construct::Italic => "italic",
            Construct::Code => "code",
            Construct::Br => "br",
            Construct::H1 => "h1",
            Construct::H2 => "h2",
            Construct::H3 => "h3",
            Construct::H4 => "h4",
            Construct::H5 => "h5",
            Construct::H6 => "h6",
            Construct::Paragraph => "p",
            Construct::BlockQuote => "blockquote",
        }
    }

    /// The standard HTML tag the Markdown converter emits for this construct.
    ///
    /// Also the built-in default mapping value.
    pub fn default_tag(&self) -> &'static str {
        match self {
            Construct::Bold => "strong",
            Construct::Italic => "em",
            Construct::Code => "code",
            Construct::Br => "br",
            Construct::H1 => "h1",
            Construct::H2 => "h2",
            Construct::H3 => "h3",
            Construct::H4 => "h4",
            Construct::H5 => "h5",
            Construct::H6 => "h6",
            Construct::Paragraph => "p",
            Construct::BlockQuote => "blockquote",
        }
    }

    /// Heading constructs by level (1-6).
    pub fn heading(level: u8) -> Construct {
        match level {
            1 => Construct::H1,
            2 => Construct::H2,
            3 => Construct::H3,
            4 => Construct::H4,
            5 => Construct::H5,
            _ => Construct::H6,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tag Mapping Table
// ─────────────────────────────────────────────────────────────────────────────

/// The table translating each construct to its output tag representation.
///
/// Serialized as the `style_mapping` object in the configuration file, with
/// one key per construct. Missing fields deserialize to the construct's
/// default tag; blank stored values are repaired by [`TagMapping::sanitize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagMapping {
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
}

impl Default for TagMapping {
    fn default() -> Self {
        Self {
            bold: Construct::Bold.default_tag().to_string(),
            italic: Construct::Italic.default_tag().to_string(),
            code: Construct::Code.default_tag().to_string(),
            br: Construct::Br.default_tag().to_string(),
            h1: Construct::H1.default_tag().to_string(),
            h2: Construct::H2.default_tag().to_string(),
            h3: Construct::H3.default_tag().to_string(),
            h4: Construct::H4.default_tag().to_string(),
            h5: Construct::H5.default_tag().to_string(),
            h6: Construct::H6.default_tag().to_string(),
            p: Construct::Paragraph.default_tag().to_string(),
            blockquote: Construct::BlockQuote.default_tag().to_string(),
        }
    }
}

impl TagMapping {
    /// Get the mapping value for a construct.
    ///
    /// Guaranteed non-blank once the mapping has been sanitized.
    pub fn get(&self, construct: Construct) -> &str {
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

    fn get_mut(&mut self, construct: Construct) -> &mut String {
        match construct {
            Construct::Bold => &mut self.bold,
            Construct::Italic => &mut self.italic,
            Construct::Code => &mut self.code,
            Construct::Br => &mut self.br,
            Construct::H1 => &mut self.h1,
            Construct::H2 => &mut self.h2,
            Construct::H3 => &mut self.h3,
            Construct::H4 => &mut self.h4,
            Construct::H5 => &mut self.h5,
            Construct::H6 => &mut self.h6,
            Construct::Paragraph => &mut self.p,
            Construct::BlockQuote => &mut self.blockquote,
        }
    }

    /// Update one construct's mapping from user input.
    ///
    /// A blank (empty after trimming) input means "don't change": the
    /// existing value is left untouched, never reverted to the default.
    /// Non-blank input overwrites the stored value (trimmed).
    ///
    /// Returns `true` if the value was changed.
    pub fn update(&mut self, construct: Construct, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }

        let slot = self.get_mut(construct);
        if slot == trimmed {
            return false;
        }
        *slot = trimmed.to_string();
        true
    }

    /// Replace any blank mapping values with the construct's default tag.
    ///
    /// Applied after loading a configuration file so the post-processor can
    /// assume every value is non-blank.
    pub fn sanitize(&mut self) {
        for construct in Construct::ALL {
            let slot = self.get_mut(construct);
            if slot.trim().is_empty() {
                *slot = construct.default_tag().to_string();
            }
        }
    }

    /// Whether every construct still maps to its standard tag.
    pub fn is_default(&self) -> bool {
        Construct::ALL
            .iter()
            .all(|c| self.get(*c) == c.default_tag())
    }

    /// The tag-name portion of a mapping value: the first whitespace-delimited
    /// token. Used for closing tags, where attribute text must not appear.
    pub fn tag_name(value: &str) -> &str {
        value.split_whitespace().next().unwrap_or(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

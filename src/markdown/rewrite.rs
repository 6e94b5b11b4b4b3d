//! HTML tag rewriting driven by the tag mapping
//!
//! This is the post-processing step applied to converter output: every
//! standard tag the converter emits for a customizable construct is rewritten
//! to the user's mapped tag. Attributes on opening tags are preserved
//! verbatim; closing tags use only the tag-name token of the mapped value.
//!
//! The whole pass is a pure text transformation with no state.

use crate::config::{Construct, TagMapping};
use regex::{Captures, NoExpand, Regex};
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Compiled Patterns
// ─────────────────────────────────────────────────────────────────────────────

/// Precompiled patterns for the attribute-carrying tags.
///
/// The inline constructs (bold, italic, code) never carry attributes in
/// converter output and are handled with literal substitution instead.
struct TagPatterns {
    /// Opening tags for h1..h6, index 0 = h1
    headings: [Regex; 6],
    /// Opening `<p ...>` tags
    paragraph: Regex,
    /// Opening `<blockquote ...>` tags
    blockquote: Regex,
    /// `<br>`, `<br/>`, `<br />`
    line_break: Regex,
}

static PATTERNS: OnceLock<TagPatterns> = OnceLock::new();

/// Pattern for an opening tag with an optional attribute string.
///
/// Attributes must be preceded by whitespace, so `<p` never matches the
/// prefix of a longer tag name like `<pre>`.
fn open_tag_pattern(tag: &str) -> Regex {
    Regex::new(&format!(r"<{}(\s[^>]*)?>", tag)).expect("static tag pattern is valid")
}

fn patterns() -> &'static TagPatterns {
    PATTERNS.get_or_init(|| TagPatterns {
        headings: [
            open_tag_pattern("h1"),
            open_tag_pattern("h2"),
            open_tag_pattern("h3"),
            open_tag_pattern("h4"),
            open_tag_pattern("h5"),
            open_tag_pattern("h6"),
        ],
        paragraph: open_tag_pattern("p"),
        blockquote: open_tag_pattern("blockquote"),
        line_break: Regex::new(r"<br\s*/?>").expect("static tag pattern is valid"),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Rewrite Passes
// ─────────────────────────────────────────────────────────────────────────────

/// Rewrite converter output according to the tag mapping.
///
/// Pure and deterministic: the same `(html, mapping)` pair always produces
/// the same output, and a mapping equal to the defaults returns the input
/// unchanged. Every construct pass runs on every call, in a fixed order:
/// inline constructs, headings, line breaks, paragraphs, block quotes.
///
/// Mapping values are assumed non-blank; the configuration store guarantees
/// this (blank input never overwrites a value, and loaded blanks are
/// sanitized back to defaults).
pub fn process(html: &str, mapping: &TagMapping) -> String {
    let pats = patterns();

    // Inline constructs: whole-tag literal substitution, both sides use the
    // full mapped value (no attributes to preserve or strip).
    let mut html = html.to_string();
    for construct in [Construct::Bold, Construct::Italic, Construct::Code] {
        let mapped = mapping.get(construct);
        let default = construct.default_tag();
        html = html
            .replace(&format!("<{}>", default), &format!("<{}>", mapped))
            .replace(&format!("</{}>", default), &format!("</{}>", mapped));
    }

    // Headings: keep attributes on the opening tag, close with the tag-name
    // token only.
    for (index, open_re) in pats.headings.iter().enumerate() {
        let construct = Construct::heading(index as u8 + 1);
        html = rewrite_block_tag(&html, open_re, construct, mapping);
    }

    // Line breaks: all three converter spellings collapse to one opening tag.
    let br = mapping.get(Construct::Br);
    html = pats
        .line_break
        .replace_all(&html, NoExpand(&format!("<{}>", br)))
        .into_owned();

    // Paragraphs and block quotes follow the heading rule.
    html = rewrite_block_tag(&html, &pats.paragraph, Construct::Paragraph, mapping);
    html = rewrite_block_tag(&html, &pats.blockquote, Construct::BlockQuote, mapping);

    html
}

/// One attribute-preserving pass: opening tags become `<{mapped}{attrs}>`,
/// closing tags become `</{first token of mapped}>`.
fn rewrite_block_tag(
    html: &str,
    open_re: &Regex,
    construct: Construct,
    mapping: &TagMapping,
) -> String {
    let mapped = mapping.get(construct);

    let html = open_re.replace_all(html, |caps: &Captures| {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        format!("<{}{}>", mapped, attrs)
    });

    html.replace(
        &format!("</{}>", construct.default_tag()),
        &format!("</{}>", TagMapping::tag_name(mapped)),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

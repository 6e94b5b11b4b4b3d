//! Markdown processing for tagdown
//!
//! Conversion (comrak) and the tag-rewriting post-process applied to its
//! output. The full pipeline is: normalize clipboard artifacts, convert to
//! HTML, then rewrite tags per the mapping.

mod converter;
mod rewrite;

pub use converter::*;
pub use rewrite::*;

//! tagdown - Markdown to HTML conversion with configurable tag substitutions
//!
//! The core of a Markdown editor whose output tags are user-configurable:
//! converter output (`<strong>`, `<em>`, `<h1>`, ...) is rewritten into the
//! tag names stored in a persisted JSON mapping, preserving attributes.
//!
//! Pipeline: document text → block-quote tab normalization → comrak →
//! [`markdown::process`] with the session's [`config::TagMapping`].

pub mod config;
pub mod document;
pub mod error;
pub mod files;
pub mod markdown;
pub mod session;

pub use config::{Construct, Settings, TagMapping};
pub use document::Document;
pub use error::{Error, Result};
pub use session::{EditorSession, SettingsForm};

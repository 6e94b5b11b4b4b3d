//! Configuration module for tagdown
//!
//! This module holds the tag mapping table, the user settings that wrap it,
//! and JSON persistence to an explicit path or the platform config directory.

mod mapping;
mod persistence;
mod settings;

pub use mapping::*;
pub use persistence::*;
pub use settings::*;

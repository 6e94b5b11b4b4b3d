//! User settings for tagdown
//!
//! This module defines the `Settings` struct persisted to the configuration
//! file: the tag mapping plus the font fields shared by the editor and the
//! preview pane.

use crate::config::TagMapping;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default font family for the editor and preview. Present in the
/// configuration file but never mutated by a settings save.
const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// Default font size in points.
const DEFAULT_FONT_SIZE: u32 = 14;

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences persisted as JSON.
///
/// All fields have defaults via `Default` and `#[serde(default)]`, so a
/// partial or missing configuration file still yields usable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Construct-to-tag translation table
    pub style_mapping: TagMapping,

    /// Font family for editor and preview (fixed, not user-editable)
    pub font_family: String,

    /// Font size for editor and preview (in points)
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style_mapping: TagMapping::default(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and sanitize the result.
    ///
    /// Sanitization replaces blank mapping values with each construct's
    /// default tag, so downstream code never sees an empty tag name.
    pub fn from_json_sanitized(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Repair any invalid field values in place.
    pub fn sanitize(&mut self) {
        self.style_mapping.sanitize();
        if self.font_family.trim().is_empty() {
            self.font_family = DEFAULT_FONT_FAMILY.to_string();
        }
        if self.font_size == 0 {
            self.font_size = DEFAULT_FONT_SIZE;
        }
    }

    /// Parse and apply a font size from raw user input.
    ///
    /// Unlike tag fields, font size always overwrites when valid; invalid
    /// input is rejected with `Error::InvalidFontSize` and leaves the
    /// current size unchanged.
    pub fn set_font_size_from_input(&mut self, input: &str) -> Result<()> {
        let trimmed = input.trim();
        match trimmed.parse::<u32>() {
            Ok(size) if size > 0 => {
                self.font_size = size;
                Ok(())
            }
            _ => Err(Error::InvalidFontSize(trimmed.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Construct;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.font_family, "Segoe UI");
        assert_eq!(settings.font_size, 14);
        assert!(settings.style_mapping.is_default());
    }

    #[test]
    fn test_from_json_sanitized_repairs_blank_mapping_values() {
        let json = r#"{"style_mapping": {"bold": "", "h1": "heading1"}, "font_size": 16}"#;
        let settings = Settings::from_json_sanitized(json).unwrap();

        assert_eq!(settings.style_mapping.get(Construct::Bold), "strong");
        assert_eq!(settings.style_mapping.get(Construct::H1), "heading1");
        assert_eq!(settings.font_size, 16);
    }

    #[test]
    fn test_from_json_sanitized_rejects_invalid_json() {
        assert!(Settings::from_json_sanitized("{ not json }").is_err());
    }

    #[test]
    fn test_sanitize_repairs_zero_font_size() {
        let mut settings = Settings::default();
        settings.font_size = 0;
        settings.font_family = " ".to_string();
        settings.sanitize();
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.font_family, "Segoe UI");
    }

    #[test]
    fn test_set_font_size_from_valid_input() {
        let mut settings = Settings::default();
        settings.set_font_size_from_input(" 18 ").unwrap();
        assert_eq!(settings.font_size, 18);
    }

    #[test]
    fn test_set_font_size_rejects_non_integer() {
        let mut settings = Settings::default();
        let err = settings.set_font_size_from_input("large").unwrap_err();
        assert!(matches!(err, Error::InvalidFontSize(s) if s == "large"));
        assert_eq!(settings.font_size, 14);
    }

    #[test]
    fn test_set_font_size_rejects_zero() {
        let mut settings = Settings::default();
        assert!(settings.set_font_size_from_input("0").is_err());
        assert_eq!(settings.font_size, 14);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut settings = Settings::default();
        settings.style_mapping.update(Construct::Bold, "b");
        settings.font_size = 20;

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"font_size": 12, "future_feature": true}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 12);
    }
}

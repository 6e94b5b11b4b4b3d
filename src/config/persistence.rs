//! Configuration file persistence for tagdown
//!
//! This module handles loading and saving the JSON configuration file, both
//! at an explicit path (used by the CLI's `--config` flag and by tests) and
//! at the platform-specific default location.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "tagdown";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Suffix for the temporary file used during atomic writes
const BACKUP_SUFFIX: &str = ".bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\tagdown\`
/// - **macOS**: `~/Library/Application Support/tagdown/`
/// - **Linux**: `~/.config/tagdown/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be
/// determined (e.g., if the HOME environment variable is not set).
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the default configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from a configuration file at an explicit path.
///
/// # Behavior
///
/// 1. If the file does not exist, a new file populated with all defaults is
///    written there and the defaults are returned.
/// 2. If the file exists and parses, the settings are sanitized (blank tag
///    mapping values fall back to defaults) and returned.
/// 3. If the file exists but is not valid JSON, `Error::ConfigParse` is
///    returned. The unreadable file is never silently discarded.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(
            "Config file not found at {}, writing defaults",
            path.display()
        );
        let defaults = Settings::default();
        save_settings(path, &defaults)?;
        return Ok(defaults);
    }

    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    // An empty file carries no user data; treat it like a missing one and
    // rewrite it populated with defaults.
    if contents.trim().is_empty() {
        debug!("Config file is empty, writing defaults");
        let defaults = Settings::default();
        save_settings(path, &defaults)?;
        return Ok(defaults);
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!("Configuration loaded successfully from {}", path.display());
    Ok(settings)
}

/// Load settings from the default config file location.
///
/// Missing file and directory behave as in [`load_settings`]; a corrupted
/// file surfaces `Error::ConfigParse`.
pub fn load_config() -> Result<Settings> {
    let path = get_config_file_path()?;
    load_settings(&path)
}

/// Load settings from a configuration file, falling back to defaults.
///
/// A load failure is logged at warning level and the session continues with
/// built-in defaults; the file on disk is left untouched.
pub fn load_settings_or_defaults(path: &Path) -> Settings {
    load_settings(path).unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Load settings from the default location, falling back to defaults.
///
/// Used when no explicit config path was given: the session starts with
/// built-in defaults rather than failing over an unreadable file.
pub fn load_config_or_defaults() -> Settings {
    load_config().unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save settings to a configuration file at an explicit path.
///
/// Writes all twelve mapping keys plus the font fields as pretty JSON.
/// The write is atomic: contents go to a sibling `.bak` file first, which
/// then replaces the original.
///
/// # Errors
///
/// Returns `Error::ConfigSave` if the directory cannot be created or the
/// file cannot be written.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating config directory: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| Error::ConfigSave {
                path: parent.to_path_buf(),
                source: Box::new(e),
            })?;
        }
    }

    debug!("Saving config to: {}", path.display());

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mut backup_path = path.as_os_str().to_os_string();
    backup_path.push(BACKUP_SUFFIX);
    let backup_path = PathBuf::from(backup_path);

    // Write to backup file first (atomic write pattern)
    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    // Replace original with backup
    fs::rename(&backup_path, path).map_err(|e| Error::ConfigSave {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    info!("Configuration saved successfully to {}", path.display());
    Ok(())
}

/// Save settings to the default config file location.
pub fn save_config(settings: &Settings) -> Result<()> {
    let path = get_config_file_path()?;
    save_settings(&path, settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Construct;
    use tempfile::TempDir;

    fn temp_config_path(dir: &TempDir) -> PathBuf {
        dir.path().join(CONFIG_FILE_NAME)
    }

    #[test]
    fn test_get_config_dir_returns_path() {
        let result = get_config_dir();
        assert!(result.is_ok());
        assert!(result.unwrap().to_string_lossy().contains(APP_NAME));
    }

    #[test]
    fn test_load_missing_file_creates_defaults() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());

        // The file was created, populated with all defaults.
        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        let on_disk: Settings = serde_json::from_str(&contents).unwrap();
        assert_eq!(on_disk, Settings::default());
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);

        let mut settings = Settings::default();
        settings.style_mapping.update(Construct::Bold, "b");
        settings.font_size = 16;
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_empty_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(&path, "").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());

        // Like a missing file, the empty one is rewritten with all defaults.
        let contents = fs::read_to_string(&path).unwrap();
        let on_disk: Settings = serde_json::from_str(&contents).unwrap();
        assert_eq!(on_disk, Settings::default());
    }

    #[test]
    fn test_load_or_defaults_falls_back_on_corruption() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(&path, "{ invalid json }").unwrap();

        let settings = load_settings_or_defaults(&path);
        assert_eq!(settings, Settings::default());

        // The unreadable file is reported via the log, never replaced.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ invalid json }");
    }

    #[test]
    fn test_load_corrupted_file_surfaces_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(&path, "{ invalid json }").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));

        // The unreadable file must be left in place.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ invalid json }");
    }

    #[test]
    fn test_load_sanitizes_blank_mapping_values() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(
            &path,
            r#"{"style_mapping": {"italic": "  ", "p": "div class=\"note\""}}"#,
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.style_mapping.get(Construct::Italic), "em");
        assert_eq!(
            settings.style_mapping.get(Construct::Paragraph),
            "div class=\"note\""
        );
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        save_settings(&path, &Settings::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_backup_file() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);

        save_settings(&path, &Settings::default()).unwrap();

        let mut backup = path.as_os_str().to_os_string();
        backup.push(BACKUP_SUFFIX);
        assert!(!PathBuf::from(backup).exists());
    }

    #[test]
    fn test_round_trip_is_semantically_identical() {
        let dir = TempDir::new().unwrap();
        let first = temp_config_path(&dir);
        let second = dir.path().join("copy.json");

        // Loading a missing file writes defaults; re-saving what was loaded
        // must produce a file that loads back identically.
        let original = load_settings(&first).unwrap();
        save_settings(&second, &original).unwrap();

        assert_eq!(load_settings(&second).unwrap(), load_settings(&first).unwrap());
    }

    #[test]
    fn test_save_writes_all_mapping_keys() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        save_settings(&path, &Settings::default()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let mapping = value["style_mapping"].as_object().unwrap();
        assert_eq!(mapping.len(), 12);
        for construct in Construct::ALL {
            assert!(mapping.contains_key(construct.key()));
        }
        assert!(value["font_size"].is_u64());
        assert!(value["font_family"].is_string());
    }
}

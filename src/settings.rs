//! Frontend settings
//!
//! Persisted as RON for hand-editability.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory scanned for games
    pub games_dir: PathBuf,
    /// Command template used to launch a game; `{path}` is substituted
    pub launch_command: Option<String>,
    /// Whether the help bar is drawn
    pub show_help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            games_dir: PathBuf::from("assets/games"),
            launch_command: None,
            show_help: true,
        }
    }
}

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        SettingsError::SerializeError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

/// Load settings from a RON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let contents = fs::read_to_string(path)?;
    load_settings_from_str(&contents)
}

/// Save settings to a RON file
pub fn save_settings<P: AsRef<Path>>(settings: &Settings, path: P) -> Result<(), SettingsError> {
    let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
    let contents = ron::ser::to_string_pretty(settings, config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Parse settings from a RON string (for embedded defaults or testing)
pub fn load_settings_from_str(s: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = ron::from_str(s)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let settings = Settings {
            games_dir: PathBuf::from("/tmp/games"),
            launch_command: Some("emu {path}".to_string()),
            show_help: false,
        };
        let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        let text = ron::ser::to_string_pretty(&settings, config).unwrap();
        let parsed = load_settings_from_str(&text).unwrap();
        assert_eq!(parsed.games_dir, settings.games_dir);
        assert_eq!(parsed.launch_command, settings.launch_command);
        assert_eq!(parsed.show_help, settings.show_help);
    }

    #[test]
    fn test_parse_error_reported() {
        assert!(matches!(
            load_settings_from_str("(games_dir: 3)"),
            Err(SettingsError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_settings("no/such/settings.ron"),
            Err(SettingsError::IoError(_))
        ));
    }
}

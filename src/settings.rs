//! Runtime settings
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! partial file (or no file at all) is fine.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an alternative settings file
pub const SETTINGS_ENV: &str = "ROAD_DODGER_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Frame rate cap for the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as the display allows
    Unlocked,
}

impl FpsLimit {
    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the car, tree and background images
    pub asset_dir: String,
    /// Fixed RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    pub fps_limit: FpsLimit,
    /// Show FPS counter
    pub show_fps: bool,
    /// Keep clouds drifting behind the game-over screen
    pub animate_clouds_on_game_over: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: "images".to_owned(),
            seed: None,
            fps_limit: FpsLimit::Fps60,
            show_fps: false,
            animate_clouds_on_game_over: false,
        }
    }
}

/// Why a settings file could not be used
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str, path: &Path) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings from `path`. `Ok(None)` when the file does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json, path).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Settings file location: `$ROAD_DODGER_SETTINGS` or `./settings.json`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults on any problem
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = Self::path();
        match Self::read(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// No filesystem in the browser
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 42, "show_fps": true }"#, Path::new("t.json"))
                .unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.show_fps);
        assert_eq!(settings.asset_dir, "images");
        assert_eq!(settings.fps_limit, FpsLimit::Fps60);
        assert!(!settings.animate_clouds_on_game_over);
    }

    #[test]
    fn test_fps_limit_parses() {
        let settings =
            Settings::from_json(r#"{ "fps_limit": "Unlocked" }"#, Path::new("t.json")).unwrap();
        assert_eq!(settings.fps_limit.frame_time(), None);
        assert_eq!(FpsLimit::Fps30.frame_time(), Some(1.0 / 30.0));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ seed: ", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = Path::new("definitely/not/here/settings.json");
        assert!(matches!(Settings::read(path), Ok(None)));
    }

    #[test]
    fn test_round_trip_defaults() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let back = Settings::from_json(&json, Path::new("t.json")).unwrap();
        assert_eq!(back, Settings::default());
    }
}

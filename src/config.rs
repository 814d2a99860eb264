use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "./wordcards.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub card: CardConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub font_size: f32,
    /// Subtracted from the window width to get the wrap width
    pub wrap_padding: f32,
    /// Wrap width before the first resize event
    pub initial_wrap: f32,
    pub min_wrap: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("./cet6.json"),
            card: CardConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            wrap_padding: 20.0,
            initial_wrap: 380.0,
            min_wrap: 40.0,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
        }
    }
}

impl Config {
    /// Reads the config file if there is one. Any problem with it falls back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => {
                tracing::info!("using config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let buffer = fs::read_to_string(path)?;
        serde_json::from_str(&buffer).map_err(Error::ConfigFailed)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path().join("wordcards.json")), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dictionary_path": "words.json", "card": {{"font_size": 20}}}}"#).unwrap();

        let config = Config::load(file.path());

        assert_eq!(config.dictionary_path, PathBuf::from("words.json"));
        assert_eq!(config.card.font_size, 20.0);
        assert_eq!(config.card.wrap_padding, 20.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "dictionary_path = 3").unwrap();

        assert!(matches!(
            Config::try_load(file.path()),
            Err(Error::ConfigFailed(_))
        ));
        assert_eq!(Config::load(file.path()), Config::default());
    }
}

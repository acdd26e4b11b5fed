//! Runtime configuration, built once at startup from the environment.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ConfigError;
use crate::models::submission::OutputFormat;

/// Environment key for the destination folder.
pub const SAVE_FOLDER_KEY: &str = "SAVE_FOLDER";
/// Environment key for the default output format.
pub const DEFAULT_FORMAT_KEY: &str = "DEFAULT_FORMAT";
/// Environment key for stripping noise lines from the saved body.
pub const STRIP_NOISE_KEY: &str = "STRIP_NOISE";

/// Main configuration for the jobclip pipeline.
///
/// Constructed once in `main` and passed by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Folder the posting files are written to.
    pub save_folder: PathBuf,

    /// Output format used without asking. `None` means prompt.
    pub default_format: Option<OutputFormat>,

    /// Remove noise lines from the saved body.
    pub strip_noise: bool,
}

impl Config {
    /// Create a configuration that prompts for the format and keeps the body verbatim.
    pub fn new(save_folder: impl Into<PathBuf>) -> Self {
        Self {
            save_folder: save_folder.into(),
            default_format: None,
            strip_noise: false,
        }
    }

    /// Set the default output format.
    pub fn with_default_format(mut self, format: Option<OutputFormat>) -> Self {
        self.default_format = format;
        self
    }

    /// Set noise stripping for the saved body.
    pub fn with_strip_noise(mut self, strip: bool) -> Self {
        self.strip_noise = strip;
        self
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_folder = lookup(SAVE_FOLDER_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingSaveFolder)?;

        let home = lookup("HOME").or_else(|| lookup("USERPROFILE"));
        let save_folder = expand_home(&raw_folder, home.as_deref());

        if !save_folder.is_dir() {
            return Err(ConfigError::InvalidSaveFolder(save_folder));
        }

        let default_format = match lookup(DEFAULT_FORMAT_KEY) {
            Some(value) if !value.trim().is_empty() => Some(
                value
                    .parse::<OutputFormat>()
                    .map_err(|_| ConfigError::InvalidFormat(value.trim().to_string()))?,
            ),
            _ => None,
        };

        let strip_noise = match lookup(STRIP_NOISE_KEY) {
            Some(value) if !value.trim().is_empty() => parse_flag(STRIP_NOISE_KEY, &value)?,
            _ => false,
        };

        Ok(Self {
            save_folder,
            default_format,
            strip_noise,
        })
    }

    /// Format used when the user just presses Enter at the format prompt.
    pub fn fallback_format(&self) -> OutputFormat {
        self.default_format.unwrap_or_default()
    }
}

fn expand_home(raw: &str, home: Option<&str>) -> PathBuf {
    match (raw.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with(['/', '\\']) => {
            Path::new(home).join(rest.trim_start_matches(['/', '\\']))
        }
        _ => PathBuf::from(raw),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.trim().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_save_folder() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSaveFolder));

        let err = Config::from_lookup(lookup(&[(SAVE_FOLDER_KEY, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSaveFolder));
    }

    #[test]
    fn test_save_folder_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Config::from_lookup(lookup(&[(SAVE_FOLDER_KEY, missing.to_str().unwrap())]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSaveFolder(p) if p == missing));
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::from_lookup(lookup(&[(SAVE_FOLDER_KEY, dir.path().to_str().unwrap())]))
                .unwrap();

        assert_eq!(config, Config::new(dir.path()));
        assert_eq!(config.fallback_format(), OutputFormat::Txt);
    }

    #[test]
    fn test_default_format_and_strip_noise() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_lookup(lookup(&[
            (SAVE_FOLDER_KEY, dir.path().to_str().unwrap()),
            (DEFAULT_FORMAT_KEY, " DOCX "),
            (STRIP_NOISE_KEY, "yes"),
        ]))
        .unwrap();

        assert_eq!(config.default_format, Some(OutputFormat::Docx));
        assert!(config.strip_noise);
    }

    #[test]
    fn test_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().to_str().unwrap();

        let err = Config::from_lookup(lookup(&[(SAVE_FOLDER_KEY, folder), (DEFAULT_FORMAT_KEY, "pdf")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(v) if v == "pdf"));

        let err = Config::from_lookup(lookup(&[(SAVE_FOLDER_KEY, folder), (STRIP_NOISE_KEY, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { .. }));
    }

    #[test]
    fn test_home_expansion() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Jobs")).unwrap();
        let config = Config::from_lookup(lookup(&[
            (SAVE_FOLDER_KEY, "~/Jobs"),
            ("HOME", dir.path().to_str().unwrap()),
        ]))
        .unwrap();

        assert_eq!(config.save_folder, dir.path().join("Jobs"));
    }
}

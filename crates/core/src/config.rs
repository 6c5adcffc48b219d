use std::{fs, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File system error")]
    IO(#[from] std::io::Error),
    #[error("YAML parsing error")]
    YAMLError(#[from] serde_yaml::Error),
}

/// User tunable presentation settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub typing_delay_ms: u64,
    pub typing_effect: bool,
    pub show_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            typing_delay_ms: 20,
            typing_effect: true,
            show_banner: true,
        }
    }
}

impl Settings {
    /// Effective delay between characters; zero when the effect is off.
    pub fn typing_delay(&self) -> Duration {
        if self.typing_effect {
            Duration::from_millis(self.typing_delay_ms)
        } else {
            Duration::ZERO
        }
    }
}

/// Where `mindcare.yml` is looked up when no path is given.
///
/// `XDG_CONFIG_HOME` wins over the platform config directory.
pub fn default_settings_path() -> PathBuf {
    settings_path_in(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        dirs::config_dir(),
    )
}

fn settings_path_in(xdg_config_home: Option<PathBuf>, platform_dir: Option<PathBuf>) -> PathBuf {
    match xdg_config_home.or(platform_dir) {
        Some(base) => base.join("mindcare").join("mindcare.yml"),
        None => PathBuf::from("mindcare.yml"),
    }
}

/// Loads settings from `config_path`, or the default location.
///
/// A missing file yields the defaults; the file is never created.
#[instrument(skip(config_path))]
pub fn get_settings(config_path: Option<PathBuf>) -> Result<Settings, ConfigError> {
    let path = config_path.unwrap_or_else(default_settings_path);
    if !path.exists() {
        debug!(path = %path.display(), "No settings file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(&content)?;
    debug!(?settings, "Loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{fs::File, io::Write};

    use tempfile::tempdir;

    use super::*;

    fn write_settings(dir: &std::path::Path, content: &str) -> PathBuf {
        let path = dir.join("mindcare.yml");
        File::create(&path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn test_default_typing_delay() {
        let settings = Settings::default();
        assert!(settings.typing_effect);
        assert_eq!(settings.typing_delay(), Duration::from_millis(20));
    }

    #[test]
    fn test_settings_path_under_xdg_config_home() {
        let path = settings_path_in(
            Some(PathBuf::from("/xdg/config")),
            Some(PathBuf::from("/home/me/.config")),
        );
        assert_eq!(path, PathBuf::from("/xdg/config/mindcare/mindcare.yml"));
    }

    #[test]
    fn test_settings_path_falls_back_to_platform_dir() {
        let path = settings_path_in(None, Some(PathBuf::from("/home/me/.config")));
        assert_eq!(path, PathBuf::from("/home/me/.config/mindcare/mindcare.yml"));
        assert_eq!(settings_path_in(None, None), PathBuf::from("mindcare.yml"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        let settings = get_settings(Some(path.clone())).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!path.exists(), "settings file must not be created");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = write_settings(dir.path(), "typing_delay_ms: 5\n");
        let settings = get_settings(Some(path)).unwrap();
        assert_eq!(settings.typing_delay_ms, 5);
        assert!(settings.typing_effect);
        assert!(settings.show_banner);
        assert_eq!(settings.typing_delay(), Duration::from_millis(5));
    }

    #[test]
    fn test_disabled_effect_has_no_delay() {
        let dir = tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            "typing_effect: false\ntyping_delay_ms: 50\nshow_banner: false\n",
        );
        let settings = get_settings(Some(path)).unwrap();
        assert!(!settings.show_banner);
        assert_eq!(settings.typing_delay(), Duration::ZERO);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = write_settings(dir.path(), "  \n");
        assert_eq!(get_settings(Some(path)).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_settings(dir.path(), "typing_delay_ms: soon\n");
        let err = get_settings(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::YAMLError(_)));
        // The parser message is carried as the source, not repeated.
        assert_eq!(err.to_string(), "YAML parsing error");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_settings(dir.path(), "theme: dark\n");
        assert!(matches!(
            get_settings(Some(path)),
            Err(ConfigError::YAMLError(_))
        ));
    }
}

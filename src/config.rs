// src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct YoutubeOpts {
    /// API key for the YouTube Data API; without it placeholder videos are shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the Google APIs endpoint (default: "https://www.googleapis.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of videos requested per search (default: 9)
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Request timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://www.googleapis.com".to_string()
}

fn default_max_results() -> u32 {
    9
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for YoutubeOpts {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            max_results: default_max_results(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Where store notifications go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTarget {
    #[default]
    Terminal,
    Log,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Directory holding one file per storage key
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    #[serde(default)]
    pub notifications: NotificationTarget,

    #[serde(default)]
    pub youtube: YoutubeOpts,
}

fn default_storage_dir() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/learnify")
        .to_string_lossy()
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            notifications: NotificationTarget::default(),
            youtube: YoutubeOpts::default(),
        }
    }
}

impl Settings {
    /// Storage directory with `~` and environment variables expanded
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::full(&self.storage_dir).map_or_else(
            |_| self.storage_dir.clone(),
            |expanded| expanded.into_owned(),
        ))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/learnify/config.toml"))
}

fn read_config_file(path: &Path) -> DomainResult<Settings> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DomainError::from(e).context(format!("Cannot read config file {}", path.display()))
    })?;
    toml::from_str::<Settings>(&text).map_err(|e| {
        DomainError::Deserialization(format!("Invalid config file {}: {}", path.display(), e))
    })
}

// Load settings from config files and environment variables
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = match config_file {
        // An explicitly requested file must exist and parse
        Some(path) => read_config_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => {
                trace!("Loading config from: {:?}", path);
                read_config_file(&path).unwrap_or_else(|e| {
                    debug!("Ignoring default config: {}", e);
                    Settings::default()
                })
            }
            _ => Settings::default(),
        },
    };

    // Override with environment variables
    if let Ok(dir) = std::env::var("LEARNIFY_STORAGE_DIR") {
        trace!("Using LEARNIFY_STORAGE_DIR from environment: {}", dir);
        settings.storage_dir = dir;
    }

    if let Ok(key) = std::env::var("LEARNIFY_YOUTUBE_API_KEY") {
        trace!("Using LEARNIFY_YOUTUBE_API_KEY from environment");
        settings.youtube.api_key = Some(key).filter(|k| !k.trim().is_empty());
    }

    if let Ok(max) = std::env::var("LEARNIFY_YOUTUBE_MAX_RESULTS") {
        match max.parse::<u32>() {
            Ok(n) if n > 0 => settings.youtube.max_results = n,
            _ => debug!("Ignoring invalid LEARNIFY_YOUTUBE_MAX_RESULTS: {}", max),
        }
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::EnvGuard;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config_file(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, content).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    #[serial]
    fn given_no_overrides_when_load_then_defaults() {
        let _guard = EnvGuard::new();
        env::remove_var("LEARNIFY_STORAGE_DIR");
        env::remove_var("LEARNIFY_YOUTUBE_API_KEY");
        env::remove_var("LEARNIFY_YOUTUBE_MAX_RESULTS");

        let (_dir, path) = create_temp_config_file("");
        let settings = load_settings(Some(&path)).unwrap();

        assert!(settings.storage_dir.ends_with(".config/learnify"));
        assert_eq!(settings.youtube.max_results, 9);
        assert_eq!(settings.youtube.api_key, None);
        assert_eq!(settings.notifications, NotificationTarget::Terminal);
    }

    #[test]
    #[serial]
    fn given_config_file_when_load_then_values_used() {
        let _guard = EnvGuard::new();
        env::remove_var("LEARNIFY_STORAGE_DIR");
        env::remove_var("LEARNIFY_YOUTUBE_API_KEY");
        env::remove_var("LEARNIFY_YOUTUBE_MAX_RESULTS");

        let (_dir, path) = create_temp_config_file(
            r#"
            storage_dir = "/config/file/store"
            notifications = "log"

            [youtube]
            api_key = "from-file"
            max_results = 5
            "#,
        );
        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.storage_dir, "/config/file/store");
        assert_eq!(settings.notifications, NotificationTarget::Log);
        assert_eq!(settings.youtube.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.youtube.max_results, 5);
        assert_eq!(settings.youtube.base_url, "https://www.googleapis.com");
    }

    #[test]
    #[serial]
    fn given_env_vars_when_load_then_override_config_file() {
        let _guard = EnvGuard::new();
        env::set_var("LEARNIFY_STORAGE_DIR", "/env/store");
        env::set_var("LEARNIFY_YOUTUBE_API_KEY", "from-env");
        env::set_var("LEARNIFY_YOUTUBE_MAX_RESULTS", "3");

        let (_dir, path) = create_temp_config_file(
            r#"
            storage_dir = "/config/file/store"
            [youtube]
            api_key = "from-file"
            "#,
        );
        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.storage_dir, "/env/store");
        assert_eq!(settings.youtube.api_key.as_deref(), Some("from-env"));
        assert_eq!(settings.youtube.max_results, 3);
    }

    #[test]
    #[serial]
    fn given_invalid_max_results_env_when_load_then_ignored() {
        let _guard = EnvGuard::new();
        env::remove_var("LEARNIFY_STORAGE_DIR");
        env::remove_var("LEARNIFY_YOUTUBE_API_KEY");
        env::set_var("LEARNIFY_YOUTUBE_MAX_RESULTS", "lots");

        let (_dir, path) = create_temp_config_file("");
        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.youtube.max_results, 9);
    }

    #[test]
    fn given_missing_explicit_config_when_load_then_error_names_path() {
        let err = load_settings(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err
            .to_string()
            .contains("Cannot read config file /definitely/not/here.toml"));
    }

    #[test]
    fn given_default_settings_when_generate_config_then_parses_back() {
        let text = generate_default_config();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_tilde_dir_when_storage_path_then_expanded() {
        let settings = Settings {
            storage_dir: "~/learnify-data".to_string(),
            ..Settings::default()
        };
        let path = settings.storage_path();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("learnify-data"));
    }
}

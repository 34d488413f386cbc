//! Client configuration: where the item service lives.
//!
//! The base URL is resolved from, in order:
//!
//! 1. an explicit override (CLI flag or environment variable),
//! 2. `base_url` in the JSON config file,
//! 3. the default host for the target platform.
//!
//! The config file defaults to `$XDG_CONFIG_HOME/valetdesk/config.json`:
//!
//! ```json
//! { "base_url": "http://192.168.1.5:5000", "platform": "android" }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::debug;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValetError};

/// Device environment the client runs in.
///
/// Only matters for choosing the default host: the Android emulator reaches
/// the host machine through `10.0.2.2`, everything else through `localhost`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    #[default]
    Generic,
}

impl Platform {
    /// Default service URL for the platform.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Platform::Android => "http://10.0.2.2:5000",
            Platform::Ios => "http://localhost:5000",
            Platform::Generic => "http://localhost:5000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Generic => "generic",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "generic" | "default" | "web" => Ok(Platform::Generic),
            _ => Err(format!("Invalid platform: {s}")),
        }
    }
}

/// On-disk configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    /// Service base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Platform used when no base URL is configured
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl ConfigFile {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns `ValetError::FileSystem` if the file cannot be read and
    /// `ValetError::Configuration` if it is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ValetError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            ValetError::configuration(format!("Invalid config file '{}': {e}", path.display()))
        })
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service base URL, e.g. `http://localhost:5000`
    pub base_url: Url,
    /// Platform the configuration was resolved for
    pub platform: Platform,
}

impl ClientConfig {
    /// Configuration pointing at an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            platform: Platform::default(),
        })
    }
}

/// Builder for resolving a [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    platform: Option<Platform>,
    config_file: Option<PathBuf>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit base URL that wins over every other source.
    pub fn with_base_url(mut self, base_url: Option<impl Into<String>>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Sets the target platform.
    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        if let Some(platform) = platform {
            self.platform = Some(platform);
        }
        self
    }

    /// Sets a custom config file path.
    ///
    /// An explicit path must exist. If not specified, the XDG location
    /// `$XDG_CONFIG_HOME/valetdesk/config.json` is read when present.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValetError::FileSystem` if an explicit config file cannot be
    /// read, `ValetError::Configuration` if the file or the resulting URL is
    /// invalid.
    pub fn build(self) -> Result<ClientConfig> {
        let file = match &self.config_file {
            Some(path) => ConfigFile::load(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => ConfigFile::load(&path)?,
                _ => ConfigFile::default(),
            },
        };

        let platform = self.platform.or(file.platform).unwrap_or_default();
        let base_url = self
            .base_url
            .or(file.base_url)
            .unwrap_or_else(|| platform.default_base_url().to_string());

        debug!("Resolved service base URL {base_url} for platform {}", platform.as_str());

        Ok(ClientConfig {
            base_url: parse_base_url(&base_url)?,
            platform,
        })
    }

    /// Returns the default config file path, if the XDG directories resolve.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("valetdesk").find_config_file("config.json")
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ValetError::configuration(format!("Invalid base URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ValetError::configuration(format!(
            "Base URL '{raw}' must be an http(s) URL"
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write config file");
        file
    }

    #[test]
    fn test_platform_defaults() {
        assert_eq!(Platform::Android.default_base_url(), "http://10.0.2.2:5000");
        assert_eq!(Platform::Ios.default_base_url(), "http://localhost:5000");
        assert_eq!(Platform::Generic.default_base_url(), "http://localhost:5000");
        assert_eq!("Android".parse::<Platform>(), Ok(Platform::Android));
        assert!("windows-phone".parse::<Platform>().is_err());
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let file = config_file(r#"{"base_url": "http://192.168.1.5:5000"}"#);

        let config = ClientConfigBuilder::new()
            .with_base_url(Some("http://example.test:8080"))
            .with_platform(Some(Platform::Android))
            .with_config_file(Some(file.path()))
            .build()
            .expect("Failed to build config");

        assert_eq!(config.base_url.as_str(), "http://example.test:8080/");
        assert_eq!(config.platform, Platform::Android);
    }

    #[test]
    fn test_config_file_base_url_beats_platform_default() {
        let file = config_file(r#"{"base_url": "http://192.168.1.5:5000", "platform": "ios"}"#);

        let config = ClientConfigBuilder::new()
            .with_config_file(Some(file.path()))
            .build()
            .expect("Failed to build config");

        assert_eq!(config.base_url.as_str(), "http://192.168.1.5:5000/");
        assert_eq!(config.platform, Platform::Ios);
    }

    #[test]
    fn test_platform_default_when_nothing_configured() {
        let file = config_file("{}");

        let config = ClientConfigBuilder::new()
            .with_platform(Some(Platform::Android))
            .with_config_file(Some(file.path()))
            .build()
            .expect("Failed to build config");

        assert_eq!(config.base_url.as_str(), "http://10.0.2.2:5000/");
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = ClientConfigBuilder::new()
            .with_config_file(Some(dir.path().join("missing.json")))
            .build();

        assert!(matches!(result, Err(ValetError::FileSystem { .. })));
    }

    #[test]
    fn test_invalid_config_contents() {
        let file = config_file("base_url = 'toml is not json'");
        let result = ClientConfigBuilder::new()
            .with_config_file(Some(file.path()))
            .build();

        assert!(matches!(result, Err(ValetError::Configuration { .. })));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(ClientConfig::new("ftp://example.test").is_err());
        assert!(ClientConfig::new("not a url").is_err());
        assert!(ClientConfig::new("https://api.example.test/v1").is_ok());
    }
}

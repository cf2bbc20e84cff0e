//! Configuration for `sitemapper.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                       |
//! |-------------|-----------------------------------------------|
//! | `[site]`    | Site identity (domain)                        |
//! | `[sitemap]` | Output path, protocol, per-file URL limit     |
//! | `[ping]`    | Search-engine ping endpoints                  |
//!
//! All fields have defaults; a missing file section falls back to them.

use crate::ping::Engine;
use crate::sitemap::MAX_URLS_PER_SITEMAP;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Root configuration structure representing sitemapper.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub sitemap: SitemapConfig,
    pub ping: PingConfig,
}

/// Site identity configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Domain that absolute sitemap URLs are built against,
    /// e.g. `"example.com"`.
    pub domain: String,
}

/// Sitemap generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for the sitemap file, relative to the output directory.
    /// With multiple pages this becomes the index document.
    pub path: PathBuf,
    /// URL scheme used when deriving the sitemap's own URL.
    pub protocol: String,
    /// Maximum URLs per sitemap file.
    pub limit: usize,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            protocol: "http".to_string(),
            limit: MAX_URLS_PER_SITEMAP,
        }
    }
}

/// Search-engine ping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PingConfig {
    /// Enable ping notifications.
    pub enable: bool,
    /// Engines to notify. Defaults to Ask, Google and Live Search.
    pub engines: Vec<Engine>,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            enable: false,
            engines: Engine::defaults(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Absolute URL of the sitemap (or index) file, derived from the
    /// configured domain, protocol and output path. `None` when no domain
    /// is configured.
    pub fn sitemap_url(&self) -> Option<String> {
        if self.site.domain.is_empty() {
            return None;
        }
        let path = self.sitemap.path.to_string_lossy();
        Some(format!(
            "{}://{}/{}",
            self.sitemap.protocol,
            self.site.domain.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sitemap.limit == 0 {
            return Err(ConfigError::Validation(
                "sitemap.limit must be at least 1".to_string(),
            ));
        }
        if self.sitemap.protocol != "http" && self.sitemap.protocol != "https" {
            return Err(ConfigError::Validation(format!(
                "sitemap.protocol must be \"http\" or \"https\", got `{}`",
                self.sitemap.protocol
            )));
        }
        for engine in &self.ping.engines {
            if engine.name.is_empty() || engine.ping_url.is_empty() {
                return Err(ConfigError::Validation(
                    "ping.engines entries need both a name and a ping_url".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.sitemap.enable);
        assert_eq!(config.sitemap.path, PathBuf::from("sitemap.xml"));
        assert_eq!(config.sitemap.protocol, "http");
        assert_eq!(config.sitemap.limit, MAX_URLS_PER_SITEMAP);
        assert!(!config.ping.enable);
        assert_eq!(config.ping.engines.len(), 3);
    }

    #[test]
    fn test_from_str() {
        let config = Config::from_str(
            r#"
            [site]
            domain = "example.com"

            [sitemap]
            protocol = "https"
            limit = 100

            [ping]
            enable = true
            engines = [{ name = "Google", ping_url = "http://www.google.com/webmasters/tools/ping" }]
            "#,
        )
        .unwrap();

        assert_eq!(config.site.domain, "example.com");
        assert_eq!(config.sitemap.protocol, "https");
        assert_eq!(config.sitemap.limit, 100);
        assert!(config.ping.enable);
        assert_eq!(config.ping.engines.len(), 1);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = Config::from_str("[site\ndomain = \"example.com\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let result = Config::from_str("[sitemap]\nlimit = 0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_protocol() {
        let result = Config::from_str("[sitemap]\nprotocol = \"ftp\"");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_unnamed_engine() {
        let result = Config::from_str(
            r#"
            [ping]
            engines = [{ name = "", ping_url = "http://ping.example.com" }]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_sitemap_url() {
        let mut config = Config::default();
        assert_eq!(config.sitemap_url(), None);

        config.site.domain = "example.com".to_string();
        assert_eq!(
            config.sitemap_url().as_deref(),
            Some("http://example.com/sitemap.xml")
        );

        config.sitemap.protocol = "https".to_string();
        config.sitemap.path = "sitemaps/index.xml".into();
        assert_eq!(
            config.sitemap_url().as_deref(),
            Some("https://example.com/sitemaps/index.xml")
        );
    }
}

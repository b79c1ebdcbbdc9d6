//! Application configuration
//!
//! Configuration loaded from .gla.toml, with environment overrides.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from .gla.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Root url of the WordPress site (e.g. "https://shop.example.com")
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// REST namespace of the plugin
    #[serde(default = "default_api_namespace")]
    pub api_namespace: String,

    /// WordPress user owning the application password
    #[serde(default)]
    pub username: Option<String>,

    /// WordPress application password used for basic auth
    #[serde(default)]
    pub application_password: Option<String>,

    /// Request timeout; unset keeps the transport default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_site_url() -> String {
    "http://localhost".to_string()
}

fn default_api_namespace() -> String {
    "/wc/gla".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            api_namespace: default_api_namespace(),
            username: None,
            application_password: None,
            request_timeout_secs: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from file (CWD, home, config dir) or use defaults,
    /// then apply environment overrides
    ///
    /// A config file that exists but does not parse is an error.
    pub fn load() -> Result<Self> {
        let mut config = match crate::load_config_file() {
            Some(content) => Self::parse(&content)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse the content of a config file
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Override fields from GLA_* environment variables
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("GLA_SITE_URL") {
            self.site_url = url;
        }
        if let Some(user) = lookup("GLA_USERNAME") {
            self.username = Some(user);
        }
        if let Some(password) = lookup("GLA_APPLICATION_PASSWORD") {
            self.application_password = Some(password);
        }
    }

    /// Check the configuration is usable for API calls
    pub fn validate(&self) -> Result<()> {
        let url = self.site_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("site_url must start with http:// or https://, got '{}'", url);
        }
        if !self.api_namespace.trim_matches('/').contains('/') {
            bail!(
                "api_namespace must look like '/vendor/name', got '{}'",
                self.api_namespace
            );
        }
        if self.username.is_some() != self.application_password.is_some() {
            bail!("username and application_password must be set together");
        }
        Ok(())
    }

    /// Whether requests will carry credentials
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.application_password.is_some()
    }
}

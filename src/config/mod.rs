//
//  duplo-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Connection settings for the DuploCloud control plane: host, API token,
//! optional acting user and request timeout.
//!
//! ## Sources
//!
//! Settings are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults (30 second timeout)
//! 2. The TOML file at [`ClientConfig::config_path`]
//! 3. Environment variables `DUPLO_HOST`, `DUPLO_TOKEN`, `DUPLO_USER`, `DUPLO_TIMEOUT`
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/duplo/config.toml`
//! - **macOS**: `~/Library/Application Support/duplo/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\duplo\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! host = "https://acme.duplocloud.net"
//! token = "xxxxxxxx"
//! user_account = "ops@acme.com"
//! timeout_secs = 60
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duplo_client::config::ClientConfig;
//!
//! let config = ClientConfig::load()?;
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::common::ApiError;

/// Environment variable overriding [`ClientConfig::host`].
pub const ENV_HOST: &str = "DUPLO_HOST";
/// Environment variable overriding [`ClientConfig::token`].
pub const ENV_TOKEN: &str = "DUPLO_TOKEN";
/// Environment variable overriding [`ClientConfig::user_account`].
pub const ENV_USER: &str = "DUPLO_USER";
/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const ENV_TIMEOUT: &str = "DUPLO_TIMEOUT";

/// Connection settings for a DuploCloud control plane.
///
/// # Fields
///
/// * `host` - Base URL of the control plane, e.g. `https://acme.duplocloud.net`
/// * `token` - API token, sent as a bearer token
/// * `user_account` - Optional user to act as, sent in the `DuploUser` header
/// * `timeout_secs` - Per-request timeout
///
/// # Examples
///
/// ```rust
/// use duplo_client::config::ClientConfig;
///
/// let config = ClientConfig::new("https://acme.duplocloud.net/", "secret");
/// assert_eq!(config.host, "https://acme.duplocloud.net");
/// assert_eq!(config.timeout_secs, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_account: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            token: String::new(),
            user_account: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for `host` authenticated with `token`.
    ///
    /// The host is normalized with [`normalize_host`].
    pub fn new(host: &str, token: &str) -> Self {
        Self {
            host: normalize_host(host),
            token: token.to_string(),
            ..Default::default()
        }
    }

    /// Sets the user the client acts as.
    pub fn with_user_account(mut self, user: impl Into<String>) -> Self {
        self.user_account = Some(user.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Loads configuration from the default file, then applies environment
    /// overrides.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if config_exists(&path) {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads configuration from a TOML file, without environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_config_file(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.host = normalize_host(&config.host);
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "duplo")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Applies overrides from `lookup`, keyed by the `DUPLO_*` variable names.
    ///
    /// Empty values are ignored, as is a timeout that does not parse.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = lookup(ENV_HOST) {
            self.host = normalize_host(&host);
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = token;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user_account = Some(user);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            match timeout.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid {}: {}", ENV_TIMEOUT, timeout),
            }
        }
    }

    /// Checks that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// - Host or token missing
    /// - Host is not a valid `http`/`https` URL
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.host.is_empty() || self.token.is_empty() {
            return Err(ApiError::Config(
                "missing provider config for 'duplo_token' 'duplo_host'. Not defined in environment var / config file"
                    .to_string(),
            ));
        }
        host_url(&self.host)?;
        Ok(())
    }
}

//! Runtime configuration for the donation front end.
//!
//! Sources, lowest to highest precedence: built-in defaults, an optional
//! TOML file, `DONATE_*` environment variables, then CLI flags (applied by
//! the binary).
//!
//! ```toml
//! backend_url = "https://api.example.org"
//! maintenance_mode = false
//! request_timeout_secs = 20
//! variant = "hero"
//! status_base_url = "https://donate.example.org/status"
//! ```

use std::{fs, path::Path, path::PathBuf, time::Duration};

use donate_core::{FormVariant, GatewayConfig};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const ENV_BACKEND_URL: &str = "DONATE_BACKEND_URL";
pub const ENV_MAINTENANCE_MODE: &str = "DONATE_MAINTENANCE_MODE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {name}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("no backend URL configured; set backend_url, DONATE_BACKEND_URL or --backend-url")]
    MissingBackendUrl,

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub backend_url: Option<String>,
    /// Replaces the form with a maintenance notice.
    pub maintenance_mode: bool,
    pub request_timeout_secs: u64,
    pub variant: FormVariant,
    /// Prefix of the public page where a donor can check a payment.
    pub status_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            maintenance_mode: false,
            request_timeout_secs: 20,
            variant: FormVariant::default(),
            status_base_url: "https://donate.satyalok.in/status".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `path` (if given) and applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overrides values from environment variables looked up via `lookup`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|u| !u.trim().is_empty()) {
            self.backend_url = Some(url);
        }
        if let Some(value) = lookup(ENV_MAINTENANCE_MODE) {
            self.maintenance_mode = parse_flag(ENV_MAINTENANCE_MODE, &value)?;
        }
        Ok(())
    }

    pub fn gateway_config(&self) -> Result<GatewayConfig, ConfigError> {
        let base_url = self
            .backend_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingBackendUrl)?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(GatewayConfig::new(base_url)
            .with_timeout(Duration::from_secs(self.request_timeout_secs)))
    }
}

fn parse_flag(
    name: &'static str,
    value: &str,
) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            name,
            value: value.to_string(),
        }),
    }
}

//! Application configuration.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::warn;

use super::args::CliArgs;

const APP_NAME: &str = "casuse-admin";
const APP_QUALIFIER: &str = "mx";
const APP_ORGANIZATION: &str = "casuse";

/// Fallback base URL of the website backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:20052";
/// Fallback base URL of the hub backend.
pub const DEFAULT_HUB_API_BASE_URL: &str = "http://localhost:20021";
/// Fallback location of the external module hub page.
pub const DEFAULT_HOME_URL: &str = "http://localhost:20020";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Resolved application configuration.
///
/// Sources, weakest first: built-in defaults, an optional `config.toml` in
/// the platform config dir, environment variables, CLI flags. Base URLs are
/// startup configuration and are never derived from runtime state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the website backend API.
    pub api_base_url: String,

    /// Base URL of the hub backend API.
    pub hub_api_base_url: String,

    /// External location of the module hub page ("back to modules").
    pub home_url: String,

    /// Log verbosity level.
    pub log_level: LogLevel,

    /// Log file path.
    pub log_path: Option<PathBuf>,

    /// Session token override from CLI/env; never read from the config file.
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            hub_api_base_url: DEFAULT_HUB_API_BASE_URL.to_string(),
            home_url: DEFAULT_HOME_URL.to_string(),
            log_level: LogLevel::Info,
            log_path: None,
            token: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration, merging the config file with CLI/env arguments.
    #[must_use]
    pub fn load(args: CliArgs) -> Self {
        let path = args
            .config
            .clone()
            .or_else(Self::default_config_path);

        let mut config = path
            .as_deref()
            .and_then(|p| match std::fs::read_to_string(p) {
                Ok(contents) => Some(contents),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "Failed to read config file");
                    None
                }
            })
            .and_then(|contents| match toml::from_str::<Self>(&contents) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!(error = %e, "Failed to parse config file, using defaults");
                    None
                }
            })
            .unwrap_or_default();

        config.merge_with_args(args);
        config
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(api_base_url) = args.api_base_url {
            self.api_base_url = api_base_url;
        }
        if let Some(hub_api_base_url) = args.hub_api_base_url {
            self.hub_api_base_url = hub_api_base_url;
        }
        if let Some(home_url) = args.home_url {
            self.home_url = home_url;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if args.token.is_some() {
            self.token = args.token;
        }
    }

    /// Returns the default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the default log file path for the given binary name.
    #[must_use]
    pub fn default_log_path(binary: &str) -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join(format!("{binary}.log")))
    }

    /// Returns the effective log path for the given binary name.
    #[must_use]
    pub fn effective_log_path(&self, binary: &str) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| Self::default_log_path(binary))
    }
}

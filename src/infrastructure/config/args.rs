//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;

/// CLI arguments shared by both admin consoles.
#[derive(Debug, Default, Parser)]
#[command(
    name = "casuse-admin",
    version,
    about = "Casuse admin terminal console",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the website backend API.
    #[arg(long, env = "WEBSITE_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Base URL of the hub backend API.
    #[arg(long, env = "HUB_API_BASE_URL")]
    pub hub_api_base_url: Option<String>,

    /// External location of the module hub page.
    #[arg(long, env = "CORE_HOME_URL")]
    pub home_url: Option<String>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Session token override, skipping the stored session.
    #[arg(long, env = "CASUSE_ADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

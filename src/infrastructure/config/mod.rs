//! Configuration loading and merging.

mod app_config;
mod args;

pub use app_config::{AppConfig, LogLevel};
pub use args::CliArgs;

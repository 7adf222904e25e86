pub mod app_config;
pub mod config;
pub mod entries;

pub use app_config::{AppConfig, Environment, OutputFormat};
pub use config::{load_app_config, load_app_config_from_env, parse_output_format};
pub use entries::{About, AboutOption, Address, Entry, OpenHours};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

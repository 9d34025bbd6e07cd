mod app_config;
mod config;
mod rewards;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use rewards::{RewardRecord, UNKNOWN_STOCK};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

//! Shared types, Telegram URL handling, and configuration for tgscout.

mod app_config;
mod candidate;
mod config;
pub mod tme;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_PREVIEW_USER_AGENT, DEFAULT_QUERIES};
pub use candidate::{canonical_url, now_filename, now_iso, Candidate, SearchHit, UrlType};
pub use config::{load_app_config, load_app_config_from_env};
pub use tme::{classify_tme_url, extract_handle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

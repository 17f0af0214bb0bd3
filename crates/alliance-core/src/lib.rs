//! Shared data model and configuration for the alliance builder.
//!
//! Holds the brand/organization profile types consumed by the matcher,
//! the profile collection loader, and environment-driven app config.

pub mod app_config;
pub mod config;
pub mod profiles;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use profiles::{
    load_profiles, parse_profiles, BrandAudience, BrandProfile, OrganizationAudience,
    OrganizationProfile, Profile, ProfileKind, ProfilesFile,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profiles file {path}: {source}")]
    ProfilesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profiles file: {0}")]
    ProfilesFileParse(#[from] serde_yaml::Error),

    #[error("profile validation failed: {0}")]
    Validation(String),
}

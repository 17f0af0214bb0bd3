use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Profile collection read by `match` and `profiles`.
    pub profiles_path: PathBuf,
    /// Optional YAML file overriding scoring weights and valuation tables.
    pub tuning_path: Option<PathBuf>,
    /// Default minimum total alignment score for ranking (0-100).
    pub min_score: u8,
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoiError {
    /// Non-positive investment or duration, empty name, or a bad metric value.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A tier the lookup table does not define.
    #[error("level '{level}' is not defined for {table}")]
    InvalidLevel { level: String, table: String },

    #[error("invalid valuation tables: {0}")]
    InvalidConfig(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// A priority dimension key outside values/audience/goals/industry.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The reference profile id is not present in the collection.
    #[error("profile '{0}' not found")]
    UnknownProfile(String),

    /// Tuning values that break a scoring invariant.
    #[error("invalid matcher config: {0}")]
    InvalidConfig(String),
}

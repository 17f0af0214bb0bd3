//! Partner alignment scoring.
//!
//! Compares a reference profile against candidate profiles across four
//! dimensions (values, audience, goals, industry), combines them with fixed
//! weights into a 0-100 total, and ranks the candidates. All scoring is a
//! deterministic heuristic over the profile data; missing data scores as
//! neutral rather than failing.

pub mod config;
pub mod error;
pub mod narrative;
pub mod scorer;
pub mod types;

pub use config::{AlignmentWeights, MatcherConfig, StrategicPair};
pub use error::MatchError;
pub use narrative::partnership_potential;
pub use scorer::{
    audience_alignment, goal_alignment, sort_results, value_alignment, AlignmentScorer,
};
pub use types::{AlignmentResult, Dimension, DimensionScores, RankFilters};

//! Tunable scoring tables: dimension weights and strategic industry pairs.

use serde::{Deserialize, Serialize};

use crate::types::Dimension;
use crate::MatchError;

// ---------------------------------------------------------------------------
// Default weights (must sum to exactly 100)
// ---------------------------------------------------------------------------

pub const W_VALUES: u8 = 30;
pub const W_AUDIENCE: u8 = 25;
pub const W_GOALS: u8 = 25;
pub const W_INDUSTRY: u8 = 20;

const _: () = assert!(
    W_VALUES as u32 + W_AUDIENCE as u32 + W_GOALS as u32 + W_INDUSTRY as u32 == 100,
    "alignment weights must sum to exactly 100"
);

/// Brand-industry / organization-type combinations that score as strategic.
const DEFAULT_STRATEGIC_PAIRS: &[(&str, &str)] = &[
    ("technology", "sports_team"),
    ("retail", "event"),
    ("finance", "nonprofit"),
    ("healthcare", "education"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentWeights {
    pub values: u8,
    pub audience: u8,
    pub goals: u8,
    pub industry: u8,
}

impl Default for AlignmentWeights {
    fn default() -> Self {
        Self {
            values: W_VALUES,
            audience: W_AUDIENCE,
            goals: W_GOALS,
            industry: W_INDUSTRY,
        }
    }
}

impl AlignmentWeights {
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Values => self.values,
            Dimension::Audience => self.audience,
            Dimension::Goals => self.goals,
            Dimension::Industry => self.industry,
        }
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        Dimension::ALL
            .iter()
            .map(|&d| u32::from(self.get(d)))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicPair {
    pub brand_industry: String,
    pub org_type: String,
}

impl StrategicPair {
    #[must_use]
    pub fn new(brand_industry: &str, org_type: &str) -> Self {
        Self {
            brand_industry: brand_industry.to_string(),
            org_type: org_type.to_string(),
        }
    }
}

/// Scoring tables injected into [`crate::AlignmentScorer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub weights: AlignmentWeights,
    pub strategic_pairs: Vec<StrategicPair>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            weights: AlignmentWeights::default(),
            strategic_pairs: DEFAULT_STRATEGIC_PAIRS
                .iter()
                .map(|&(industry, org_type)| StrategicPair::new(industry, org_type))
                .collect(),
        }
    }
}

impl MatcherConfig {
    /// Check that the weights sum to 100 so totals stay within 0-100.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidConfig` when the weights do not sum to 100.
    pub fn validate(&self) -> Result<(), MatchError> {
        let sum = self.weights.sum();
        if sum != 100 {
            return Err(MatchError::InvalidConfig(format!(
                "alignment weights sum to {sum}; must be exactly 100"
            )));
        }
        Ok(())
    }
}

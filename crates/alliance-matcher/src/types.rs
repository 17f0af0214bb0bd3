use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MatchError;

/// An axis of alignment measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Values,
    Audience,
    Goals,
    Industry,
}

impl Dimension {
    /// Canonical order, also used to break ties between equal scores.
    pub const ALL: [Dimension; 4] = [
        Dimension::Values,
        Dimension::Audience,
        Dimension::Goals,
        Dimension::Industry,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Values => "values",
            Dimension::Audience => "audience",
            Dimension::Goals => "goals",
            Dimension::Industry => "industry",
        }
    }

    /// Human-readable name used in match narratives.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Values => "value alignment",
            Dimension::Audience => "audience complementarity",
            Dimension::Goals => "goal compatibility",
            Dimension::Industry => "industry relevance",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| MatchError::InvalidDimension(s.to_string()))
    }
}

/// Per-dimension scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub values: u8,
    pub audience: u8,
    pub goals: u8,
    pub industry: u8,
}

impl DimensionScores {
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Values => self.values,
            Dimension::Audience => self.audience,
            Dimension::Goals => self.goals,
            Dimension::Industry => self.industry,
        }
    }

    /// Dimensions from highest to lowest score; ties keep canonical order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Dimension, u8)> {
        let mut ranked: Vec<(Dimension, u8)> =
            Dimension::ALL.iter().map(|&d| (d, self.get(d))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` strongest dimensions with their scores.
    #[must_use]
    pub fn top_areas(&self, n: usize) -> Vec<(Dimension, u8)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Lowest-scoring dimension; the first in canonical order on ties.
    #[must_use]
    pub fn weakest_area(&self) -> Dimension {
        let mut weakest = Dimension::Values;
        for dimension in Dimension::ALL {
            if self.get(dimension) < self.get(weakest) {
                weakest = dimension;
            }
        }
        weakest
    }
}

/// Scores for one candidate against the reference profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult {
    pub candidate_id: String,
    pub dimension_scores: DimensionScores,
    pub total_score: u8,
}

/// Candidate filters and ordering for [`crate::AlignmentScorer::rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankFilters {
    /// Category tags to keep. `None`, or a list containing `all`, keeps every candidate.
    pub industries: Option<Vec<String>>,
    pub min_total_score: u8,
    pub priority: Dimension,
}

impl Default for RankFilters {
    fn default() -> Self {
        Self {
            industries: None,
            min_total_score: 0,
            priority: Dimension::Values,
        }
    }
}

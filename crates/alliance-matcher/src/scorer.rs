//! Dimension scorers and candidate ranking.

use alliance_core::{Profile, ProfilesFile};

use crate::config::MatcherConfig;
use crate::types::{AlignmentResult, Dimension, DimensionScores, RankFilters};
use crate::MatchError;

/// Score returned when either side has no data for a dimension.
pub const NEUTRAL_SCORE: u8 = 50;

const REGION_EXACT: f64 = 100.0;
const REGION_GLOBAL: f64 = 80.0;
const REGION_OTHER: f64 = 50.0;
/// No demographic model exists; every audience pair gets this sub-score.
const DEMOGRAPHIC_PLACEHOLDER: f64 = 70.0;
const GLOBAL_REGION: &str = "global";

const INDUSTRY_STRATEGIC_PAIR: u8 = 90;
const INDUSTRY_CROSS_KIND: u8 = 70;
const INDUSTRY_SAME_CATEGORY: u8 = 50;
const INDUSTRY_CROSS_CATEGORY: u8 = 75;

/// Category filter value that disables industry filtering.
const ALL_INDUSTRIES: &str = "all";

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Average of the match rate against each side's length, scaled to 0-100.
#[allow(clippy::cast_precision_loss)]
fn match_rate_score(matches: usize, len1: usize, len2: usize) -> u8 {
    let rate1 = matches as f64 / len1 as f64;
    let rate2 = matches as f64 / len2 as f64;
    to_score((rate1 + rate2) / 2.0 * 100.0)
}

/// Fuzzy value-tag overlap.
///
/// A tag in `values1` matches when it contains, or is contained by, any tag
/// in `values2` (case-insensitive). The score is not symmetric in general.
#[must_use]
pub fn value_alignment(values1: &[String], values2: &[String]) -> u8 {
    if values1.is_empty() || values2.is_empty() {
        return NEUTRAL_SCORE;
    }

    let others: Vec<String> = values2.iter().map(|v| v.to_lowercase()).collect();
    let matches = values1
        .iter()
        .map(|v| v.to_lowercase())
        .filter(|v| {
            others
                .iter()
                .any(|o| o.contains(v.as_str()) || v.contains(o.as_str()))
        })
        .count();

    match_rate_score(matches, values1.len(), values2.len())
}

/// Region compatibility averaged with the fixed demographic sub-score.
#[must_use]
pub fn audience_alignment(region1: Option<&str>, region2: Option<&str>) -> u8 {
    let (Some(r1), Some(r2)) = (region1, region2) else {
        return NEUTRAL_SCORE;
    };

    let region_score = if r1 == r2 {
        REGION_EXACT
    } else if r1 == GLOBAL_REGION || r2 == GLOBAL_REGION {
        REGION_GLOBAL
    } else {
        REGION_OTHER
    };

    to_score((region_score + DEMOGRAPHIC_PLACEHOLDER) / 2.0)
}

/// Exact goal overlap, scored like [`value_alignment`].
#[must_use]
pub fn goal_alignment(goals1: &[String], goals2: &[String]) -> u8 {
    if goals1.is_empty() || goals2.is_empty() {
        return NEUTRAL_SCORE;
    }

    let matches = goals1.iter().filter(|g| goals2.contains(g)).count();
    match_rate_score(matches, goals1.len(), goals2.len())
}

/// Order by the priority dimension, then total score, both descending.
///
/// The sort is stable, so exact ties on both keys keep their input order.
pub fn sort_results(results: &mut [AlignmentResult], priority: Dimension) {
    results.sort_by(|a, b| {
        b.dimension_scores
            .get(priority)
            .cmp(&a.dimension_scores.get(priority))
            .then_with(|| b.total_score.cmp(&a.total_score))
    });
}

/// Weighted profile-to-profile alignment scorer.
#[derive(Debug, Clone)]
pub struct AlignmentScorer {
    config: MatcherConfig,
}

impl Default for AlignmentScorer {
    fn default() -> Self {
        Self {
            config: MatcherConfig::default(),
        }
    }
}

impl AlignmentScorer {
    /// Build a scorer from validated tables.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidConfig` if the weights do not sum to 100.
    pub fn new(config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Industry relevance between two profiles.
    ///
    /// Brand/organization pairs score high when listed as strategic. Two
    /// profiles of the same kind in the same category are treated as
    /// potential competitors and score neutral.
    #[must_use]
    pub fn industry_alignment(&self, profile1: &Profile, profile2: &Profile) -> u8 {
        match (profile1, profile2) {
            (Profile::Brand(brand), Profile::Organization(org))
            | (Profile::Organization(org), Profile::Brand(brand)) => {
                let strategic = self
                    .config
                    .strategic_pairs
                    .iter()
                    .any(|p| p.brand_industry == brand.industry && p.org_type == org.org_type);
                if strategic {
                    INDUSTRY_STRATEGIC_PAIR
                } else {
                    INDUSTRY_CROSS_KIND
                }
            }
            _ if profile1.category() == profile2.category() => INDUSTRY_SAME_CATEGORY,
            _ => INDUSTRY_CROSS_CATEGORY,
        }
    }

    #[must_use]
    pub fn dimension_scores(&self, reference: &Profile, candidate: &Profile) -> DimensionScores {
        DimensionScores {
            values: value_alignment(reference.values(), candidate.values()),
            audience: audience_alignment(reference.region(), candidate.region()),
            goals: goal_alignment(reference.goals(), candidate.goals()),
            industry: self.industry_alignment(reference, candidate),
        }
    }

    /// Weighted total, rounded once after summing.
    #[must_use]
    pub fn total_score(&self, scores: &DimensionScores) -> u8 {
        let total: f64 = Dimension::ALL
            .iter()
            .map(|&d| f64::from(scores.get(d)) * f64::from(self.config.weights.get(d)) / 100.0)
            .sum();
        to_score(total)
    }

    #[must_use]
    pub fn score(&self, reference: &Profile, candidate: &Profile) -> AlignmentResult {
        let dimension_scores = self.dimension_scores(reference, candidate);
        AlignmentResult {
            candidate_id: candidate.id().to_string(),
            total_score: self.total_score(&dimension_scores),
            dimension_scores,
        }
    }

    /// Score, filter, and order candidates against `reference`.
    ///
    /// The reference itself (matched by id) is never part of the output.
    #[must_use]
    pub fn rank(
        &self,
        reference: &Profile,
        candidates: &[Profile],
        filters: &RankFilters,
    ) -> Vec<AlignmentResult> {
        let industries = filters
            .industries
            .as_deref()
            .filter(|list| !list.iter().any(|i| i == ALL_INDUSTRIES));

        let mut results: Vec<AlignmentResult> = candidates
            .iter()
            .filter(|c| c.id() != reference.id())
            .filter(|c| {
                industries.is_none_or(|list| list.iter().any(|i| c.category().contains(i.as_str())))
            })
            .map(|c| self.score(reference, c))
            .filter(|r| {
                let keep = r.total_score >= filters.min_total_score;
                if !keep {
                    tracing::debug!(
                        candidate = %r.candidate_id,
                        total = r.total_score,
                        min = filters.min_total_score,
                        "candidate below minimum score"
                    );
                }
                keep
            })
            .collect();

        sort_results(&mut results, filters.priority);

        tracing::debug!(
            reference = %reference.id(),
            candidates = candidates.len(),
            retained = results.len(),
            priority = %filters.priority,
            "ranked candidates"
        );

        results
    }

    /// Rank every other profile in `profiles` against the one with `reference_id`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownProfile` if no profile has `reference_id`.
    pub fn rank_profiles(
        &self,
        reference_id: &str,
        profiles: &ProfilesFile,
        filters: &RankFilters,
    ) -> Result<Vec<AlignmentResult>, MatchError> {
        let reference = profiles
            .find(reference_id)
            .ok_or_else(|| MatchError::UnknownProfile(reference_id.to_string()))?;
        Ok(self.rank(reference, &profiles.profiles, filters))
    }
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;

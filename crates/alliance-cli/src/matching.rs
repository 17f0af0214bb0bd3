//! `match` command: rank partner candidates for one profile.

use std::path::Path;

use alliance_core::{load_profiles, Profile, ProfilesFile};
use alliance_matcher::{
    partnership_potential, AlignmentResult, AlignmentScorer, Dimension, MatcherConfig,
    RankFilters,
};

/// Number of strongest dimensions listed per match.
const TOP_AREAS: usize = 3;

#[derive(Debug)]
pub(crate) struct MatchOptions {
    pub industries: Option<Vec<String>>,
    pub priority: Dimension,
    pub min_score: u8,
    pub json: bool,
}

/// Rank every other profile in the collection against `profile_id` and print
/// the qualifying matches.
///
/// # Errors
///
/// Returns an error if the profile collection cannot be loaded, the tuning
/// weights are invalid, or `profile_id` is not in the collection.
pub(crate) fn run_match(
    profiles_path: &Path,
    matcher_config: MatcherConfig,
    profile_id: &str,
    options: MatchOptions,
) -> anyhow::Result<()> {
    let profiles = load_profiles(profiles_path)?;
    let scorer = AlignmentScorer::new(matcher_config)?;

    let filters = RankFilters {
        industries: options.industries,
        min_total_score: options.min_score,
        priority: options.priority,
    };
    let results = scorer.rank_profiles(profile_id, &profiles, &filters)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no matching partners found for '{profile_id}' with the given criteria");
        return Ok(());
    }

    print!("{}", render_matches(&profiles, &results));
    Ok(())
}

fn render_matches(profiles: &ProfilesFile, results: &[AlignmentResult]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "found {} potential strategic partners", results.len());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<6}{:<26}{:<16}{:<7}{:<8}{:<10}{:<7}INDUSTRY",
        "RANK", "NAME", "CATEGORY", "TOTAL", "VALUES", "AUDIENCE", "GOALS"
    );

    for (rank, result) in results.iter().enumerate() {
        let candidate = profiles.find(&result.candidate_id);
        let (name, category) = candidate
            .map_or((result.candidate_id.as_str(), ""), |p| (p.name(), p.category()));
        let s = &result.dimension_scores;
        let _ = writeln!(
            out,
            "{:<6}{:<26}{:<16}{:<7}{:<8}{:<10}{:<7}{}",
            rank + 1,
            name,
            category,
            result.total_score,
            s.values,
            s.audience,
            s.goals,
            s.industry
        );

        if let Some(description) = candidate
            .map(Profile::description)
            .filter(|d| !d.is_empty())
        {
            let _ = writeln!(out, "      {description}");
        }
        let areas: Vec<String> = s
            .top_areas(TOP_AREAS)
            .into_iter()
            .map(|(d, score)| format!("{} ({score}%)", d.label()))
            .collect();
        let _ = writeln!(out, "      top areas: {}", areas.join(", "));
        let _ = writeln!(
            out,
            "      {}",
            partnership_potential(result.total_score, &result.dimension_scores)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfilesFile {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("profiles.yaml");
        load_profiles(&path).unwrap()
    }

    #[test]
    fn render_lists_ranked_candidates_with_details() {
        let profiles = sample();
        let results = AlignmentScorer::default()
            .rank_profiles("brand_1", &profiles, &RankFilters::default())
            .unwrap();
        let out = render_matches(&profiles, &results);

        assert!(out.starts_with("found 3 potential strategic partners"));
        let health = out.find("HealthFirst").unwrap();
        let league = out.find("Global Sports League").unwrap();
        assert!(health < league);
        assert!(out.contains(profiles.find("brand_2").unwrap().description()));
        assert!(out.contains(
            "top areas: audience complementarity (85%), industry relevance (75%), \
             goal compatibility (42%)"
        ));
        assert_eq!(out.matches("top areas:").count(), 3);
    }

    #[test]
    fn render_falls_back_to_id_for_unknown_candidate() {
        let results = vec![AlignmentResult {
            candidate_id: "ghost".to_string(),
            dimension_scores: alliance_matcher::DimensionScores {
                values: 10,
                audience: 20,
                goals: 30,
                industry: 40,
            },
            total_score: 24,
        }];
        let out = render_matches(&ProfilesFile::default(), &results);
        assert!(out.contains("ghost"));
        assert!(out.contains("top areas: industry relevance (40%)"));
    }
}

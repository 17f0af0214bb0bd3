//! Optional tuning file with scoring weights and valuation tables.

use std::path::Path;

use alliance_matcher::MatcherConfig;
use alliance_roi::ValuationTables;
use anyhow::Context;
use serde::Deserialize;

/// Sections left out of the file keep their built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Tuning {
    pub alignment: MatcherConfig,
    pub valuation: ValuationTables,
}

/// Load tuning from `path`, or the defaults when no path is configured.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Table validation
/// happens when the scorer or valuator is built.
pub(crate) fn load_tuning(path: Option<&Path>) -> anyhow::Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file {}", path.display()))?;
    let tuning = parse_tuning(&content)
        .with_context(|| format!("failed to parse tuning file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded tuning overrides");
    Ok(tuning)
}

fn parse_tuning(content: &str) -> Result<Tuning, serde_yaml::Error> {
    // an empty document deserializes as null, not as an empty mapping
    if content.trim().is_empty() {
        return Ok(Tuning::default());
    }
    serde_yaml::from_str(content)
}

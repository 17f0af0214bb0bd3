//! Short partnership-potential statements for ranked matches.

use crate::types::DimensionScores;

/// Describe a match's potential from its total and strongest/weakest dimensions.
#[must_use]
pub fn partnership_potential(total_score: u8, scores: &DimensionScores) -> String {
    let ranked = scores.ranked();
    let top = ranked[0].0.label();
    let weakest = scores.weakest_area().label();

    match total_score {
        90.. => format!(
            "This partnership has exceptional potential for strategic alignment, \
             particularly in {top} and {}.",
            ranked[1].0.label()
        ),
        80..=89 => format!(
            "This partnership shows strong potential for co-created initiatives, \
             especially in {top}."
        ),
        70..=79 => format!(
            "Good potential for collaboration, though additional work may be needed \
             to strengthen {weakest}."
        ),
        _ => format!(
            "This partnership has moderate potential, but would require careful \
             management of misalignments in {weakest}."
        ),
    }
}

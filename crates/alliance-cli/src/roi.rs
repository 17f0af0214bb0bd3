//! `roi` command: value a partnership and print a markdown report.

use std::path::Path;

use alliance_roi::{
    recommendations, round_half_up, RoiInput, RoiRecord, ValuationTables, Valuator,
    ValueShares,
};
use anyhow::Context;

use crate::format::format_currency;

/// Read a partnership input file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid input.
pub(crate) fn load_roi_input(path: &Path) -> anyhow::Result<RoiInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ROI input {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse ROI input {}", path.display()))
}

/// Value the partnership described in `input_path`.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, the tables are invalid,
/// or the input fails validation.
pub(crate) fn run_roi(
    input_path: &Path,
    tables: ValuationTables,
    json: bool,
) -> anyhow::Result<()> {
    let input = load_roi_input(input_path)?;
    let valuator = Valuator::new(tables)?;
    let record = RoiRecord::new(valuator.evaluate(&input)?);

    tracing::info!(
        id = %record.id,
        partnership = %record.result.partnership_name,
        roi = record.result.roi_percent,
        "partnership valued"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_report(&record));
    }
    Ok(())
}

/// Render a valuation as a markdown report.
pub(crate) fn render_report(record: &RoiRecord) -> String {
    use std::fmt::Write;

    let r = &record.result;
    let mut out = String::new();

    // writing to a String cannot fail
    let _ = writeln!(out, "# Partnership ROI: {}", r.partnership_name);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Computed**: {}",
        record.computed_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "**Record**: {}", record.id);
    let _ = writeln!(out, "**Duration**: {} months", r.duration_months);
    let _ = writeln!(out, "**Investment**: {}", format_currency(r.investment));
    let _ = writeln!(out, "**Total value**: {}", format_currency(r.total_value));
    let _ = writeln!(out, "**ROI**: {}%", round_half_up(r.roi_percent));
    let _ = writeln!(out);
    let _ = writeln!(out, "## Value breakdown");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Component | Value | Share |");
    let _ = writeln!(out, "|-----------|-------|-------|");
    let shares = r.value_shares();
    let share = |pick: fn(&ValueShares) -> f64| {
        shares
            .as_ref()
            .map_or_else(|| "n/a".to_string(), |s| format!("{:.1}%", pick(s)))
    };
    let _ = writeln!(
        out,
        "| Direct | {} | {} |",
        format_currency(r.direct_value),
        share(|s| s.direct)
    );
    let _ = writeln!(
        out,
        "| Indirect | {} | {} |",
        format_currency(r.indirect_value),
        share(|s| s.indirect)
    );
    let _ = writeln!(
        out,
        "| Long-term | {} | {} |",
        format_currency(r.long_term_value),
        share(|s| s.long_term)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Timeline");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Month | Investment | Value |");
    let _ = writeln!(out, "|-------|------------|-------|");
    let t = &r.value_timeline;
    for ((label, investment), value) in t
        .month_labels
        .iter()
        .zip(&t.investment_by_month)
        .zip(&t.value_by_month)
    {
        let _ = writeln!(
            out,
            "| {label} | {} | {} |",
            format_currency(*investment),
            format_currency(*value)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "## Recommendations");
    let _ = writeln!(out);
    for item in recommendations(r) {
        let _ = writeln!(out, "- {item}");
    }

    out
}

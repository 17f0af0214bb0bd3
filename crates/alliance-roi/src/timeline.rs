//! Monthly value and investment distribution.
//!
//! Investment is spread evenly. Value combines three curves: direct value as
//! a single hump peaking mid-partnership, indirect value rising with
//! `progress^1.5`, and long-term value rising with `progress^2`. Each curve is
//! scaled by duration independently, so the monthly values are a reporting
//! shape and do not sum back to the component totals.

use std::f64::consts::PI;

use crate::types::ValueTimeline;

/// Spread investment and value across `duration_months` months.
///
/// Returns empty sequences when `duration_months` is zero.
#[must_use]
pub fn value_timeline(
    investment: f64,
    direct_value: f64,
    indirect_value: f64,
    long_term_value: f64,
    duration_months: u32,
) -> ValueTimeline {
    let capacity = duration_months as usize;
    let mut timeline = ValueTimeline {
        month_labels: Vec::with_capacity(capacity),
        investment_by_month: Vec::with_capacity(capacity),
        value_by_month: Vec::with_capacity(capacity),
    };

    let duration = f64::from(duration_months);
    for month in 1..=duration_months {
        let progress = f64::from(month) / duration;

        let direct = direct_value * (progress * PI).sin() / (duration / 2.0);
        let indirect = indirect_value * progress.powf(1.5) / duration;
        let long_term = long_term_value * progress.powi(2) / duration;

        timeline.month_labels.push(format!("Month {month}"));
        timeline.investment_by_month.push(investment / duration);
        timeline.value_by_month.push(direct + indirect + long_term);
    }

    timeline
}

//! Direct, indirect, and long-term value decomposition.

use crate::tiers::{ValuationTables, ValueLevel};
use crate::timeline::value_timeline;
use crate::types::{DirectMetrics, RoiInput, RoiResult};
use crate::RoiError;

/// Exposure value plus lead and conversion revenue.
///
/// The formula itself accepts any amounts, negative ones included.
/// [`RoiInput::validate`] is stricter and rejects negative or non-finite
/// amounts before [`Valuator::evaluate`] gets here.
#[must_use]
pub fn direct_value(metrics: &DirectMetrics) -> f64 {
    metrics.brand_exposure_value
        + f64::from(metrics.lead_count) * metrics.lead_value
        + f64::from(metrics.conversion_count) * metrics.conversion_value
}

/// Net return as a percentage of `investment`. Callers guarantee `investment > 0`.
#[must_use]
pub fn roi_percent(total_value: f64, investment: f64) -> f64 {
    (total_value - investment) / investment * 100.0
}

/// Stateless valuation over a fixed set of tier tables.
#[derive(Debug, Clone, Default)]
pub struct Valuator {
    tables: ValuationTables,
}

impl Valuator {
    /// # Errors
    ///
    /// Returns `RoiError::InvalidConfig` if a table holds a negative or non-finite rate.
    pub fn new(tables: ValuationTables) -> Result<Self, RoiError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    #[must_use]
    pub fn tables(&self) -> &ValuationTables {
        &self.tables
    }

    /// Brand-perception and audience-engagement lift, each a fraction of investment.
    ///
    /// # Errors
    ///
    /// Returns `RoiError::InvalidLevel` if a level has no rate in its table.
    pub fn indirect_value(
        &self,
        investment: f64,
        perception: ValueLevel,
        engagement: ValueLevel,
    ) -> Result<f64, RoiError> {
        let perception_value = investment
            * self
                .tables
                .brand_perception
                .rate(perception, "brand perception")?;
        let engagement_value = investment
            * self
                .tables
                .audience_engagement
                .rate(engagement, "audience engagement")?;
        Ok(perception_value + engagement_value)
    }

    /// Relationship value (annual rate prorated to the duration) plus
    /// innovation value (not prorated).
    ///
    /// # Errors
    ///
    /// Returns `RoiError::InvalidLevel` if a level has no rate in its table,
    /// including `very_high` relationship value under the default tables.
    pub fn long_term_value(
        &self,
        investment: f64,
        duration_months: u32,
        relationship: ValueLevel,
        innovation: ValueLevel,
    ) -> Result<f64, RoiError> {
        let annual_relationship = investment
            * self
                .tables
                .relationship
                .rate(relationship, "relationship value")?;
        let innovation_value = investment
            * self
                .tables
                .innovation
                .rate(innovation, "innovation potential")?;
        let prorated = annual_relationship * (f64::from(duration_months) / 12.0);
        Ok(prorated + innovation_value)
    }

    /// Validate `input` and compute the full valuation.
    ///
    /// # Errors
    ///
    /// Returns `RoiError::InvalidInput` for a bad partnership name, investment,
    /// duration, or direct metric, and `RoiError::InvalidLevel` for a tier the
    /// tables do not define. No partial result is returned on error.
    pub fn evaluate(&self, input: &RoiInput) -> Result<RoiResult, RoiError> {
        input.validate()?;

        let direct = direct_value(&input.direct);
        let indirect = self.indirect_value(
            input.investment,
            input.indirect.brand_perception,
            input.indirect.audience_engagement,
        )?;
        let long_term = self.long_term_value(
            input.investment,
            input.duration_months,
            input.long_term.relationship_value,
            input.long_term.innovation_potential,
        )?;

        let total_value = direct + indirect + long_term;
        let roi = roi_percent(total_value, input.investment);

        tracing::debug!(
            partnership = %input.partnership_name,
            investment = input.investment,
            total_value,
            roi,
            "valued partnership"
        );

        Ok(RoiResult {
            partnership_name: input.partnership_name.clone(),
            investment: input.investment,
            duration_months: input.duration_months,
            direct_value: direct,
            indirect_value: indirect,
            long_term_value: long_term,
            total_value,
            roi_percent: roi,
            value_timeline: value_timeline(
                input.investment,
                direct,
                indirect,
                long_term,
                input.duration_months,
            ),
        })
    }
}

impl RoiInput {
    /// Check the partnership name, investment, duration, and direct metrics.
    ///
    /// Direct amounts must be finite and non-negative. This is stricter than
    /// [`direct_value`], which would fold a negative amount into the total.
    ///
    /// # Errors
    ///
    /// Returns `RoiError::InvalidInput` describing the first bad field.
    pub fn validate(&self) -> Result<(), RoiError> {
        if self.partnership_name.trim().is_empty() {
            return Err(RoiError::InvalidInput(
                "partnership name must be non-empty".to_string(),
            ));
        }

        if !self.investment.is_finite() || self.investment <= 0.0 {
            return Err(RoiError::InvalidInput(format!(
                "investment must be a positive amount, got {}",
                self.investment
            )));
        }

        if self.duration_months == 0 {
            return Err(RoiError::InvalidInput(
                "duration must be at least one month".to_string(),
            ));
        }

        let metrics = [
            ("brandExposureValue", self.direct.brand_exposure_value),
            ("leadValue", self.direct.lead_value),
            ("conversionValue", self.direct.conversion_value),
        ];
        for (name, value) in metrics {
            if !value.is_finite() || value < 0.0 {
                return Err(RoiError::InvalidInput(format!(
                    "{name} must be a non-negative amount, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "valuation_test.rs"]
mod tests;

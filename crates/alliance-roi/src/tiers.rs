//! Qualitative value tiers and their investment-fraction lookup tables.

use serde::{Deserialize, Serialize};

use crate::RoiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ValueLevel {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ValueLevel::None => "none",
            ValueLevel::Low => "low",
            ValueLevel::Medium => "medium",
            ValueLevel::High => "high",
            ValueLevel::VeryHigh => "very_high",
        }
    }
}

impl std::fmt::Display for ValueLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Fraction of the investment credited for each tier.
///
/// `very_high` is optional: a table without it rejects that tier instead of
/// crediting nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub none: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    #[serde(default)]
    pub very_high: Option<f64>,
}

impl TierTable {
    /// # Errors
    ///
    /// Returns `RoiError::InvalidLevel` if the table has no rate for `level`.
    pub fn rate(&self, level: ValueLevel, table: &str) -> Result<f64, RoiError> {
        match level {
            ValueLevel::None => Ok(self.none),
            ValueLevel::Low => Ok(self.low),
            ValueLevel::Medium => Ok(self.medium),
            ValueLevel::High => Ok(self.high),
            ValueLevel::VeryHigh => self.very_high.ok_or_else(|| RoiError::InvalidLevel {
                level: level.to_string(),
                table: table.to_string(),
            }),
        }
    }

    fn rates(&self) -> impl Iterator<Item = f64> {
        [self.none, self.low, self.medium, self.high]
            .into_iter()
            .chain(self.very_high)
    }
}

const FIVE_TIER_INDIRECT: TierTable = TierTable {
    none: 0.0,
    low: 0.10,
    medium: 0.25,
    high: 0.50,
    very_high: Some(0.75),
};

/// Annual rate, prorated by duration. Has no `very_high` tier.
const RELATIONSHIP: TierTable = TierTable {
    none: 0.0,
    low: 0.05,
    medium: 0.15,
    high: 0.30,
    very_high: None,
};

const INNOVATION: TierTable = TierTable {
    none: 0.0,
    low: 0.05,
    medium: 0.15,
    high: 0.30,
    very_high: Some(0.50),
};

/// Lookup tables injected into [`crate::Valuator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationTables {
    pub brand_perception: TierTable,
    pub audience_engagement: TierTable,
    pub relationship: TierTable,
    pub innovation: TierTable,
}

impl Default for ValuationTables {
    fn default() -> Self {
        Self {
            brand_perception: FIVE_TIER_INDIRECT,
            audience_engagement: FIVE_TIER_INDIRECT,
            relationship: RELATIONSHIP,
            innovation: INNOVATION,
        }
    }
}

impl ValuationTables {
    /// # Errors
    ///
    /// Returns `RoiError::InvalidConfig` if any rate is negative or not finite.
    pub fn validate(&self) -> Result<(), RoiError> {
        let tables = [
            ("brand_perception", &self.brand_perception),
            ("audience_engagement", &self.audience_engagement),
            ("relationship", &self.relationship),
            ("innovation", &self.innovation),
        ];
        for (name, table) in tables {
            if let Some(bad) = table.rates().find(|r| !r.is_finite() || *r < 0.0) {
                return Err(RoiError::InvalidConfig(format!(
                    "{name} table has invalid rate {bad}"
                )));
            }
        }
        Ok(())
    }
}

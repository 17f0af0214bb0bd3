use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tiers::ValueLevel;

/// Measurable partnership outputs. Absent fields count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectMetrics {
    pub brand_exposure_value: f64,
    pub lead_count: u32,
    pub lead_value: f64,
    pub conversion_count: u32,
    pub conversion_value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndirectLevels {
    pub brand_perception: ValueLevel,
    pub audience_engagement: ValueLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LongTermLevels {
    /// Has no `very_high` tier under the default tables.
    pub relationship_value: ValueLevel,
    pub innovation_potential: ValueLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInput {
    pub partnership_name: String,
    pub investment: f64,
    pub duration_months: u32,
    #[serde(default)]
    pub direct: DirectMetrics,
    #[serde(default)]
    pub indirect: IndirectLevels,
    #[serde(default)]
    pub long_term: LongTermLevels,
}

/// Month-indexed projection, one entry per month of the partnership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueTimeline {
    pub month_labels: Vec<String>,
    pub investment_by_month: Vec<f64>,
    pub value_by_month: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub partnership_name: String,
    pub investment: f64,
    pub duration_months: u32,
    pub direct_value: f64,
    pub indirect_value: f64,
    pub long_term_value: f64,
    pub total_value: f64,
    pub roi_percent: f64,
    pub value_timeline: ValueTimeline,
}

/// Each component's share of total value, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueShares {
    pub direct: f64,
    pub indirect: f64,
    pub long_term: f64,
}

impl RoiResult {
    /// `None` when there is no positive total value to divide.
    #[must_use]
    pub fn value_shares(&self) -> Option<ValueShares> {
        if self.total_value <= 0.0 {
            return None;
        }
        Some(ValueShares {
            direct: self.direct_value / self.total_value * 100.0,
            indirect: self.indirect_value / self.total_value * 100.0,
            long_term: self.long_term_value / self.total_value * 100.0,
        })
    }
}

/// Archival form of a valuation for an append-only history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRecord {
    pub id: Uuid,
    pub computed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: RoiResult,
}

impl RoiRecord {
    #[must_use]
    pub fn new(result: RoiResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            computed_at: Utc::now(),
            result,
        }
    }
}

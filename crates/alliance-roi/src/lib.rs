//! Partnership return-on-investment valuation.
//!
//! Splits a partnership's projected value into direct, indirect, and
//! long-term components, derives an ROI percentage, spreads value and
//! investment over a month-by-month timeline, and produces rule-based
//! recommendations from the value mix.

pub mod error;
pub mod recommend;
pub mod tiers;
pub mod timeline;
pub mod types;
pub mod valuation;

pub use error::RoiError;
pub use recommend::{recommendations, round_half_up, Recommendation, RoiTier};
pub use tiers::{TierTable, ValuationTables, ValueLevel};
pub use timeline::value_timeline;
pub use types::{
    DirectMetrics, IndirectLevels, LongTermLevels, RoiInput, RoiRecord, RoiResult, ValueShares,
    ValueTimeline,
};
pub use valuation::{direct_value, roi_percent, Valuator};

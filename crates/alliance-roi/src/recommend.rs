//! Rule-based recommendations from a valuation's ROI and value mix.

use serde::{Serialize, Serializer};

use crate::types::RoiResult;

const EXCEPTIONAL_ROI: f64 = 200.0;
const STRONG_ROI: f64 = 100.0;

const DIRECT_SHARE_CEILING: f64 = 70.0;
const INDIRECT_SHARE_FLOOR: f64 = 20.0;
const LONG_TERM_SHARE_FLOOR: f64 = 15.0;
/// Investment above this fraction of total value flags overpricing.
const OVERPRICING_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoiTier {
    Exceptional,
    Strong,
    Moderate,
    Negative,
}

impl RoiTier {
    #[must_use]
    pub fn from_roi(roi_percent: f64) -> Self {
        if roi_percent >= EXCEPTIONAL_ROI {
            RoiTier::Exceptional
        } else if roi_percent >= STRONG_ROI {
            RoiTier::Strong
        } else if roi_percent >= 0.0 {
            RoiTier::Moderate
        } else {
            RoiTier::Negative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Overall ROI statement; `roi_percent` is rounded half up.
    Outlook { tier: RoiTier, roi_percent: i64 },
    DirectHeavy,
    WeakIndirect,
    WeakLongTerm,
    OverpricingRisk,
    TrackMetrics,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Outlook { tier, roi_percent } => match tier {
                RoiTier::Exceptional => write!(
                    f,
                    "This partnership shows exceptional potential with a very high ROI ({roi_percent}%)."
                ),
                RoiTier::Strong => write!(
                    f,
                    "This partnership shows strong potential with a positive ROI ({roi_percent}%)."
                ),
                RoiTier::Moderate => write!(
                    f,
                    "This partnership has a positive but moderate ROI ({roi_percent}%)."
                ),
                RoiTier::Negative => write!(
                    f,
                    "This partnership currently shows a negative ROI ({roi_percent}%). \
                     Consider adjusting the strategy."
                ),
            },
            Recommendation::DirectHeavy => f.write_str(
                "Consider strategies to enhance long-term value creation, as the current \
                 model is heavily weighted toward direct outcomes.",
            ),
            Recommendation::WeakIndirect => f.write_str(
                "Explore ways to increase brand perception lift and audience engagement \
                 to improve indirect value.",
            ),
            Recommendation::WeakLongTerm => f.write_str(
                "Develop a more robust long-term strategy for this partnership to enhance \
                 relationship and innovation value.",
            ),
            Recommendation::OverpricingRisk => f.write_str(
                "The current investment may be too high relative to projected returns. \
                 Consider renegotiating or restructuring the deal.",
            ),
            Recommendation::TrackMetrics => f.write_str(
                "Implement robust tracking metrics to validate these projections and \
                 adjust strategy as needed.",
            ),
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Round a percentage for display, with halves rounded toward positive infinity.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Recommendations for a valuation, in fixed order: the ROI outlook, then
/// any value-mix and pricing flags, then the tracking reminder.
#[must_use]
pub fn recommendations(result: &RoiResult) -> Vec<Recommendation> {
    let mut items = vec![Recommendation::Outlook {
        tier: RoiTier::from_roi(result.roi_percent),
        roi_percent: round_half_up(result.roi_percent),
    }];

    if let Some(shares) = result.value_shares() {
        if shares.direct > DIRECT_SHARE_CEILING {
            items.push(Recommendation::DirectHeavy);
        }
        if shares.indirect < INDIRECT_SHARE_FLOOR {
            items.push(Recommendation::WeakIndirect);
        }
        if shares.long_term < LONG_TERM_SHARE_FLOOR {
            items.push(Recommendation::WeakLongTerm);
        }
    }

    if result.investment > result.total_value * OVERPRICING_RATIO {
        items.push(Recommendation::OverpricingRisk);
    }

    items.push(Recommendation::TrackMetrics);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueTimeline;

    fn result(investment: f64, direct: f64, indirect: f64, long_term: f64) -> RoiResult {
        let total = direct + indirect + long_term;
        RoiResult {
            partnership_name: "Test".to_string(),
            investment,
            duration_months: 12,
            direct_value: direct,
            indirect_value: indirect,
            long_term_value: long_term,
            total_value: total,
            roi_percent: crate::roi_percent(total, investment),
            value_timeline: ValueTimeline::default(),
        }
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(RoiTier::from_roi(200.0), RoiTier::Exceptional);
        assert_eq!(RoiTier::from_roi(199.9), RoiTier::Strong);
        assert_eq!(RoiTier::from_roi(100.0), RoiTier::Strong);
        assert_eq!(RoiTier::from_roi(0.0), RoiTier::Moderate);
        assert_eq!(RoiTier::from_roi(-0.1), RoiTier::Negative);
    }

    #[test]
    fn direct_only_raises_all_mix_flags() {
        let items = recommendations(&result(1000.0, 3000.0, 0.0, 0.0));
        assert_eq!(
            items,
            [
                Recommendation::Outlook {
                    tier: RoiTier::Exceptional,
                    roi_percent: 200
                },
                Recommendation::DirectHeavy,
                Recommendation::WeakIndirect,
                Recommendation::WeakLongTerm,
                Recommendation::TrackMetrics,
            ]
        );
    }

    #[test]
    fn balanced_mix_has_no_flags() {
        let items = recommendations(&result(1000.0, 500.0, 750.0, 650.0));
        assert_eq!(
            items,
            [
                Recommendation::Outlook {
                    tier: RoiTier::Moderate,
                    roi_percent: 90
                },
                Recommendation::TrackMetrics,
            ]
        );
    }

    #[test]
    fn negative_roi_flags_overpricing() {
        let items = recommendations(&result(1000.0, 100.0, 200.0, 200.0));
        assert_eq!(
            items.first(),
            Some(&Recommendation::Outlook {
                tier: RoiTier::Negative,
                roi_percent: -50
            })
        );
        assert!(items.contains(&Recommendation::OverpricingRisk));
        assert_eq!(items.last(), Some(&Recommendation::TrackMetrics));
    }

    #[test]
    fn zero_total_value_skips_mix_flags() {
        let items = recommendations(&result(1000.0, 0.0, 0.0, 0.0));
        assert_eq!(
            items,
            [
                Recommendation::Outlook {
                    tier: RoiTier::Negative,
                    roi_percent: -100
                },
                Recommendation::OverpricingRisk,
                Recommendation::TrackMetrics,
            ]
        );
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(56.49), 56);
    }

    #[test]
    fn outlook_text_includes_rounded_roi() {
        let text = Recommendation::Outlook {
            tier: RoiTier::Strong,
            roi_percent: 157,
        }
        .to_string();
        assert_eq!(
            text,
            "This partnership shows strong potential with a positive ROI (157%)."
        );
    }

    #[test]
    fn serializes_as_text() {
        let json = serde_json::to_value(Recommendation::TrackMetrics).unwrap();
        assert!(json.as_str().unwrap().starts_with("Implement robust tracking"));
    }

    #[test]
    fn same_input_same_output() {
        let r = result(1200.0, 900.0, 100.0, 50.0);
        assert_eq!(recommendations(&r), recommendations(&r));
    }
}

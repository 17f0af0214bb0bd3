//! Valuation of the shipped sample input, end to end.

use std::path::Path;

use alliance_roi::{recommendations, Recommendation, RoiInput, RoiRecord, Valuator, ValueLevel};

fn sample_input() -> RoiInput {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("roi-sample.yaml");
    let content = std::fs::read_to_string(path).expect("roi-sample.yaml should exist");
    serde_yaml::from_str(&content).expect("roi-sample.yaml should parse")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn sample_input_parses_levels() {
    let input = sample_input();
    assert_eq!(input.duration_months, 12);
    assert_eq!(input.indirect.brand_perception, ValueLevel::Medium);
    assert_eq!(input.long_term.innovation_potential, ValueLevel::Low);
}

#[test]
fn values_sample_partnership() {
    let result = Valuator::default().evaluate(&sample_input()).unwrap();

    // 20000 + 400*25 + 40*300
    assert!(approx(result.direct_value, 42_000.0));
    // 50000 * (0.25 + 0.50)
    assert!(approx(result.indirect_value, 37_500.0));
    // 50000 * 0.15 * 12/12 + 50000 * 0.05
    assert!(approx(result.long_term_value, 10_000.0));
    assert!(approx(result.total_value, 89_500.0));
    assert!(approx(result.roi_percent, 79.0));
    assert_eq!(result.value_timeline.month_labels.len(), 12);

    let items = recommendations(&result);
    // direct 46.9%, indirect 41.9%, long-term 11.2%
    assert_eq!(items.len(), 3);
    assert_eq!(items[1], Recommendation::WeakLongTerm);
    assert_eq!(
        items[0].to_string(),
        "This partnership has a positive but moderate ROI (79%)."
    );
}

#[test]
fn missing_sections_default_to_zero_and_none() {
    let yaml = "partnershipName: Bare\ninvestment: 1000\ndurationMonths: 3\n";
    let input: RoiInput = serde_yaml::from_str(yaml).unwrap();
    let result = Valuator::default().evaluate(&input).unwrap();
    assert!(approx(result.total_value, 0.0));
    assert!(approx(result.roi_percent, -100.0));
}

#[test]
fn unknown_level_fails_to_parse() {
    let yaml = "partnershipName: X\ninvestment: 1000\ndurationMonths: 3\n\
                indirect:\n  brandPerception: extreme\n";
    assert!(serde_yaml::from_str::<RoiInput>(yaml).is_err());
}

#[test]
fn record_flattens_result_with_id_and_timestamp() {
    let result = Valuator::default().evaluate(&sample_input()).unwrap();
    let record = RoiRecord::new(result);
    let json = serde_json::to_value(&record).unwrap();
    assert!(json["id"].is_string());
    assert!(json["computedAt"].is_string());
    assert_eq!(json["partnershipName"], "TechInnovate x Global Sports League");
    assert_eq!(json["valueTimeline"]["monthLabels"][0], "Month 1");

    let back: RoiRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back.id, record.id);
}

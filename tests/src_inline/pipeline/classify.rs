use super::*;
use crate::model::zones::PerformanceZone;

#[test]
fn test_round_to_tenth() {
    assert_eq!(round_to_tenth(4.12), 4.1);
    assert_eq!(round_to_tenth(4.16), 4.2);
    assert_eq!(round_to_tenth(3.9999), 4.0);
    assert_eq!(round_to_tenth(0.0), 0.0);
    assert_eq!(round_to_tenth(2.94), 2.9);
}

#[test]
fn test_green_inclusive_lower_bound() {
    assert_eq!(classify_zone(4.0), PerformanceZone::Green);
    assert_eq!(classify_zone(5.0), PerformanceZone::Green);
}

#[test]
fn test_near_boundary_rounds_into_green() {
    // Classification happens after rounding, so 3.9999 is Green.
    assert_eq!(classify_zone(round_to_tenth(3.9999)), PerformanceZone::Green);
}

#[test]
fn test_yellow_band() {
    assert_eq!(classify_zone(3.0), PerformanceZone::Yellow);
    assert_eq!(classify_zone(3.9), PerformanceZone::Yellow);
}

#[test]
fn test_red_below_three() {
    assert_eq!(classify_zone(2.9), PerformanceZone::Red);
    assert_eq!(classify_zone(0.0), PerformanceZone::Red);
}

#[test]
fn test_recommendation_per_zone() {
    assert_eq!(
        PerformanceZone::Green.recommendation(),
        "Exceeds expectations - Consider for advancement opportunities"
    );
    assert_eq!(
        PerformanceZone::Yellow.recommendation(),
        "Meets expectations - Focus on development areas"
    );
    assert_eq!(
        PerformanceZone::Red.recommendation(),
        "Below expectations - Requires improvement plan"
    );
}

use crate::model::zones::PerformanceZone;

/// One-decimal rounding applied to every displayed score. Classification
/// runs on the rounded value, so a raw 3.9999 lands in Green.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Map a rounded overall score to its zone. First match wins; both lower
/// bounds are inclusive.
pub fn classify_zone(overall_score: f64) -> PerformanceZone {
    if overall_score >= 4.0 {
        PerformanceZone::Green
    } else if overall_score >= 3.0 {
        PerformanceZone::Yellow
    } else {
        PerformanceZone::Red
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/classify.rs"]
mod tests;

use crate::model::item::AssessmentItem;
use crate::model::weights::WeightProfile;

/// Weighted mean of the ratings in one category, normalized by the weight
/// sum so that weights are only meaningful relative to each other. A zero
/// weight sum (including the empty case) yields 0.0 rather than a division
/// error. Not rounded here; rounding happens once at the top level.
pub fn category_score(items: &[AssessmentItem]) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for item in items {
        weighted += f64::from(item.rating) * item.weight;
        total_weight += item.weight;
    }
    if total_weight == 0.0 {
        0.0
    } else {
        weighted / total_weight
    }
}

/// Combine the three category scores using the fixed top-level weights.
pub fn overall_score(
    kra_score: f64,
    goal_score: f64,
    competency_score: f64,
    weights: &WeightProfile,
) -> f64 {
    weights.kra * kra_score + weights.goal * goal_score + weights.competency * competency_score
}

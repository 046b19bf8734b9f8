pub mod aggregate;
pub mod classify;

use crate::model::category::Category;
use crate::model::item::AssessmentItem;
use crate::model::scores::ScoreResult;
use crate::model::weights::WeightProfile;

use aggregate::{category_score, overall_score};
use classify::{classify_zone, round_to_tenth};

/// Full scoring pipeline for one employee: partition items by category,
/// aggregate each category, combine with the top-level weights, round, and
/// classify. Total over its input; an empty or degenerate item list
/// degrades to zeroed scores in the Red zone instead of erroring.
pub fn score_assessment(items: &[AssessmentItem], weights: &WeightProfile) -> ScoreResult {
    let per_category: Vec<f64> = Category::ALL
        .iter()
        .map(|&category| {
            let in_category: Vec<AssessmentItem> = items
                .iter()
                .copied()
                .filter(|item| item.category == category)
                .collect();
            category_score(&in_category)
        })
        .collect();

    let (kra, goal, competency) = (per_category[0], per_category[1], per_category[2]);
    let overall = round_to_tenth(overall_score(kra, goal, competency, weights));
    let zone = classify_zone(overall);

    ScoreResult {
        kra_score: round_to_tenth(kra),
        goal_score: round_to_tenth(goal),
        competency_score: round_to_tenth(competency),
        overall_score: overall,
        zone,
        recommendation: zone.recommendation(),
    }
}

use serde::Serialize;

use crate::model::zones::PerformanceZone;

/// Scores derived from one employee's assessment items. All four numeric
/// fields are rounded to one decimal place; `zone` is classified from the
/// rounded overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub kra_score: f64,
    pub goal_score: f64,
    pub competency_score: f64,
    pub overall_score: f64,
    pub zone: PerformanceZone,
    pub recommendation: &'static str,
}

use serde::Serialize;

/// Top-level category weights used to combine the three category scores
/// into the overall score. Built once at startup and passed by reference;
/// nothing mutates a profile after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightProfile {
    pub kra: f64,
    pub goal: f64,
    pub competency: f64,
}

impl WeightProfile {
    /// The three weights must sum to 1.0; a profile that does not is a
    /// programming error, not a runtime condition.
    pub fn new(kra: f64, goal: f64, competency: f64) -> Self {
        let sum = kra + goal + competency;
        assert!(
            (sum - 1.0).abs() < 1e-9,
            "category weights must sum to 1.0, got {sum}"
        );
        Self {
            kra,
            goal,
            competency,
        }
    }

    pub fn default_v1() -> Self {
        Self::new(0.60, 0.30, 0.10)
    }
}

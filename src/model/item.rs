use serde::{Deserialize, Serialize};

use crate::model::category::Category;

/// A single rated line item on an assessment form.
///
/// `rating` nominally lives in 1..=5 but out-of-range values are accepted
/// and kept as-is; they surface downstream as the "Not Rated" label.
/// `weight` is a percentage that only has meaning relative to the other
/// items in the same category, so weight sums need not reach 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub category: Category,
    pub rating: i32,
    pub weight: f64,
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::input::InputError;
use crate::model::item::AssessmentItem;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default = "default_cycle")]
    pub review_cycle: String,
    pub employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub items: Vec<AssessmentItem>,
}

pub(crate) fn default_cycle() -> String {
    "ad-hoc".to_string()
}

pub fn load_json(path: &Path) -> Result<Roster, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Permissive roster audit. Out-of-range ratings and degenerate weights are
/// kept (the aggregator degrades them to zeros / "Not Rated"); they are
/// only surfaced here so a bad export is visible in the log.
pub fn audit_roster(roster: &Roster) {
    if roster.employees.is_empty() {
        warn!("roster for cycle {} has no employees", roster.review_cycle);
    }
    for employee in &roster.employees {
        for item in &employee.items {
            if !(1..=5).contains(&item.rating) {
                warn!(
                    employee = %employee.id,
                    rating = item.rating,
                    "rating outside the 1-5 scale; will display as Not Rated"
                );
            }
            if item.weight < 0.0 {
                warn!(
                    employee = %employee.id,
                    weight = item.weight,
                    "negative item weight"
                );
            }
        }
    }
}

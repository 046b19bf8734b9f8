use std::path::Path;

use serde::Deserialize;

use crate::input::InputError;
use crate::input::roster::{EmployeeRecord, Roster, default_cycle};
use crate::model::category::Category;
use crate::model::item::AssessmentItem;

/// One row of a bulk-import CSV: a flat
/// `employee_id,name,category,rating,weight` record.
#[derive(Debug, Deserialize)]
struct CsvRow {
    employee_id: String,
    #[serde(default)]
    name: Option<String>,
    category: Category,
    rating: i32,
    weight: f64,
}

/// Fold flat CSV rows into a roster, preserving first-seen employee order.
pub fn load_csv(path: &Path) -> Result<Roster, InputError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| InputError::Csv {
        path: path.display().to_string(),
        source,
    })?;

    let mut employees: Vec<EmployeeRecord> = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|source| InputError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        let item = AssessmentItem {
            category: row.category,
            rating: row.rating,
            weight: row.weight,
        };
        match employees.iter_mut().find(|e| e.id == row.employee_id) {
            Some(existing) => {
                if existing.name.is_none() {
                    existing.name = row.name;
                }
                existing.items.push(item);
            }
            None => employees.push(EmployeeRecord {
                id: row.employee_id,
                name: row.name,
                items: vec![item],
            }),
        }
    }

    Ok(Roster {
        review_cycle: default_cycle(),
        employees,
    })
}

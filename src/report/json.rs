use serde::Serialize;

use crate::report::{EmployeeRow, SummaryData};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: &'a SummaryData,
    #[serde(skip_serializing_if = "Option::is_none")]
    employees: Option<&'a [EmployeeRow]>,
}

pub fn render_json(
    summary: &SummaryData,
    employees: Option<&[EmployeeRow]>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport { summary, employees })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Roster;
    use crate::model::category::Category;
    use crate::model::item::AssessmentItem;
    use crate::model::weights::WeightProfile;
    use crate::report::{build_rows, summarize};

    fn one_employee_roster() -> Roster {
        serde_json::from_str(
            r#"{
                "review_cycle": "FY26-H1",
                "employees": [{
                    "id": "E1",
                    "name": "Ana",
                    "items": [
                        {"category": "KRA", "rating": 4, "weight": 100.0},
                        {"category": "GOAL", "rating": 4, "weight": 100.0},
                        {"category": "COMPETENCY", "rating": 4, "weight": 100.0}
                    ]
                }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_only_omits_employees() {
        let weights = WeightProfile::default_v1();
        let roster = one_employee_roster();
        let rows = build_rows(&roster, &weights);
        let summary = summarize(&rows, &roster.review_cycle, &weights);
        let rendered = render_json(&summary, None).unwrap();
        assert!(rendered.contains("\"review_cycle\": \"FY26-H1\""));
        assert!(!rendered.contains("\"employees\""));
    }

    #[test]
    fn test_employee_mode_flattens_scores() {
        let weights = WeightProfile::default_v1();
        let roster = one_employee_roster();
        let rows = build_rows(&roster, &weights);
        let summary = summarize(&rows, &roster.review_cycle, &weights);
        let rendered = render_json(&summary, Some(&rows)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let employee = &value["employees"][0];
        assert_eq!(employee["id"], "E1");
        assert_eq!(employee["overall_score"], 4.0);
        assert_eq!(employee["zone"], "Green");
        assert_eq!(employee["items"][0]["label"], "Exceeds Expectations");
    }

    #[test]
    fn test_scores_round_trip_through_value() {
        // weighted: 4.4*0.6 + 3.0*0.3 + 2.0*0.1 = 3.74 -> 3.7 Yellow
        let weights = WeightProfile::default_v1();
        let items = vec![
            AssessmentItem {
                category: Category::Kra,
                rating: 5,
                weight: 70.0,
            },
            AssessmentItem {
                category: Category::Kra,
                rating: 3,
                weight: 30.0,
            },
            AssessmentItem {
                category: Category::Goal,
                rating: 3,
                weight: 100.0,
            },
            AssessmentItem {
                category: Category::Competency,
                rating: 2,
                weight: 50.0,
            },
        ];
        let result = crate::pipeline::score_assessment(&items, &weights);
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["kra_score"], 4.4);
        assert_eq!(value["overall_score"], 3.7);
        assert_eq!(value["zone"], "Yellow");
    }
}

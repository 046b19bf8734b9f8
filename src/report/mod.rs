pub mod json;
pub mod text;

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::input::Roster;
use crate::model::item::AssessmentItem;
use crate::model::rating::rating_label;
use crate::model::scores::ScoreResult;
use crate::model::weights::WeightProfile;
use crate::model::zones::{PerformanceZone, zone_order};
use crate::pipeline::score_assessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    /// Per-employee rows plus the cohort summary.
    Employee,
    /// Cohort summary only.
    Summary,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    pub category: &'static str,
    pub rating: i32,
    pub label: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRow {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub scores: ScoreResult,
    pub items: Vec<ItemRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneStat {
    pub zone: PerformanceZone,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub review_cycle: String,
    pub n_employees: usize,
    pub weights: WeightProfile,
    pub zones: Vec<ZoneStat>,
    pub overall_median: f64,
    pub overall_p90: f64,
}

pub fn build_rows(roster: &Roster, weights: &WeightProfile) -> Vec<EmployeeRow> {
    roster
        .employees
        .iter()
        .map(|employee| EmployeeRow {
            id: employee.id.clone(),
            name: employee.name.clone(),
            scores: score_assessment(&employee.items, weights),
            items: employee.items.iter().map(item_row).collect(),
        })
        .collect()
}

fn item_row(item: &AssessmentItem) -> ItemRow {
    ItemRow {
        category: item.category.label(),
        rating: item.rating,
        label: rating_label(item.rating),
        weight: item.weight,
    }
}

pub fn summarize(rows: &[EmployeeRow], review_cycle: &str, weights: &WeightProfile) -> SummaryData {
    let overalls: Vec<f64> = rows.iter().map(|r| r.scores.overall_score).collect();
    let zones = zone_order()
        .iter()
        .map(|&zone| {
            let count = rows.iter().filter(|r| r.scores.zone == zone).count();
            let fraction = if rows.is_empty() {
                0.0
            } else {
                count as f64 / rows.len() as f64
            };
            ZoneStat {
                zone,
                count,
                fraction,
            }
        })
        .collect();

    SummaryData {
        tool_name: "perf-scorecard".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        review_cycle: review_cycle.to_string(),
        n_employees: rows.len(),
        weights: *weights,
        zones,
        overall_median: median(&overalls),
        overall_p90: quantile_indexed(&overalls, 0.90),
    }
}

/// Write `scorecard.json` and `scorecard.txt` into `out_dir`, creating the
/// directory if needed. `Employee` mode includes per-employee rows in both
/// renderings; `Summary` mode emits only the cohort block.
pub fn write_reports(
    summary: &SummaryData,
    rows: &[EmployeeRow],
    out_dir: &Path,
    mode: ReportMode,
) -> Result<(), ReportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.display().to_string(),
        source,
    })?;

    let employees = match mode {
        ReportMode::Employee => Some(rows),
        ReportMode::Summary => None,
    };

    let json_path = out_dir.join("scorecard.json");
    let rendered = json::render_json(summary, employees)?;
    std::fs::write(&json_path, rendered).map_err(|source| ReportError::Io {
        path: json_path.display().to_string(),
        source,
    })?;

    let text_path = out_dir.join("scorecard.txt");
    let rendered = text::render_report_text(summary, employees);
    std::fs::write(&text_path, rendered).map_err(|source| ReportError::Io {
        path: text_path.display().to_string(),
        source,
    })?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

use crate::report::{EmployeeRow, SummaryData, ZoneStat};

pub fn render_report_text(summary: &SummaryData, employees: Option<&[EmployeeRow]>) -> String {
    let mut out = String::new();

    out.push_str("Performance Scorecard Report\n");
    out.push_str("============================\n\n");

    out.push_str("1. Cohort\n");
    out.push_str(&format!("Review cycle: {}\n", summary.review_cycle));
    out.push_str(&format!("Employees assessed: {}\n", summary.n_employees));
    out.push_str(&format!(
        "Category weights: KRA {:.2}, Goal {:.2}, Competency {:.2}\n\n",
        summary.weights.kra, summary.weights.goal, summary.weights.competency
    ));

    out.push_str("2. Zone distribution\n");
    for stat in &summary.zones {
        out.push_str(&format!(
            "{:<7} {:>4}  ({:.1}%)\n",
            stat.zone.name(),
            stat.count,
            stat.fraction * 100.0
        ));
    }
    out.push_str(&format!("{}\n\n", cohort_statement(&summary.zones)));

    out.push_str("3. Overall scores\n");
    out.push_str(&format!("Median: {:.1}\n", summary.overall_median));
    out.push_str(&format!("P90: {:.1}\n", summary.overall_p90));

    if let Some(rows) = employees {
        out.push_str("\n4. Per-employee scores\n");
        for row in rows {
            let name = row.name.as_deref().unwrap_or("-");
            out.push_str(&format!(
                "{:<10} {:<20} KRA {:.1}  Goal {:.1}  Comp {:.1}  Overall {:.1}  {:<6} {}\n",
                row.id,
                name,
                row.scores.kra_score,
                row.scores.goal_score,
                row.scores.competency_score,
                row.scores.overall_score,
                row.scores.zone.name(),
                row.scores.recommendation
            ));
        }
    }

    out
}

fn cohort_statement(zones: &[ZoneStat]) -> &'static str {
    let fraction_of = |name: &str| {
        zones
            .iter()
            .find(|s| s.zone.name() == name)
            .map(|s| s.fraction)
            .unwrap_or(0.0)
    };
    let green = fraction_of("Green");
    let red = fraction_of("Red");
    if red > 0.25 {
        "A large share of the cohort is below expectations."
    } else if green >= 0.5 {
        "The cohort is predominantly exceeding expectations."
    } else {
        "The cohort is broadly meeting expectations."
    }
}

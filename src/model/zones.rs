use serde::Serialize;

/// Three-valued classification of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceZone {
    Green,
    Yellow,
    Red,
}

impl PerformanceZone {
    pub fn name(self) -> &'static str {
        match self {
            PerformanceZone::Green => "Green",
            PerformanceZone::Yellow => "Yellow",
            PerformanceZone::Red => "Red",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            PerformanceZone::Green => {
                "Exceeds expectations - Consider for advancement opportunities"
            }
            PerformanceZone::Yellow => "Meets expectations - Focus on development areas",
            PerformanceZone::Red => "Below expectations - Requires improvement plan",
        }
    }
}

pub fn zone_order() -> &'static [PerformanceZone] {
    &[
        PerformanceZone::Green,
        PerformanceZone::Yellow,
        PerformanceZone::Red,
    ]
}

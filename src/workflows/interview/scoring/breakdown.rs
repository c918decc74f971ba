use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;

/// Score, distance to target, and qualitative comment for one competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyAssessment {
    pub score: f64,
    pub gap: f64,
    pub comment: String,
}

const OVERALL_COMPETENCY: &str = "Overall Performance";

fn comment_for(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent performance demonstrated"
    } else if score >= 70.0 {
        "Strong performance with minor areas for improvement"
    } else if score >= 60.0 {
        "Satisfactory performance with room for growth"
    } else if score >= 50.0 {
        "Adequate performance but needs improvement"
    } else {
        "Significant improvement needed"
    }
}

/// Interim single-bucket breakdown keyed by "Overall Performance".
///
/// A later revision maps asked questions onto job-profile competencies
/// (`{name, weight, depth}` entries) and emits one row per competency; that
/// needs per-question competency tags this engine does not receive yet.
pub(crate) fn build_breakdown(
    overall_mean: f64,
    config: &ScoringConfig,
) -> BTreeMap<String, CompetencyAssessment> {
    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        OVERALL_COMPETENCY.to_string(),
        CompetencyAssessment {
            score: overall_mean,
            gap: config.competency_target - overall_mean,
            comment: comment_for(overall_mean).to_string(),
        },
    );
    breakdown
}

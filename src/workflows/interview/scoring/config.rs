use serde::{Deserialize, Serialize};

/// Rubric thresholds applied when classifying dimension means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Dimension means below this value are reported as gaps.
    pub gap_threshold: f64,
    /// Gap means below this value are escalated to high priority.
    pub high_priority_threshold: f64,
    /// Dimension means at or above this value are reported as strengths.
    pub strength_threshold: f64,
    /// Maximum number of gaps surfaced in a report.
    pub max_gaps: usize,
    /// Target score the competency breakdown measures distance from.
    pub competency_target: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            gap_threshold: 7.0,
            high_priority_threshold: 5.0,
            strength_threshold: 8.0,
            max_gaps: 3,
            competency_target: 70.0,
        }
    }
}

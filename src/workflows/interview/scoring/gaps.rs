use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::DimensionMeans;
use crate::workflows::interview::domain::Dimension;

/// Remediation urgency bands; the derived order drives gap ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GapPriority {
    High,
    Medium,
    /// Reserved band; the current rubric never produces it.
    Low,
}

/// Classified weakness on one evaluation dimension with a suggested
/// remediation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub gap: String,
    pub priority: GapPriority,
    pub action: String,
}

const fn gap_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Answer clarity and structure",
        Dimension::Completeness => "Completeness of answers",
        Dimension::Relevance => "Answer relevance to role requirements",
        Dimension::Confidence => "Communication confidence",
    }
}

const fn remediation(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Practice STAR method and structured responses",
        Dimension::Completeness => "Ensure all parts of the question are addressed",
        Dimension::Relevance => "Study job description and align examples with requirements",
        Dimension::Confidence => "Practice speaking aloud and reduce filler words",
    }
}

/// Emits one gap per under-threshold dimension, ranked by priority and
/// capped at `max_gaps`. The sort is stable, so ties keep the fixed
/// dimension evaluation order.
pub(crate) fn analyze_gaps(means: &DimensionMeans, config: &ScoringConfig) -> Vec<SkillGap> {
    let mut gaps = Vec::new();

    for (dimension, mean) in means.ordered() {
        if mean >= config.gap_threshold {
            continue;
        }

        let priority = if mean < config.high_priority_threshold {
            GapPriority::High
        } else {
            GapPriority::Medium
        };

        gaps.push(SkillGap {
            gap: gap_label(dimension).to_string(),
            priority,
            action: remediation(dimension).to_string(),
        });
    }

    gaps.sort_by_key(|gap| gap.priority);
    gaps.truncate(config.max_gaps);
    gaps
}

use super::config::ScoringConfig;
use super::DimensionMeans;
use crate::workflows::interview::domain::Dimension;

const SOLID_OVERALL_THRESHOLD: f64 = 60.0;
const GOOD_EFFORT_THRESHOLD: f64 = 50.0;

const fn strength_sentence(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Excellent clarity and structure in answers",
        Dimension::Completeness => "Thorough and complete answers",
        Dimension::Relevance => "Strong alignment of answers with role requirements",
        Dimension::Confidence => "Confident and composed communication",
    }
}

/// Collects the strength sentences for every dimension at or above the
/// threshold, in fixed evaluation order. When no dimension qualifies the
/// overall mean picks fallback text; the result is never empty.
pub(crate) fn identify_strengths(
    means: &DimensionMeans,
    overall_mean: f64,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut strengths: Vec<String> = means
        .ordered()
        .into_iter()
        .filter(|(_, mean)| *mean >= config.strength_threshold)
        .map(|(dimension, _)| strength_sentence(dimension).to_string())
        .collect();

    if strengths.is_empty() {
        // Overlapping bands: both sentences apply above 60.
        if overall_mean >= SOLID_OVERALL_THRESHOLD {
            strengths.push("Solid overall performance".to_string());
        }
        if overall_mean >= GOOD_EFFORT_THRESHOLD {
            strengths.push("Good effort and engagement".to_string());
        }
    }

    if strengths.is_empty() {
        strengths.push("Completed the interview".to_string());
    }

    strengths
}

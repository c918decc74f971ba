/// Fixed banding from session overall score to success probability.
///
/// Bands are checked high to low with inclusive lower bounds; the result is
/// always one of the five band values.
pub(crate) fn estimate_success(overall_score: f64) -> f64 {
    if overall_score >= 80.0 {
        0.85
    } else if overall_score >= 70.0 {
        0.72
    } else if overall_score >= 60.0 {
        0.55
    } else if overall_score >= 50.0 {
        0.40
    } else {
        0.25
    }
}

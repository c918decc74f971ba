/// Arithmetic mean over a score sequence.
///
/// An empty sequence averages to 0 so synthesis always completes; the output
/// cannot distinguish "nothing recorded" from a genuine lowest score.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

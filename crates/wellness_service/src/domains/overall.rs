//! Blending pillar scores into the overall score.

/// Which pillar scores take part in the average.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverallPolicy {
    /// Every defined score counts, including a genuine zero.
    #[default]
    Defined,
    /// Only strictly positive scores count. Kept for the legacy score route,
    /// where a zero meant "no data".
    PositiveOnly,
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the scores admitted by `policy`, rounded to one decimal. Returns 0
/// when nothing is admitted.
pub fn overall_score(scores: &[Option<f64>], policy: OverallPolicy) -> f64 {
    let admitted: Vec<f64> = scores
        .iter()
        .flatten()
        .copied()
        .filter(|s| s.is_finite())
        .filter(|s| match policy {
            OverallPolicy::Defined => true,
            OverallPolicy::PositiveOnly => *s > 0.0,
        })
        .collect();

    if admitted.is_empty() {
        return 0.0;
    }
    round_to_tenth(admitted.iter().sum::<f64>() / admitted.len() as f64)
}

use wellness_client::{TendencyKind, WeightSeries};

/// Weekly entries needed for full consistency credit.
const EXPECTED_ENTRIES: f64 = 7.0;

/// Legacy weight pillar: logging consistency plus trend direction.
pub fn weight_score(series: &WeightSeries) -> f64 {
    if series.entries.is_empty() {
        return 0.0;
    }
    let consistency = (series.entries.len() as f64 / EXPECTED_ENTRIES).min(1.0) * 2.5;
    let trend = match series.tendency.as_ref().map(|t| &t.kind) {
        Some(TendencyKind::Up) => 1.5,
        _ => 2.5,
    };
    (consistency + trend).min(5.0)
}

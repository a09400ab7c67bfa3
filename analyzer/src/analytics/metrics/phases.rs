/// Classification of every consecutive pair of samples by their first difference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionBreakdown {
    /// Differences greater than one unit.
    pub fast_growth_steps: u64,
    /// Differences of exactly one unit.
    pub linear_growth_steps: u64,
    /// Index of the first sample of every pair whose difference is negative.
    pub reductions: Vec<usize>,
}

pub fn classify_transitions(values: &[f64]) -> TransitionBreakdown {
    let mut breakdown = TransitionBreakdown::default();
    for (index, pair) in values.windows(2).enumerate() {
        let diff = pair[1] - pair[0];
        if diff > 1.0 {
            breakdown.fast_growth_steps += 1;
        } else if diff == 1.0 {
            breakdown.linear_growth_steps += 1;
        } else if diff < 0.0 {
            breakdown.reductions.push(index);
        }
    }
    breakdown
}

/// Number of samples below and at-or-above `split`.
///
/// This is the cosmetic low/high band split drawn on the chart, not a protocol state.
pub fn split_phases(values: &[f64], split: f64) -> (u64, u64) {
    let below = values.iter().filter(|v| **v < split).count() as u64;
    (below, values.len() as u64 - below)
}

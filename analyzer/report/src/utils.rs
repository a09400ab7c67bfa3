use crate::time_series::TimeSeries;
use serde::Serializer;

pub(crate) fn round_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 1000.0).round() / 1000.0)
}

pub fn min(series: &TimeSeries) -> Option<f64> {
    series.values().reduce(f64::min)
}

pub fn max(series: &TimeSeries) -> Option<f64> {
    series.values().reduce(f64::max)
}

pub fn mean(series: &TimeSeries) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.values().sum::<f64>() / series.len() as f64)
}

/// Population standard deviation (divides by N, not N - 1).
pub fn std_dev(series: &TimeSeries) -> Option<f64> {
    let mean = mean(series)?;
    let variance = series
        .values()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / series.len() as f64;
    Some(variance.sqrt())
}

use cwnd_report::time_series::{TimePoint, TimeSeries, TimeSeriesKind};
use std::path::Path;
use tracing::debug;

/// Reads whitespace separated `time value` lines, skipping lines containing `skip_marker`.
pub fn load_generic_series(path: &Path, skip_marker: &str) -> std::io::Result<TimeSeries> {
    let content = std::fs::read_to_string(path)?;
    let series = parse_generic_series(&content, skip_marker);
    debug!(
        "Parsed {} generic samples from '{}'",
        series.len(),
        path.display()
    );
    Ok(series)
}

fn parse_generic_series(content: &str, skip_marker: &str) -> TimeSeries {
    let points = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| skip_marker.is_empty() || !line.contains(skip_marker))
        .filter_map(parse_line)
        .collect();
    TimeSeries::new(points, TimeSeriesKind::Generic)
}

fn parse_line(line: &str) -> Option<TimePoint> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [time, value] = fields.as_slice() else {
        return None;
    };
    let time = time.parse::<f64>().ok().filter(|t| t.is_finite())?;
    let value = value.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(TimePoint::new(time, value))
}

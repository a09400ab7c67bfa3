use super::csv_records;
use csv::StringRecord;
use cwnd_report::time_series::{TimePoint, TimeSeries, TimeSeriesKind};
use std::path::Path;
use tracing::debug;

/// Reads a `time_ms,cwnd` CSV file.
///
/// An `Err` means the file could not be read at all ("no data"), while an empty
/// series means the file held no valid row ("empty data").
pub fn load_window_samples(path: &Path) -> std::io::Result<TimeSeries> {
    let content = std::fs::read_to_string(path)?;
    let series = parse_window_samples(&content);
    debug!(
        "Parsed {} window samples from '{}'",
        series.len(),
        path.display()
    );
    Ok(series)
}

fn parse_window_samples(content: &str) -> TimeSeries {
    let points = csv_records(content).filter_map(|r| parse_row(&r)).collect();
    TimeSeries::new(points, TimeSeriesKind::CongestionWindow)
}

fn parse_row(record: &StringRecord) -> Option<TimePoint> {
    let time_ms = record.get(0)?.parse::<f64>().ok().filter(|t| t.is_finite())?;
    let window = record.get(1)?.parse::<u64>().ok()?;
    Some(TimePoint::new(time_ms / 1000.0, window as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn should_skip_header_and_convert_to_seconds() {
        let series = parse_window_samples("time_ms,cwnd\n0,1\n1000,2\n2000,1\n");

        assert_eq!(
            series.points,
            vec![
                TimePoint::new(0.0, 1.0),
                TimePoint::new(1.0, 2.0),
                TimePoint::new(2.0, 1.0),
            ]
        );
    }

    #[test]
    fn should_drop_malformed_rows() {
        let content = "time_ms,cwnd\n\
                       0,1\n\
                       \n\
                       500\n\
                       abc,3\n\
                       750,-2\n\
                       800,2.5\n\
                       1000, 4 \n\
                       1200,5,extra\n";

        let series = parse_window_samples(content);

        assert_eq!(series.len(), 3);
        assert_eq!(series.values().collect::<Vec<_>>(), vec![1.0, 4.0, 5.0]);
    }

    #[test]
    fn header_only_file_should_yield_empty_series() {
        assert!(parse_window_samples("time_ms,cwnd\n").is_empty());
        assert!(parse_window_samples("").is_empty());
    }

    #[test]
    fn missing_file_should_be_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_window_samples(&dir.path().join("missing.csv")).is_err());
    }

    #[test]
    fn should_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "time_ms,cwnd\n0,1\n1000,2\n2000,1\n").unwrap();

        let series = load_window_samples(file.path()).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.kind, TimeSeriesKind::CongestionWindow);
    }
}

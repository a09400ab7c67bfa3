use cwnd_report::time_series::TimeSeries;

pub mod moving_average;
pub mod polynomial_trend;

/// Process time series data
pub trait TimeSeriesProcessor {
    fn process(&self, data: &TimeSeries) -> TimeSeries;
}

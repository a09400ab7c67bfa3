use super::time_series::TimeSeries;
use serde::{Deserialize, Serialize};

/// Smoothed views of the window trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrendAnalysis {
    /// Least-squares polynomial evaluated at every sample time, absent when there are too few samples.
    pub polynomial: Option<TimeSeries>,
    pub polynomial_degree: usize,
    /// Absent when the moving average window is not larger than one sample.
    pub moving_average: Option<TimeSeries>,
    pub moving_average_window: usize,
}

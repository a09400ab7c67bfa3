use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ChartKind {
    #[display("Congestion Window Analysis")]
    #[serde(rename = "congestion")]
    Congestion,
    #[display("Trend Analysis")]
    #[serde(rename = "trend")]
    Trend,
    #[display("Time Series")]
    #[serde(rename = "series")]
    Series,
}

impl ChartKind {
    pub fn default_file_stem(&self) -> &'static str {
        match self {
            ChartKind::Congestion => "tcp_congestion_analysis",
            ChartKind::Trend => "tcp_trend_analysis",
            ChartKind::Series => "series",
        }
    }
}

use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over the whole window trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SummaryStats {
    #[serde(serialize_with = "round_float")]
    pub max_value: f64,
    #[serde(serialize_with = "round_float")]
    pub min_value: f64,
    #[serde(serialize_with = "round_float")]
    pub mean_value: f64,
    #[serde(serialize_with = "round_float")]
    pub std_dev_value: f64,
    pub data_points: u64,
    #[serde(serialize_with = "round_float")]
    pub total_time_secs: f64,
    /// Consecutive differences greater than one unit.
    pub fast_growth_steps: u64,
    /// Consecutive differences of exactly one unit.
    pub linear_growth_steps: u64,
    /// Consecutive differences below zero.
    pub reduction_events: u64,
    pub total_losses: u64,
    /// Losses per 1000 samples.
    #[serde(serialize_with = "round_float")]
    pub loss_rate_per_mille: f64,
    #[serde(serialize_with = "round_float")]
    pub efficiency_percent: f64,
    /// Boundary between the slow start and congestion avoidance bands.
    #[serde(serialize_with = "round_float")]
    pub phase_split_value: f64,
    pub slow_start_samples: u64,
    pub congestion_avoidance_samples: u64,
}

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A recorded packet loss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, new)]
pub struct LossEvent {
    pub time_ms: f64,
    pub packet_size: Option<u32>,
}

impl LossEvent {
    pub fn time_s(&self) -> f64 {
        self.time_ms / 1000.0
    }
}

/// A loss event placed on the window trace, at the value of the nearest sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, new)]
pub struct LossMarker {
    pub time_s: f64,
    pub value: f64,
}

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Where the analyzed series came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default,
)]
pub enum DataSource {
    #[default]
    #[display("Measured")]
    #[serde(rename = "measured")]
    Measured,
    #[display("Simulated")]
    #[serde(rename = "simulated")]
    Simulated,
    #[display("Generic")]
    #[serde(rename = "generic")]
    Generic,
}

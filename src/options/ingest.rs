use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Ingest", inline)]
#[serde(default)]
/// Background decode pipeline settings.
pub struct IngestOptions {
    /// Raw frames that may wait for the decoder before new ones are dropped.
    #[schemars(title = "Queue Capacity", range(min = 1, max = 64))]
    pub queue_capacity: usize,
    /// Decode only every Nth submitted frame (1 decodes all of them).
    #[schemars(title = "Frame Decimation", range(min = 1, max = 60))]
    pub frame_decimation: u32,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            queue_capacity: 4,
            frame_decimation: 1,
        }
    }
}

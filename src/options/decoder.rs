use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Decoder", inline)]
#[serde(default)]
/// Fixed per-sensor constants used to decode polar scans.
///
/// Defaults describe a 32-channel HDL-32E style sensor.
pub struct DecoderOptions {
    /// Number of channels decoded per azimuth sample.
    #[schemars(skip)]
    pub channel_count: usize,
    /// Total vertical field of view in degrees. Channel 0 sits at half of
    /// this above horizontal.
    #[schemars(skip)]
    pub vertical_fov_span_degrees: f64,
    /// Elevation step between consecutive channels in degrees.
    #[schemars(skip)]
    pub vertical_resolution_degrees: f64,
    /// Returns closer than this are dropped as near-range noise.
    #[schemars(title = "Minimum Range (m)", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub min_valid_range_meters: f64,
    /// Meters per raw range unit.
    #[schemars(skip)]
    pub range_unit_to_meters: f64,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            channel_count: 32,
            vertical_fov_span_degrees: 41.34,
            vertical_resolution_degrees: 1.33,
            min_valid_range_meters: 1.5,
            range_unit_to_meters: 1.0 / 500.0,
        }
    }
}

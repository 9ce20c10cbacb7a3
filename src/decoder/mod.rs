//! Rotating-lidar decoding: raw polar records in, layered point clouds out.

/// Raw polar scan records.
pub mod frame;
/// Background decode thread fed by a bounded queue.
pub mod ingest;
/// Polar-to-Cartesian conversion with near-range filtering.
pub mod velodyne;

pub use frame::{AzimuthSample, ChannelSample, RawFrame, CHANNELS_PER_SAMPLE};
pub use ingest::{FrameGate, FrameIngest, SubmitOutcome};
pub use velodyne::VelodyneDecoder;

//! Raw polar scan records as delivered by the capture layer.

use crate::error::LidarError;

/// Channel slots carried by every azimuth sample.
pub const CHANNELS_PER_SAMPLE: usize = 32;

/// One channel's measurement at one azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelSample {
    /// Distance in sensor units (2 mm for the HDL-32E).
    pub range_units: u32,
    /// Return intensity.
    pub intensity: u32,
}

/// All channels fired at one azimuth angle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzimuthSample {
    /// Azimuth in hundredths of a degree.
    pub angle_centidegrees: i32,
    /// Per-channel measurements, indexed by channel.
    pub channels: [ChannelSample; CHANNELS_PER_SAMPLE],
}

impl AzimuthSample {
    /// Sample with every channel empty (zero range).
    #[must_use]
    pub fn new(angle_centidegrees: i32) -> Self {
        Self {
            angle_centidegrees,
            channels: [ChannelSample::default(); CHANNELS_PER_SAMPLE],
        }
    }

    /// Builder-style setter for one channel.
    #[must_use]
    pub fn with_channel(
        mut self,
        channel: usize,
        range_units: u32,
        intensity: u32,
    ) -> Self {
        if let Some(slot) = self.channels.get_mut(channel) {
            *slot = ChannelSample {
                range_units,
                intensity,
            };
        }
        self
    }
}

/// One revolution of azimuth samples.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFrame {
    /// Samples in firing order.
    pub azimuth_samples: Vec<AzimuthSample>,
}

impl RawFrame {
    /// Wrap a list of samples.
    #[must_use]
    pub fn new(azimuth_samples: Vec<AzimuthSample>) -> Self {
        Self { azimuth_samples }
    }

    /// Build a frame from a fixed-size sensor record whose first
    /// `valid_count` slots hold real samples.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidFrame`] when `valid_count` is zero or larger
    /// than the record buffer.
    pub fn from_record(
        valid_count: usize,
        mut buffer: Vec<AzimuthSample>,
    ) -> Result<Self, LidarError> {
        if valid_count == 0 {
            return Err(LidarError::InvalidFrame(
                "record holds no azimuth samples".into(),
            ));
        }
        if valid_count > buffer.len() {
            return Err(LidarError::InvalidFrame(format!(
                "record claims {valid_count} samples but buffer holds {}",
                buffer.len()
            )));
        }
        buffer.truncate(valid_count);
        Ok(Self::new(buffer))
    }

    /// Number of azimuth samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.azimuth_samples.len()
    }

    /// Whether the frame has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.azimuth_samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_record_keeps_only_valid_prefix() {
        let buffer: Vec<_> = (0..4).map(|i| AzimuthSample::new(i * 100)).collect();
        let frame = RawFrame::from_record(2, buffer).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.azimuth_samples[1].angle_centidegrees, 100);
    }

    #[test]
    fn from_record_rejects_bad_counts() {
        let buffer = vec![AzimuthSample::new(0)];
        assert!(matches!(
            RawFrame::from_record(0, buffer.clone()),
            Err(LidarError::InvalidFrame(_))
        ));
        assert!(matches!(
            RawFrame::from_record(2, buffer),
            Err(LidarError::InvalidFrame(_))
        ));
    }

    #[test]
    fn with_channel_ignores_out_of_range_slot() {
        let sample = AzimuthSample::new(0)
            .with_channel(3, 1000, 7)
            .with_channel(CHANNELS_PER_SAMPLE, 1, 1);
        assert_eq!(sample.channels[3].range_units, 1000);
        assert_eq!(sample.channels[3].intensity, 7);
        assert!(sample.channels.iter().filter(|c| c.range_units > 0).count() == 1);
    }
}

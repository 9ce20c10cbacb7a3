//! Polar-to-Cartesian decoding for multi-channel rotating lidars.
//!
//! Each channel fires at a fixed elevation; the elevation table is an
//! arithmetic sequence starting half the vertical field of view above
//! horizontal (channel 0) and stepping down by the vertical resolution.

use super::frame::{RawFrame, CHANNELS_PER_SAMPLE};
use crate::error::LidarError;
use crate::options::DecoderOptions;
use crate::points::{Layer, Point3D, Scan};

/// Decodes [`RawFrame`]s into layered [`Scan`]s.
///
/// Holds only read-only constants, so one decoder can be shared across
/// threads and called concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct VelodyneDecoder {
    elevations: Vec<f64>,
    min_valid_range_meters: f64,
    range_unit_to_meters: f64,
}

impl VelodyneDecoder {
    /// Build a decoder and its elevation table.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidParameter`] when the channel count is zero or
    /// exceeds the channel slots of a raw sample, or when any angle or scale
    /// constant is not a finite positive number.
    pub fn new(options: &DecoderOptions) -> Result<Self, LidarError> {
        if options.channel_count == 0
            || options.channel_count > CHANNELS_PER_SAMPLE
        {
            return Err(LidarError::InvalidParameter(format!(
                "channel count must be in 1..={CHANNELS_PER_SAMPLE}, got {}",
                options.channel_count
            )));
        }
        check_positive(
            "vertical resolution",
            options.vertical_resolution_degrees,
        )?;
        check_positive("range unit scale", options.range_unit_to_meters)?;
        if !options.vertical_fov_span_degrees.is_finite()
            || !options.min_valid_range_meters.is_finite()
        {
            return Err(LidarError::InvalidParameter(
                "vertical span and minimum range must be finite".into(),
            ));
        }

        let top = (options.vertical_fov_span_degrees / 2.0).to_radians();
        let step = options.vertical_resolution_degrees.to_radians();
        let elevations = (0..options.channel_count)
            .map(|channel| top - channel as f64 * step)
            .collect::<Vec<_>>();

        log::debug!(
            "velodyne decoder: {} channels, elevation {:.2}° .. {:.2}°",
            elevations.len(),
            top.to_degrees(),
            elevations.last().copied().unwrap_or(top).to_degrees()
        );

        Ok(Self {
            elevations,
            min_valid_range_meters: options.min_valid_range_meters,
            range_unit_to_meters: options.range_unit_to_meters,
        })
    }

    /// Number of channels (and layers per decoded scan).
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.elevations.len()
    }

    /// Per-channel elevation angles in radians, channel 0 first.
    #[must_use]
    pub fn elevation_angles(&self) -> &[f64] {
        &self.elevations
    }

    /// Decode one revolution.
    ///
    /// Produces exactly one layer per channel, in channel order, even when a
    /// channel has no surviving returns. Returns closer than the minimum
    /// range are dropped silently. Range and intensity are both read from
    /// the same `(sample, channel)` cell.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidFrame`] when the frame has no azimuth samples.
    pub fn decode(&self, frame: &RawFrame) -> Result<Scan, LidarError> {
        if frame.is_empty() {
            return Err(LidarError::InvalidFrame(
                "frame has no azimuth samples".into(),
            ));
        }

        let azimuths = frame
            .azimuth_samples
            .iter()
            .map(|s| {
                (f64::from(s.angle_centidegrees) / 100.0)
                    .to_radians()
                    .sin_cos()
            })
            .collect::<Vec<_>>();

        let mut scan = Scan::with_capacity(self.elevations.len());
        for (channel, &beta) in self.elevations.iter().enumerate() {
            let (sin_beta, cos_beta) = beta.sin_cos();
            let mut layer = Layer::new(channel as i32, beta);

            for (sample, &(sin_alpha, cos_alpha)) in
                frame.azimuth_samples.iter().zip(&azimuths)
            {
                let Some(cell) = sample.channels.get(channel) else {
                    return Err(LidarError::InvalidFrame(format!(
                        "channel {channel} out of range"
                    )));
                };
                let distance =
                    f64::from(cell.range_units) * self.range_unit_to_meters;
                if distance < self.min_valid_range_meters {
                    continue;
                }

                let dxy = distance * cos_beta;
                layer.points.push(Point3D {
                    x: dxy * sin_alpha,
                    y: dxy * cos_alpha,
                    z: distance * sin_beta,
                    intensity: cell.intensity,
                });
            }

            scan.layers.push(layer);
        }

        Ok(scan)
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), LidarError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LidarError::InvalidParameter(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::frame::AzimuthSample;

    fn decoder() -> VelodyneDecoder {
        VelodyneDecoder::new(&DecoderOptions::default()).unwrap()
    }

    fn full_sweep() -> RawFrame {
        let samples = (0..36)
            .map(|i| {
                let mut sample = AzimuthSample::new(i * 1000);
                for (ch, cell) in sample.channels.iter_mut().enumerate() {
                    cell.range_units = 600 + (i as u32) * 37 + ch as u32 * 11;
                    cell.intensity = (i as u32) * 100 + ch as u32;
                }
                sample
            })
            .collect();
        RawFrame::new(samples)
    }

    #[test]
    fn single_sample_at_ninety_degrees() {
        let dec = decoder();
        let frame =
            RawFrame::new(vec![AzimuthSample::new(9000).with_channel(0, 1000, 42)]);
        let scan = dec.decode(&frame).unwrap();

        let beta0 = dec.elevation_angles()[0];
        assert!((beta0 - 20.67_f64.to_radians()).abs() < 1e-12);

        let layer = &scan.layers[0];
        assert_eq!(layer.points.len(), 1);
        let p = layer.points[0];
        assert!((p.x - 2.0 * beta0.cos()).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        assert!((p.z - 2.0 * beta0.sin()).abs() < 1e-9);
        assert_eq!(p.intensity, 42);

        // every other channel had zero range
        assert!(scan.layers[1..].iter().all(|l| l.points.is_empty()));
    }

    #[test]
    fn one_layer_per_channel_in_order() {
        let scan = decoder().decode(&full_sweep()).unwrap();
        assert_eq!(scan.layer_count(), 32);
        for (k, layer) in scan.layers.iter().enumerate() {
            assert_eq!(layer.id, k as i32);
        }
    }

    #[test]
    fn empty_layers_are_still_emitted() {
        let frame = RawFrame::new(vec![AzimuthSample::new(0)]);
        let scan = decoder().decode(&frame).unwrap();
        assert_eq!(scan.layer_count(), 32);
        assert_eq!(scan.point_count(), 0);
    }

    #[test]
    fn near_range_returns_are_dropped() {
        let frame = RawFrame::new(vec![
            AzimuthSample::new(0).with_channel(5, 749, 1),
            AzimuthSample::new(100).with_channel(5, 751, 2),
            AzimuthSample::new(200).with_channel(5, 10, 3),
        ]);
        let scan = decoder().decode(&frame).unwrap();
        let layer = scan.layer(5).unwrap();
        assert_eq!(layer.points.len(), 1);
        assert_eq!(layer.points[0].intensity, 2);
        assert!(scan
            .points()
            .all(|p| p.position().length() >= 1.5));
    }

    #[test]
    fn elevation_strictly_decreasing() {
        let scan = decoder().decode(&full_sweep()).unwrap();
        for pair in scan.layers.windows(2) {
            assert!(pair[0].elevation_angle > pair[1].elevation_angle);
        }
        let step = 1.33_f64.to_radians();
        let diff = scan.layers[0].elevation_angle - scan.layers[1].elevation_angle;
        assert!((diff - step).abs() < 1e-12);
    }

    #[test]
    fn decode_is_bit_identical() {
        let dec = decoder();
        let frame = full_sweep();
        let a = dec.decode(&frame).unwrap();
        let b = dec.decode(&frame).unwrap();
        assert_eq!(a.point_count(), b.point_count());
        for (pa, pb) in a.points().zip(b.points()) {
            assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            assert_eq!(pa.y.to_bits(), pb.y.to_bits());
            assert_eq!(pa.z.to_bits(), pb.z.to_bits());
            assert_eq!(pa.intensity, pb.intensity);
        }
    }

    #[test]
    fn points_keep_azimuth_order() {
        let scan = decoder().decode(&full_sweep()).unwrap();
        let layer = &scan.layers[10];
        let intensities: Vec<u32> = layer.points.iter().map(|p| p.intensity).collect();
        let mut sorted = intensities.clone();
        sorted.sort_unstable();
        assert_eq!(intensities, sorted);
    }

    #[test]
    fn intensity_read_from_same_cell_as_range() {
        // Sample 0 / channel 1 and sample 1 / channel 0 hold different
        // intensities; a transposed read would swap them.
        let frame = RawFrame::new(vec![
            AzimuthSample::new(0)
                .with_channel(0, 1000, 11)
                .with_channel(1, 1000, 12),
            AzimuthSample::new(100)
                .with_channel(0, 1000, 21)
                .with_channel(1, 1000, 22),
        ]);
        let scan = decoder().decode(&frame).unwrap();
        let ch0: Vec<u32> = scan.layers[0].points.iter().map(|p| p.intensity).collect();
        let ch1: Vec<u32> = scan.layers[1].points.iter().map(|p| p.intensity).collect();
        assert_eq!(ch0, vec![11, 21]);
        assert_eq!(ch1, vec![12, 22]);
    }

    #[test]
    fn empty_frame_is_invalid() {
        let err = decoder().decode(&RawFrame::default()).unwrap_err();
        assert!(matches!(err, LidarError::InvalidFrame(_)));
    }

    #[test]
    fn bad_constants_are_rejected() {
        let too_many = DecoderOptions {
            channel_count: 64,
            ..DecoderOptions::default()
        };
        assert!(matches!(
            VelodyneDecoder::new(&too_many),
            Err(LidarError::InvalidParameter(_))
        ));

        let flat = DecoderOptions {
            vertical_resolution_degrees: 0.0,
            ..DecoderOptions::default()
        };
        assert!(VelodyneDecoder::new(&flat).is_err());

        let fewer = DecoderOptions {
            channel_count: 16,
            ..DecoderOptions::default()
        };
        let scan = VelodyneDecoder::new(&fewer)
            .unwrap()
            .decode(&full_sweep())
            .unwrap();
        assert_eq!(scan.layer_count(), 16);
    }
}

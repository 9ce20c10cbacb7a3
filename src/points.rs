//! Point cloud value types shared by the decoder, the viewer and the
//! renderer.
//!
//! These are plain data: a decoded [`Scan`] is built fresh for every frame
//! and handed to the caller by value.

use glam::DVec3;

/// A single lidar return in sensor coordinates (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    /// Forward/right horizontal coordinate.
    pub x: f64,
    /// Horizontal coordinate, zero azimuth points along +Y.
    pub y: f64,
    /// Vertical coordinate.
    pub z: f64,
    /// Raw return intensity copied from the sensor sample.
    pub intensity: u32,
}

impl Point3D {
    /// Position without the intensity.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

/// All points produced by one sensor channel during one revolution.
///
/// Points are kept in azimuth sample order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    /// Sensor channel index.
    pub id: i32,
    /// Channel elevation angle in radians.
    pub elevation_angle: f64,
    /// Returns in azimuth order.
    pub points: Vec<Point3D>,
}

impl Layer {
    /// Create an empty layer for a channel.
    #[must_use]
    pub fn new(id: i32, elevation_angle: f64) -> Self {
        Self {
            id,
            elevation_angle,
            points: Vec::new(),
        }
    }
}

/// One revolution worth of layers, in channel order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scan {
    /// Layers in channel traversal order.
    pub layers: Vec<Layer>,
}

impl Scan {
    /// Create a scan with room for `layer_count` layers.
    #[must_use]
    pub fn with_capacity(layer_count: usize) -> Self {
        Self {
            layers: Vec::with_capacity(layer_count),
        }
    }

    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of points across all layers.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(|l| l.points.len()).sum()
    }

    /// Look up the layer for a channel id.
    #[must_use]
    pub fn layer(&self, id: i32) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Iterate over every point, layer by layer.
    pub fn points(&self) -> impl Iterator<Item = &Point3D> {
        self.layers.iter().flat_map(|l| l.points.iter())
    }
}

/// A 3D segment used for auxiliary overlays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line3D {
    /// First endpoint.
    pub start: DVec3,
    /// Second endpoint.
    pub end: DVec3,
}

impl Line3D {
    /// Segment between two points.
    #[must_use]
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A set of independent segments.
pub type LineCloud = Vec<Line3D>;

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with(id: i32, n: usize) -> Layer {
        let mut layer = Layer::new(id, 0.0);
        layer.points = (0..n)
            .map(|i| Point3D {
                x: i as f64,
                ..Point3D::default()
            })
            .collect();
        layer
    }

    #[test]
    fn scan_counts_points_across_layers() {
        let scan = Scan {
            layers: vec![layer_with(0, 3), layer_with(1, 0), layer_with(2, 2)],
        };
        assert_eq!(scan.layer_count(), 3);
        assert_eq!(scan.point_count(), 5);
        assert_eq!(scan.points().count(), 5);
    }

    #[test]
    fn layer_lookup_by_channel_id() {
        let scan = Scan {
            layers: vec![layer_with(4, 1), layer_with(7, 2)],
        };
        assert_eq!(scan.layer(7).map(|l| l.points.len()), Some(2));
        assert!(scan.layer(0).is_none());
    }

    #[test]
    fn line_length() {
        let line = Line3D::new(DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0));
        assert_eq!(line.length(), 5.0);
    }
}

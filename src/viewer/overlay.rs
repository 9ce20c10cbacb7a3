//! Reference geometry drawn around the point cloud: a polar ground grid and
//! an XYZ axis frame. Produced as plain segments for the renderer.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::points::{Line3D, LineCloud};

/// Segments per grid circle (one every 5 degrees).
const CIRCLE_SEGMENTS: usize = 72;

/// Upper bound on grid circles; denser settings are clamped.
const MAX_RINGS: u32 = 1_000;

/// Concentric circles every `step` meters strictly inside `length`, in the
/// z = 0 plane, plus an X/Y cross reaching `length + step`.
///
/// A non-positive or non-finite step yields only the cross, a non-finite
/// length yields nothing. At most [`MAX_RINGS`] circles are drawn.
#[must_use]
pub fn grid_lines(length: f64, step: f64) -> LineCloud {
    let mut lines = LineCloud::new();
    if !length.is_finite() {
        log::warn!("grid length {length} is not finite, grid skipped");
        return lines;
    }
    let step = if step.is_finite() { step.max(0.0) } else { 0.0 };

    if step > 0.0 {
        for ring in 1..=MAX_RINGS {
            let radius = f64::from(ring) * step;
            if radius >= length {
                break;
            }
            if ring == MAX_RINGS {
                log::warn!("grid step {step} too fine, clamped to {MAX_RINGS} rings");
            }
            push_circle(&mut lines, radius);
        }
    }

    let reach = length + step;
    lines.push(Line3D::new(
        DVec3::new(-reach, 0.0, 0.0),
        DVec3::new(reach, 0.0, 0.0),
    ));
    lines.push(Line3D::new(
        DVec3::new(0.0, -reach, 0.0),
        DVec3::new(0.0, reach, 0.0),
    ));
    lines
}

fn push_circle(lines: &mut LineCloud, radius: f64) {
    let vertex = |i: usize| {
        let (sin, cos) = (TAU * i as f64 / CIRCLE_SEGMENTS as f64).sin_cos();
        DVec3::new(radius * cos, radius * sin, 0.0)
    };
    lines.extend(
        (0..CIRCLE_SEGMENTS).map(|i| Line3D::new(vertex(i), vertex(i + 1))),
    );
}

/// Axis frame at the origin: X red, Y green, Z blue.
#[must_use]
pub fn axis_frame(length: f64) -> [(Line3D, [f32; 3]); 3] {
    [
        (Line3D::new(DVec3::ZERO, DVec3::X * length), [1.0, 0.0, 0.0]),
        (Line3D::new(DVec3::ZERO, DVec3::Y * length), [0.0, 1.0, 0.0]),
        (Line3D::new(DVec3::ZERO, DVec3::Z * length), [0.0, 0.0, 1.0]),
    ]
}

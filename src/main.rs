//! Headless demo: decodes a synthetic sweep on the ingest thread, then
//! drives the viewer camera with a scripted drag and logs the result.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use lidarview::decoder::{
    AzimuthSample, FrameIngest, RawFrame, SubmitOutcome, VelodyneDecoder,
    CHANNELS_PER_SAMPLE,
};
use lidarview::input::{InputEvent, InputProcessor, MouseButton};
use lidarview::options::Options;
use lidarview::points::Scan;
use lidarview::viewer::Viewer;
use lidarview::LidarError;

/// Azimuth spacing of the synthetic sweep, in hundredths of a degree.
const SWEEP_STEP_CENTIDEGREES: usize = 20;
const SCAN_WAIT: Duration = Duration::from_secs(2);

/// One revolution around a sensor standing in a round room: each channel
/// sees the wall a little further away than the one above it.
fn synthetic_sweep(phase: i32) -> RawFrame {
    let samples = (0_i32..36_000)
        .step_by(SWEEP_STEP_CENTIDEGREES)
        .map(|angle| {
            let angle = (angle + phase).rem_euclid(36_000);
            (0_u16..).take(CHANNELS_PER_SAMPLE).fold(
                AzimuthSample::new(angle),
                |sample, ch| {
                    let ch_units = u32::from(ch);
                    sample.with_channel(
                        usize::from(ch),
                        10_000 + 150 * ch_units,
                        8 * ch_units,
                    )
                },
            )
        })
        .collect();
    RawFrame::new(samples)
}

fn wait_for_scan(ingest: &mut FrameIngest) -> Option<Scan> {
    let start = Instant::now();
    while start.elapsed() < SCAN_WAIT {
        if let Some(scan) = ingest.try_recv_scan() {
            return Some(scan);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}

fn main() -> Result<(), LidarError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(&path)?
        }
        None => Options::default(),
    };

    let decoder = VelodyneDecoder::new(&options.decoder)?;
    let mut ingest = FrameIngest::new(decoder, &options.ingest)?;
    for phase in [0, 1_000, 2_000] {
        if ingest.submit(synthetic_sweep(phase)) == SubmitOutcome::Dropped {
            log::warn!("sweep with phase {phase} was dropped");
        }
    }

    let Some(scan) = wait_for_scan(&mut ingest) else {
        log::error!("no scan decoded within {SCAN_WAIT:?}");
        ingest.shutdown();
        return Ok(());
    };
    ingest.shutdown();

    for layer in &scan.layers {
        log::info!(
            "layer {:2} at {:+6.2} deg: {} points",
            layer.id,
            layer.elevation_angle.to_degrees(),
            layer.points.len()
        );
    }

    let mut viewer = Viewer::new(1280, 720, options.clone());
    viewer.set_scan(scan);

    let mut input =
        InputProcessor::with_options(options.camera, options.keybindings);
    let drag = [
        InputEvent::CursorMoved { x: 640.0, y: 360.0 },
        InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        },
        InputEvent::CursorMoved { x: 700.0, y: 330.0 },
        InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        },
        InputEvent::Scroll { delta: 120.0 },
    ];
    for event in drag {
        for command in input.handle_event(event) {
            if let Err(e) = viewer.execute(command) {
                log::warn!("{command:?} rejected: {e}");
            }
        }
    }

    let snapshot = viewer.snapshot()?;
    log::info!(
        "{} points, eye {:.2} looking at {:.2} (up {:.3})",
        viewer.scan().point_count(),
        snapshot.camera.eye,
        snapshot.camera.reference,
        snapshot.camera.up
    );

    if let Some(command) = input.handle_key_press("Home") {
        viewer.execute(command)?;
    }
    log::info!("home view eye {:.2}", viewer.snapshot()?.camera.eye);
    Ok(())
}

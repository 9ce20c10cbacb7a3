//! Background decoding of raw frames.
//!
//! Capture and decode run at different cadences: raw frames go through a
//! bounded queue to a dedicated decode thread, and only the newest decoded
//! scan is kept for the consumer (triple buffer, latest wins).

use std::sync::mpsc;

use super::frame::RawFrame;
use super::velodyne::VelodyneDecoder;
use crate::error::LidarError;
use crate::options::IngestOptions;
use crate::points::Scan;

/// Messages consumed by the decode thread.
enum IngestRequest {
    Frame(RawFrame),
    Shutdown,
}

/// What happened to a submitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Queued for decoding.
    Queued,
    /// Skipped by frame decimation.
    Decimated,
    /// Dropped because the queue was full or the decode thread is gone.
    Dropped,
}

/// Admits every Nth frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGate {
    every: u32,
    seen: u32,
}

impl FrameGate {
    /// Gate admitting one frame out of `every` (0 is treated as 1).
    #[must_use]
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            seen: 0,
        }
    }

    /// Count a frame and report whether it should be decoded.
    pub fn admit(&mut self) -> bool {
        self.seen += 1;
        if self.seen >= self.every {
            self.seen = 0;
            true
        } else {
            false
        }
    }
}

/// Owns the decode thread and the queue feeding it.
pub struct FrameIngest {
    request_tx: mpsc::SyncSender<IngestRequest>,
    scan_result: triple_buffer::Output<Option<Scan>>,
    gate: FrameGate,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl FrameIngest {
    /// Spawn the decode thread.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidParameter`] for a zero queue capacity,
    /// [`LidarError::ThreadSpawn`] if the thread cannot be created.
    pub fn new(
        decoder: VelodyneDecoder,
        options: &IngestOptions,
    ) -> Result<Self, LidarError> {
        if options.queue_capacity == 0 {
            return Err(LidarError::InvalidParameter(
                "ingest queue capacity must be at least 1".into(),
            ));
        }

        let (request_tx, request_rx) =
            mpsc::sync_channel::<IngestRequest>(options.queue_capacity);
        let (scan_input, scan_output) = triple_buffer::triple_buffer(&None);

        let thread = std::thread::Builder::new()
            .name("lidar-decode".into())
            .spawn(move || {
                Self::thread_loop(&decoder, &request_rx, scan_input);
            })
            .map_err(LidarError::ThreadSpawn)?;

        log::info!(
            "frame ingest started (queue {}, decimation {})",
            options.queue_capacity,
            options.frame_decimation
        );

        Ok(Self {
            request_tx,
            scan_result: scan_output,
            gate: FrameGate::new(options.frame_decimation),
            thread: Some(thread),
        })
    }

    /// Hand a frame to the decoder without blocking.
    pub fn submit(&mut self, frame: RawFrame) -> SubmitOutcome {
        if !self.gate.admit() {
            return SubmitOutcome::Decimated;
        }
        match self.request_tx.try_send(IngestRequest::Frame(frame)) {
            Ok(()) => SubmitOutcome::Queued,
            Err(mpsc::TrySendError::Full(_)) => {
                log::warn!("decode queue full, dropping frame");
                SubmitOutcome::Dropped
            }
            Err(mpsc::TrySendError::Disconnected(_)) => {
                log::warn!("decode thread gone, dropping frame");
                SubmitOutcome::Dropped
            }
        }
    }

    /// Non-blocking check for a newly decoded scan.
    pub fn try_recv_scan(&mut self) -> Option<Scan> {
        let _ = self.scan_result.update();
        self.scan_result.output_buffer().take()
    }

    /// Stop the decode thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = self.request_tx.send(IngestRequest::Shutdown);
            let _ = handle.join();
            log::info!("frame ingest stopped");
        }
    }

    fn thread_loop(
        decoder: &VelodyneDecoder,
        request_rx: &mpsc::Receiver<IngestRequest>,
        mut scan_input: triple_buffer::Input<Option<Scan>>,
    ) {
        while let Ok(request) = request_rx.recv() {
            let frame = match drain_latest(request, request_rx) {
                IngestRequest::Shutdown => break,
                IngestRequest::Frame(frame) => frame,
            };
            match decoder.decode(&frame) {
                Ok(scan) => scan_input.write(Some(scan)),
                Err(e) => log::warn!("skipping frame: {e}"),
            }
        }
    }
}

impl Drop for FrameIngest {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Collapse whatever is queued behind `first` into the newest request.
/// A pending shutdown wins over any frame.
fn drain_latest(
    first: IngestRequest,
    request_rx: &mpsc::Receiver<IngestRequest>,
) -> IngestRequest {
    let mut latest = first;
    let mut skipped = 0_usize;
    while let Ok(next) = request_rx.try_recv() {
        if matches!(next, IngestRequest::Shutdown) {
            return IngestRequest::Shutdown;
        }
        if matches!(latest, IngestRequest::Shutdown) {
            continue;
        }
        latest = next;
        skipped += 1;
    }
    if skipped > 0 {
        log::debug!("decoder behind capture, skipped {skipped} frames");
    }
    latest
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::decoder::frame::AzimuthSample;
    use crate::options::DecoderOptions;

    fn decoder() -> VelodyneDecoder {
        VelodyneDecoder::new(&DecoderOptions::default()).unwrap()
    }

    fn wait_for_scan(ingest: &mut FrameIngest) -> Option<Scan> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(scan) = ingest.try_recv_scan() {
                return Some(scan);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn gate_admits_every_nth_frame() {
        let mut gate = FrameGate::new(3);
        let admitted: Vec<bool> = (0..7).map(|_| gate.admit()).collect();
        assert_eq!(
            admitted,
            vec![false, false, true, false, false, true, false]
        );
    }

    #[test]
    fn gate_zero_behaves_like_one() {
        let mut gate = FrameGate::new(0);
        assert!((0..5).all(|_| gate.admit()));
    }

    #[test]
    fn decoded_scan_reaches_consumer() {
        let mut ingest =
            FrameIngest::new(decoder(), &IngestOptions::default()).unwrap();
        let frame =
            RawFrame::new(vec![AzimuthSample::new(4500).with_channel(2, 2000, 9)]);
        assert_eq!(ingest.submit(frame), SubmitOutcome::Queued);

        let scan = wait_for_scan(&mut ingest).expect("no scan decoded");
        assert_eq!(scan.layer_count(), 32);
        assert_eq!(scan.point_count(), 1);
        assert_eq!(scan.layers[2].points[0].intensity, 9);
        // consumed
        assert!(ingest.try_recv_scan().is_none());
    }

    #[test]
    fn invalid_frames_do_not_stop_the_pipeline() {
        let mut ingest =
            FrameIngest::new(decoder(), &IngestOptions::default()).unwrap();
        let _ = ingest.submit(RawFrame::default());
        let _ = ingest.submit(RawFrame::new(vec![AzimuthSample::new(0)]));
        let scan = wait_for_scan(&mut ingest).expect("no scan decoded");
        assert_eq!(scan.point_count(), 0);
    }

    #[test]
    fn decimated_frames_are_not_queued() {
        let options = IngestOptions {
            frame_decimation: 2,
            ..IngestOptions::default()
        };
        let mut ingest = FrameIngest::new(decoder(), &options).unwrap();
        let frame = RawFrame::new(vec![AzimuthSample::new(0)]);
        assert_eq!(ingest.submit(frame.clone()), SubmitOutcome::Decimated);
        assert_eq!(ingest.submit(frame), SubmitOutcome::Queued);
    }

    #[test]
    fn submit_after_shutdown_drops() {
        let mut ingest =
            FrameIngest::new(decoder(), &IngestOptions::default()).unwrap();
        ingest.shutdown();
        let frame = RawFrame::new(vec![AzimuthSample::new(0)]);
        assert_eq!(ingest.submit(frame), SubmitOutcome::Dropped);
    }

    #[test]
    fn zero_capacity_rejected() {
        let options = IngestOptions {
            queue_capacity: 0,
            ..IngestOptions::default()
        };
        assert!(matches!(
            FrameIngest::new(decoder(), &options),
            Err(LidarError::InvalidParameter(_))
        ));
    }
}

//! Periodic sampling of the foreground application.
//!
//! The sampler owns a background thread that queries the focus detector once
//! per tick and emits a timestamped sample over a bounded channel. No
//! filtering or classification happens here; the raw log stays a faithful,
//! reprocessable record.

use chrono::Utc;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::core::samples::Sample;
use crate::detector::FocusDetector;

/// Label recorded when the detector cannot resolve a foreground application.
/// A failed query still produces a sample; skipping the tick would corrupt
/// gap-duration accounting downstream.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Sleep slice between stop-flag checks; bounds stop latency independently
/// of the sample interval.
const STOP_POLL: Duration = Duration::from_millis(50);

/// Errors that can occur in the sampler lifecycle.
#[derive(Debug)]
pub enum SamplerError {
    AlreadyRunning,
}

impl std::fmt::Display for SamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplerError::AlreadyRunning => write!(f, "Sampler is already running"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Ticks at a fixed period, producing one sample per tick.
pub struct Sampler<D> {
    detector: Arc<D>,
    interval: Duration,
    sender: Sender<Sample>,
    receiver: Receiver<Sample>,
    running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl<D> Sampler<D>
where
    D: FocusDetector + Send + Sync + 'static,
{
    /// Create a sampler that ticks at the given interval.
    pub fn new(detector: D, interval: Duration) -> Self {
        // Bounded so a stalled consumer cannot grow memory without limit
        let (sender, receiver) = bounded(1024);

        Self {
            detector: Arc::new(detector),
            interval,
            sender,
            receiver,
            running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start ticking in a background thread.
    ///
    /// Returns an error if the sampler is already running.
    pub fn start(&mut self) -> Result<(), SamplerError> {
        if self.running.load(Ordering::SeqCst) {
            return Err(SamplerError::AlreadyRunning);
        }

        self.running.store(true, Ordering::SeqCst);

        let detector = self.detector.clone();
        let sender = self.sender.clone();
        let running = self.running.clone();
        let interval = self.interval;

        let handle = thread::spawn(move || {
            run_sampling_loop(detector, sender, running, interval);
        });

        self.thread_handle = Some(handle);
        Ok(())
    }

    /// Stop ticking. No new samples are produced after this returns.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            // The thread exits when running becomes false
            let _ = handle.join();
        }
    }

    /// Check if the sampler is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Get the receiver for emitted samples.
    pub fn receiver(&self) -> &Receiver<Sample> {
        &self.receiver
    }
}

impl<D> Drop for Sampler<D> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_sampling_loop<D: FocusDetector>(
    detector: Arc<D>,
    sender: Sender<Sample>,
    running: Arc<AtomicBool>,
    interval: Duration,
) {
    while running.load(Ordering::SeqCst) {
        let label = match detector.foreground_application() {
            Ok(name) if !name.is_empty() => name,
            Ok(_) | Err(_) => UNKNOWN_LABEL.to_string(),
        };

        if sender.send(Sample::new(Utc::now(), label)).is_err() {
            break;
        }

        sleep_while_running(&running, interval);
    }
}

/// Sleep for the tick interval in small slices so a stop request takes
/// effect promptly even with long intervals.
fn sleep_while_running(running: &AtomicBool, total: Duration) {
    let mut remaining = total;
    while running.load(Ordering::SeqCst) && !remaining.is_zero() {
        let step = remaining.min(STOP_POLL);
        thread::sleep(step);
        remaining -= step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::DetectorError;

    struct FixedDetector(&'static str);

    impl FocusDetector for FixedDetector {
        fn foreground_application(&self) -> Result<String, DetectorError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingDetector;

    impl FocusDetector for FailingDetector {
        fn foreground_application(&self) -> Result<String, DetectorError> {
            Err(DetectorError::NoForegroundApplication)
        }
    }

    #[test]
    fn test_sampler_emits_labelled_samples() {
        let mut sampler = Sampler::new(FixedDetector("Terminal"), Duration::from_millis(10));
        sampler.start().expect("sampler should start");

        let sample = sampler
            .receiver()
            .recv_timeout(Duration::from_secs(5))
            .expect("sampler should produce a sample");
        sampler.stop();

        assert_eq!(sample.label, "Terminal");
    }

    #[test]
    fn test_detector_failure_records_unknown() {
        let mut sampler = Sampler::new(FailingDetector, Duration::from_millis(10));
        sampler.start().expect("sampler should start");

        let sample = sampler
            .receiver()
            .recv_timeout(Duration::from_secs(5))
            .expect("a failed query still produces a sample");
        sampler.stop();

        assert_eq!(sample.label, UNKNOWN_LABEL);
    }

    #[test]
    fn test_double_start_is_an_error() {
        let mut sampler = Sampler::new(FixedDetector("Terminal"), Duration::from_millis(10));
        sampler.start().expect("first start succeeds");

        assert!(matches!(sampler.start(), Err(SamplerError::AlreadyRunning)));
        sampler.stop();
        assert!(!sampler.is_running());
    }
}

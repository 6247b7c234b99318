//! End-to-end tests of the tracking pipeline: detector -> sampler ->
//! sample log -> aggregator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use focus_tally::{
    Aggregation, Aggregator, DetectorError, FocusDetector, Sample, SampleLog, Sampler,
};

/// Cycles through a fixed list of application names, one per tick.
struct ScriptedDetector {
    names: Vec<&'static str>,
    cursor: AtomicUsize,
}

impl ScriptedDetector {
    fn new(names: Vec<&'static str>) -> Self {
        Self {
            names,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl FocusDetector for ScriptedDetector {
    fn foreground_application(&self) -> Result<String, DetectorError> {
        let idx = self.cursor.fetch_add(1, Ordering::SeqCst) % self.names.len();
        Ok(self.names[idx].to_string())
    }
}

#[test]
fn sampled_activity_flows_into_a_summary() {
    let detector = ScriptedDetector::new(vec!["Terminal", "Terminal", "Mail"]);
    let mut sampler = Sampler::new(detector, Duration::from_millis(10));
    sampler.start().expect("sampler should start");

    let receiver = sampler.receiver().clone();
    let mut log = SampleLog::for_window(24);
    while log.len() < 6 {
        let sample = receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("sampler should keep producing");
        log.push(sample);
    }
    sampler.stop();

    let aggregator = Aggregator::new(24, 1, 3, &["loginwindow"]);
    let now = log.last().expect("log is non-empty").timestamp;

    match aggregator.summarize(&log, now) {
        Aggregation::Report(summary) => {
            assert_eq!(
                summary.active_seconds + summary.idle_seconds,
                summary.total_seconds
            );
            let tallied: i64 = summary.entries.iter().map(|e| e.seconds).sum();
            assert_eq!(tallied + summary.idle_seconds, summary.total_seconds);
        }
        Aggregation::Warmup { samples } => {
            panic!("six samples should be past warmup, saw {samples}")
        }
    }
}

#[test]
fn a_synthetic_day_produces_a_ranked_report() {
    let t0 = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let mut log = SampleLog::for_window(24);

    // 1s cadence: ten minutes in the editor, five at the lock screen, five
    // reading mail, then a 50s suspend gap and a final minute in the editor.
    let mut offset = 0;
    for _ in 0..600 {
        log.push(Sample::new(t0 + chrono::Duration::seconds(offset), "Zed"));
        offset += 1;
    }
    for _ in 0..300 {
        log.push(Sample::new(
            t0 + chrono::Duration::seconds(offset),
            "ScreenSaverEngine",
        ));
        offset += 1;
    }
    for _ in 0..300 {
        log.push(Sample::new(t0 + chrono::Duration::seconds(offset), "Mail"));
        offset += 1;
    }
    offset += 50; // suspend: no samples taken, time still elapses
    for _ in 0..60 {
        log.push(Sample::new(t0 + chrono::Duration::seconds(offset), "Zed"));
        offset += 1;
    }

    let aggregator = Aggregator::new(24, 1, 3, &["loginwindow", "ScreenSaverEngine"]);
    let now = log.last().unwrap().timestamp;

    let summary = match aggregator.summarize(&log, now) {
        Aggregation::Report(summary) => summary,
        Aggregation::Warmup { .. } => panic!("a full day of samples is past warmup"),
    };

    // The editor leads the ranking, mail follows.
    assert_eq!(summary.entries[0].label, "Zed");
    assert_eq!(summary.entries[1].label, "Mail");
    assert!(summary.entries[0].seconds > summary.entries[1].seconds);

    // Lock screen plus the suspend gap all land in idle.
    assert!(summary.idle_seconds >= 300 + 50);
    assert_eq!(
        summary.active_seconds + summary.idle_seconds,
        summary.total_seconds
    );
}

//! Session counters for the tracker.
//!
//! Tracks how much the agent observed during the current run. In-memory
//! only; sample data is ephemeral by design and so are these counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for the current session, printed on shutdown.
#[derive(Debug)]
pub struct SessionStats {
    /// Number of samples appended to the log
    samples_recorded: AtomicU64,
    /// Samples where no foreground application could be resolved
    unknown_samples: AtomicU64,
    /// Number of summary redraws
    summaries_rendered: AtomicU64,
    /// Session start time
    session_start: DateTime<Utc>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            samples_recorded: AtomicU64::new(0),
            unknown_samples: AtomicU64::new(0),
            summaries_rendered: AtomicU64::new(0),
            session_start: Utc::now(),
        }
    }

    /// Record an appended sample.
    pub fn record_sample(&self) {
        self.samples_recorded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sample that fell back to the unknown sentinel.
    pub fn record_unknown_sample(&self) {
        self.unknown_samples.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a summary redraw.
    pub fn record_summary_rendered(&self) {
        self.summaries_rendered.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            samples_recorded: self.samples_recorded.load(Ordering::Relaxed),
            unknown_samples: self.unknown_samples.load(Ordering::Relaxed),
            summaries_rendered: self.summaries_rendered.load(Ordering::Relaxed),
            session_start: self.session_start,
            session_duration_secs: (Utc::now() - self.session_start).num_seconds().max(0) as u64,
        }
    }

    /// Get a summary string for display.
    pub fn summary(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "Session statistics:\n\
             - Samples recorded: {}\n\
             - Unknown foreground samples: {}\n\
             - Summaries rendered: {}\n\
             - Session duration: {} seconds",
            snapshot.samples_recorded,
            snapshot.unknown_samples,
            snapshot.summaries_rendered,
            snapshot.session_duration_secs
        )
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of session statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub samples_recorded: u64,
    pub unknown_samples: u64,
    pub summaries_rendered: u64,
    pub session_start: DateTime<Utc>,
    pub session_duration_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counting() {
        let stats = SessionStats::new();

        stats.record_sample();
        stats.record_sample();
        stats.record_unknown_sample();
        stats.record_summary_rendered();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.samples_recorded, 2);
        assert_eq!(snapshot.unknown_samples, 1);
        assert_eq!(snapshot.summaries_rendered, 1);
    }

    #[test]
    fn test_summary_format() {
        let stats = SessionStats::new();
        let summary = stats.summary();

        assert!(summary.contains("Samples recorded"));
        assert!(summary.contains("Summaries rendered"));
        assert!(summary.contains("Session duration"));
    }
}

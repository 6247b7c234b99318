//! The rolling sample log.
//!
//! Samples are appended by the run loop as the sampler emits them and
//! evicted once they age past the summary window plus a safety margin, so
//! memory stays bounded no matter how long the tracker runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Extra retention past the summary window. Eviction must never race the
/// window cutoff, so samples linger slightly before being dropped.
const RETENTION_MARGIN_HOURS: i64 = 1;

/// A single foreground-focus observation.
///
/// Immutable once recorded; classification is deferred to aggregation so the
/// raw log stays a faithful, reprocessable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// When the observation was taken
    pub timestamp: DateTime<Utc>,
    /// Name of the application holding focus, or the `"unknown"` sentinel
    pub label: String,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, label: impl Into<String>) -> Self {
        Self {
            timestamp,
            label: label.into(),
        }
    }
}

/// Ordered log of samples with time-based eviction.
///
/// Insertion order is capture order; capture time is monotonically
/// non-decreasing by construction since sampling is serial, and only one
/// writer ever appends.
#[derive(Debug)]
pub struct SampleLog {
    samples: VecDeque<Sample>,
    retention: Duration,
}

impl SampleLog {
    /// Create a log that retains samples for the given horizon.
    pub fn new(retention: Duration) -> Self {
        Self {
            samples: VecDeque::new(),
            retention,
        }
    }

    /// Create a log sized for a summary window of the given length.
    pub fn for_window(window_hours: u64) -> Self {
        Self::new(Duration::hours(window_hours as i64 + RETENTION_MARGIN_HOURS))
    }

    /// Append a sample.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
    }

    /// Drop samples that have aged past the retention horizon.
    pub fn evict_expired(&mut self, now: DateTime<Utc>) {
        while let Some(front) = self.samples.front() {
            if now - front.timestamp > self.retention {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Oldest retained sample.
    pub fn first(&self) -> Option<&Sample> {
        self.samples.front()
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_push_preserves_order() {
        let mut log = SampleLog::for_window(24);
        log.push(Sample::new(ts(100), "Terminal"));
        log.push(Sample::new(ts(101), "Mail"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.first().unwrap().label, "Terminal");
        assert_eq!(log.last().unwrap().label, "Mail");
    }

    #[test]
    fn test_eviction_drops_only_expired_samples() {
        let mut log = SampleLog::new(Duration::seconds(60));
        log.push(Sample::new(ts(0), "Old"));
        log.push(Sample::new(ts(50), "Kept"));
        log.push(Sample::new(ts(100), "Kept"));

        log.evict_expired(ts(100));

        assert_eq!(log.len(), 2);
        assert_eq!(log.first().unwrap().timestamp, ts(50));
    }

    #[test]
    fn test_window_sized_log_keeps_a_full_window() {
        let mut log = SampleLog::for_window(24);
        log.push(Sample::new(ts(0), "Terminal"));

        // Still inside the 24h window, so eviction must not touch it.
        log.evict_expired(ts(24 * 3600 - 1));
        assert_eq!(log.len(), 1);

        // Past the window plus margin, it goes.
        log.evict_expired(ts(26 * 3600));
        assert!(log.is_empty());
    }
}

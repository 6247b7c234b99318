//! Windowed aggregation of the sample log into an activity summary.
//!
//! Aggregation is a pure function of `(log, now)`: every pass re-derives the
//! summary from scratch, so the result always reflects exactly the trailing
//! window with no drift. The only state crossing calls is the log itself.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::core::samples::{Sample, SampleLog};

/// Reserved tally label for time not spent at the computer.
pub const IDLE_LABEL: &str = "idle";

/// Below this many samples there is nothing meaningful to report.
const MIN_SAMPLES: usize = 3;

/// One ranked entry of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub label: String,
    /// Accumulated foreground time within the window
    pub seconds: i64,
    /// Share of active time, rounded to a whole percent
    pub percent: u32,
}

/// Windowed activity totals plus the per-application ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Non-idle labels, longest first; ties resolve alphabetically
    pub entries: Vec<ActivityEntry>,
    /// Time spent at the computer
    pub active_seconds: i64,
    /// Time at a lock screen or in a sampling gap
    pub idle_seconds: i64,
    /// active_seconds + idle_seconds, always
    pub total_seconds: i64,
    /// Timestamp of the earliest in-window sample
    pub window_start: DateTime<Utc>,
    /// Timestamp of the latest sample
    pub window_end: DateTime<Utc>,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregation {
    /// Not enough samples yet to say anything; renderers display this
    /// distinctly rather than a zeroed summary
    Warmup { samples: usize },
    Report(Summary),
}

/// Stateless summarizer over the sample log.
#[derive(Debug, Clone)]
pub struct Aggregator {
    window: Duration,
    /// Interval durations above this count as idle (sleep, suspend, or the
    /// sampler simply not running)
    idle_gap_threshold_secs: i64,
    /// Labels always classified idle regardless of duration
    idle_labels: HashSet<String>,
}

impl Aggregator {
    /// Create an aggregator.
    ///
    /// The idle-gap threshold is `sample_interval + slack`: the sampler's
    /// period and this threshold are configured together, never independently.
    pub fn new<S: AsRef<str>>(
        window_hours: u64,
        sample_interval_secs: u64,
        idle_gap_slack_secs: u64,
        idle_labels: &[S],
    ) -> Self {
        Self {
            window: Duration::hours(window_hours as i64),
            idle_gap_threshold_secs: (sample_interval_secs + idle_gap_slack_secs) as i64,
            idle_labels: idle_labels
                .iter()
                .map(|l| l.as_ref().to_string())
                .collect(),
        }
    }

    /// Create an aggregator from the tracker configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            config.window_hours,
            config.sample_interval.as_secs(),
            config.idle_gap_slack.as_secs(),
            &config.idle_labels,
        )
    }

    /// Summarize the trailing window of the log as of `now`.
    pub fn summarize(&self, log: &SampleLog, now: DateTime<Utc>) -> Aggregation {
        if log.len() < MIN_SAMPLES {
            return Aggregation::Warmup { samples: log.len() };
        }

        // Everything older than the earliest in-window sample is excluded
        // from this pass; eviction reclaims it separately.
        let start = match log.iter().position(|s| now - s.timestamp < self.window) {
            Some(idx) => idx,
            None => return Aggregation::Warmup { samples: 0 },
        };
        let window: Vec<&Sample> = log.iter().skip(start).collect();
        if window.len() < 2 {
            // A window without a complete interval is still warming up.
            return Aggregation::Warmup {
                samples: window.len(),
            };
        }

        let first = window[0];
        let last = window[window.len() - 1];
        // Clock jumps can make this negative; clamp rather than underflow.
        let total_seconds = (last.timestamp - first.timestamp).num_seconds().max(0);

        // Each interval belongs to whoever was active at its start.
        let mut tally: HashMap<&str, i64> = HashMap::new();
        for pair in window.windows(2) {
            let duration = (pair[1].timestamp - pair[0].timestamp)
                .num_seconds()
                .max(0);
            let label = self.classify(&pair[0].label, duration);
            *tally.entry(label).or_insert(0) += duration;
        }

        let idle_seconds = tally.get(IDLE_LABEL).copied().unwrap_or(0);
        let active_seconds = (total_seconds - idle_seconds).max(0);

        let mut entries: Vec<ActivityEntry> = tally
            .into_iter()
            .filter(|(label, _)| *label != IDLE_LABEL)
            .map(|(label, seconds)| ActivityEntry {
                label: label.to_string(),
                seconds,
                percent: percent_of(seconds, active_seconds),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.seconds
                .cmp(&a.seconds)
                .then_with(|| a.label.cmp(&b.label))
        });
        if active_seconds == 0 {
            entries.clear();
        }

        Aggregation::Report(Summary {
            entries,
            active_seconds,
            idle_seconds,
            total_seconds,
            window_start: first.timestamp,
            window_end: last.timestamp,
        })
    }

    /// Idle if the label is a configured sentinel (screen lock, login screen)
    /// or the gap is longer than one tick plus slack (sleep, suspend, sampler
    /// not running).
    fn classify<'a>(&self, label: &'a str, duration_secs: i64) -> &'a str {
        if self.idle_labels.contains(label) || duration_secs > self.idle_gap_threshold_secs {
            IDLE_LABEL
        } else {
            label
        }
    }
}

fn percent_of(seconds: i64, active_seconds: i64) -> u32 {
    if active_seconds <= 0 {
        return 0;
    }
    ((seconds * 100) as f64 / active_seconds as f64).round() as u32
}

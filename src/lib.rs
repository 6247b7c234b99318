//! Focus Tally - a live terminal summary of where your foreground time goes.
//!
//! The tracker samples the frontmost application once per tick, keeps the
//! observations in a rolling in-memory log, and continuously re-derives a
//! ranked summary of the trailing 24 hours, splitting the window into active
//! time and idle time. Nothing is written to disk; kill the process and the
//! history is gone.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Focus Tally                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐        │
//! │  │  Detector   │──▶│   Sampler   │──▶│ Sample log  │        │
//! │  │ (per-OS)    │   │  (1s tick)  │   │  (rolling)  │        │
//! │  └─────────────┘   └─────────────┘   └──────┬──────┘        │
//! │                                             ▼               │
//! │                    ┌─────────────┐   ┌─────────────┐        │
//! │                    │  Renderer   │◀──│ Aggregator  │        │
//! │                    │   (ANSI)    │   │ (24h window)│        │
//! │                    └─────────────┘   └─────────────┘        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use focus_tally::{detector::Detector, Sampler};
//!
//! let mut sampler = Sampler::new(Detector::new(), Duration::from_secs(1));
//! sampler.start().expect("Failed to start sampler");
//!
//! // Samples can be received from sampler.receiver()
//! ```

pub mod config;
pub mod core;
pub mod detector;
pub mod render;
pub mod sampler;
pub mod stats;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError};
pub use core::{ActivityEntry, Aggregation, Aggregator, Sample, SampleLog, Summary, IDLE_LABEL};
pub use detector::{Detector, DetectorError, FocusDetector};
pub use sampler::{Sampler, SamplerError, UNKNOWN_LABEL};
pub use stats::{SessionStats, StatsSnapshot};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

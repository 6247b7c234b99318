//! Core sampling-and-aggregation engine.
//!
//! This module contains:
//! - The rolling sample log with bounded retention
//! - Windowed aggregation and idle classification

pub mod aggregate;
pub mod samples;

// Re-export commonly used types
pub use aggregate::{ActivityEntry, Aggregation, Aggregator, Summary, IDLE_LABEL};
pub use samples::{Sample, SampleLog};

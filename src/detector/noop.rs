//! Fallback (noop) focus detection.
//!
//! This exists so the crate (and binary) can compile on platforms without a
//! foreground-window query. Every tick resolves to the unknown sentinel via
//! the sampler's error handling.

use crate::detector::types::{DetectorError, FocusDetector};

/// A detector that never resolves a foreground application.
pub struct NoopDetector;

impl NoopDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusDetector for NoopDetector {
    fn foreground_application(&self) -> Result<String, DetectorError> {
        Err(DetectorError::Unsupported)
    }
}

//! Platform-neutral focus-detector interface.

use std::fmt;

/// Query for the application currently holding user focus.
///
/// Implementations must return quickly and be safe to call once per sampler
/// tick indefinitely.
pub trait FocusDetector {
    /// Name of the frontmost application at this instant.
    fn foreground_application(&self) -> Result<String, DetectorError>;
}

/// Errors from the platform focus query.
#[derive(Debug)]
pub enum DetectorError {
    /// No application could be resolved (login and lock transitions)
    NoForegroundApplication,
    /// The platform query itself failed
    QueryFailed(String),
    /// Focus detection is not implemented for this platform
    Unsupported,
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorError::NoForegroundApplication => {
                write!(f, "No foreground application could be resolved")
            }
            DetectorError::QueryFailed(e) => write!(f, "Foreground query failed: {e}"),
            DetectorError::Unsupported => {
                write!(f, "Focus detection is not supported on this platform")
            }
        }
    }
}

impl std::error::Error for DetectorError {}

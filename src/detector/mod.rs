//! Foreground-application detection.
//!
//! This module provides platform-specific implementations of the focus
//! query: "which application is frontmost right now". The core treats the
//! answer as an opaque string.

pub mod types;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub mod noop;

// Re-export commonly used types
pub use types::{DetectorError, FocusDetector};

#[cfg(target_os = "macos")]
pub use macos::MacOSDetector;

/// Platform-agnostic detector type alias
#[cfg(target_os = "macos")]
pub type Detector = MacOSDetector;

#[cfg(target_os = "windows")]
pub use windows::WindowsDetector;

/// Platform-agnostic detector type alias
#[cfg(target_os = "windows")]
pub type Detector = WindowsDetector;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub use noop::NoopDetector;

/// Platform-agnostic detector type alias
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub type Detector = NoopDetector;

//! macOS focus detection via the CoreGraphics window list.
//!
//! The on-screen window list is ordered front to back, so the owner of the
//! first normal-layer window is the frontmost application. Screen lock and
//! the login screen surface as their own owner names ("ScreenSaverEngine",
//! "loginwindow"), which the aggregator treats as idle sentinels.

use core_foundation::base::{CFType, TCFType};
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::number::CFNumber;
use core_foundation::string::CFString;
use core_graphics::window::{
    copy_window_info, kCGNullWindowID, kCGWindowListExcludeDesktopElements,
    kCGWindowListOptionOnScreenOnly,
};

use crate::detector::types::{DetectorError, FocusDetector};

/// Normal windows sit at layer 0; higher layers are overlays and system UI.
const NORMAL_WINDOW_LAYER: i64 = 0;

/// The macOS focus detector.
pub struct MacOSDetector;

impl MacOSDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacOSDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusDetector for MacOSDetector {
    fn foreground_application(&self) -> Result<String, DetectorError> {
        let windows = copy_window_info(
            kCGWindowListOptionOnScreenOnly | kCGWindowListExcludeDesktopElements,
            kCGNullWindowID,
        )
        .ok_or_else(|| {
            DetectorError::QueryFailed("CGWindowListCopyWindowInfo returned null".to_string())
        })?;

        for item in windows.iter() {
            let info: CFDictionary<CFString, CFType> =
                unsafe { CFDictionary::wrap_under_get_rule(*item as CFDictionaryRef) };

            if dict_number(&info, "kCGWindowLayer") != Some(NORMAL_WINDOW_LAYER) {
                continue;
            }
            if let Some(owner) = dict_string(&info, "kCGWindowOwnerName") {
                if !owner.is_empty() {
                    return Ok(owner);
                }
            }
        }

        Err(DetectorError::NoForegroundApplication)
    }
}

fn dict_string(info: &CFDictionary<CFString, CFType>, key: &str) -> Option<String> {
    info.find(CFString::new(key))
        .and_then(|value| value.downcast::<CFString>())
        .map(|s| s.to_string())
}

fn dict_number(info: &CFDictionary<CFString, CFType>, key: &str) -> Option<i64> {
    info.find(CFString::new(key))
        .and_then(|value| value.downcast::<CFNumber>())
        .and_then(|n| n.to_i64())
}

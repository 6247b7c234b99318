//! Windows focus detection via the Win32 foreground window.
//!
//! Resolves the foreground window to its owning process image name, e.g.
//! "firefox.exe". The lock screen surfaces as "LockApp.exe", which the
//! aggregator treats as an idle sentinel.

use windows::core::PWSTR;
use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32,
    PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows::Win32::UI::WindowsAndMessaging::{GetForegroundWindow, GetWindowThreadProcessId};

use crate::detector::types::{DetectorError, FocusDetector};

/// The Windows focus detector.
pub struct WindowsDetector;

impl WindowsDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusDetector for WindowsDetector {
    fn foreground_application(&self) -> Result<String, DetectorError> {
        unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.0.is_null() {
                // Nothing holds focus during login and lock transitions.
                return Err(DetectorError::NoForegroundApplication);
            }

            let mut pid = 0u32;
            GetWindowThreadProcessId(hwnd, Some(&mut pid));
            if pid == 0 {
                return Err(DetectorError::NoForegroundApplication);
            }

            let process = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid)
                .map_err(|e| DetectorError::QueryFailed(e.to_string()))?;

            let mut buf = [0u16; 1024];
            let mut len = buf.len() as u32;
            let result = QueryFullProcessImageNameW(
                process,
                PROCESS_NAME_WIN32,
                PWSTR(buf.as_mut_ptr()),
                &mut len,
            );
            let _ = CloseHandle(process);
            result.map_err(|e| DetectorError::QueryFailed(e.to_string()))?;

            let path = String::from_utf16_lossy(&buf[..len as usize]);
            let name = path
                .rsplit(['\\', '/'])
                .next()
                .unwrap_or(path.as_str())
                .to_string();
            if name.is_empty() {
                return Err(DetectorError::NoForegroundApplication);
            }
            Ok(name)
        }
    }
}

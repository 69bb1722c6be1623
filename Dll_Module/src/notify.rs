use std::ffi::{c_int, CStr};

/// Caption of every box the module shows.
pub const CAPTION: &CStr = c"Message Box Module!";

/// Returned once the user dismissed the box (`IDOK`).
pub const ACKNOWLEDGED: c_int = 1;

pub trait Notifier {
    /// Shows one notification. Returns [`ACKNOWLEDGED`], or `0` on failure.
    fn notify(&self, caption: &CStr, text: &CStr) -> c_int;
}

/// `MessageBoxA` on Windows, a line on stderr everywhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformNotifier;

#[cfg(windows)]
impl Notifier for PlatformNotifier {
    fn notify(&self, caption: &CStr, text: &CStr) -> c_int {
        use winapi::shared::windef::HWND;
        use winapi::um::winuser::{MessageBoxA, MB_OK};

        unsafe { MessageBoxA(0 as HWND, text.as_ptr(), caption.as_ptr(), MB_OK) }
    }
}

#[cfg(not(windows))]
impl Notifier for PlatformNotifier {
    fn notify(&self, caption: &CStr, text: &CStr) -> c_int {
        use std::io::Write;

        let mut stderr = std::io::stderr().lock();
        match writeln!(stderr, "[{}] {}", caption.to_string_lossy(), text.to_string_lossy()) {
            Ok(()) => ACKNOWLEDGED,
            Err(_) => 0,
        }
    }
}

//! A loadable module exporting a single C function, `DisplayMessageBox`.

#[cfg(windows)]
mod dllmain;
mod notify;

use std::ffi::{c_char, c_int, CStr};

pub use notify::{Notifier, PlatformNotifier, ACKNOWLEDGED, CAPTION};

/// Shows `text` under the module's caption. Exactly one notification per call.
pub fn display_message<N: Notifier + ?Sized>(notifier: &N, text: &CStr) -> c_int {
    notifier.notify(CAPTION, text)
}

/// # Safety
///
/// `message` must be null or point to a NUL-terminated string that stays
/// alive for the returned lifetime.
unsafe fn message_text<'a>(message: *const c_char) -> &'a CStr {
    if message.is_null() {
        c""
    } else {
        CStr::from_ptr(message)
    }
}

/// Displays `message` in a message box and returns the box's result:
/// [`ACKNOWLEDGED`] once dismissed, `0` if it could not be shown.
///
/// # Safety
///
/// `message` must be null or point to a NUL-terminated string.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn DisplayMessageBox(message: *mut c_char) -> c_int {
    display_message(&PlatformNotifier, message_text(message))
}

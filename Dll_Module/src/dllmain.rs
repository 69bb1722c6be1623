use winapi::shared::minwindef::{BOOL, DWORD, HINSTANCE, LPVOID, TRUE};

/// Loader notifications: `DLL_PROCESS_ATTACH`, `DLL_THREAD_ATTACH`,
/// `DLL_THREAD_DETACH` and `DLL_PROCESS_DETACH`. The module keeps no state, so
/// each one is a no-op that reports success.
#[no_mangle]
#[allow(non_snake_case)]
extern "system" fn DllMain(_dll_module: HINSTANCE, _call_reason: DWORD, _: LPVOID) -> BOOL {
    TRUE
}

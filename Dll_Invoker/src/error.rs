use std::ffi::NulError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("usage: invoker <library-path> <exported-symbol-name> <argument-string>")]
    Usage(#[source] clap::Error),

    #[error("argument contains an interior NUL byte")]
    InvalidArgument(#[source] NulError),

    #[error("Failed to load DLL: {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: libloading::Error,
    },

    #[error("Failed to find function: {symbol}: {source}")]
    SymbolNotFound {
        symbol: String,
        source: libloading::Error,
    },

    #[error("Failed to release DLL: {}: {source}", .path.display())]
    Unload {
        path: PathBuf,
        source: libloading::Error,
    },
}

impl Error {
    /// Process exit code for this failure. Every failure is fatal.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Usage errors are reported through the exit code alone.
    pub fn is_silent(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}

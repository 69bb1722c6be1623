//! Loads a dynamic library, resolves one export by name and calls it with a
//! single text argument.
//!
//! The export is assumed to be a C function `int f(char *)`. That assumption
//! cannot be checked at runtime, so every entry point that relies on it is
//! `unsafe` and named `*_unchecked`.

mod buffer;
mod error;
mod library;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, warn};

pub use buffer::TextBuffer;
pub use error::Error;
pub use library::{Export, Library, TextEntryPoint};

/// The three positional inputs of one invocation.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "invoker", version, about, long_about = None)]
pub struct Invocation {
    /// Path to the dll
    #[arg(allow_hyphen_values = true)]
    pub library: PathBuf,

    /// Exported function to call
    #[arg(allow_hyphen_values = true)]
    pub symbol: String,

    /// Text passed to the function
    #[arg(allow_hyphen_values = true)]
    pub argument: OsString,

    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

impl Invocation {
    pub fn new(library: impl Into<PathBuf>, symbol: impl Into<String>, argument: impl Into<OsString>) -> Self {
        Invocation {
            library: library.into(),
            symbol: symbol.into(),
            argument: argument.into(),
            ignored: Vec::new(),
        }
    }

    /// Parses a full argument vector, program name first. Anything after the
    /// third positional is ignored.
    pub fn from_args<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Invocation::try_parse_from(args).map_err(Error::Usage)
    }
}

/// Load, resolve, call, release. Returns whatever the export returned.
///
/// The library is released on both outcomes before this returns. A failed
/// release is logged and never replaces the call's outcome.
///
/// # Safety
///
/// `invocation.symbol` must name a function with the [`TextEntryPoint`]
/// signature, and the library's initialisation code must be trusted.
pub unsafe fn run(invocation: &Invocation) -> Result<i32, Error> {
    let mut argument = TextBuffer::new(&invocation.argument)?;
    let library = Library::load(&invocation.library)?;

    let outcome = invoke(&library, &invocation.symbol, &mut argument);
    settle(outcome, library.close())
}

fn settle(outcome: Result<i32, Error>, released: Result<(), Error>) -> Result<i32, Error> {
    if let Err(err) = released {
        warn!("{}", err);
    }
    outcome
}

unsafe fn invoke(library: &Library, symbol: &str, argument: &mut TextBuffer) -> Result<i32, Error> {
    let export = library.resolve_unchecked(symbol)?;
    let result = export.call_unchecked(argument);
    debug!("{} returned {}", export.name(), result);
    Ok(result)
}

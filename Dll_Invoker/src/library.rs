use std::ffi::{c_char, c_int};
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Error, TextBuffer};

/// Signature every resolved export is assumed to have. Nothing checks it.
pub type TextEntryPoint = unsafe extern "C" fn(*mut c_char) -> c_int;

/// A dynamic library mapped into the process.
#[derive(Debug)]
pub struct Library {
    path: PathBuf,
    inner: libloading::Library,
}

impl Library {
    /// Maps the library at `path` into the process.
    ///
    /// # Safety
    ///
    /// Loading runs the library's initialisation routines (`DllMain`,
    /// constructors). The caller trusts whatever code they contain.
    pub unsafe fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("Loading {}", path.display());

        let inner = libloading::Library::new(path).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Library {
            path: path.to_path_buf(),
            inner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up `symbol` and treats it as a [`TextEntryPoint`] without any
    /// way of verifying that it is one.
    pub fn resolve_unchecked(&self, symbol: &str) -> Result<Export<'_>, Error> {
        debug!("Resolving {} in {}", symbol, self.path.display());

        // Safety: the cast itself is harmless; calling through it is what
        // `Export::call_unchecked` makes the caller vouch for.
        let entry = unsafe { self.inner.get::<TextEntryPoint>(symbol.as_bytes()) }.map_err(
            |source| Error::SymbolNotFound {
                symbol: symbol.to_owned(),
                source,
            },
        )?;

        Ok(Export {
            name: symbol.to_owned(),
            entry,
        })
    }

    /// Unmaps the library. Exports borrowed from it must be gone by now,
    /// which the borrow checker already guarantees.
    pub fn close(self) -> Result<(), Error> {
        debug!("Releasing {}", self.path.display());

        let Library { path, inner } = self;
        inner.close().map_err(|source| Error::Unload { path, source })
    }
}

/// An export resolved from a [`Library`], valid only while the library is.
pub struct Export<'lib> {
    name: String,
    entry: libloading::Symbol<'lib, TextEntryPoint>,
}

impl Export<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the export on the current thread and returns its integer result.
    ///
    /// # Safety
    ///
    /// The export must really be a C-ABI function taking one `char *` and
    /// returning an `int`. Any other signature is undefined behaviour.
    pub unsafe fn call_unchecked(&self, argument: &mut TextBuffer) -> i32 {
        debug!("Calling {}", self.name);

        let entry: TextEntryPoint = *self.entry;
        entry(argument.as_mut_ptr())
    }
}

impl std::fmt::Debug for Export<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Export").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn missing_library_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.dll");

        match unsafe { Library::load(&path) } {
            Err(Error::Load { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a load error, got {:?}", other),
        }
    }

    #[test]
    fn garbage_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.dll");
        std::fs::write(&path, b"this is not a dynamic library").unwrap();

        assert!(matches!(unsafe { Library::load(&path) }, Err(Error::Load { .. })));
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    const LIBC: &str = "libc.so.6";

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn unknown_export_is_a_symbol_error() {
        let library = unsafe { Library::load(LIBC) }.unwrap();

        match library.resolve_unchecked("NoSuchFunction") {
            Err(Error::SymbolNotFound { symbol, .. }) => assert_eq!(symbol, "NoSuchFunction"),
            other => panic!("expected a symbol error, got {:?}", other),
        }

        library.close().unwrap();
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn calls_an_export_with_a_matching_signature() {
        let library = unsafe { Library::load(LIBC) }.unwrap();
        assert_eq!(library.path(), Path::new(LIBC));

        let mut argument = TextBuffer::new(OsStr::new("1234")).unwrap();
        {
            let atoi = library.resolve_unchecked("atoi").unwrap();
            assert_eq!(atoi.name(), "atoi");
            assert_eq!(unsafe { atoi.call_unchecked(&mut argument) }, 1234);
        }

        library.close().unwrap();
    }
}

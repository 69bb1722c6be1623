use std::ffi::{c_char, CString, OsStr};

use crate::Error;

/// Owned, mutable, NUL-terminated copy of the text handed to the callee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer(Vec<u8>);

impl TextBuffer {
    pub fn new(text: &OsStr) -> Result<Self, Error> {
        #[cfg(unix)]
        let bytes = {
            use std::os::unix::ffi::OsStrExt;
            text.as_bytes().to_vec()
        };
        #[cfg(not(unix))]
        let bytes = text.to_string_lossy().into_owned().into_bytes();

        let text = CString::new(bytes).map_err(Error::InvalidArgument)?;
        Ok(TextBuffer(text.into_bytes_with_nul()))
    }

    /// The text without its terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..self.0.len() - 1]
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_char {
        self.0.as_mut_ptr().cast()
    }
}

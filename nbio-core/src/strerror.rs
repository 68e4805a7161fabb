//! Lookup of human-readable text for OS failure codes

use alloc::vec::Vec;

/// Size of the stack buffer handed to `strerror_r`.
///
/// glibc's longest message is well under this.
pub const STRERROR_BUF_LEN: usize = 256;

/// Source of human-readable text for a numeric OS failure code.
///
/// Returning `None` is a valid outcome: callers fall back to a fixed
/// message that still carries the code.
pub trait StrerrorLookup {
    /// Look up the raw message bytes for `code`.
    fn lookup(&self, code: i32) -> Option<Vec<u8>>;
}

impl<F> StrerrorLookup for F
where
    F: Fn(i32) -> Option<Vec<u8>>,
{
    fn lookup(&self, code: i32) -> Option<Vec<u8>> {
        self(code)
    }
}

/// The operating system's own error-string table.
///
/// Backed by the XSI `strerror_r` on unix targets when the `libc` feature is
/// enabled. Everywhere else every lookup yields `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemStrerror;

impl StrerrorLookup for SystemStrerror {
    #[cfg(all(feature = "libc", unix))]
    fn lookup(&self, code: i32) -> Option<Vec<u8>> {
        let mut buf = [0 as libc::c_char; STRERROR_BUF_LEN];

        // SAFETY: `buf` is valid for writes of `buf.len()` bytes and outlives the call.
        let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
        if rc != 0 {
            // EINVAL for codes the table doesn't know, ERANGE for truncation
            return None;
        }

        // SAFETY: on success strerror_r leaves a NUL-terminated string in `buf`.
        let text = unsafe { core::ffi::CStr::from_ptr(buf.as_ptr()) };
        let bytes = text.to_bytes();
        if bytes.is_empty() {
            None
        } else {
            Some(bytes.to_vec())
        }
    }

    #[cfg(not(all(feature = "libc", unix)))]
    fn lookup(&self, _code: i32) -> Option<Vec<u8>> {
        None
    }
}

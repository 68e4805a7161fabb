//! OS failure values
//!
//! An [`IoError`] records that a system call failed with a given code. The
//! explanation is either supplied up front or derived from the name of the
//! failing function when the error is rendered.

use alloc::{format, string::String};
use core::fmt;

use crate::strerror::{StrerrorLookup, SystemStrerror};

/// Explanation attached to an [`IoError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// Caller-supplied text, rendered verbatim
    Text(String),
    /// Name of the failing function; the message is built on demand
    Function(&'static str),
}

/// An operating-system failure code together with its explanation
///
/// Construction never fails and does no string work for
/// [`IoError::from_function`], so that constructor is the one to reach for on
/// hot failure paths.
#[derive(Debug, Clone)]
pub struct IoError {
    code: i32,
    reason: Reason,
}

impl IoError {
    /// Create an error whose description is exactly `text`.
    pub fn from_text(code: i32, text: impl Into<String>) -> Self {
        Self {
            code,
            reason: Reason::Text(text.into()),
        }
    }

    /// Create an error that names the failing function.
    ///
    /// The OS message for `code` is looked up only when the error is described.
    pub const fn from_function(code: i32, function: &'static str) -> Self {
        Self {
            code,
            reason: Reason::Function(function),
        }
    }

    /// Capture the calling thread's current `errno` for `function`.
    #[cfg(feature = "std")]
    pub fn last_os_error(function: &'static str) -> Self {
        let code = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
        Self::from_function(code, function)
    }

    /// The OS failure code
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// The explanation as supplied at construction
    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    /// Render the error using the operating system's message table.
    pub fn describe(&self) -> String {
        self.describe_with(&SystemStrerror)
    }

    /// Render the error, resolving deferred messages through `lookup`.
    ///
    /// Text reasons are returned as-is and never touch `lookup`.
    pub fn describe_with<L>(&self, lookup: &L) -> String
    where
        L: StrerrorLookup + ?Sized,
    {
        match &self.reason {
            Reason::Text(text) => text.clone(),
            Reason::Function(function) => match lookup.lookup(self.code) {
                Some(bytes) => format!(
                    "{function} failed: {} (errno: {}) ",
                    String::from_utf8_lossy(&bytes),
                    self.code
                ),
                None => format!(
                    "{function} failed: Broken strerror, unknown error: {}",
                    self.code
                ),
            },
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Reason::Text(text) => f.write_str(text),
            Reason::Function(_) => f.write_str(&self.describe()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IoError {}

#[cfg(feature = "std")]
impl From<IoError> for std::io::Error {
    fn from(err: IoError) -> Self {
        let kind = std::io::Error::from_raw_os_error(err.code).kind();
        std::io::Error::new(kind, err)
    }
}

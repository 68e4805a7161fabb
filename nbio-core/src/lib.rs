//! Failure values and would-block outcomes for non-blocking I/O
//!
//! A non-blocking system call ends in one of three ways: it fails, it would
//! have had to block, or it makes progress. This crate gives the first case a
//! value type, [`IoError`], and folds the other two into [`IoOutcome`], so a
//! call site can return `Result<IoOutcome<T>, IoError>` and let its caller
//! branch on each case with an exhaustive match.
//!
//! # Example
//!
//! ```rust
//! use nbio_core::{IoError, IoOutcome};
//!
//! fn classify(ret: isize, errno: i32) -> Result<IoOutcome<usize>, IoError> {
//!     const EAGAIN: i32 = 11;
//!     match ret {
//!         n if n >= 0 => Ok(IoOutcome::completed(n as usize)),
//!         _ if errno == EAGAIN => Ok(IoOutcome::would_block(0)),
//!         _ => Err(IoError::from_function(errno, "read")),
//!     }
//! }
//!
//! assert_eq!(classify(42, 0).unwrap(), IoOutcome::completed(42));
//! assert!(classify(-1, 11).unwrap().is_would_block());
//!
//! let err = classify(-1, 9).unwrap_err();
//! assert_eq!(err.code(), 9);
//! assert!(err.to_string().starts_with("read failed: "));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod outcome;
pub mod strerror;

pub use error::{IoError, Reason};
pub use outcome::IoOutcome;
pub use strerror::{StrerrorLookup, SystemStrerror};

/// Result of a non-blocking operation that may fail, block, or complete
pub type Result<T> = core::result::Result<IoOutcome<T>, IoError>;

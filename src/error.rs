//! Error types used across the crate.
//!
//! Structural problems in the binary input (truncated streams, invalid headers, table spans
//! that run past the end of their stream) are reported through [`Error`] and propagate to the
//! top-level read call. Cross-reference lookups that simply find nothing are represented as
//! `Option::None` by the respective APIs and never turn into an [`Error`].

use thiserror::Error;

use crate::metadata::{tables::TableId, token::Token};

/// Helper macro for creating [`crate::Error::Malformed`] errors with source location.
///
/// The file and line of the call site are captured automatically.
macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// Helper macro for [`crate::Error::OutOfBounds`], kept as a macro so call sites read the same
/// way as [`malformed_error!`].
macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic error type of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is structurally invalid.
    ///
    /// Carries a description plus the source location where the problem was detected,
    /// which makes tracking down parser issues on odd samples a lot easier.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// Description of the problem
        message: String,
        /// Source file that raised the error
        file: &'static str,
        /// Source line that raised the error
        line: u32,
    },

    /// A read or write would have gone past the end of the underlying buffer.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// The input uses a feature that is not supported.
    #[error("This file type is not supported")]
    NotSupported,

    /// The provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// Wrapper around I/O errors from opening or mapping files.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Wrapper around errors reported by the PE parser.
    #[error("{0}")]
    GoblinErr(#[from] goblin::error::Error),

    /// A mutation was attempted on a stream that has been locked.
    #[error("Table {0:?} belongs to a read-only stream and is not writable")]
    NotWritable(TableId),

    /// A token was handed to a coded index kind that can not represent its table.
    #[error("Token {token} can not be encoded as {coded_index}")]
    CodedIndexMismatch {
        /// The token that was supposed to be encoded
        token: Token,
        /// Name of the coded index kind
        coded_index: &'static str,
    },

    /// The requested table is not part of the stream.
    #[error("Table {0:?} is not present")]
    TableMissing(TableId),

    /// A token could not be resolved to a member of the image.
    #[error("Failed to resolve member - {0}")]
    MemberNotFound(Token),

    /// Failed to acquire a lock on shared state.
    #[error("Failed to lock target")]
    LockError,
}

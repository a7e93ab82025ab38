//! Error handling for the spb library.
//!
//! Every error a caller can see is defined here. Configuration problems are
//! reported once, when the bar is built, with the offending option, its value
//! and what was expected. Rendering can only fail when the output stream does.

use std::io;
use thiserror::Error;

/// Errors that can happen when using spb.
#[derive(Error, Debug)]
pub enum Error {
    /// An option holds a value outside of its accepted range or set.
    ///
    /// Covers type and range conformance, single-glyph options, the bracket
    /// pair, the bar length, enumerated options and negative bounds.
    #[error("Wrong input: `{field}` must be {expected}, not {value:?}")]
    InvalidOption {
        /// Name of the offending option.
        field: &'static str,
        /// The value that was rejected, as the caller passed it.
        value: String,
        /// Human readable description of the accepted values.
        expected: String,
    },

    /// `start` is greater than `stop`, or `stop` is zero.
    #[error("Wrong input: `start` ({start}) must not exceed `stop` ({stop}) and `stop` must be greater than 0")]
    InvalidBounds {
        /// Configured first iteration.
        start: i64,
        /// Configured last iteration.
        stop: i64,
    },

    /// The widest possible line does not fit in the terminal.
    #[error(
        "Terminal too narrow: the progress line needs up to {required} columns but only {available} are available. \
         Reduce `len_bar`, hide some elements or widen the terminal"
    )]
    TerminalTooNarrow {
        /// Worst case width of the rendered line.
        required: usize,
        /// Columns reported by the terminal.
        available: usize,
    },

    /// I/O Error.
    ///
    /// Writing a frame or a control sequence to the output stream failed.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` when the error was raised while validating options.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidOption { .. } | Error::InvalidBounds { .. } | Error::TerminalTooNarrow { .. }
        )
    }

    pub(crate) fn invalid(field: &'static str, value: impl ToString, expected: impl Into<String>) -> Self {
        Error::InvalidOption {
            field,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

/// Result type alias for operations that can fail with an spb error.
pub type Result<T> = std::result::Result<T, Error>;

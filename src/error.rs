//! Error types for GGON encoding and decoding.
//!
//! Every fallible operation in this crate returns [`Error`]. The variants fall
//! into three families:
//!
//! - **Parse errors** ([`Error::Syntax`], [`Error::UnexpectedEof`]): the input
//!   text is not valid GGON. Both carry the 1-based line and column where the
//!   problem was found.
//! - **Encode errors** ([`Error::Encode`]): a value handed to the serializer
//!   has no GGON representation (booleans, unit, numbers without numeric
//!   coercion, non-string map keys).
//! - **Conversion errors** ([`Error::Conversion`]): the list helpers were given
//!   a map that does not follow the list convention.
//!
//! A decode either fully succeeds or fully fails; no partial tree is ever
//! returned alongside an error.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ggon::{decode, Error};
//!
//! let result = decode("{foo:bar");
//! assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
//!
//! let err = decode("{foo;bar}").unwrap_err();
//! assert!(err.is_parse());
//! assert_eq!(err.position(), Some((1, 5)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while handling GGON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed input text
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// Input ended while a string, map or list was still open
    #[error("Unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Value has no GGON representation
    #[error("Encode error: {0}")]
    Encode(String),

    /// Map does not follow the list convention
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Custom error raised by a `Serialize` or `Deserialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at the given line and column.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::Error;
    ///
    /// let err = Error::syntax(3, 7, "unexpected character '#'");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates an encode error for values GGON cannot represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::Error;
    ///
    /// let err = Error::encode("cannot encode value of type bool");
    /// assert!(err.to_string().contains("bool"));
    /// ```
    pub fn encode(msg: &str) -> Self {
        Error::Encode(msg.to_string())
    }

    /// Creates a conversion error for maps that are not well-formed lists.
    pub fn conversion(msg: &str) -> Self {
        Error::Conversion(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this error came from tokenizing or parsing text.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Syntax { .. } | Error::UnexpectedEof { .. })
    }

    /// Returns the `(line, column)` of a parse error, if any.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. } | Error::UnexpectedEof { line, col, .. } => {
                Some((*line, *col))
            }
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

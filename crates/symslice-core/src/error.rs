//! Error types for slice unpacking
//!
//! All fallible operations return `Result<T, Error>`.
//! Every failure is terminal for the call that produced it; embedding
//! layers (CLI, Python bindings) translate it into their own convention.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fields of a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceField {
    Start,
    Stop,
    Step,
}

impl fmt::Display for SliceField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SliceField::Start => f.write_str("start"),
            SliceField::Stop => f.write_str("stop"),
            SliceField::Step => f.write_str("step"),
        }
    }
}

/// Slice unpacking error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Step given as a symbolic integer
    #[error("Slicing step can't be symbolic")]
    SymbolicStep,

    /// Step given as concrete zero
    #[error("Slicing step size can't be zero")]
    ZeroStep,

    /// Start or stop left out while the step is symbolic
    #[error("Can't use symbolic step size to determine slicing {endpoint} index")]
    AmbiguousDefault { endpoint: SliceField },

    /// Concrete endpoint outside the platform integer width
    #[error("Failed parsing slicing {endpoint} to integer: {value} is out of range")]
    Coercion { endpoint: SliceField, value: i128 },

    /// A concrete value was required but the extended integer is symbolic
    #[error("Expected a concrete integer, found symbolic value {0}")]
    SymbolicValue(String),

    /// Container length does not fit the platform integer width
    #[error("Sequence length {0} exceeds the platform integer width")]
    LengthOverflow(usize),

    /// Syntax violation in a slice literal
    #[error("Parse error at column {column}: {message}")]
    Parse { column: usize, message: String },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Feature not supported (symbolic step)
    Unsupported,
    /// Value rejected outright (zero step, oversized length)
    InvalidValue,
    /// Default can't be chosen without a concrete step
    AmbiguousDefault,
    /// Value not representable in the required integer type
    Coercion,
    /// Malformed slice literal
    Syntax,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SymbolicStep | Error::SymbolicValue(_) => ErrorKind::Unsupported,
            Error::ZeroStep | Error::LengthOverflow(_) => ErrorKind::InvalidValue,
            Error::AmbiguousDefault { .. } => ErrorKind::AmbiguousDefault,
            Error::Coercion { .. } => ErrorKind::Coercion,
            Error::Parse { .. } => ErrorKind::Syntax,
        }
    }

    /// True for features the unpacker does not support (symbolic step,
    /// symbolic value where a concrete one is needed)
    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }

    pub(crate) fn parse(column: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            column,
            message: message.into(),
        }
    }
}

/// Result type alias for slice operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = Error::AmbiguousDefault {
            endpoint: SliceField::Stop,
        };
        assert_eq!(
            err.to_string(),
            "Can't use symbolic step size to determine slicing stop index"
        );

        let err = Error::Coercion {
            endpoint: SliceField::Step,
            value: i128::MAX,
        };
        assert!(err.to_string().contains("slicing step"));
    }

    #[test]
    fn test_kind_taxonomy() {
        assert_eq!(Error::SymbolicStep.kind(), ErrorKind::Unsupported);
        assert_eq!(Error::ZeroStep.kind(), ErrorKind::InvalidValue);
        assert_eq!(
            Error::AmbiguousDefault {
                endpoint: SliceField::Start
            }
            .kind(),
            ErrorKind::AmbiguousDefault
        );
        assert_eq!(Error::parse(3, "bad").kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_is_unsupported() {
        assert!(Error::SymbolicStep.is_unsupported());
        assert!(Error::SymbolicValue("s0".into()).is_unsupported());
        assert!(!Error::ZeroStep.is_unsupported());
    }
}

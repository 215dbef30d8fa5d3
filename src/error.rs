//! Error types for the quickharness test shim

use std::fmt;
use thiserror::Error;

/// Kinds of errors a test body may raise, mirroring the host runtime's
/// error constructors. Used as the expected-kind filter in
/// [`reject`](crate::assert::reject) and [`throws`](crate::assert::throws).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorKind {
    /// TypeError - wrong type for operation
    TypeError,
    /// ReferenceError - undefined variable
    ReferenceError,
    /// RangeError - value out of range
    RangeError,
    /// SyntaxError - invalid syntax at runtime
    SyntaxError,
    /// EvalError - error in eval()
    EvalError,
    /// URIError - malformed URI
    UriError,
    /// Generic Error - user-raised error values
    GenericError,
    /// InternalError - internal engine error
    InternalError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TypeError => write!(f, "TypeError"),
            ErrorKind::ReferenceError => write!(f, "ReferenceError"),
            ErrorKind::RangeError => write!(f, "RangeError"),
            ErrorKind::SyntaxError => write!(f, "SyntaxError"),
            ErrorKind::EvalError => write!(f, "EvalError"),
            ErrorKind::UriError => write!(f, "URIError"),
            ErrorKind::GenericError => write!(f, "Error"),
            ErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Main error type for quickharness.
///
/// Two channels matter to the harness: [`Error::AssertionError`] is raised
/// deliberately by the assertion library to signal a failed expectation,
/// while [`Error::CaseError`] carries anything else a test body raises.
/// Both surface as test failures; the execution wrapper accumulates them
/// in separate buckets.
#[derive(Error, Debug)]
pub enum Error {
    /// A failed assertion, carrying a descriptive message.
    #[error("AssertionError: {message}")]
    AssertionError { message: String },

    /// An error raised by a test body outside the assertion helpers.
    #[error("{kind}: {message}")]
    CaseError { kind: ErrorKind, message: String },

    /// Registry lookup for a file that was never registered. Indicates a
    /// logic error in the caller; should not occur in correct use.
    #[error("NotFoundError: no suite entry for {0}")]
    NotFound(String),
}

impl Error {
    /// Create an assertion failure
    pub fn assertion(message: impl Into<String>) -> Self {
        Error::AssertionError {
            message: message.into(),
        }
    }

    /// Create a case error of the given kind
    pub fn case(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error::CaseError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        Error::case(ErrorKind::TypeError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        Error::case(ErrorKind::RangeError, message)
    }

    /// Create a ReferenceError
    pub fn reference_error(message: impl Into<String>) -> Self {
        Error::case(ErrorKind::ReferenceError, message)
    }

    /// Whether this is an assertion failure (as opposed to an unexpected
    /// error raised by a test body).
    pub fn is_assertion(&self) -> bool {
        matches!(self, Error::AssertionError { .. })
    }

    /// The error kind, for [`Error::CaseError`] values.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::CaseError { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Label used when reporting kind mismatches.
    pub fn kind_label(&self) -> String {
        match self {
            Error::AssertionError { .. } => "AssertionError".to_string(),
            Error::CaseError { kind, .. } => kind.to_string(),
            Error::NotFound(_) => "NotFoundError".to_string(),
        }
    }

    /// The bare message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::AssertionError { message } => message,
            Error::CaseError { message, .. } => message,
            Error::NotFound(file) => file,
        }
    }
}

/// Result type alias for quickharness
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(format!("{}", ErrorKind::TypeError), "TypeError");
        assert_eq!(format!("{}", ErrorKind::RangeError), "RangeError");
        assert_eq!(format!("{}", ErrorKind::UriError), "URIError");
        assert_eq!(format!("{}", ErrorKind::GenericError), "Error");
    }

    #[test]
    fn assertion_display_and_accessors() {
        let err = Error::assertion("Expected 0 to be true");
        assert_eq!(format!("{}", err), "AssertionError: Expected 0 to be true");
        assert!(err.is_assertion());
        assert!(err.kind().is_none());
        assert_eq!(err.message(), "Expected 0 to be true");
    }

    #[test]
    fn case_error_carries_kind() {
        let err = Error::range_error("bad");
        assert_eq!(format!("{}", err), "RangeError: bad");
        assert!(!err.is_assertion());
        assert_eq!(err.kind(), Some(ErrorKind::RangeError));
        assert_eq!(err.kind_label(), "RangeError");
    }

    #[test]
    fn not_found_label() {
        let err = Error::NotFound("missing_test.rs".into());
        assert_eq!(err.kind_label(), "NotFoundError");
        assert!(format!("{}", err).contains("missing_test.rs"));
    }
}

//! Error types for link recognition and access-code generation.
//!
//! A recognizer that simply doesn't match returns `None`; these errors are
//! reserved for inputs that pass a recognizer's outer checks but break an
//! inner one.

use thiserror::Error;

use crate::links::Platform;

/// Error returned by a recognizer or by `CourseHost` construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Domain and suffix markers matched but a required identifier did not.
    #[error("{platform} link matched but no {missing} could be extracted")]
    MalformedExtraction {
        platform: Platform,
        missing: &'static str,
    },
    /// Configured course base URL is not an absolute URL with a host.
    #[error("invalid course base url {url:?}: {reason}")]
    InvalidCourseBase { url: String, reason: String },
}

/// Error returned by access-code generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessCodeError {
    /// The OS entropy source could not seed a generator. Not retried here.
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

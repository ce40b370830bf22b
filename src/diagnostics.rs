//! Error types for paramcase, built on `thiserror` and `miette`.
//!
//! Errors fall into two groups with different reach:
//!
//! - [`SuiteError`] and [`SourceError`] describe configuration problems found
//!   while declaring suites or expanding parameter sources. They abort
//!   discovery and are rendered by the CLI as miette diagnostics.
//! - [`CaseError`] and [`AssumptionViolated`] are produced inside one
//!   parameterized call. They only ever decide that call's outcome.

use miette::Diagnostic;
use thiserror::Error;

/// Signals that a test's precondition does not hold; the case is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("assumption violated: {message}")]
pub struct AssumptionViolated {
    pub message: String,
}

impl AssumptionViolated {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error returned by a test method for one parameter tuple.
#[derive(Debug, Error, Diagnostic)]
pub enum CaseError {
    #[error("{0}")]
    #[diagnostic(code(paramcase::case::assumption))]
    Assumption(#[from] AssumptionViolated),

    #[error("{message}")]
    #[diagnostic(code(paramcase::case::failure))]
    Failure { message: String },

    #[error("expected {expected}, got {actual}")]
    #[diagnostic(
        code(paramcase::case::mismatch),
        help("the report shows a line diff between the two values")
    )]
    Mismatch { expected: String, actual: String },

    #[error("{0}")]
    #[diagnostic(code(paramcase::case::error))]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl CaseError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn assumption(message: impl Into<String>) -> Self {
        Self::Assumption(AssumptionViolated::new(message))
    }

    /// Wraps any error raised by the code under test.
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    pub fn is_assumption(&self) -> bool {
        matches!(self, Self::Assumption(_))
    }
}

impl From<String> for CaseError {
    fn from(message: String) -> Self {
        Self::failure(message)
    }
}

impl From<&str> for CaseError {
    fn from(message: &str) -> Self {
        Self::failure(message)
    }
}

/// Lets test methods use `?` on I/O calls.
impl From<std::io::Error> for CaseError {
    fn from(error: std::io::Error) -> Self {
        Self::other(error)
    }
}

/// Failure to produce the tuples of a parameter source.
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("failed to read parameter file `{path}`")]
    #[diagnostic(
        code(paramcase::source::io),
        help("paths are resolved relative to the current working directory")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML parameter data: {0}")]
    #[diagnostic(
        code(paramcase::source::yaml),
        help("parameter files hold a sequence of sequences, e.g. `- [0, 0]`")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("parameter source panicked: {0}")]
    #[diagnostic(code(paramcase::source::panicked))]
    Panicked(String),

    #[error("{0}")]
    #[diagnostic(code(paramcase::source::custom))]
    Custom(String),
}

impl From<String> for SourceError {
    fn from(message: String) -> Self {
        Self::Custom(message)
    }
}

impl From<&str> for SourceError {
    fn from(message: &str) -> Self {
        Self::Custom(message.to_string())
    }
}

/// Configuration error found while declaring or expanding a suite.
#[derive(Debug, Error, Diagnostic)]
pub enum SuiteError {
    #[error("suite `{suite}` has a parameterized test with an empty name")]
    #[diagnostic(
        code(paramcase::suite::empty_name),
        help("every registered declaration needs a field name; it prefixes the test names")
    )]
    EmptyName { suite: String },

    #[error("suite `{suite}` already declares `{field}`")]
    #[diagnostic(
        code(paramcase::suite::duplicate_name),
        help("field names become test names and must be unique within a suite")
    )]
    DuplicateName { suite: String, field: String },

    #[error("parameter source for `{suite}::{field}` failed")]
    #[diagnostic(code(paramcase::suite::source))]
    Source {
        suite: String,
        field: String,
        #[source]
        #[diagnostic_source]
        source: SourceError,
    },
}
